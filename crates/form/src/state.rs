//! Form runtime (mutable) state.
//!
//! Contains only the data structures and lightweight helpers representing
//! the *current editing state* of a form:
//!   * Captured scalar values (`values`)
//!   * Per-field validation errors (`errors`)
//!
//! The validation pass mutates `errors` directly and never touches `values`,
//! so a rejected submission leaves the entered data exactly as it was.
//
// NOTE: Keep this module free of UI / rendering concerns.

use std::collections::HashMap;

use crate::schema::FormSchema;

/// Mutable state captured while editing a form.
///
/// Bool-free and list-free on purpose: every field here is a single line of
/// text, so `values` maps field key -> current buffer.
#[derive(Default, Clone, Debug)]
pub struct FormState {
    pub values: HashMap<String, String>,
    pub errors: HashMap<String, String>,
}

impl FormState {
    /// Set (or replace) the value for a field.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Get the value for a field (if present).
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Drop the validation error for one field (called when the user edits it).
    pub fn clear_error(&mut self, key: &str) {
        self.errors.remove(key);
    }

    /// Clear all validation errors.
    pub fn clear_validation(&mut self) {
        self.errors.clear();
    }

    /// Run every field validator against the current values.
    ///
    /// Records per-field error messages and returns whether the form is
    /// clean. `values` are never modified here.
    pub fn validate(&mut self, schema: &FormSchema) -> bool {
        self.errors.clear();

        for field in &schema.fields {
            let value = self.get_value(&field.key).unwrap_or("").to_string();
            if let Some(validator) = &field.validator {
                if let Err(msg) = (validator)(&value) {
                    self.errors.insert(field.key.clone(), msg);
                }
            }
        }

        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, FormField};
    use pretty_assertions::assert_eq;

    fn schema() -> FormSchema {
        FormSchema::new(
            "My Form",
            vec![
                FormField::new("name", "Name", FieldKind::Text).validator(|v| {
                    if v.trim().is_empty() {
                        Err("name is a required field".into())
                    } else {
                        Ok(())
                    }
                }),
                FormField::new("nickname", "Nickname", FieldKind::Text),
            ],
        )
    }

    #[test]
    fn validate_records_errors_and_keeps_values() {
        let mut state = FormState::default();
        state.set_value("name", "");
        state.set_value("nickname", "ada");

        assert!(!state.validate(&schema()));
        assert_eq!(
            state.errors.get("name").map(|s| s.as_str()),
            Some("name is a required field")
        );
        // rejected submission leaves entered data untouched
        assert_eq!(state.get_value("nickname"), Some("ada"));
    }

    #[test]
    fn validate_clears_stale_errors_on_success() {
        let mut state = FormState::default();
        state.set_value("name", "");
        assert!(!state.validate(&schema()));

        state.set_value("name", "Ada");
        assert!(state.validate(&schema()));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn clear_error_drops_only_that_field() {
        let mut state = FormState::default();
        state.errors.insert("name".into(), "boom".into());
        state.errors.insert("nickname".into(), "boom".into());
        state.clear_error("name");
        assert!(!state.errors.contains_key("name"));
        assert!(state.errors.contains_key("nickname"));
    }
}
