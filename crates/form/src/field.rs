//! Form field type & metadata.
//!
//! This module defines the declarative pieces of the form system:
//! - `FieldKind`: Enumeration of supported input kinds
//! - `FormField`: Metadata + optional validator and mask for a single field
//!
//! Responsibilities here are intentionally pure / data-centric. Mutation
//! lives in `state.rs`; the interactive editor is the UI's concern.

/// A single form field kind.
///
/// Notes:
/// - All kinds render as single-line editors
/// - Email / Phone exist so schemas can attach kind-specific behavior
///   (e.g. the phone input mask) without inspecting field keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

/// Declarative description of a form field.
///
/// `validator` (optional):
///   A function receiving the current field value and returning:
///     Ok(())          -> value accepted
///     Err(message)    -> validation error message (displayed inline)
///
/// `mask` (optional):
///   A function rewriting the raw buffer after each edit (e.g. phone
///   formatting). Must be a pure function of its input.
pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub help: Option<String>,
    pub validator: Option<Box<dyn Fn(&str) -> std::result::Result<(), String> + Send + Sync>>,
    pub mask: Option<Box<dyn Fn(&str) -> String + Send + Sync>>,
}

impl FormField {
    /// Create a new field definition.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            help: None,
            validator: None,
            mask: None,
        }
    }

    /// Attach optional help / hint text shown beneath the field.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach a validator closure for the field.
    pub fn validator(
        mut self,
        f: impl Fn(&str) -> std::result::Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Box::new(f));
        self
    }

    /// Attach an input mask applied after every edit of this field.
    pub fn mask(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.mask = Some(Box::new(f));
        self
    }

    /// Apply this field's mask to a raw buffer, or pass it through unchanged.
    pub fn apply_mask(&self, raw: &str) -> String {
        match &self.mask {
            Some(m) => m(raw),
            None => raw.to_string(),
        }
    }
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("help", &self.help)
            .field("validator", &self.validator.is_some())
            .field("mask", &self.mask.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_mask_passes_through_without_mask() {
        let field = FormField::new("name", "Name", FieldKind::Text);
        assert_eq!(field.apply_mask("Ada Lovelace"), "Ada Lovelace");
    }

    #[test]
    fn apply_mask_rewrites_buffer() {
        let field =
            FormField::new("shout", "Shout", FieldKind::Text).mask(|v| v.to_uppercase());
        assert_eq!(field.apply_mask("hey"), "HEY");
    }
}
