//! Form schema definition.
//!
//! `FormSchema` groups multiple `FormField` instances together along with a
//! display title. Kept intentionally lightweight; validation and masking
//! rules remain attached to each `FormField`.

use crate::field::FormField;

/// Declarative schema for a multi-field form.
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    /// Convenience accessor: number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Find a field by its key.
    pub fn field_by_key(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn field_lookup_by_key() {
        let schema = FormSchema::new(
            "My Form",
            vec![
                FormField::new("name", "Name", FieldKind::Text),
                FormField::new("email", "E-mail", FieldKind::Email),
            ],
        );
        assert_eq!(schema.field_count(), 2);
        assert_eq!(schema.field_by_key("email").unwrap().label, "E-mail");
        assert!(schema.field_by_key("phone").is_none());
    }
}
