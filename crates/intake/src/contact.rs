//! The contact form domain: schema definition and the submitted payload.

use form::{mask_phone, validate, FieldKind, FormField, FormSchema, FormState};
use serde::{Deserialize, Serialize};

/// Build the three-field contact schema: required name, required email with
/// a standard email shape, required phone matching `DD NNNN(N)-NNNN` with a
/// live input mask.
pub fn contact_schema() -> FormSchema {
    FormSchema::new(
        "My Form",
        vec![
            FormField::new("name", "Name", FieldKind::Text).validator(validate::required("name")),
            FormField::new("email", "E-mail", FieldKind::Email)
                .validator(validate::email("email")),
            FormField::new("phone", "Phone", FieldKind::Phone)
                .help("e.g. 11 98765-4321")
                .validator(validate::phone("phone"))
                .mask(mask_phone),
        ],
    )
}

/// Last validated submission, echoed as pretty-printed JSON by the payload
/// panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactPayload {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            name: form.get_value("name").unwrap_or("").to_string(),
            email: form.get_value("email").unwrap_or("").to_string(),
            phone: form.get_value("phone").unwrap_or("").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schema_declares_the_three_contact_fields() {
        let schema = contact_schema();
        let keys: Vec<&str> = schema.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "email", "phone"]);
        assert!(schema.field_by_key("phone").unwrap().mask.is_some());
        assert!(schema.fields.iter().all(|f| f.validator.is_some()));
    }

    #[test]
    fn valid_form_produces_a_payload() {
        let schema = contact_schema();
        let mut form = FormState::default();
        form.set_value("name", "Gabriel Barreto");
        form.set_value("email", "gabriel@example.com");
        form.set_value("phone", "11 98765-4321");

        assert!(form.validate(&schema));
        let payload = ContactPayload::from_form(&form);
        assert_eq!(
            payload,
            ContactPayload {
                name: "Gabriel Barreto".into(),
                email: "gabriel@example.com".into(),
                phone: "11 98765-4321".into(),
            }
        );
    }

    #[test]
    fn default_payload_echoes_empty_fields() {
        let json = serde_json::to_string_pretty(&ContactPayload::default()).unwrap();
        assert_eq!(
            json,
            "{\n  \"name\": \"\",\n  \"email\": \"\",\n  \"phone\": \"\"\n}"
        );
    }
}
