//! Integration tests for the full form flow:
//! - Building the contact schema (name / email / phone)
//! - Masking keystroke-by-keystroke input
//! - Validating and re-validating after corrections
//!
//! NOTE: These tests avoid extra dev-dependencies beyond pretty_assertions.

use form::{mask_phone, validate, FieldKind, FormField, FormSchema, FormState};
use pretty_assertions::assert_eq;

fn contact_schema() -> FormSchema {
    FormSchema::new(
        "My Form",
        vec![
            FormField::new("name", "Name", FieldKind::Text).validator(validate::required("name")),
            FormField::new("email", "E-mail", FieldKind::Email).validator(validate::email("email")),
            FormField::new("phone", "Phone", FieldKind::Phone)
                .validator(validate::phone("phone"))
                .mask(|raw| mask_phone(raw)),
        ],
    )
}

/// Simulate typing into a masked field: each keystroke appends to the masked
/// buffer, then the field's mask rewrites it.
fn type_into(field: &FormField, keys: &str) -> String {
    let mut buffer = String::new();
    for ch in keys.chars() {
        buffer.push(ch);
        buffer = field.apply_mask(&buffer);
    }
    buffer
}

#[test]
fn masked_typing_produces_a_valid_phone() {
    let schema = contact_schema();
    let phone = schema.field_by_key("phone").unwrap();

    let mobile = type_into(phone, "11987654321");
    assert_eq!(mobile, "11 98765-4321");

    let landline = type_into(phone, "1187654321");
    assert_eq!(landline, "11 8765-4321");

    // both shapes pass the phone validator
    let validator = phone.validator.as_ref().unwrap();
    assert_eq!(validator(&mobile), Ok(()));
    assert_eq!(validator(&landline), Ok(()));
}

#[test]
fn empty_submission_flags_every_field() {
    let schema = contact_schema();
    let mut state = FormState::default();

    assert!(!state.validate(&schema));
    assert_eq!(state.errors.len(), 3);
    assert_eq!(
        state.errors.get("name").map(|s| s.as_str()),
        Some("name is a required field")
    );
    assert_eq!(
        state.errors.get("email").map(|s| s.as_str()),
        Some("email is a required field")
    );
    assert_eq!(
        state.errors.get("phone").map(|s| s.as_str()),
        Some("phone is a required field")
    );
}

#[test]
fn partial_phone_is_rejected_until_complete() {
    let schema = contact_schema();
    let phone = schema.field_by_key("phone").unwrap();
    let mut state = FormState::default();
    state.set_value("name", "Gabriel");
    state.set_value("email", "gabriel@example.com");

    state.set_value("phone", type_into(phone, "119876"));
    assert!(!state.validate(&schema));
    assert_eq!(state.errors.get("phone").map(|s| s.as_str()), Some("invalid phone"));

    // finishing the number clears the error on the next validation pass
    state.set_value("phone", type_into(phone, "11987654321"));
    assert!(state.validate(&schema));
    assert!(state.errors.is_empty());
}

#[test]
fn editing_a_field_clears_its_inline_error() {
    let schema = contact_schema();
    let mut state = FormState::default();
    state.validate(&schema);
    assert!(state.errors.contains_key("email"));

    // the UI clears the edited field's error on input, before revalidation
    state.set_value("email", "g");
    state.clear_error("email");
    assert!(!state.errors.contains_key("email"));
    assert!(state.errors.contains_key("name"));
}
