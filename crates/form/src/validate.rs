//! Reusable validator closures for common field rules.
//!
//! Each function returns a closure suitable for `FormField::validator`.
//! Messages follow the "key is a required field" / "key must be ..." shape
//! so they read naturally inline under the field.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose but practical email shape: something, an @, a domain with a dot.
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex");
    /// Two-digit area code, space, 4-5 digit prefix, hyphen, 4-digit suffix.
    /// Anchored: the mask can only ever produce strings of exactly this shape.
    static ref PHONE_RE: Regex =
        Regex::new(r"^\d{2} \d{4,5}-\d{4}$").expect("phone regex");
}

/// Non-empty (after trimming) check.
pub fn required(key: &str) -> impl Fn(&str) -> Result<(), String> + Send + Sync + 'static {
    let message = format!("{key} is a required field");
    move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    }
}

/// Required + standard email shape.
pub fn email(key: &str) -> impl Fn(&str) -> Result<(), String> + Send + Sync + 'static {
    let required = required(key);
    let message = format!("{key} must be a valid email");
    move |value: &str| {
        required(value)?;
        if EMAIL_RE.is_match(value.trim()) {
            Ok(())
        } else {
            Err(message.clone())
        }
    }
}

/// Required + masked phone shape (`DD NNNN-NNNN` or `DD NNNNN-NNNN`).
pub fn phone(key: &str) -> impl Fn(&str) -> Result<(), String> + Send + Sync + 'static {
    let required = required(key);
    move |value: &str| {
        required(value)?;
        if PHONE_RE.is_match(value) {
            Ok(())
        } else {
            Err("invalid phone".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_input() {
        let v = required("name");
        assert_eq!(v(""), Err("name is a required field".into()));
        assert_eq!(v("   "), Err("name is a required field".into()));
        assert_eq!(v("Ada"), Ok(()));
    }

    #[test]
    fn email_shapes() {
        let v = email("email");
        assert_eq!(v("ada@example.com"), Ok(()));
        assert_eq!(v(" ada@example.com "), Ok(()));
        assert_eq!(v("ada@example"), Err("email must be a valid email".into()));
        assert_eq!(v("ada.example.com"), Err("email must be a valid email".into()));
        assert_eq!(v("a da@example.com"), Err("email must be a valid email".into()));
        assert_eq!(v(""), Err("email is a required field".into()));
    }

    #[test]
    fn phone_shapes() {
        let v = phone("phone");
        assert_eq!(v("11 98765-4321"), Ok(()));
        assert_eq!(v("11 8765-4321"), Ok(()));
        assert_eq!(v("11 987654321"), Err("invalid phone".into()));
        assert_eq!(v("1198765-4321"), Err("invalid phone".into()));
        // anchored: nothing may surround the formatted number
        assert_eq!(v("call 11 98765-4321"), Err("invalid phone".into()));
        assert_eq!(v(""), Err("phone is a required field".into()));
    }
}
