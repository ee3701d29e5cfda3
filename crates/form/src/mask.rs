//! Live input mask for Brazilian-style phone numbers.
//!
//! The mask is a pure function of the digit sequence, so re-applying it to
//! an already-masked buffer is a no-op and pasted punctuation normalizes
//! cleanly.

/// Format a raw phone buffer as `DD NNNN-NNNN` / `DD NNNNN-NNNN`.
///
/// Applied on every keystroke:
/// 1. strip everything that is not an ASCII digit
/// 2. cap at 11 digits (2-digit area code + up to 9 local digits)
/// 3. space after the area code once a third digit exists
/// 4. hyphen before the final 4-digit group once the local part exceeds
///    4 digits; with the full 9 local digits the prefix grows to 5
pub fn mask_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(11).collect();

    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("{} {}", &digits[..2], &digits[2..]),
        7..=10 => format!("{} {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("{} {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn progressive_typing() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1"), "1");
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("119"), "11 9");
        assert_eq!(mask_phone("119876"), "11 9876");
        assert_eq!(mask_phone("1198765"), "11 9876-5");
        assert_eq!(mask_phone("1198765432"), "11 9876-5432");
        assert_eq!(mask_phone("11987654321"), "11 98765-4321");
    }

    #[test]
    fn landline_keeps_four_digit_prefix() {
        // 10 digits total: hyphen sits before the last 4
        assert_eq!(mask_phone("1187654321"), "11 8765-4321");
    }

    #[test]
    fn idempotent_on_masked_input() {
        assert_eq!(mask_phone("11 98765-4321"), "11 98765-4321");
        assert_eq!(mask_phone("11 8765-4321"), "11 8765-4321");
    }

    #[test]
    fn strips_punctuation_and_letters() {
        assert_eq!(mask_phone("(11) 98765.4321"), "11 98765-4321");
        assert_eq!(mask_phone("abc"), "");
    }

    #[test]
    fn caps_at_eleven_digits() {
        assert_eq!(mask_phone("119876543219999"), "11 98765-4321");
    }
}
