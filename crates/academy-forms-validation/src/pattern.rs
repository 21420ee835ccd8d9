//! Fixed format patterns

use once_cell::sync::Lazy;
use regex::Regex;

/// 11 digits, `/`, 4-digit year.
pub const INDEX_NUMBER_PATTERN: &str = r"^[0-9]{11}/[0-9]{4}$";

/// Literal `2547` prefix followed by 8 digits.
pub const PHONE_PATTERN: &str = r"^2547[0-9]{8}$";

// Digit classes are spelled `[0-9]` because `\d` is Unicode-aware in `regex`.
static INDEX_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(INDEX_NUMBER_PATTERN).expect("index number pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

/// Whole-string match against the index number format.
pub fn is_valid_index_number(value: &str) -> bool {
    INDEX_NUMBER_RE.is_match(value)
}

/// Whole-string match against the phone format.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_number_validation() {
        assert!(is_valid_index_number("12345678901/2024"));
        assert!(is_valid_index_number("00000000000/0000"));

        assert!(!is_valid_index_number(""));
        assert!(!is_valid_index_number("1234567890/2024"));
        assert!(!is_valid_index_number("123456789012/2024"));
        assert!(!is_valid_index_number("12345678901/202"));
        assert!(!is_valid_index_number("12345678901-2024"));
        assert!(!is_valid_index_number("12345678901/2024 "));
        assert!(!is_valid_index_number(" 12345678901/2024"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("254712345678"));
        assert!(is_valid_phone("254700000000"));

        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("0712345678"));
        assert!(!is_valid_phone("254112345678"));
        assert!(!is_valid_phone("25471234567"));
        assert!(!is_valid_phone("2547123456789"));
        assert!(!is_valid_phone("+254712345678"));
    }

    #[test]
    fn test_trailing_newline_rejected() {
        assert!(!is_valid_index_number("12345678901/2024\n"));
        assert!(!is_valid_phone("254712345678\n"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are decimal digits under Unicode rules
        assert!(!is_valid_phone("2547١٢٣٤٥٦٧٨"));
        assert!(!is_valid_index_number("١٢٣٤٥٦٧٨٩٠١/2024"));
    }
}
