// File: brandguard-core/src/normalize.rs
//! Canonical forms for emails, phone numbers and email usernames.
//!
//! Free text captured by an eager regex carries cosmetic noise: a sentence-ending
//! period, a quote mark, a country code, dots instead of hyphens. These functions
//! strip that noise so comparisons against the brand identity do not produce false
//! mismatches. None of them fail; unusable input normalizes to a (possibly empty)
//! string that simply never matches.
//!
//! License: MIT OR APACHE 2.0

/// Fewest digits a phone-shaped match needs to be treated as a real phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lower-cases an email and strips any leading or trailing run of non-word characters.
///
/// `"<Info@Casurance.NET>."` becomes `"info@casurance.net"`.
pub fn normalize_email(raw: &str) -> String {
    raw.trim_matches(|c: char| !is_word_char(c)).to_lowercase()
}

/// Keeps only the ASCII digits of a phone-number substring.
///
/// `"+1 (888) 254-0089"`, `"888.254.0089"` and `"888-254-0089"` all collapse to digits
/// that compare equal once the country code is accounted for.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// The trailing ten digits of a phone number, or `None` when it is too short to be one.
pub fn national_number(raw: &str) -> Option<String> {
    let digits = normalize_phone(raw);
    if digits.len() < MIN_PHONE_DIGITS {
        return None;
    }
    Some(digits[digits.len() - MIN_PHONE_DIGITS..].to_string())
}

/// True when normalized `digits` equal, or end with, one of the approved national numbers.
///
/// The suffix match tolerates a leading country-code digit.
pub fn matches_approved_phone(digits: &str, approved: &[String]) -> bool {
    approved
        .iter()
        .any(|a| !a.is_empty() && (digits == a || digits.ends_with(a.as_str())))
}

/// Lower-cases an email local part and drops separators, for the mailbox lookup.
///
/// `"Press.Office"` becomes `"pressoffice"`, `"customer-service"` becomes `"customerservice"`.
pub fn normalize_username(local: &str) -> String {
    local
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_strips_punctuation_and_case() {
        assert_eq!(normalize_email("Info@Casurance.NET."), "info@casurance.net");
        assert_eq!(normalize_email("\"press@casurance.net\","), "press@casurance.net");
        assert_eq!(normalize_email("<support@casurance.net>"), "support@casurance.net");
    }

    #[test]
    fn test_normalize_email_degenerate_input() {
        assert_eq!(normalize_email(""), "");
        assert_eq!(normalize_email("..."), "");
    }

    #[test]
    fn test_normalize_phone_collapses_formats() {
        assert_eq!(normalize_phone("+1 (888) 254-0089"), "18882540089");
        assert_eq!(normalize_phone("888.254.0089"), "8882540089");
        assert_eq!(normalize_phone("888-254-0089"), "8882540089");
        assert_eq!(normalize_phone("no digits here"), "");
    }

    #[test]
    fn test_national_number() {
        assert_eq!(national_number("1-888-254-0089").as_deref(), Some("8882540089"));
        assert_eq!(national_number("(818) 889-5505").as_deref(), Some("8188895505"));
        assert_eq!(national_number("555-1234"), None);
    }

    #[test]
    fn test_matches_approved_phone_tolerates_country_code() {
        let approved = vec!["8882540089".to_string(), "8188895505".to_string()];
        assert!(matches_approved_phone("8882540089", &approved));
        assert!(matches_approved_phone("18882540089", &approved));
        assert!(!matches_approved_phone("2135551234", &approved));
        assert!(!matches_approved_phone("882540089", &approved));
        assert!(!matches_approved_phone("", &approved));
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("Press.Office"), "pressoffice");
        assert_eq!(normalize_username("customer-service"), "customerservice");
        assert_eq!(normalize_username("_MEDIA_"), "media");
    }
}
