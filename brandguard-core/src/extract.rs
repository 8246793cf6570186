// File: brandguard-core/src/extract.rs
//! Heuristics that pull email- and phone-shaped substrings out of free text.
//!
//! These are deliberately loose. They are kept in one place so the validator and
//! the sanitizer always agree on what counts as an email or a phone number, and so
//! the heuristics can be hardened without touching either pass.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`. Group 1 is the local part, group 2 the domain.
const EMAIL_PATTERN: &str = r"([A-Za-z0-9._%+-]+)@([A-Za-z0-9.-]+\.[A-Za-z]{2,})";

/// North-American shape: optional `+1`, optional parenthesized area code, 3-3-4 digits
/// separated by nothing, a space, a dot or a hyphen.
const PHONE_PATTERN: &str = r"(?:\+?\b1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b";

pub(crate) static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

pub(crate) static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"));

/// A phone number followed by one or more extension annotations (`ext. 123`, `extension 45`).
/// Later annotations may be joined by a comma, `or`, `and` or `/` (`ext. 5 or ext. 7`).
pub(crate) static EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)(?P<phone>{})(?:[ \t]*(?:,|/)?[ \t]*(?:(?:or|and)[ \t]+)?(?:ext\.?|extension)[ \t]*#?[ \t]*\d{{1,6}}\b)+",
        PHONE_PATTERN
    );
    Regex::new(&pattern).expect("extension pattern is valid")
});

/// Every email-shaped substring, in order of appearance.
pub fn find_emails(content: &str) -> Vec<&str> {
    EMAIL_REGEX.find_iter(content).map(|m| m.as_str()).collect()
}

/// Every phone-shaped substring, in order of appearance. No digit-count floor is applied.
pub fn find_phones(content: &str) -> Vec<&str> {
    PHONE_REGEX.find_iter(content).map(|m| m.as_str()).collect()
}

/// True when the text carries anything that looks like contact details: an `@`, or a
/// phone-shaped run of digits.
pub fn looks_like_contact_info(content: &str) -> bool {
    content.contains('@') || PHONE_REGEX.is_match(content)
}
