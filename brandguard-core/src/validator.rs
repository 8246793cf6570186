// File: brandguard-core/src/validator.rs
//! Scans content against a `PatternCatalog` and reports every brand violation.
//!
//! Checks run in a fixed order: forbidden patterns, the required company name,
//! email domains, then phone numbers. Email and phone mismatches are always hard
//! errors. A missing company name is only an error when the content also carries
//! contact details that do not already identify the brand; otherwise it is a warning,
//! since educational copy need not name the company.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::catalog::PatternCatalog;
use crate::extract::{find_emails, find_phones, looks_like_contact_info};

/// Outcome of one validation call. `is_valid` holds exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Contact details found in the content, split by whether the brand approves them.
#[derive(Debug, Default)]
struct ContactScan<'a> {
    approved: usize,
    invalid_emails: Vec<&'a str>,
    invalid_phones: Vec<&'a str>,
}

impl ContactScan<'_> {
    fn all_invalid_count(&self) -> usize {
        self.invalid_emails.len() + self.invalid_phones.len()
    }
}

fn push_unique<'a>(list: &mut Vec<&'a str>, item: &'a str) {
    if !list.contains(&item) {
        list.push(item);
    }
}

fn scan_contacts<'a>(catalog: &PatternCatalog, content: &'a str) -> ContactScan<'a> {
    let mut scan = ContactScan::default();

    for email in find_emails(content) {
        if catalog.is_approved_email(email) {
            scan.approved += 1;
        } else {
            push_unique(&mut scan.invalid_emails, email);
        }
    }

    for phone in find_phones(content) {
        match catalog.phone_status(phone) {
            Some(true) => scan.approved += 1,
            Some(false) => push_unique(&mut scan.invalid_phones, phone.trim()),
            None => {}
        }
    }

    scan
}

/// Validates `content` against the catalog. Never fails; problems are reported in
/// the result.
pub fn validate(catalog: &PatternCatalog, content: &str) -> ValidationResult {
    let identity = &catalog.identity;
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for pattern in &catalog.forbidden {
        if let Some(m) = pattern.regex.find(content) {
            errors.push(format!(
                "Forbidden {} \"{}\" found (pattern '{}')",
                pattern.category,
                m.as_str(),
                pattern.name
            ));
        }
    }

    let contacts = scan_contacts(catalog, content);

    if !catalog.required_name.is_match(content) {
        let attributed_by_contact = contacts.approved > 0 && contacts.all_invalid_count() == 0;
        if looks_like_contact_info(content) && !attributed_by_contact {
            errors.push(format!(
                "Content contains contact information but does not mention {}",
                identity.company_name
            ));
        } else {
            warnings.push(format!("Content does not mention {}", identity.company_name));
        }
    }

    if !contacts.invalid_emails.is_empty() {
        errors.push(format!(
            "Invalid email addresses found: {}. Only {} addresses are allowed",
            contacts.invalid_emails.join(", "),
            catalog.email_suffix
        ));
    }

    if !contacts.invalid_phones.is_empty() {
        errors.push(format!(
            "Invalid phone numbers found: {}. Only {} or {} may be used",
            contacts.invalid_phones.join(", "),
            identity.local_phone,
            identity.toll_free_phone
        ));
    }

    ValidationResult::new(errors, warnings)
}
