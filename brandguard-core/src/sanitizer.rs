// File: brandguard-core/src/sanitizer.rs
//! Rewrites non-compliant company names, emails and phone numbers in place.
//!
//! Four passes run in sequence, each feeding the next: company-name repair, email
//! repair, phone repair, and a cleanup of extension annotations left dangling after
//! a phone number. The passes are purely textual and best-effort; they do not make
//! content valid on their own (a missing company name is never invented). Running
//! the sanitizer on its own output changes nothing.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::Captures;
use std::borrow::Cow;

use crate::catalog::PatternCatalog;
use crate::extract::{EMAIL_REGEX, EXTENSION_REGEX, PHONE_REGEX};
use crate::repair::{RepairPass, RepairSummaryItem};

fn repair_company_names<'a>(catalog: &PatternCatalog, content: &'a str, item: &mut RepairSummaryItem) -> Cow<'a, str> {
    let company_name = catalog.identity.company_name.as_str();
    let mut text = Cow::Borrowed(content);
    for pattern in catalog.company_name_patterns() {
        let replaced = match pattern.regex.replace_all(&text, |caps: &Captures| {
            item.record(&caps[0], company_name);
            company_name.to_string()
        }) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            text = Cow::Owned(s);
        }
    }
    text
}

fn repair_emails(catalog: &PatternCatalog, content: &str, item: &mut RepairSummaryItem) -> String {
    EMAIL_REGEX
        .replace_all(content, |caps: &Captures| {
            let original = &caps[0];
            if catalog.is_approved_email(original) {
                return original.to_string();
            }
            let replacement = catalog.replacement_email(&caps[1]);
            item.record(original, &replacement);
            replacement
        })
        .into_owned()
}

fn repair_phones(catalog: &PatternCatalog, content: &str, item: &mut RepairSummaryItem) -> String {
    let toll_free = catalog.identity.toll_free_phone.as_str();
    PHONE_REGEX
        .replace_all(content, |caps: &Captures| {
            let original = &caps[0];
            match catalog.phone_status(original) {
                Some(false) => {
                    item.record(original, toll_free);
                    toll_free.to_string()
                }
                _ => original.to_string(),
            }
        })
        .into_owned()
}

fn strip_extensions(content: &str, item: &mut RepairSummaryItem) -> String {
    EXTENSION_REGEX
        .replace_all(content, |caps: &Captures| {
            let phone = caps["phone"].to_string();
            item.record(&caps[0], &phone);
            phone
        })
        .into_owned()
}

/// Sanitizes `content` and reports what each pass rewrote. Passes that changed
/// nothing are left out of the summary.
pub fn sanitize_with_summary(catalog: &PatternCatalog, content: &str) -> (String, Vec<RepairSummaryItem>) {
    let mut company = RepairSummaryItem::new(RepairPass::CompanyName);
    let mut email = RepairSummaryItem::new(RepairPass::Email);
    let mut phone = RepairSummaryItem::new(RepairPass::Phone);
    let mut extension = RepairSummaryItem::new(RepairPass::Extension);

    let text = repair_company_names(catalog, content, &mut company);
    let text = repair_emails(catalog, &text, &mut email);
    let text = repair_phones(catalog, &text, &mut phone);
    let text = strip_extensions(&text, &mut extension);

    let summary: Vec<RepairSummaryItem> = [company, email, phone, extension]
        .into_iter()
        .filter(|item| item.occurrences > 0)
        .collect();

    debug!(
        "Sanitization finished with {} rewrite(s) across {} pass(es).",
        summary.iter().map(|s| s.occurrences).sum::<usize>(),
        summary.len()
    );

    (text, summary)
}

/// Sanitizes `content`, discarding the summary.
pub fn sanitize(catalog: &PatternCatalog, content: &str) -> String {
    sanitize_with_summary(catalog, content).0
}
