// brandguard-core/src/repair.rs
//! Reporting types for sanitizer rewrites, and helpers for logging generated content
//! without leaking it.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

lazy_static! {
    /// Whether raw generated content may appear in debug logs.
    static ref CONTENT_DEBUG_ALLOWED: bool = {
        std::env::var("BRANDGUARD_ALLOW_DEBUG_CONTENT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The sanitizer pass that produced a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairPass {
    CompanyName,
    Email,
    Phone,
    Extension,
}

impl fmt::Display for RepairPass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            RepairPass::CompanyName => "company_name",
            RepairPass::Email => "email",
            RepairPass::Phone => "phone",
            RepairPass::Extension => "extension",
        };
        f.write_str(label)
    }
}

/// Every rewrite a single pass made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairSummaryItem {
    pub pass: RepairPass,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
    pub replacement_texts: Vec<String>,
}

impl RepairSummaryItem {
    pub(crate) fn new(pass: RepairPass) -> Self {
        Self {
            pass,
            occurrences: 0,
            original_texts: Vec::new(),
            replacement_texts: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, original: &str, replacement: &str) {
        log_repair_debug(self.pass, original, replacement);
        self.occurrences += 1;
        self.original_texts.push(original.to_string());
        self.replacement_texts.push(replacement.to_string());
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// Content as it may appear in a log line.
pub fn loggable_content(content: &str) -> String {
    if *CONTENT_DEBUG_ALLOWED {
        content.to_string()
    } else {
        redact_sensitive(content)
    }
}

/// Short, stable SHA-256 fingerprint used to correlate log lines about one piece of content.
pub fn content_fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..16].to_string()
}

fn log_repair_debug(pass: RepairPass, original: &str, replacement: &str) {
    debug!(
        "Repair [{}]: Original='{}', Replacement='{}'",
        pass,
        loggable_content(original),
        replacement
    );
}
