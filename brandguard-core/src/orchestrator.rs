// File: brandguard-core/src/orchestrator.rs
//! The single call-site contract used by every content-generation pathway.
//!
//! Validate first and return untouched content when it already complies. Otherwise
//! sanitize and validate once more; content that still fails is rejected with every
//! remaining error, so the caller regenerates instead of publishing it.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};

use crate::engine::ComplianceEngine;
use crate::errors::BrandGuardError;
use crate::repair::{content_fingerprint, loggable_content};

/// Returns compliant content, or `BrandGuardError::NonCompliantContent` when even the
/// sanitized content fails validation.
pub fn ensure_compliance<E: ComplianceEngine + ?Sized>(engine: &E, content: &str) -> Result<String, BrandGuardError> {
    let fingerprint = content_fingerprint(content);

    let first_pass = engine.validate(content);
    if first_pass.is_valid {
        for warning in &first_pass.warnings {
            debug!("[{}] Brand compliance warning: {}", fingerprint, warning);
        }
        return Ok(content.to_string());
    }

    debug!(
        "[{}] {} brand error(s) on first pass; sanitizing.",
        fingerprint,
        first_pass.errors.len()
    );
    let sanitized = engine.sanitize(content);
    let second_pass = engine.validate(&sanitized);

    if second_pass.is_valid {
        for warning in &second_pass.warnings {
            warn!("[{}] Brand compliance warning after sanitization: {}", fingerprint, warning);
        }
        info!(
            "[{}] Content repaired by sanitization ({} error(s) resolved).",
            fingerprint,
            first_pass.errors.len()
        );
        return Ok(sanitized);
    }

    warn!(
        "[{}] Rejecting content: {} brand error(s) remain after sanitization.",
        fingerprint,
        second_pass.errors.len()
    );
    debug!("[{}] Rejected content: {}", fingerprint, loggable_content(&sanitized));
    Err(BrandGuardError::NonCompliantContent {
        errors: second_pass.errors,
    })
}
