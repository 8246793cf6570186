// File: brandguard-core/src/headless.rs

//! `headless.rs`
//! One-call entry points backed by a lazily built engine for the built-in brand config.
//!
//! Callers that need a different brand should build their own [`BrandGuard`] and use
//! the [`ComplianceEngine`] methods instead.

use once_cell::sync::Lazy;

use crate::engine::ComplianceEngine;
use crate::errors::BrandGuardError;
use crate::guard::BrandGuard;
use crate::validator::ValidationResult;

/// The embedded config is compiled into the binary and checked by the config tests,
/// so building it cannot fail at runtime.
static DEFAULT_GUARD: Lazy<BrandGuard> =
    Lazy::new(|| BrandGuard::with_defaults().expect("embedded brand config is valid"));

/// The shared engine for the built-in config, built on first use.
pub fn default_guard() -> &'static BrandGuard {
    &DEFAULT_GUARD
}

/// Validates `content` against the built-in brand. Never fails.
pub fn validate_brand_compliance(content: &str) -> ValidationResult {
    default_guard().validate(content)
}

/// Sanitizes `content` against the built-in brand. Never fails.
pub fn sanitize_brand_content(content: &str) -> String {
    default_guard().sanitize(content)
}

/// Returns compliant content for the built-in brand, or the errors that remain after
/// sanitization.
pub fn ensure_brand_compliance(content: &str) -> Result<String, BrandGuardError> {
    default_guard().ensure(content)
}
