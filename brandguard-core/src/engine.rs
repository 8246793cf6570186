// brandguard-core/src/engine.rs
//! Defines the `ComplianceEngine` trait.
//!
//! The trait is the seam between the content-generation callers and the concrete
//! validation/sanitization logic. Every generation pathway talks to an engine, never
//! to module-level state, so alternate brand configurations (or test doubles) can be
//! swapped in without touching callers.
//!
//! License: MIT OR APACHE 2.0

use crate::catalog::PatternCatalog;
use crate::config::BrandIdentity;
use crate::errors::BrandGuardError;
use crate::orchestrator;
use crate::repair::RepairSummaryItem;
use crate::validator::ValidationResult;

/// Core functionality of a brand-compliance engine.
///
/// Implementations must be pure with respect to their input: no I/O, no shared
/// mutable state, so one engine can serve any number of concurrent callers.
pub trait ComplianceEngine: Send + Sync {
    /// Scans `content` and reports errors and warnings. Never fails.
    fn validate(&self, content: &str) -> ValidationResult;

    /// Rewrites non-compliant substrings and reports what each pass changed.
    fn sanitize_with_summary(&self, content: &str) -> (String, Vec<RepairSummaryItem>);

    /// Rewrites non-compliant substrings. Never fails.
    fn sanitize(&self, content: &str) -> String {
        self.sanitize_with_summary(content).0
    }

    /// Validates, sanitizes only when needed, and fails if the content still does
    /// not comply. See [`orchestrator::ensure_compliance`].
    fn ensure(&self, content: &str) -> Result<String, BrandGuardError> {
        orchestrator::ensure_compliance(self, content)
    }

    /// The identity this engine enforces.
    fn identity(&self) -> &BrandIdentity;

    /// The compiled catalog backing this engine.
    fn catalog(&self) -> &PatternCatalog;
}
