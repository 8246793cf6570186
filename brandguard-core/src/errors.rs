//! errors.rs - Custom error types for the brandguard-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types surfaced by `brandguard-core`.
///
/// Validation and sanitization never fail; only catalog compilation, config
/// loading and the compliance orchestrator produce these.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BrandGuardError {
    #[error("Failed to compile forbidden pattern '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("Pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Invalid brand identity: {0}")]
    InvalidIdentity(String),

    #[error("Generated content violates brand policy and must be regenerated:\n{}", .errors.join("\n"))]
    NonCompliantContent { errors: Vec<String> },

    #[error("Field '{field}' violates brand policy and must be regenerated:\n{}", .errors.join("\n"))]
    FieldNonCompliant { field: String, errors: Vec<String> },

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

impl BrandGuardError {
    /// The remaining policy errors, for the two non-compliance variants.
    pub fn policy_errors(&self) -> Option<&[String]> {
        match self {
            BrandGuardError::NonCompliantContent { errors }
            | BrandGuardError::FieldNonCompliant { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
