// brandguard-core/src/lib.rs
//! # BrandGuard Core Library
//!
//! `brandguard-core` gates machine-generated marketing text before it is stored or
//! published. It guarantees that content only uses the approved company name, the
//! approved email domain and one of the two approved phone numbers. Where it does not,
//! the content is repaired automatically or rejected with a diagnosable error.
//!
//! The library is pure: no I/O happens during validation or sanitization, and every
//! engine is immutable after construction, so one engine can serve any number of
//! concurrent generation requests.
//!
//! ## Modules
//!
//! * `config`: `BrandIdentity`, the forbidden-pattern catalog and the mailbox table, loaded from YAML.
//! * `normalize`: Canonical forms for emails, phone numbers and email usernames.
//! * `extract`: The email/phone extraction heuristics shared by every pass.
//! * `catalog`: Compiles a config into an immutable, cached `PatternCatalog`.
//! * `validator`: Produces a `ValidationResult` of errors and warnings.
//! * `sanitizer`: Rewrites company names, emails and phone numbers.
//! * `orchestrator`: Validate, sanitize if needed, validate again, or fail.
//! * `engine` / `guard`: The `ComplianceEngine` trait and its `BrandGuard` implementation.
//! * `document`: Field-by-field compliance for generated documents.
//! * `headless`: One-call functions backed by the built-in config.
//!
//! ## Usage Example
//!
//! ```rust
//! use brandguard_core::{BrandConfig, BrandGuard, ComplianceEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let guard = BrandGuard::new(BrandConfig::load_default()?)?;
//!
//!     let report = guard.validate("Reach us at sales@otherbrand.com");
//!     assert!(!report.is_valid);
//!
//!     let compliant = guard.ensure("Call 213-555-1234 now")?;
//!     assert_eq!(compliant, "Call 1-888-254-0089 now");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Validation and sanitization never fail. Only the orchestrator turns a failed
//! validation into an error, `BrandGuardError::NonCompliantContent`, whose message lists
//! every remaining problem. Config loading uses `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod config;
pub mod document;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod guard;
pub mod headless;
pub mod normalize;
pub mod orchestrator;
pub mod repair;
pub mod sanitizer;
pub mod validator;

/// Configuration types and loaders.
pub use config::{
    config_candidate_paths,
    merge_configs,
    BrandConfig,
    BrandConfigNotFoundError,
    BrandIdentity,
    ForbiddenPattern,
    Mailbox,
    PatternCategory,
    CONFIG_ENV_VAR,
    MAX_PATTERN_LENGTH,
};

pub use errors::BrandGuardError;

pub use catalog::{compile_catalog, get_or_compile_catalog, CompiledPattern, PatternCatalog};

pub use engine::ComplianceEngine;
pub use guard::BrandGuard;

pub use validator::ValidationResult;
pub use repair::{content_fingerprint, RepairPass, RepairSummaryItem};
pub use orchestrator::ensure_compliance;
pub use document::{ensure_document_compliance, ContentKind, GeneratedContent};

/// The three-function contract surface over the built-in brand.
pub use headless::{default_guard, ensure_brand_compliance, sanitize_brand_content, validate_brand_compliance};
