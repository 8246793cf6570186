//! catalog.rs - Compiles and caches the brand pattern catalog.
//!
//! A `BrandConfig` is turned into an immutable `PatternCatalog`: compiled forbidden
//! patterns, the required company-name matcher, and the canonical forms of the
//! approved email domain and phone numbers. Compilation happens once per distinct
//! config; the result is shared through a process-wide cache.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{BrandConfig, BrandIdentity, ForbiddenPattern, Mailbox, PatternCategory, MAX_PATTERN_LENGTH};
use crate::errors::BrandGuardError;
use crate::normalize::{matches_approved_phone, national_number, normalize_email, normalize_phone, normalize_username, MIN_PHONE_DIGITS};

/// A single compiled forbidden pattern.
#[derive(Debug)]
pub struct CompiledPattern {
    pub name: String,
    pub category: PatternCategory,
    pub regex: Regex,
}

/// Everything the validator and sanitizer need, compiled and immutable.
#[derive(Debug)]
pub struct PatternCatalog {
    pub identity: BrandIdentity,
    pub forbidden: Vec<CompiledPattern>,
    /// Case-insensitive, word-bounded match of the approved company name.
    pub required_name: Regex,
    /// `@domain`, lower-cased.
    pub email_suffix: String,
    /// National (last ten digit) forms of the approved numbers.
    pub approved_phones: Vec<String>,
    pub mailboxes: BTreeMap<String, Mailbox>,
}

impl PatternCatalog {
    /// Forbidden patterns the company-name repair pass rewrites.
    pub fn company_name_patterns(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.forbidden
            .iter()
            .filter(|p| p.category == PatternCategory::CompanyName)
    }

    /// True when the email normalizes to an address on the approved domain.
    pub fn is_approved_email(&self, raw: &str) -> bool {
        normalize_email(raw).ends_with(&self.email_suffix)
    }

    /// `None` for fragments too short to be a phone number, otherwise whether the
    /// number is one of the two approved ones.
    pub fn phone_status(&self, raw: &str) -> Option<bool> {
        let digits = normalize_phone(raw);
        if digits.len() < MIN_PHONE_DIGITS {
            return None;
        }
        Some(matches_approved_phone(&digits, &self.approved_phones))
    }

    /// Mailbox for an email local part; unknown usernames map to info.
    pub fn mailbox_for(&self, local_part: &str) -> Mailbox {
        self.mailboxes
            .get(&normalize_username(local_part))
            .copied()
            .unwrap_or_default()
    }

    /// The approved address that replaces a foreign email with this local part.
    pub fn replacement_email(&self, local_part: &str) -> String {
        self.identity.mailbox_address(self.mailbox_for(local_part))
    }
}

lazy_static! {
    /// Compiled catalogs keyed by a hash of the `BrandConfig` they came from.
    static ref CATALOG_CACHE: RwLock<HashMap<u64, Arc<PatternCatalog>>> = RwLock::new(HashMap::new());
}

fn hash_config(config: &BrandConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

fn required_name_regex(company_name: &str) -> Result<Regex, regex::Error> {
    let name = company_name.trim();
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(name.chars().next()) { r"\b" } else { "" };
    let tail = if is_word(name.chars().last()) { r"\b" } else { "" };
    RegexBuilder::new(&format!("{}{}{}", lead, regex::escape(name), tail))
        .case_insensitive(true)
        .build()
}

fn compile_pattern(pattern: &ForbiddenPattern) -> Result<CompiledPattern, BrandGuardError> {
    if pattern.pattern.len() > MAX_PATTERN_LENGTH {
        return Err(BrandGuardError::PatternLengthExceeded(
            pattern.name.clone(),
            pattern.pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }
    let regex = RegexBuilder::new(&pattern.pattern)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| BrandGuardError::PatternCompilationError(pattern.name.clone(), e))?;
    debug!(
        target: "brandguard_core::catalog",
        "Pattern '{}' ({}) compiled successfully.",
        pattern.name, pattern.category
    );
    Ok(CompiledPattern {
        name: pattern.name.clone(),
        category: pattern.category,
        regex,
    })
}

/// Compiles a `BrandConfig` into a `PatternCatalog`, reporting every bad pattern at once.
pub fn compile_catalog(config: &BrandConfig) -> Result<PatternCatalog, BrandGuardError> {
    debug!("Compiling catalog with {} forbidden patterns.", config.forbidden.len());

    let problems = config.identity.problems();
    if !problems.is_empty() {
        return Err(BrandGuardError::InvalidIdentity(problems.join(" ")));
    }

    let mut forbidden = Vec::with_capacity(config.forbidden.len());
    let mut compilation_errors = Vec::new();
    for pattern in &config.forbidden {
        match compile_pattern(pattern) {
            Ok(compiled) => forbidden.push(compiled),
            Err(e) => compilation_errors.push(e),
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(BrandGuardError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    let required_name = required_name_regex(&config.identity.company_name)
        .map_err(|e| BrandGuardError::PatternCompilationError("required_company_name".to_string(), e))?;

    // `problems()` already rejected numbers shorter than ten digits.
    let approved_phones = config
        .identity
        .approved_phones()
        .iter()
        .filter_map(|p| national_number(p))
        .collect();

    Ok(PatternCatalog {
        identity: config.identity.clone(),
        forbidden,
        required_name,
        email_suffix: config.identity.email_suffix(),
        approved_phones,
        mailboxes: config.mailboxes.clone(),
    })
}

/// Returns the cached catalog for this config, compiling it on first use.
pub fn get_or_compile_catalog(config: &BrandConfig) -> Result<Arc<PatternCatalog>> {
    let cache_key = hash_config(config);

    {
        let cache = CATALOG_CACHE
            .read()
            .map_err(|_| anyhow!("Pattern catalog cache lock is poisoned"))?;
        if let Some(catalog) = cache.get(&cache_key) {
            debug!("Serving pattern catalog from cache for key: {}", cache_key);
            return Ok(Arc::clone(catalog));
        }
    }

    debug!("Pattern catalog not found in cache. Compiling now.");
    let compiled = Arc::new(compile_catalog(config)?);

    CATALOG_CACHE
        .write()
        .map_err(|_| anyhow!("Pattern catalog cache lock is poisoned"))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Compiled and cached pattern catalog for key: {}", cache_key);
    Ok(compiled)
}
