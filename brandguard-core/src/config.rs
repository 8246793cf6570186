//! Configuration management for `brandguard-core`.
//!
//! This module defines the brand identity every piece of generated content is checked
//! against, the catalog of forbidden patterns, and the username table used to remap
//! foreign email addresses. It handles YAML (de)serialization and provides utilities
//! for loading, merging and validating these configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::normalize::{national_number, normalize_email};

/// Maximum allowed length for a forbidden pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Environment variable that points the loaders at a config file.
pub const CONFIG_ENV_VAR: &str = "BRANDGUARD_CONFIG";

static DOMAIN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+(?:\.[a-z0-9-]+)+$").expect("domain shape regex is valid"));

/// The approved identity of the brand. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct BrandIdentity {
    /// The only company name content may use (e.g. "Casurance").
    pub company_name: String,
    /// The only email domain content may use, without the `@`.
    pub email_domain: String,
    /// Approved local phone number, in display form.
    pub local_phone: String,
    /// Approved toll-free phone number, in display form. Used as the replacement
    /// for every unapproved number.
    pub toll_free_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_email: Option<String>,
}

impl BrandIdentity {
    pub fn info_email(&self) -> String {
        self.info_email
            .clone()
            .unwrap_or_else(|| format!("info@{}", self.email_domain))
    }

    pub fn support_email(&self) -> String {
        self.support_email
            .clone()
            .unwrap_or_else(|| format!("support@{}", self.email_domain))
    }

    pub fn press_email(&self) -> String {
        self.press_email
            .clone()
            .unwrap_or_else(|| format!("press@{}", self.email_domain))
    }

    /// The approved address for a mailbox.
    pub fn mailbox_address(&self, mailbox: Mailbox) -> String {
        match mailbox {
            Mailbox::Info => self.info_email(),
            Mailbox::Support => self.support_email(),
            Mailbox::Press => self.press_email(),
        }
    }

    /// `@domain`, lower-cased. Normalized emails must end with this.
    pub fn email_suffix(&self) -> String {
        format!("@{}", self.email_domain.to_lowercase())
    }

    /// Both approved numbers in display form, local first.
    pub fn approved_phones(&self) -> [&str; 2] {
        [self.local_phone.as_str(), self.toll_free_phone.as_str()]
    }

    /// Checks the identity for internal consistency, returning every problem found.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.company_name.trim().is_empty() {
            problems.push("`company_name` must not be empty.".to_string());
        }

        if !DOMAIN_SHAPE.is_match(&self.email_domain.to_lowercase()) {
            problems.push(format!(
                "`email_domain` '{}' is not a bare domain like 'example.net'.",
                self.email_domain
            ));
        }

        for (field, phone) in [("local_phone", &self.local_phone), ("toll_free_phone", &self.toll_free_phone)] {
            if national_number(phone).is_none() {
                problems.push(format!(
                    "`{}` '{}' must contain at least 10 digits.",
                    field, phone
                ));
            }
        }

        let suffix = self.email_suffix();
        for (field, email) in [
            ("info_email", &self.info_email),
            ("support_email", &self.support_email),
            ("press_email", &self.press_email),
        ] {
            if let Some(email) = email {
                if !normalize_email(email).ends_with(&suffix) {
                    problems.push(format!(
                        "`{}` '{}' is not on the approved domain '{}'.",
                        field, email, self.email_domain
                    ));
                }
            }
        }

        problems
    }
}

/// The kind of brand violation a forbidden pattern represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    CompanyName,
    EmailDomain,
    Phone,
    Placeholder,
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            PatternCategory::CompanyName => "company name",
            PatternCategory::EmailDomain => "email domain",
            PatternCategory::Phone => "phone number",
            PatternCategory::Placeholder => "placeholder",
        };
        f.write_str(label)
    }
}

/// A single entry in the forbidden-pattern catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ForbiddenPattern {
    /// Unique identifier for the pattern (e.g. "placeholder_company").
    pub name: String,
    pub category: PatternCategory,
    /// The regex pattern string.
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The approved mailboxes a foreign email can be remapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mailbox {
    #[default]
    Info,
    Support,
    Press,
}

/// Top-level configuration: identity, forbidden catalog and the username table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct BrandConfig {
    pub identity: BrandIdentity,
    #[serde(default)]
    pub forbidden: Vec<ForbiddenPattern>,
    /// Normalized email username -> approved mailbox.
    #[serde(default)]
    pub mailboxes: BTreeMap<String, Mailbox>,
}

/// Error type for a config that could not be located.
#[derive(Debug)]
pub struct BrandConfigNotFoundError {
    pub config_name: String,
}

impl fmt::Display for BrandConfigNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Brand configuration '{}' not found.", self.config_name)
    }
}

impl std::error::Error for BrandConfigNotFoundError {}

impl BrandConfig {
    /// Loads a brand config from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading brand config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: BrandConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded brand '{}' with {} forbidden patterns from {}.",
            config.identity.company_name,
            config.forbidden.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the built-in brand config embedded at compile time.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default brand config from embedded string...");
        let default_yaml = include_str!("../config/default_brand.yaml");
        let config: BrandConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default brand config")?;

        debug!("Loaded {} default forbidden patterns.", config.forbidden.len());
        Ok(config)
    }

    /// Loads a config from a direct path, or by name from the candidate directories.
    pub fn load_by_name_or_path(name_or_path: &str) -> Result<Self> {
        debug!("Attempting to load brand config from: '{}'", name_or_path);
        let path = Path::new(name_or_path);
        let path_to_load = if path.is_file() {
            path.to_path_buf()
        } else {
            config_candidate_paths(name_or_path)
                .into_iter()
                .find(|p| p.is_file())
                .ok_or_else(|| BrandConfigNotFoundError {
                    config_name: name_or_path.to_string(),
                })?
        };
        Self::load_from_file(path_to_load)
    }

    /// Validates identity and catalog, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = self.identity.problems();
        let mut names = HashSet::new();

        for pattern in &self.forbidden {
            if pattern.name.is_empty() {
                errors.push("A forbidden pattern has an empty `name` field.".to_string());
            } else if !names.insert(pattern.name.as_str()) {
                errors.push(format!("Duplicate pattern name found: '{}'.", pattern.name));
            }

            if pattern.pattern.is_empty() {
                errors.push(format!("Pattern '{}' has an empty `pattern` field.", pattern.name));
                continue;
            }
            if pattern.pattern.len() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "Pattern '{}' is {} characters long; the maximum is {}.",
                    pattern.name,
                    pattern.pattern.len(),
                    MAX_PATTERN_LENGTH
                ));
                continue;
            }
            if let Err(e) = Regex::new(&pattern.pattern) {
                errors.push(format!("Pattern '{}' has an invalid regex: {}", pattern.name, e));
            }
        }

        for key in self.mailboxes.keys() {
            if key.is_empty() || key.chars().any(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit()) {
                errors.push(format!(
                    "Mailbox key '{}' must be a normalized username (lower-case letters and digits).",
                    key
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Brand config validation failed:\n{}", errors.join("\n")))
        }
    }
}

/// Overlays a user config on the defaults.
///
/// The user identity always wins. Forbidden patterns are merged by name, with user
/// entries replacing defaults of the same name, and user mailbox entries are added
/// to (or override) the default table.
pub fn merge_configs(default_config: BrandConfig, user_config: Option<BrandConfig>) -> BrandConfig {
    let Some(user) = user_config else {
        debug!("No user brand config; using defaults.");
        return default_config;
    };

    debug!(
        "Merging user config for '{}' ({} patterns, {} mailboxes) over defaults.",
        user.identity.company_name,
        user.forbidden.len(),
        user.mailboxes.len()
    );

    let mut forbidden = default_config.forbidden;
    for user_pattern in user.forbidden {
        match forbidden.iter_mut().find(|p| p.name == user_pattern.name) {
            Some(existing) => *existing = user_pattern,
            None => forbidden.push(user_pattern),
        }
    }

    let mut mailboxes = default_config.mailboxes;
    mailboxes.extend(user.mailboxes);

    BrandConfig {
        identity: user.identity,
        forbidden,
        mailboxes,
    }
}

/// Directories searched, in order, for `<name>.yaml`.
pub fn config_candidate_paths(name: &str) -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".brandguard")),
        dirs::config_dir().map(|p| p.join("brandguard")),
        Some(PathBuf::from("/etc/brandguard")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}
