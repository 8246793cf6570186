// brandguard-core/src/guard.rs
//! `BrandGuard`, the regex-backed `ComplianceEngine`.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::catalog::{get_or_compile_catalog, PatternCatalog};
use crate::config::{BrandConfig, BrandIdentity};
use crate::engine::ComplianceEngine;
use crate::repair::RepairSummaryItem;
use crate::sanitizer;
use crate::validator::{self, ValidationResult};

#[derive(Debug, Clone)]
pub struct BrandGuard {
    catalog: Arc<PatternCatalog>,
    config: BrandConfig,
}

impl BrandGuard {
    /// Validates `config` and builds an engine around its (cached) compiled catalog.
    pub fn new(config: BrandConfig) -> Result<Self> {
        config.validate()?;
        let catalog = get_or_compile_catalog(&config)
            .context("Failed to compile pattern catalog for BrandGuard")?;

        Ok(Self { catalog, config })
    }

    /// An engine for the built-in brand config.
    pub fn with_defaults() -> Result<Self> {
        Self::new(BrandConfig::load_default()?)
    }

    pub fn config(&self) -> &BrandConfig {
        &self.config
    }
}

impl ComplianceEngine for BrandGuard {
    fn validate(&self, content: &str) -> ValidationResult {
        validator::validate(&self.catalog, content)
    }

    fn sanitize_with_summary(&self, content: &str) -> (String, Vec<RepairSummaryItem>) {
        sanitizer::sanitize_with_summary(&self.catalog, content)
    }

    fn identity(&self) -> &BrandIdentity {
        &self.config.identity
    }

    fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }
}
