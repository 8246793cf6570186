// brandguard/src/commands/show_config.rs
//! `brandguard show-config`: print the effective (merged) brand configuration.

use anyhow::{Context, Result};
use std::io::{self, Write};

use brandguard_core::BrandConfig;

pub fn run_show_config(config: &BrandConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize brand config")?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write!(writer, "{}", yaml)?;
    Ok(())
}
