// brandguard-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use brandguard_core::config::{self, BrandConfig, BrandConfigNotFoundError, Mailbox, PatternCategory};
use brandguard_core::{BrandGuard, ComplianceEngine};

const NORTHWIND_YAML: &str = r#"
identity:
  company_name: Northwind
  email_domain: northwind.io
  local_phone: "(415) 200-3000"
  toll_free_phone: 1-800-600-7000
forbidden:
  - name: old_brand
    category: company_name
    pattern: '(?i)\bnorth\s+wind\b'
  - name: todo_marker
    category: placeholder
    pattern: '\bTODO\b'
mailboxes:
  billing: support
"#;

fn write_temp(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_default() {
    let config = BrandConfig::load_default().unwrap();
    assert_eq!(config.identity.email_domain, "casurance.net");
    assert!(config.forbidden.iter().any(|p| p.name == "placeholder_company"));
    assert_eq!(config.mailboxes.get("media"), Some(&Mailbox::Press));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_temp(NORTHWIND_YAML)?;
    let config = BrandConfig::load_from_file(file.path())?;
    assert_eq!(config.identity.company_name, "Northwind");
    assert_eq!(config.identity.support_email(), "support@northwind.io");
    assert_eq!(config.forbidden.len(), 2);
    assert_eq!(config.forbidden[0].category, PatternCategory::CompanyName);
    assert_eq!(config.mailboxes.get("billing"), Some(&Mailbox::Support));
    Ok(())
}

#[test]
fn test_load_from_file_reports_all_problems() -> Result<()> {
    let yaml = r#"
identity:
  company_name: ""
  email_domain: northwind.io
  local_phone: 200-3000
  toll_free_phone: 1-800-600-7000
forbidden:
  - name: broken
    category: placeholder
    pattern: '(unclosed'
"#;
    let file = write_temp(yaml)?;
    let err = BrandConfig::load_from_file(file.path()).unwrap_err().to_string();
    assert!(err.contains("Brand config validation failed"));
    assert!(err.contains("company_name"));
    assert!(err.contains("local_phone"));
    assert!(err.contains("invalid regex"));
    Ok(())
}

#[test]
fn test_load_from_file_missing_identity_fails_to_parse() -> Result<()> {
    let file = write_temp("forbidden: []\n")?;
    let err = BrandConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_load_by_name_or_path() -> Result<()> {
    let file = write_temp(NORTHWIND_YAML)?;
    let path = file.path().to_string_lossy().to_string();
    let config = BrandConfig::load_by_name_or_path(&path)?;
    assert_eq!(config.identity.company_name, "Northwind");

    let err = BrandConfig::load_by_name_or_path("no-such-brand-config-7f3a").unwrap_err();
    assert!(err.downcast_ref::<BrandConfigNotFoundError>().is_some());
    Ok(())
}

#[test]
fn test_merged_config_drives_the_engine() -> Result<()> {
    let file = write_temp(NORTHWIND_YAML)?;
    let user = BrandConfig::load_from_file(file.path())?;
    let merged = config::merge_configs(BrandConfig::load_default()?, Some(user));

    // Default placeholders still apply alongside the user's own patterns.
    assert!(merged.forbidden.iter().any(|p| p.name == "lorem_ipsum"));
    assert!(merged.forbidden.iter().any(|p| p.name == "todo_marker"));

    let guard = BrandGuard::new(merged)?;
    assert_eq!(
        guard.ensure("North Wind billing: billing@old.example, 213-555-1234")?,
        "Northwind billing: support@northwind.io, 1-800-600-7000"
    );
    assert!(guard.ensure("Northwind TODO").is_err());
    Ok(())
}

#[test]
fn test_round_trips_through_yaml() -> Result<()> {
    let config = BrandConfig::load_default()?;
    let yaml = serde_yml::to_string(&config)?;
    let back: BrandConfig = serde_yml::from_str(&yaml)?;
    assert_eq!(back, config);
    Ok(())
}
