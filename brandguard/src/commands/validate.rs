// brandguard/src/commands/validate.rs
//! `brandguard validate`: report violations without touching the input.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

use brandguard_core::{content_fingerprint, ComplianceEngine, ValidationResult};

use crate::commands::read_input;
use crate::ui::output_format;

pub struct ValidateOptions {
    pub input_file: Option<PathBuf>,
    pub json: bool,
}

/// Writes a human-readable report: errors, then warnings, then a verdict line.
pub fn print_report<W: Write>(result: &ValidationResult, writer: &mut W, supports_color: bool) -> io::Result<()> {
    for error in &result.errors {
        output_format::print_error_message(writer, error, supports_color)?;
    }
    for warning in &result.warnings {
        output_format::print_warn_message(writer, warning, supports_color)?;
    }
    if result.is_valid {
        output_format::print_success_message(writer, "Content is brand-compliant.", supports_color)
    } else {
        output_format::print_info_message(
            writer,
            &format!("Content is not brand-compliant ({} error(s)).", result.errors.len()),
            supports_color,
        )
    }
}

/// Runs validation and prints the result. Returns whether the content is valid.
pub fn run_validate(engine: &dyn ComplianceEngine, opts: ValidateOptions) -> Result<bool> {
    info!("Starting validate operation.");
    let input = read_input(opts.input_file.as_deref())?;
    debug!("Validating content {}.", content_fingerprint(&input));

    let result = engine.validate(&input);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if opts.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize validation result")?;
        writeln!(writer, "{}", json)?;
    } else {
        let supports_color = stdout.is_terminal();
        print_report(&result, &mut writer, supports_color)?;
    }

    info!(
        "Validate operation completed: {} error(s), {} warning(s).",
        result.errors.len(),
        result.warnings.len()
    );
    Ok(result.is_valid)
}
