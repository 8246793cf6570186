// brandguard/src/commands/sanitize.rs
//! `brandguard sanitize`: best-effort repair, with an optional diff and summary.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::PathBuf;

use brandguard_core::{ComplianceEngine, RepairSummaryItem};

use crate::commands::{info_msg, read_input, warn_msg, write_content};
use crate::ui::{diff_viewer, summary};

/// Options for the sanitize command.
pub struct SanitizeOptions {
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

pub fn run_sanitize(engine: &dyn ComplianceEngine, opts: SanitizeOptions) -> Result<()> {
    info!("Starting sanitize operation.");
    let input = read_input(opts.input_file.as_deref())?;

    let (sanitized, repairs) = engine.sanitize_with_summary(&input);
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        input.len(),
        sanitized.len()
    );

    handle_primary_output(&opts, &input, &sanitized)?;
    handle_repair_summary(&repairs, &opts)?;

    if !opts.quiet {
        let remaining = engine.validate(&sanitized);
        if !remaining.is_valid {
            warn_msg(format!(
                "Sanitized content still has {} brand violation(s); it will not pass `ensure`.",
                remaining.errors.len()
            ));
        }
    }

    info!("Sanitize operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &SanitizeOptions, input: &str, sanitized: &str) -> Result<()> {
    if let Some(path) = opts.output_path.as_deref() {
        if !opts.quiet {
            info_msg(format!("Writing sanitized content to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if opts.diff {
            diff_viewer::print_diff(input, sanitized, &mut file, false)?;
        } else {
            write_content(&mut file, sanitized)?;
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        if opts.diff {
            diff_viewer::print_diff(input, sanitized, &mut writer, supports_color)?;
        } else {
            write_content(&mut writer, sanitized)?;
        }
    }
    Ok(())
}

fn handle_repair_summary(repairs: &[RepairSummaryItem], opts: &SanitizeOptions) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        debug!("Displaying repair summary.");
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(repairs, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}
