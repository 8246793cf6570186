// brandguard/src/commands/ensure.rs
//! `brandguard ensure`: the hard gate. Prints compliant content or rejects it.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use brandguard_core::{ensure_document_compliance, BrandGuardError, ComplianceEngine, GeneratedContent};

use crate::commands::{error_msg, read_input, write_output};

pub struct EnsureOptions {
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub document: bool,
}

/// Runs the orchestrator on the input. Returns `Ok(false)` when the content was
/// rejected as unrecoverable; other failures are errors.
pub fn run_ensure(engine: &dyn ComplianceEngine, opts: EnsureOptions) -> Result<bool> {
    info!("Starting ensure operation.");
    let input = read_input(opts.input_file.as_deref())?;

    let outcome = if opts.document {
        let document: GeneratedContent =
            serde_json::from_str(&input).context("Input is not a valid generated-content JSON document")?;
        ensure_document_compliance(engine, document).and_then(|doc| {
            serde_json::to_string_pretty(&doc).map_err(|e| BrandGuardError::Fatal(e.to_string()))
        })
    } else {
        engine.ensure(&input)
    };

    match outcome {
        Ok(compliant) => {
            write_output(opts.output_path.as_deref(), &compliant)?;
            info!("Ensure operation completed.");
            Ok(true)
        }
        Err(e) if e.policy_errors().is_some() => {
            warn!("Content rejected as unrecoverable.");
            error_msg(e.to_string());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
