// brandguard/src/main.rs
//! BrandGuard entry point.
//!
//! Resolves the brand configuration, builds the compliance engine and dispatches
//! to the requested subcommand. Exit codes: 0 on success, 1 on failure or when
//! `validate` finds violations, 2 when `ensure` rejects content as unrecoverable.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{debug, info, LevelFilter};
use std::io;
use std::process::ExitCode;

use brandguard::cli::{Cli, Commands};
use brandguard::commands::ensure::{run_ensure, EnsureOptions};
use brandguard::commands::sanitize::{run_sanitize, SanitizeOptions};
use brandguard::commands::show_config::run_show_config;
use brandguard::commands::validate::{run_validate, ValidateOptions};
use brandguard::logger;
use brandguard::ui::output_format;
use brandguard_core::{merge_configs, BrandConfig, BrandGuard};

const EXIT_INVALID: u8 = 1;
const EXIT_UNRECOVERABLE: u8 = 2;

fn load_config(config: Option<&str>) -> Result<BrandConfig> {
    let default_config = BrandConfig::load_default()?;
    let user_config = match config {
        Some(name_or_path) => Some(
            BrandConfig::load_by_name_or_path(name_or_path)
                .with_context(|| format!("Failed to load brand config '{}'", name_or_path))?,
        ),
        None => None,
    };
    Ok(merge_configs(default_config, user_config))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    debug!("Active brand: {}", config.identity.company_name);

    let engine = BrandGuard::new(config).context("Failed to initialize the compliance engine")?;

    let code = match cli.command {
        Commands::Validate(cmd) => {
            let valid = run_validate(
                &engine,
                ValidateOptions {
                    input_file: cmd.input_file,
                    json: cmd.json,
                },
            )?;
            if valid { ExitCode::SUCCESS } else { ExitCode::from(EXIT_INVALID) }
        }
        Commands::Sanitize(cmd) => {
            run_sanitize(
                &engine,
                SanitizeOptions {
                    input_file: cmd.input_file,
                    output_path: cmd.output,
                    diff: cmd.diff,
                    no_summary: cmd.no_summary,
                    quiet: cli.quiet,
                },
            )?;
            ExitCode::SUCCESS
        }
        Commands::Ensure(cmd) => {
            let compliant = run_ensure(
                &engine,
                EnsureOptions {
                    input_file: cmd.input_file,
                    output_path: cmd.output,
                    document: cmd.document,
                },
            )?;
            if compliant { ExitCode::SUCCESS } else { ExitCode::from(EXIT_UNRECOVERABLE) }
        }
        Commands::ShowConfig => {
            run_show_config(engine.config())?;
            ExitCode::SUCCESS
        }
    };
    Ok(code)
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("brandguard started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            let _ = output_format::print_error_message(&mut io::stderr(), &format!("{:#}", e), io::stderr().is_terminal());
            ExitCode::from(EXIT_INVALID)
        }
    }
}
