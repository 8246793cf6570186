// brandguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the brandguard application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use brandguard_core::CONFIG_ENV_VAR;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "brandguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep generated copy on-brand",
    long_about = "BrandGuard checks machine-generated marketing text against an approved brand identity. Off-brand company names, email addresses and phone numbers are repaired automatically; content that cannot be repaired is rejected so it can be regenerated.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Brand configuration to enforce instead of the built-in one.
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        env = CONFIG_ENV_VAR,
        help = "Path (or name) of a brand configuration YAML, merged over the built-in brand."
    )]
    pub config: Option<String>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `brandguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports every brand violation without changing the input.
    #[command(about = "Reports every brand violation without changing the input.")]
    Validate(ValidateCommand),

    /// Repairs off-brand names, emails and phone numbers.
    #[command(about = "Repairs off-brand names, emails and phone numbers.")]
    Sanitize(SanitizeCommand),

    /// Validates, repairs if needed, and fails if the content still does not comply.
    #[command(about = "Validates, repairs if needed, and fails if the content still does not comply.")]
    Ensure(EnsureCommand),

    /// Prints the active brand configuration as YAML.
    #[command(name = "show-config", about = "Prints the active brand configuration as YAML.")]
    ShowConfig,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the validation result as JSON.
    #[arg(long, help = "Print the validation result to stdout as JSON.")]
    pub json: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the repair summary.
    #[arg(long = "no-summary", help = "Suppress the repair summary.")]
    pub no_summary: bool,
}

/// Arguments for the `ensure` command.
#[derive(Parser, Debug)]
pub struct EnsureCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write compliant output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Treat the input as a generated document (JSON) and check each field.
    #[arg(long, help = "Treat the input as a JSON document (kind, title, subtitle, excerpt, body).")]
    pub document: bool,
}
