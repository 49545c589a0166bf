//! stigforge CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error (including I/O)
//! - 2: Invalid input or arguments
//! - 3: Resolution failure
//! - 4: Template/render failure
//! - 5: Capability gate (valid input, not yet supported)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod prompt;

use commands::{Cli, Commands};
use prompt::PromptError;
use stigforge_refstore::RefStoreError;
use stigforge_resolver::{ResolveError, SelectError};
use stigforge_templates::TemplateError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_INPUT: u8 = 2;
    pub const RESOLUTION_FAILURE: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const NOT_SUPPORTED: u8 = 5;
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("stigforge=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Interactive(args) => commands::interactive::execute(args),
        Commands::Batch(args) => commands::batch::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<SelectError>().is_some() {
        return ExitCodes::NOT_SUPPORTED;
    }
    if e.downcast_ref::<ResolveError>().is_some() {
        return ExitCodes::RESOLUTION_FAILURE;
    }
    if e.downcast_ref::<TemplateError>().is_some() {
        return ExitCodes::TEMPLATE_ERROR;
    }
    if let Some(err) = e.downcast_ref::<PromptError>() {
        return match err {
            PromptError::Io(_) => ExitCodes::GENERAL_ERROR,
            _ => ExitCodes::INVALID_INPUT,
        };
    }
    if let Some(err) = e.downcast_ref::<RefStoreError>() {
        // Malformed reference rows are resolution-data failures; a
        // missing file or directory is plain I/O.
        return match err {
            RefStoreError::MalformedRow { .. }
            | RefStoreError::EmptyColumn { .. }
            | RefStoreError::EmptyTable { .. } => ExitCodes::RESOLUTION_FAILURE,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }
    if e.downcast_ref::<commands::batch::BatchError>().is_some() {
        return ExitCodes::INVALID_INPUT;
    }
    ExitCodes::GENERAL_ERROR
}
