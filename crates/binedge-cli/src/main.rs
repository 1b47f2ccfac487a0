mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::JsonPrinter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let stdout = io::stdout();
    let mut printer = JsonPrinter::new(stdout.lock(), !cli.no_pretty);
    commands::run(&cli, &mut printer)?;

    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr; stdout carries only command output.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
