mod catalog;
mod configure;
mod dataleaks;
mod domains;
mod ip;
mod search;
mod stats;

use std::io::Write;
use std::path::{Path, PathBuf};

use binedge_core::{Arguments, Client, Credential, Operation};
use tracing::debug;

use crate::cli::{Cli, Command, PagingArgs};
use crate::config::{self, ResolvedConfig, API_KEY_ENV, CONFIG_PATH_ENV};
use crate::error::CliError;
use crate::output::JsonPrinter;

pub fn run<W: Write>(cli: &Cli, printer: &mut JsonPrinter<W>) -> Result<(), CliError> {
    let config_path = config::config_path(
        cli.config.as_deref(),
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
    );

    let connect = || build_client(cli, config_path.as_deref().ok());
    match &cli.command {
        Command::Config(args) => configure::run(args, &config_path.clone()?, printer),
        Command::Ip(args) => ip::run(args, &connect()?, printer),
        Command::Search(args) => search::run(args, &connect()?, printer),
        Command::Stats(args) => stats::run(args, &connect()?, printer),
        Command::SensorStats(args) => stats::run_sensor(args, &connect()?, printer),
        Command::Dataleaks(args) => dataleaks::run(args, &connect()?, printer),
        Command::Catalog(args) => catalog::run(args, &connect()?, printer),
        Command::Domains(args) => domains::run(args, &connect()?, printer),
    }
}

/// Without a resolvable config path only `BINARYEDGE_API_KEY` can supply the key.
fn build_client(cli: &Cli, config_path: Option<&Path>) -> Result<Client, CliError> {
    let file = match config_path {
        Some(path) => config::load_config_file(path)?,
        None => None,
    };
    let resolved = ResolvedConfig::resolve(
        file.as_ref(),
        std::env::var(API_KEY_ENV).ok(),
        cli.no_verify,
    )?;
    debug!(
        config = ?config_path,
        verify_tls = resolved.verify_tls,
        "building client"
    );

    let client = Client::builder(Credential::new(resolved.key)?)
        .verify_tls(resolved.verify_tls)
        .timeout_ms(cli.timeout_ms)
        .build()?;
    Ok(client)
}

/// Run `operation` and print its result; paginated operations print one
/// document per page as each page arrives.
fn print_operation<W: Write>(
    client: &Client,
    printer: &mut JsonPrinter<W>,
    operation: Operation,
    args: &Arguments,
    paging: Option<&PagingArgs>,
) -> Result<(), CliError> {
    match paging {
        Some(paging) if operation.is_paginated() => {
            for page in client.paginate(operation, args, paging.range())? {
                printer.print(page?.body())?;
            }
            Ok(())
        }
        Some(paging) if paging.is_set() => Err(CliError::Usage(format!(
            "--page, --max-pages and --all do not apply to {operation}"
        ))),
        _ => printer.print(&client.execute(operation, args)?),
    }
}
