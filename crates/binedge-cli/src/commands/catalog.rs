use std::io::Write;

use binedge_core::{Arguments, Client};

use crate::cli::CatalogArgs;
use crate::error::CliError;
use crate::output::JsonPrinter;

use super::print_operation;

pub fn run<W: Write>(
    args: &CatalogArgs,
    client: &Client,
    printer: &mut JsonPrinter<W>,
) -> Result<(), CliError> {
    print_operation(client, printer, args.catalog.operation(), &Arguments::new(), None)
}
