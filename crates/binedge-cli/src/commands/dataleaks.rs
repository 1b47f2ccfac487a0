use std::io::Write;

use binedge_core::{Arguments, Client};

use crate::cli::DataleaksArgs;
use crate::error::CliError;
use crate::output::JsonPrinter;

use super::print_operation;

pub fn run<W: Write>(
    args: &DataleaksArgs,
    client: &Client,
    printer: &mut JsonPrinter<W>,
) -> Result<(), CliError> {
    print_operation(
        client,
        printer,
        args.operation(),
        &Arguments::target(args.target.as_str()),
        None,
    )
}
