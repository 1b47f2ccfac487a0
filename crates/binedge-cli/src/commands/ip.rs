use std::io::Write;

use binedge_core::{Arguments, Client};

use crate::cli::IpArgs;
use crate::error::CliError;
use crate::output::JsonPrinter;

use super::print_operation;

pub fn run<W: Write>(
    args: &IpArgs,
    client: &Client,
    printer: &mut JsonPrinter<W>,
) -> Result<(), CliError> {
    print_operation(
        client,
        printer,
        args.view.operation(),
        &Arguments::target(args.ip.as_str()),
        Some(&args.paging),
    )
}
