use std::io::Write;

use binedge_core::Client;

use crate::cli::{SensorStatsArgs, StatsArgs};
use crate::error::CliError;
use crate::output::JsonPrinter;

pub fn run<W: Write>(
    args: &StatsArgs,
    client: &Client,
    printer: &mut JsonPrinter<W>,
) -> Result<(), CliError> {
    let body = client.stats(&args.query, &args.stat_type, args.page)?;
    printer.print(&body)
}

pub fn run_sensor<W: Write>(
    args: &SensorStatsArgs,
    client: &Client,
    printer: &mut JsonPrinter<W>,
) -> Result<(), CliError> {
    let body = client.sensor_search_stats(&args.query, &args.stat_type, args.days)?;
    printer.print(&body)
}
