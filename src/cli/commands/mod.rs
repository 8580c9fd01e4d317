//! Command implementations for the armory processor CLI
//!
//! This module contains the command execution logic and shared plumbing
//! (logging setup, input resolution, summary printing) for the CLI
//! interface. Each command is implemented in its own module.

pub mod convert;
pub mod report;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the armory processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `convert`: parse a weapon table and write the JSON document
/// - `report`: parse a weapon table and print a breakdown
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Report(report_args) => report::run_report(report_args),
    }
}
