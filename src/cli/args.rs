//! Command-line argument definitions for the armory processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Validation that goes beyond what clap expresses lives on the
//! argument types themselves.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the armory weapon table processor
///
/// Converts a semi-structured starship weapon reference table into a
/// normalized hierarchical JSON document of categories and weapons.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "armory-processor",
    version,
    about = "Convert semi-structured weapon reference tables into normalized JSON",
    long_about = "Converts a semi-structured, human-authored weapon reference table \
                  (tab- or whitespace-aligned rows with interleaved category headers and \
                  ragged column counts) into a normalized hierarchical JSON document. \
                  Ships with the standard weapon table bundled in; point --input at a \
                  file to convert a different table."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the armory processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a weapon table to a normalized JSON document (main command)
    Convert(ConvertArgs),
    /// Print a category/weapon breakdown without writing anything
    Report(ReportArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input weapon table file
    ///
    /// Tab-delimited or whitespace-aligned rows, one weapon or category
    /// header per line. If not specified, the bundled weapon table is used.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input weapon table file (defaults to the bundled table)"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for the generated JSON document
    ///
    /// Missing parent directories are created. If not specified, defaults
    /// to data/weapons.json.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the generated JSON document"
    )]
    pub output_path: Option<PathBuf>,

    /// Emit minified JSON instead of pretty-printed
    #[arg(long = "compact", help = "Emit minified JSON")]
    pub compact: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and the run summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Input weapon table file
    ///
    /// If not specified, the bundled weapon table is used.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input weapon table file (defaults to the bundled table)"
    )]
    pub input_path: Option<PathBuf>,

    /// Include per-weapon detail lines
    ///
    /// By default, shows category counts only. This flag lists every
    /// weapon with its identifier, hardpoint, and cost.
    #[arg(long = "detailed", help = "Include per-weapon detail in the report")]
    pub detailed: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the run summary should be printed (not in quiet mode)
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
