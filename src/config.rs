//! Configuration management and validation.
//!
//! Provides the run configuration assembled from defaults and CLI
//! arguments: where the weapon table comes from, where the JSON document
//! goes, and how it is formatted.

use crate::constants::DEFAULT_OUTPUT_PATH;
use crate::{Error, Result};
use std::path::PathBuf;

/// Run configuration for a conversion
#[derive(Debug, Clone)]
pub struct Config {
    /// Input table file; `None` uses the bundled weapon table
    pub input_path: Option<PathBuf>,

    /// Output path for the generated JSON document
    pub output_path: PathBuf,

    /// Write minified JSON instead of pretty-printed
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            compact: false,
        }
    }
}

impl Config {
    /// Create a configuration reading from an input file
    pub fn with_input(mut self, input_path: PathBuf) -> Self {
        self.input_path = Some(input_path);
        self
    }

    /// Create a configuration writing to a custom output path
    pub fn with_output(mut self, output_path: PathBuf) -> Self {
        self.output_path = output_path;
        self
    }

    /// Create a configuration emitting minified JSON
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Output path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
