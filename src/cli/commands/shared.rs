//! Shared components for CLI commands
//!
//! Logging setup, input resolution, and summary printing used across the
//! command implementations.

use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};

use crate::app::services::table_parser::ParseStats;
use crate::app::models::Document;
use crate::constants::BUNDLED_WEAPONS_TABLE;
use crate::{Error, Result};

/// Set up structured logging on stderr
///
/// Respects `RUST_LOG` when set; otherwise filters this crate at the
/// given level. Stdout is left untouched for the report output.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("armory_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Resolve the input table text: a file when given, else the bundled table
pub fn load_table_text(input_path: Option<&Path>) -> Result<String> {
    match input_path {
        Some(path) => {
            info!("Reading weapon table from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| {
                Error::io(format!("Failed to read input file '{}'", path.display()), e)
            })
        }
        None => {
            info!("Using bundled weapon table");
            Ok(BUNDLED_WEAPONS_TABLE.to_string())
        }
    }
}

/// Print the human-readable run summary after a conversion
pub fn print_summary(document: &Document, stats: &ParseStats, output: &Path) {
    println!(
        "{} {} with {} weapons across {} categories",
        "Wrote".green().bold(),
        output.display(),
        document.weapon_count(),
        document.categories.len()
    );

    let names: Vec<&str> = document
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    println!("{} {}", "Categories:".bold(), names.join(", "));

    if stats.rows_skipped > 0 {
        println!(
            "{} {} of {} rows skipped",
            "Note:".yellow().bold(),
            stats.rows_skipped,
            stats.classified_rows()
        );
    }
}
