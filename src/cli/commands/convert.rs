//! Convert command: weapon table to normalized JSON document

use tracing::info;

use super::shared::{load_table_text, print_summary, setup_logging};
use crate::Result;
use crate::app::services::json_writer;
use crate::app::services::table_parser::TableParser;
use crate::cli::args::ConvertArgs;
use crate::config::Config;

/// Run the convert command
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level());

    let mut config = Config::default().with_compact(args.compact);
    if let Some(input_path) = args.input_path.clone() {
        config = config.with_input(input_path);
    }
    if let Some(output_path) = args.output_path.clone() {
        config = config.with_output(output_path);
    }
    config.validate()?;

    let table_text = load_table_text(config.input_path.as_deref())?;

    let parser = TableParser::new();
    let result = parser.parse_text(&table_text);

    let summary = json_writer::write_document(&result.document, &config.output_path, config.compact)?;
    info!("Output size: {} bytes", summary.bytes_written);

    if args.show_summary() {
        print_summary(&result.document, &result.stats, &summary.path);
    }

    Ok(())
}
