//! Report command: category/weapon breakdown without writing output

use colored::Colorize;

use super::shared::{load_table_text, setup_logging};
use crate::Result;
use crate::app::services::table_parser::TableParser;
use crate::cli::args::ReportArgs;

/// Run the report command
pub fn run_report(args: ReportArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level());

    let table_text = load_table_text(args.input_path.as_deref())?;

    let parser = TableParser::new();
    let result = parser.parse_text(&table_text);

    println!(
        "{} weapons across {} categories",
        result.document.weapon_count(),
        result.document.categories.len()
    );
    println!();

    for category in &result.document.categories {
        println!(
            "{} ({} weapons)",
            category.name.bold(),
            category.weapons.len()
        );

        if args.detailed {
            for weapon in &category.weapons {
                let hardpoint = weapon.hardpoint.as_deref().unwrap_or("-");
                let cost = weapon
                    .cost
                    .as_ref()
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:<40} {:<32} {:>4} {:>6}",
                    weapon.name, weapon.id.dimmed(), hardpoint, cost
                );
            }
        }
    }

    Ok(())
}
