use armory_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - any summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Armory Processor - Weapon Reference Table Converter");
    println!("===================================================");
    println!();
    println!("Convert a semi-structured weapon reference table into a normalized");
    println!("hierarchical JSON document of categories and weapon records.");
    println!();
    println!("USAGE:");
    println!("    armory-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a weapon table to JSON (main command)");
    println!("    report      Print a category/weapon breakdown");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert the bundled weapon table to data/weapons.json:");
    println!("    armory-processor convert");
    println!();
    println!("    # Convert a custom table to a custom destination:");
    println!("    armory-processor convert --input tables/refit.tsv --output out/refit.json");
    println!();
    println!("    # Show the category breakdown with per-weapon detail:");
    println!("    armory-processor report --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    armory-processor <COMMAND> --help");
}
