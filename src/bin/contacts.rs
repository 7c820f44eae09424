//! CLI entry point for the `contacts` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use contact_index::cli::commands;
use contact_index::types::NameField;
use contact_index::ContactError;

#[derive(Parser)]
#[command(
    name = "contacts",
    about = "Contact directory CLI: sorted listing and prefix search over JSON rosters"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every entry in sorted order
    List {
        /// Path to the roster JSON file
        file: PathBuf,
        /// Sort key: first or last
        #[arg(long, default_value = "first")]
        by: String,
    },
    /// Case-insensitive prefix search on first and last names
    Find {
        /// Path to the roster JSON file
        file: PathBuf,
        /// Name prefix (empty matches everything)
        #[arg(default_value = "")]
        query: String,
    },
    /// Print the union of two rosters
    Merge {
        /// Roster whose entries win on overlap
        left: PathBuf,
        /// Roster to merge in
        right: PathBuf,
    },
    /// Print the entries of the first roster that are absent from the second
    Diff {
        /// Roster to subtract from
        left: PathBuf,
        /// Roster of entries to drop
        right: PathBuf,
    },
    /// Summary statistics about a roster
    Stats {
        /// Path to the roster JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::List { file, by } => {
            let field = match NameField::from_name(&by) {
                Some(field) => field,
                None => {
                    eprintln!("Invalid sort key: {}", by);
                    process::exit(3);
                }
            };
            commands::cmd_list(&file, field, json)
        }
        Commands::Find { file, query } => commands::cmd_find(&file, &query, json),
        Commands::Merge { left, right } => commands::cmd_merge(&left, &right, json),
        Commands::Diff { left, right } => commands::cmd_diff(&left, &right, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            ContactError::Io(_) => 1,
            ContactError::Json(_) => 2,
            ContactError::InvalidEntry | ContactError::Duplicate(_) => 3,
            ContactError::NotFound(_) => 4,
        };
        process::exit(code);
    }
}
