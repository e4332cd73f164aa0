//! trparse CLI
//!
//! Parses traceroute captures and prints them in canonical form,
//! as path statistics, or as JSON reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use trparse::commands::{
    display_version, execute_dump, execute_export, validate_captures, DumpArgs, ExportArgs,
};
use trparse::utils::config::DEFAULT_REPORT_PATH;

/// trparse - structured traceroute output
#[derive(Parser, Debug)]
#[command(name = "trparse")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse captures and print their canonical rendering
    Dump {
        /// Capture files ("-" for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print per-hop loss and latency after each capture
        #[arg(long)]
        summary: bool,
    },

    /// Parse a capture and write it as a JSON report
    Export {
        /// Capture file ("-" for stdin)
        file: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },

    /// Check that captures parse
    Validate {
        /// Capture files ("-" for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Dump { files, summary } => {
            execute_dump(&DumpArgs {
                inputs: files,
                print_summary: summary,
            })?;
        }

        Commands::Export { file, output } => {
            execute_export(&ExportArgs {
                input: file,
                output_json: output,
            })?;
        }

        Commands::Validate { files } => {
            validate_captures(&files)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
