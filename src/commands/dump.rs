//! Dump command implementation.
//!
//! The dump command:
//! 1. Reads each capture (file or stdin)
//! 2. Parses it into a traceroute tree
//! 3. Prints the canonical rendering, optionally with path statistics
//!
//! A capture that fails to parse is reported and skipped; the command fails
//! once every capture has been tried.

use super::load_capture;
use crate::aggregator::{calculate_hop_stats, calculate_path_summary, generate_text_summary};
use crate::output::render_traceroute;
use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;

/// Arguments for the dump command
#[derive(Debug, Clone, Default)]
pub struct DumpArgs {
    /// Capture files; `-` reads stdin
    pub inputs: Vec<PathBuf>,

    /// Print per-hop statistics after each rendering
    pub print_summary: bool,
}

/// Execute the dump command
///
/// **Public** - main entry point called from main.rs
pub fn execute_dump(args: &DumpArgs) -> Result<()> {
    validate_args(args)?;

    let mut failed = 0usize;
    for input in &args.inputs {
        info!("Loading {}", input.display());

        let traceroute = match load_capture(input) {
            Ok(traceroute) => traceroute,
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
                continue;
            }
        };

        print!("{}", render_traceroute(&traceroute));

        if args.print_summary {
            let summary = calculate_path_summary(&traceroute);
            println!("{}", generate_text_summary(&calculate_hop_stats(&traceroute)));
            println!("{}", summary.summary());
            println!();
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} captures failed to parse", failed, args.inputs.len());
    }
    Ok(())
}

/// Validate dump arguments
pub fn validate_args(args: &DumpArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one capture file is required");
    }
    Ok(())
}
