//! Export command implementation.
//!
//! Parses one capture and writes it as a JSON report.

use super::load_capture;
use crate::output::{write_report, TracerouteReport};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Capture file; `-` reads stdin
    pub input: PathBuf,

    /// Output path for the JSON report
    pub output_json: PathBuf,
}

/// Execute the export command
///
/// # Errors
/// * Unreadable or unparseable capture
/// * Report write failures
pub fn execute_export(args: &ExportArgs) -> Result<()> {
    let traceroute = load_capture(&args.input)?;

    info!(
        "Parsed {} hops for {} ({})",
        traceroute.hops.len(),
        traceroute.destination_name,
        traceroute.destination_address
    );

    let report = TracerouteReport::new(traceroute, Some(args.input.display().to_string()));
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());
    Ok(())
}
