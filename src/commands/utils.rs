use super::load_capture;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Parse each capture and report whether it is usable
pub fn validate_captures(inputs: &[PathBuf]) -> Result<()> {
    let mut failed = 0usize;

    for input in inputs {
        match load_capture(input) {
            Ok(traceroute) => println!(
                "✓ {}: {} hops, {} probes",
                input.display(),
                traceroute.hops.len(),
                traceroute.probe_count()
            ),
            Err(e) => {
                println!("✗ {:#}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} captures are invalid", failed, inputs.len());
    }
    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("trparse v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Parses traceroute text output into a hop/probe tree.");
}
