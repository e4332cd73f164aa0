//! Canonical text rendering of a traceroute tree.
//!
//! The rendering keeps the semantic content of a capture, not its spacing,
//! and parses back into an equal tree.

use crate::parser::schema::{Hop, Probe, Traceroute};
use crate::utils::config::{HOP_INDEX_WIDTH, RENDER_HEADER_PREFIX, RTT_PRECISION, RTT_UNIT};
use crate::utils::error::OutputError;
use log::info;
use std::fmt;
use std::path::Path;

impl fmt::Display for Traceroute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})\n\n",
            RENDER_HEADER_PREFIX, self.destination_name, self.destination_address
        )?;
        for hop in &self.hops {
            write!(f, "{}", hop)?;
        }
        Ok(())
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = format!("{:>width$} ", self.index, width = HOP_INDEX_WIDTH);
        f.write_str(&prefix)?;

        // Continuation probes line up under the first one
        let indent = " ".repeat(prefix.len());
        for (n, probe) in self.probes.iter().enumerate() {
            if n > 0 {
                f.write_str(&indent)?;
            }
            write!(f, "{}", probe)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(rtt) = self.round_trip_time_ms else {
            return if self.annotation.is_empty() {
                writeln!(f, "*")
            } else {
                writeln!(f, "* {}", self.annotation)
            };
        };

        if let Some(asn) = self.autonomous_system_number {
            write!(f, "[AS{}] ", asn)?;
        }
        if let Some(name) = &self.host_name {
            write!(f, "{} ", name)?;
        }
        if let Some(address) = &self.address {
            write!(f, "({}) ", address)?;
        }
        writeln!(
            f,
            "{:.prec$} {} {}",
            rtt,
            RTT_UNIT,
            self.annotation,
            prec = RTT_PRECISION
        )
    }
}

/// Render a traceroute tree to its canonical text form
///
/// **Public** - main entry point for text output
pub fn render_traceroute(traceroute: &Traceroute) -> String {
    traceroute.to_string()
}

/// Write the canonical rendering to a file
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty or a directory
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_text(traceroute: &Traceroute, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    super::prepare_output_path(output_path)?;

    let text = render_traceroute(traceroute);
    std::fs::write(output_path, &text).map_err(OutputError::WriteFailed)?;

    info!("Rendering written to {} ({} bytes)", output_path.display(), text.len());
    Ok(())
}
