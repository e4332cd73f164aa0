//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod dump;
pub mod export;
pub mod utils;

// Re-export main command functions
pub use dump::{execute_dump, DumpArgs};
pub use export::{execute_export, ExportArgs};
pub use utils::{display_version, validate_captures};

use crate::parser::{read_traceroute, Traceroute};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read and parse one capture; `-` means stdin
pub fn load_capture(input: &Path) -> Result<Traceroute> {
    let traceroute = if input.as_os_str() == "-" {
        read_traceroute(std::io::stdin().lock())
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open {}", input.display()))?;
        read_traceroute(BufReader::new(file))
    };

    traceroute.with_context(|| format!("Failed to parse {}", input.display()))
}
