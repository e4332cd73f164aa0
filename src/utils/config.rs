//! Configuration and constants for parsing and rendering.

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Default output path for the `export` command
pub const DEFAULT_REPORT_PATH: &str = "traceroute.json";

/// Unit suffix printed after every round-trip time
pub const RTT_UNIT: &str = "ms";

/// Digits after the decimal point when rendering round-trip times
pub const RTT_PRECISION: usize = 3;

/// Width of the right-aligned hop index column
pub const HOP_INDEX_WIDTH: usize = 3;

// Banner lines look like "traceroute to host (addr), 30 hops max".
// Rendered output uses "Traceroute for host (addr)", so both are accepted.
pub const HEADER_PREFIXES: &[&str] = &["traceroute", "traceroute6"];
pub const HEADER_CONNECTORS: &[&str] = &["to", "for"];

/// Banner written by the renderer
pub const RENDER_HEADER_PREFIX: &str = "Traceroute for";
