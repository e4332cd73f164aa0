//! Aggregation of parsed traceroutes into path metrics.
//!
//! This module turns a traceroute tree into:
//! - Per-hop loss and latency statistics
//! - A whole-path summary

pub mod metrics;

// Re-export main types and functions
pub use metrics::{
    calculate_hop_stats, calculate_path_summary, generate_text_summary, HopStats, PathSummary,
};
