//! Per-hop statistics over a parsed traceroute.
//!
//! Loss and latency per hop are what a reader scans a trace for first.

use crate::parser::schema::{Hop, Traceroute};
use log::debug;

/// Statistics for a single hop
#[derive(Debug, Clone, PartialEq)]
pub struct HopStats {
    /// Hop index as declared in the capture
    pub index: u32,

    /// Probes sent (replies and timeouts)
    pub sent: usize,

    /// Probes that got a reply
    pub received: usize,

    /// Percentage of probes that timed out
    pub loss_percentage: f64,

    pub min_rtt_ms: Option<f64>,
    pub avg_rtt_ms: Option<f64>,
    pub max_rtt_ms: Option<f64>,

    /// Distinct responder addresses in first-seen order
    pub addresses: Vec<String>,
}

/// Calculate statistics for every hop
///
/// **Public** - main entry point for metrics calculation
pub fn calculate_hop_stats(traceroute: &Traceroute) -> Vec<HopStats> {
    debug!("Calculating stats for {} hops", traceroute.hops.len());
    traceroute.hops.iter().map(create_hop_stats).collect()
}

fn create_hop_stats(hop: &Hop) -> HopStats {
    let rtts: Vec<f64> = hop
        .probes
        .iter()
        .filter_map(|p| p.round_trip_time_ms)
        .collect();

    let sent = hop.probes.len();
    let received = rtts.len();
    let loss_percentage = if sent > 0 {
        ((sent - received) as f64 / sent as f64) * 100.0
    } else {
        0.0
    };

    let mut addresses: Vec<String> = Vec::new();
    for probe in hop.probes.iter().filter(|p| !p.is_timeout()) {
        if let Some(address) = &probe.address {
            if !addresses.contains(address) {
                addresses.push(address.clone());
            }
        }
    }

    HopStats {
        index: hop.index,
        sent,
        received,
        loss_percentage,
        min_rtt_ms: rtts.iter().copied().reduce(f64::min),
        avg_rtt_ms: (received > 0).then(|| rtts.iter().sum::<f64>() / received as f64),
        max_rtt_ms: rtts.iter().copied().reduce(f64::max),
        addresses,
    }
}

/// Whole-path summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSummary {
    pub hop_count: usize,
    pub total_probes: usize,
    pub timeouts: usize,

    /// Some probe got a reply from the destination address
    pub destination_reached: bool,

    /// Index of the hop where the destination first answered
    pub destination_hop: Option<u32>,
}

/// Summarize a whole traceroute
pub fn calculate_path_summary(traceroute: &Traceroute) -> PathSummary {
    let total_probes = traceroute.probe_count();
    let timeouts = traceroute
        .hops
        .iter()
        .flat_map(|hop| &hop.probes)
        .filter(|p| p.is_timeout())
        .count();

    let destination_hop = traceroute
        .hops
        .iter()
        .find(|hop| {
            hop.probes.iter().any(|p| {
                !p.is_timeout()
                    && p.address.as_deref() == Some(traceroute.destination_address.as_str())
            })
        })
        .map(|hop| hop.index);

    PathSummary {
        hop_count: traceroute.hops.len(),
        total_probes,
        timeouts,
        destination_reached: destination_hop.is_some(),
        destination_hop,
    }
}

impl PathSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the `--summary` flag
    pub fn summary(&self) -> String {
        let reached = match self.destination_hop {
            Some(index) => format!("reached at hop {}", index),
            None => "not reached".to_string(),
        };
        format!(
            "Hops: {} | Probes: {} | Timeouts: {} | Destination {}",
            self.hop_count, self.total_probes, self.timeouts, reached
        )
    }
}

/// Render per-hop statistics as a table
pub fn generate_text_summary(stats: &[HopStats]) -> String {
    let mut lines = Vec::with_capacity(stats.len() + 2);

    lines.push(format!(
        "{:>3}  {:<40} {:>6} {:>5} {:>9} {:>9} {:>9}",
        "#", "Host", "Loss%", "Sent", "Min", "Avg", "Max"
    ));
    lines.push("-".repeat(87));

    for hop in stats {
        let host = match hop.addresses.as_slice() {
            [] => "???".to_string(),
            [only] => only.clone(),
            [first, rest @ ..] => format!("{} (+{})", first, rest.len()),
        };
        lines.push(format!(
            "{:>3}  {:<40} {:>5.1}% {:>5} {:>9} {:>9} {:>9}",
            hop.index,
            host,
            hop.loss_percentage,
            hop.sent,
            format_rtt(hop.min_rtt_ms),
            format_rtt(hop.avg_rtt_ms),
            format_rtt(hop.max_rtt_ms),
        ));
    }

    lines.join("\n")
}

fn format_rtt(rtt: Option<f64>) -> String {
    match rtt {
        Some(ms) => format!("{:.3}ms", ms),
        None => "-".to_string(),
    }
}
