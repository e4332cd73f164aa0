//! Traceroute tree definitions.
//!
//! A parse produces one `Traceroute` root owning its hops, each hop owning
//! its probes. The tree is only appended to while it is being built.

use serde::{Deserialize, Serialize};

/// Root of a parsed traceroute capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traceroute {
    /// Destination host as printed in the banner
    pub destination_name: String,

    /// Destination IPv4 or IPv6 literal
    pub destination_address: String,

    /// Hops in the order they appear in the input
    pub hops: Vec<Hop>,
}

impl Traceroute {
    /// Create an empty traceroute for a destination
    pub fn new(destination_name: impl Into<String>, destination_address: impl Into<String>) -> Self {
        Self {
            destination_name: destination_name.into(),
            destination_address: destination_address.into(),
            hops: Vec::new(),
        }
    }

    /// Append a hop, preserving encounter order
    pub fn add_hop(&mut self, hop: Hop) {
        self.hops.push(hop);
    }

    /// Look up a hop by its declared index
    pub fn hop(&self, index: u32) -> Option<&Hop> {
        self.hops.iter().find(|hop| hop.index == index)
    }

    /// Total number of probes across all hops
    pub fn probe_count(&self) -> usize {
        self.hops.iter().map(|hop| hop.probes.len()).sum()
    }
}

/// One router-distance step of the path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    /// Hop number as declared in the input (1-based, never renumbered)
    pub index: u32,

    /// Probe measurements in input order
    pub probes: Vec<Probe>,
}

impl Hop {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            probes: Vec::new(),
        }
    }

    /// Append a probe, filling in omitted identity from the previous probe
    ///
    /// traceroute prints a responder's name and address only when it differs
    /// from the previous probe of the same hop. A probe without an address
    /// therefore inherits name, address and ASN from its predecessor.
    pub fn add_probe(&mut self, mut probe: Probe) {
        if probe.address.is_none() {
            if let Some(last) = self.probes.last() {
                probe.autonomous_system_number = last.autonomous_system_number;
                probe.host_name = last.host_name.clone();
                probe.address = last.address.clone();
            }
        }
        self.probes.push(probe);
    }

    /// Number of probes that received a reply
    pub fn responses(&self) -> usize {
        self.probes.iter().filter(|p| !p.is_timeout()).count()
    }
}

/// A single probe measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Probe {
    /// Autonomous system of the responder (`traceroute -A`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonomous_system_number: Option<u32>,

    /// Responder host name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    /// Responder IPv4 or IPv6 literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Round-trip time in milliseconds; absent for a timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_trip_time_ms: Option<f64>,

    /// Diagnostic code such as `!H`, `!N` or `!X` (empty when none)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub annotation: String,
}

impl Probe {
    /// A probe that got no reply
    pub fn timeout() -> Self {
        Self::default()
    }

    /// A reply whose identity is carried forward from an earlier probe
    pub fn with_rtt(round_trip_time_ms: f64) -> Self {
        Self {
            round_trip_time_ms: Some(round_trip_time_ms),
            ..Self::default()
        }
    }

    /// A reply with an explicit responder identity
    pub fn reply(
        host_name: impl Into<String>,
        address: impl Into<String>,
        round_trip_time_ms: f64,
    ) -> Self {
        Self {
            host_name: Some(host_name.into()),
            address: Some(address.into()),
            round_trip_time_ms: Some(round_trip_time_ms),
            ..Self::default()
        }
    }

    pub fn with_asn(mut self, asn: Option<u32>) -> Self {
        self.autonomous_system_number = asn;
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    pub fn is_timeout(&self) -> bool {
        self.round_trip_time_ms.is_none()
    }
}
