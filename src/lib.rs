//! trparse
//!
//! Parses the text output of `traceroute` into a tree: a root carrying the
//! destination, an ordered list of hops, and within each hop the ordered
//! probe measurements. The tree renders back to a canonical text form that
//! parses into an equal tree.
//!
//! ```
//! let text = "traceroute to example.com (93.184.216.34), 30 hops max, 60 byte packets\n \
//!             1  gw (192.168.1.1)  0.456 ms  0.401 ms *\n";
//!
//! let tr = trparse::parse_traceroute(text).unwrap();
//! assert_eq!(tr.hops[0].probes.len(), 3);
//! assert_eq!(tr.hops[0].probes[1].host_name.as_deref(), Some("gw"));
//!
//! let again = trparse::parse_traceroute(&trparse::render_traceroute(&tr)).unwrap();
//! assert_eq!(again, tr);
//! ```
//!
//! The `trparse` binary wraps this crate:
//!
//! ```bash
//! trparse dump capture.txt --summary
//! trparse export capture.txt -o report.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use output::render_traceroute;
pub use parser::{parse_traceroute, read_traceroute, Hop, Probe, Traceroute};
pub use utils::error::ParseError;
