//! Traceroute text parsing and tree definitions.
//!
//! This module handles:
//! - Locating the destination banner
//! - Splitting the capture into hop blocks
//! - Tokenizing each hop into probes with identity carry-forward

pub mod header;
pub mod hop;
pub mod lexer;
pub mod schema;

// Re-export main types
pub use header::{extract_header, Destination};
pub use hop::{parse_hop, split_hop_blocks, HopBlock};
pub use lexer::{classify, tokenize, Token, TokenKind};
pub use schema::{Hop, Probe, Traceroute};

use crate::utils::error::ParseError;
use log::debug;
use std::io::Read;
use std::str::FromStr;

/// Parse a complete traceroute capture
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `text` - Full standard output of a traceroute run
///
/// # Returns
/// The traceroute tree with hops in input order
///
/// # Errors
/// * `ParseError::MissingHeader` - no destination banner
/// * `ParseError::UnexpectedToken` / `ParseError::MalformedNumber` - a hop
///   does not match the probe grammar
/// * `ParseError::InvalidHopIndex` / `ParseError::EmptyHop` - malformed hop line
pub fn parse_traceroute(text: &str) -> Result<Traceroute, ParseError> {
    let destination = extract_header(text)?;
    debug!(
        "Parsing traceroute for {} ({})",
        destination.name, destination.address
    );

    let mut traceroute = Traceroute::new(destination.name, destination.address);
    for block in split_hop_blocks(text)? {
        traceroute.add_hop(parse_hop(&block)?);
    }

    debug!(
        "Parsed {} hops, {} probes",
        traceroute.hops.len(),
        traceroute.probe_count()
    );
    Ok(traceroute)
}

/// Read a whole stream and parse it
///
/// **Public** - convenience for files and stdin
///
/// # Errors
/// * `ParseError::Io` - the stream could not be read as UTF-8 text
/// * anything `parse_traceroute` returns
pub fn read_traceroute<R: Read>(mut reader: R) -> Result<Traceroute, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_traceroute(&text)
}

impl FromStr for Traceroute {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_traceroute(s)
    }
}
