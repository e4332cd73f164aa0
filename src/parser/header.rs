//! Destination banner extraction.
//!
//! The banner is the first line of the form
//! `traceroute to <host> (<address>), 30 hops max, ...`.
//! Our own rendering (`Traceroute for <host> (<address>)`) matches as well.

use super::lexer::Token;
use crate::utils::config::{HEADER_CONNECTORS, HEADER_PREFIXES};
use crate::utils::error::ParseError;

/// Destination named by the banner line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    pub address: String,
}

/// Locate and parse the banner line
///
/// # Errors
/// * `ParseError::MissingHeader` - no line matches the banner pattern
pub fn extract_header(text: &str) -> Result<Destination, ParseError> {
    text.lines()
        .find_map(parse_banner_line)
        .ok_or(ParseError::MissingHeader)
}

fn parse_banner_line(line: &str) -> Option<Destination> {
    let mut words = line.split_whitespace();

    let prefix = words.next()?;
    if !HEADER_PREFIXES
        .iter()
        .any(|p| prefix.eq_ignore_ascii_case(p))
    {
        return None;
    }

    let connector = words.next()?;
    if !HEADER_CONNECTORS.contains(&connector) {
        return None;
    }

    let name = words.next()?;
    // The address is usually followed by ", 30 hops max"
    let address_word = words.next()?;
    let address = Token::new(address_word.trim_end_matches(',')).address()?;

    Some(Destination {
        name: name.to_string(),
        address: address.to_string(),
    })
}
