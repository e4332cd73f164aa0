//! Hop segmentation and probe assembly.
//!
//! A hop block starts on a line whose first word is the hop index and runs
//! until the next such line. Inside a block the words are consumed left to
//! right, one probe per step:
//!
//! ```text
//! probe    := identity rtt [annotation]
//!           | rtt [annotation]
//!           | "*" [annotation]
//! identity := [asn-marker] name "(" address ")"
//! ```

use super::lexer::{is_ip_literal, tokenize, Token, TokenKind};
use super::schema::{Hop, Probe};
use crate::utils::error::ParseError;
use log::debug;

const END_OF_HOP: &str = "<end of hop>";

/// Tokens belonging to a single hop, index already stripped
#[derive(Debug, Clone, PartialEq)]
pub struct HopBlock<'src> {
    pub index: u32,
    pub tokens: Vec<Token<'src>>,
}

/// Input lines followed by a synthetic end-of-stream marker
enum Line<'src> {
    Text(&'src str),
    EndOfStream,
}

/// Split a capture into hop blocks
///
/// Lines before the first hop (the banner, warnings) are ignored. Lines that
/// do not start with an index continue the current block, which is how BSD
/// traceroute prints probes answered by different routers.
///
/// # Errors
/// * `ParseError::InvalidHopIndex` - index is zero or does not fit in `u32`
pub fn split_hop_blocks(text: &str) -> Result<Vec<HopBlock<'_>>, ParseError> {
    let lines = text
        .lines()
        .map(Line::Text)
        .chain(std::iter::once(Line::EndOfStream));

    let mut blocks = Vec::new();
    let mut current: Option<HopBlock> = None;

    for (line_no, line) in lines.enumerate() {
        let line = match line {
            Line::Text(line) => line,
            Line::EndOfStream => {
                blocks.extend(current.take());
                break;
            }
        };

        let mut tokens = tokenize(line).peekable();
        match tokens.peek().copied() {
            Some(first) if first.kind == TokenKind::Integer => {
                tokens.next();
                let block = HopBlock {
                    index: parse_hop_index(first.text, line_no + 1)?,
                    tokens: tokens.collect(),
                };
                blocks.extend(current.replace(block));
            }
            _ => {
                if let Some(block) = current.as_mut() {
                    block.tokens.extend(tokens);
                }
            }
        }
    }

    Ok(blocks)
}

fn parse_hop_index(text: &str, line: usize) -> Result<u32, ParseError> {
    match text.parse::<u32>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::InvalidHopIndex {
            line,
            token: text.to_string(),
        }),
    }
}

/// Assemble a hop from its block
///
/// # Errors
/// * `ParseError::UnexpectedToken` - a word fits no probe production
/// * `ParseError::MalformedNumber` - an RTT or ASN slot holds a bad number
/// * `ParseError::EmptyHop` - the block has no probe words at all
pub fn parse_hop(block: &HopBlock<'_>) -> Result<Hop, ParseError> {
    let tokens: Vec<Token> = block
        .tokens
        .iter()
        .copied()
        .filter(|t| t.kind != TokenKind::Unit)
        .collect();

    if tokens.is_empty() {
        return Err(ParseError::EmptyHop { hop: block.index });
    }

    let mut cursor = ProbeCursor {
        hop: block.index,
        tokens: &tokens,
        pos: 0,
    };
    let mut hop = Hop::new(block.index);

    while !cursor.is_at_end() {
        let mut probe = cursor.next_probe()?;
        if let Some(annotation) = cursor.take_annotation() {
            probe.annotation = annotation.to_string();
        }
        hop.add_probe(probe);
    }

    debug!("Parsed hop {} with {} probes", hop.index, hop.probes.len());
    Ok(hop)
}

struct ProbeCursor<'a, 'src> {
    hop: u32,
    tokens: &'a [Token<'src>],
    pos: usize,
}

impl<'a, 'src> ProbeCursor<'a, 'src> {
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Result<Token<'src>, ParseError> {
        let token = self.peek().ok_or_else(|| self.unexpected_end())?;
        self.pos += 1;
        Ok(token)
    }

    // ASN marker, then RTT, then name, then timeout.
    fn next_probe(&mut self) -> Result<Probe, ParseError> {
        let token = self.bump()?;
        match token.kind {
            TokenKind::AsnMarker => {
                let asn = self.parse_asn(token)?;
                let name = self.bump()?;
                if name.kind != TokenKind::Name {
                    return Err(self.unexpected_at(self.pos - 1));
                }
                self.identity_group(name, asn)
            }
            kind if kind.is_number() => Ok(Probe::with_rtt(self.parse_rtt(token)?)),
            TokenKind::Name => self.identity_group(token, None),
            TokenKind::Timeout => Ok(Probe::timeout()),
            _ => Err(self.unexpected_at(self.pos - 1)),
        }
    }

    fn identity_group(&mut self, name: Token<'src>, asn: Option<u32>) -> Result<Probe, ParseError> {
        let address = match self.peek() {
            Some(token) if token.kind == TokenKind::Address => {
                self.pos += 1;
                token.address().unwrap_or(token.text)
            }
            // `traceroute -n` prints the bare address only
            _ if is_ip_literal(name.text) => name.text,
            Some(_) => return Err(self.unexpected_at(self.pos)),
            None => return Err(self.unexpected_end()),
        };

        let rtt_token = self.bump()?;
        let rtt = self.parse_rtt(rtt_token)?;

        Ok(Probe::reply(name.text, address, rtt).with_asn(asn))
    }

    fn take_annotation(&mut self) -> Option<&'src str> {
        let token = self.peek().filter(|t| t.kind == TokenKind::Annotation)?;
        self.pos += 1;
        Some(token.text)
    }

    fn parse_rtt(&self, token: Token<'src>) -> Result<f64, ParseError> {
        if !token.kind.is_number() {
            return Err(self.malformed(token));
        }
        token.text.parse::<f64>().map_err(|_| self.malformed(token))
    }

    fn parse_asn(&self, token: Token<'src>) -> Result<Option<u32>, ParseError> {
        match token.asn_digits() {
            Some(digits) => digits
                .parse::<u32>()
                .map(Some)
                .map_err(|_| self.malformed(token)),
            None => Ok(None),
        }
    }

    fn malformed(&self, token: Token<'src>) -> ParseError {
        ParseError::MalformedNumber {
            hop: self.hop,
            position: self.pos.saturating_sub(1),
            token: token.text.to_string(),
        }
    }

    fn unexpected_at(&self, position: usize) -> ParseError {
        ParseError::UnexpectedToken {
            hop: self.hop,
            position,
            token: self.tokens[position].text.to_string(),
            remaining: self.tokens[position..]
                .iter()
                .map(|t| t.text.to_string())
                .collect(),
        }
    }

    fn unexpected_end(&self) -> ParseError {
        ParseError::UnexpectedToken {
            hop: self.hop,
            position: self.tokens.len(),
            token: END_OF_HOP.to_string(),
            remaining: Vec::new(),
        }
    }
}
