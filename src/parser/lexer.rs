//! Word-level lexer for traceroute hop text.
//!
//! Traceroute output is whitespace delimited, so every word becomes exactly
//! one token. `classify` decides the kind; the checks run in a fixed order
//! because several shapes overlap (a bare `10` is both a number and a
//! plausible host name).

use std::net::IpAddr;

/// Token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `*`, a probe that got no reply.
    Timeout,
    /// The `ms` unit after a round-trip time.
    Unit,
    /// `[AS<digits>]`, or `[*]` for an unknown AS.
    AsnMarker,
    /// `!H`, `!N`, `!X`, `!<num>` and friends.
    Annotation,
    /// Parenthesized IPv4/IPv6 literal.
    Address,
    /// Unsigned decimal integer.
    Integer,
    /// Decimal number with a fractional part.
    Float,
    /// Host name or bare IP literal.
    Name,
    /// Anything else.
    Other,
}

impl TokenKind {
    /// True for tokens that can hold a round-trip time.
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float)
    }
}

/// Token with kind and source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            kind: classify(text),
            text,
        }
    }

    /// Address literal without its parentheses.
    pub fn address(&self) -> Option<&'src str> {
        match self.kind {
            TokenKind::Address => self.text.strip_prefix('(')?.strip_suffix(')'),
            _ => None,
        }
    }

    /// Digits inside an `[AS<digits>]` marker; `None` for `[*]`.
    pub fn asn_digits(&self) -> Option<&'src str> {
        match self.kind {
            TokenKind::AsnMarker => self.text.strip_prefix("[AS")?.strip_suffix(']'),
            _ => None,
        }
    }
}

/// Split text into tokens, one per whitespace-delimited word.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.split_whitespace().map(Token::new)
}

/// Classify a single word.
pub fn classify(word: &str) -> TokenKind {
    if word == "*" {
        TokenKind::Timeout
    } else if word.eq_ignore_ascii_case(crate::utils::config::RTT_UNIT) {
        TokenKind::Unit
    } else if is_asn_marker(word) {
        TokenKind::AsnMarker
    } else if is_annotation(word) {
        TokenKind::Annotation
    } else if is_address(word) {
        TokenKind::Address
    } else if is_digits(word) {
        TokenKind::Integer
    } else if is_float(word) {
        TokenKind::Float
    } else if is_ip_literal(word) || is_host_name(word) {
        TokenKind::Name
    } else {
        TokenKind::Other
    }
}

/// IPv4 or IPv6 literal, allowing an IPv6 `%zone` suffix.
pub fn is_ip_literal(word: &str) -> bool {
    let addr = match word.split_once('%') {
        Some((addr, zone)) if !zone.is_empty() && addr.contains(':') => addr,
        Some(_) => return false,
        None => word,
    };
    addr.parse::<IpAddr>().is_ok()
}

fn is_digits(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(word: &str) -> bool {
    matches!(word.split_once('.'), Some((int, frac)) if is_digits(int) && is_digits(frac))
}

fn is_asn_marker(word: &str) -> bool {
    if word == "[*]" {
        return true;
    }
    word.strip_prefix("[AS")
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(is_digits)
}

fn is_annotation(word: &str) -> bool {
    word.strip_prefix('!')
        .is_some_and(|rest| rest.chars().all(|c| c.is_alphanumeric() || c == '_'))
}

fn is_address(word: &str) -> bool {
    word.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(is_ip_literal)
}

fn is_host_name(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        }
        _ => false,
    }
}
