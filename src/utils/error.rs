//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing traceroute text
///
/// Every variant is fatal: a capture either parses completely or not at all.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No traceroute header line found")]
    MissingHeader,

    #[error(
        "Unexpected token '{token}' at position {position} in hop {hop} (remaining: {})",
        .remaining.join(" ")
    )]
    UnexpectedToken {
        hop: u32,
        position: usize,
        token: String,
        remaining: Vec<String>,
    },

    #[error("Malformed number '{token}' at position {position} in hop {hop}")]
    MalformedNumber {
        hop: u32,
        position: usize,
        token: String,
    },

    #[error("Invalid hop index '{token}' on line {line}")]
    InvalidHopIndex { line: usize, token: String },

    #[error("Hop {hop} has no probes")]
    EmptyHop { hop: u32 },

    #[error("Failed to read traceroute input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// True for token-level grammar failures.
    ///
    /// `MalformedNumber` counts as a kind of unexpected token.
    pub fn is_unexpected_token(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedToken { .. } | ParseError::MalformedNumber { .. }
        )
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
