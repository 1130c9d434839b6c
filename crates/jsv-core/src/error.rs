//! # Error Types — Document Loading Failures
//!
//! Errors raised while turning raw JSON text into a value tree and its
//! source map. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - Every error carries the 1-based line and column where scanning stopped,
//!   so front ends can point the user at the offending character.
//! - These are load errors, not validation outcomes. A document that fails
//!   to load is never handed to the validation engine.

use thiserror::Error;

/// Error raised by the source-map scanner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceMapError {
    /// A character that cannot start or continue the current construct.
    #[error("unexpected character '{found}' at line {line}, column {column}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },

    /// Input ended inside a value.
    #[error("unexpected end of input at line {line}, column {column}")]
    UnexpectedEof {
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },

    /// An object key could not be decoded as a JSON string.
    #[error("invalid object key at line {line}, column {column}: {reason}")]
    InvalidKey {
        /// 1-based line of the key token.
        line: u32,
        /// 1-based column of the key token.
        column: u32,
        /// Decoder message.
        reason: String,
    },

    /// Non-whitespace content after the root value.
    #[error("trailing characters after document at line {line}, column {column}")]
    TrailingCharacters {
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },
}

impl SourceMapError {
    /// Line at which scanning stopped.
    pub fn line(&self) -> u32 {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnexpectedEof { line, .. }
            | Self::InvalidKey { line, .. }
            | Self::TrailingCharacters { line, .. } => *line,
        }
    }
}

/// Error loading a JSON document from text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The text is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Parse {
        /// Parser message without position suffix.
        message: String,
        /// 1-based line reported by the parser.
        line: u32,
        /// 1-based column reported by the parser.
        column: u32,
    },

    /// The value parsed but its source map could not be built.
    #[error("source map error: {0}")]
    SourceMap(#[from] SourceMapError),
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends " at line X column Y" to Display; keep the bare message.
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        Self::Parse {
            message,
            line: u32::try_from(err.line()).unwrap_or(u32::MAX),
            column: u32::try_from(err.column()).unwrap_or(u32::MAX),
        }
    }
}
