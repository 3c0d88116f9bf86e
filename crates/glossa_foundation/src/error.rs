//! Error types for the Glossa pipeline.
//!
//! Uses `thiserror` for ergonomic error definition. Only genuinely fatal
//! conditions live here: unscannable input and invalid configuration.
//! Per-grammar-rule "no match" signals are not errors; they are absorbed
//! locally by the next rule up and never reach a caller.

use thiserror::Error;

/// Result type alias using the Glossa error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Glossa operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unscannable-character error with its exact position.
    #[must_use]
    pub fn unscannable(character: char, line: u32, column: u32, offset: usize) -> Self {
        Self::new(ErrorKind::UnscannableCharacter {
            character,
            line,
            column,
            offset,
        })
    }

    /// Creates an error for an unrecognized tagging mode string.
    #[must_use]
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownMode(mode.into()))
    }

    /// Creates an error for a tagging mode with no model available.
    #[must_use]
    pub fn model_unavailable(mode: impl Into<String>) -> Self {
        Self::new(ErrorKind::ModelUnavailable { mode: mode.into() })
    }

    /// Creates an error for a malformed statistical model blob.
    #[must_use]
    pub fn model_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ModelFormat(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The tokenizer hit a character no rule can scan.
    ///
    /// Fatal for the document; reported with the exact failure position.
    #[error("unscannable character {character:?} at {line}:{column} (byte {offset})")]
    UnscannableCharacter {
        /// The offending character.
        character: char,
        /// Line number (1-based).
        line: u32,
        /// Column number (1-based).
        column: u32,
        /// Byte offset into the source.
        offset: usize,
    },

    /// A tagging mode string was not recognized.
    #[error("unknown tagging mode '{0}'")]
    UnknownMode(String),

    /// A tagging mode was requested without the model it needs.
    #[error("no model available for tagging mode '{mode}'")]
    ModelUnavailable {
        /// The requested mode.
        mode: String,
    },

    /// A statistical model blob could not be decoded.
    #[error("malformed model: {0}")]
    ModelFormat(String),

    /// A statistical model was trained on no data.
    #[error("model trained on empty corpus")]
    EmptyModel,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
