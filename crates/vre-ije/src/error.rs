//! Error types for fixed-width record operations.
//!
//! Per-field transform problems are deliberately not errors: the codec
//! degrades them to blank fills and keeps going, because legacy data is
//! known to be imperfect. Only structural problems surface here.

use thiserror::Error;

use crate::field::Dialect;

/// Errors that can occur when encoding, decoding, or validating a dialect.
#[derive(Debug, Error)]
pub enum IjeError {
    /// Input exceeds the dialect's fixed record length. Short input is
    /// padded, long input is refused.
    #[error("{dialect} record must be at most {expected} characters, got {actual}")]
    RecordTooLong {
        dialect: Dialect,
        expected: usize,
        actual: usize,
    },

    /// A declared field slot extends past the end of the record.
    #[error("field {key} at {position}+{length} extends past record length {record_len}")]
    FieldOutOfBounds {
        key: &'static str,
        position: usize,
        length: usize,
        record_len: usize,
    },

    /// A declared field slot starts before position 1 or has zero length.
    #[error("field {key} has an invalid slot ({position}, {length})")]
    InvalidSlot {
        key: &'static str,
        position: usize,
        length: usize,
    },

    /// Two fields share a key within one dialect.
    #[error("duplicate field key {key}")]
    DuplicateField { key: &'static str },
}

/// Result type alias for fixed-width operations.
pub type Result<T> = std::result::Result<T, IjeError>;
