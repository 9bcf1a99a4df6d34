//! Error types for the canonical record model.

use thiserror::Error;

/// Errors raised when a business identifier or coded entry is constructed
/// from an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierRangeError {
    /// Certificate numbers are at most six digits.
    #[error("certificate number {value} exceeds 6 digits")]
    CertificateNumber { value: u64 },

    /// Certificate number text that is not a number at all.
    #[error("certificate number is not numeric: '{value}'")]
    CertificateNumberText { value: String },

    /// Death year must be exactly four digits.
    #[error("death year must be exactly 4 digits, got '{value}'")]
    DeathYear { value: String },

    /// Jurisdiction ids are exactly two characters.
    #[error("jurisdiction id must be exactly 2 characters, got '{value}'")]
    JurisdictionId { value: String },

    /// State auxiliary ids must not be blank.
    #[error("state auxiliary id must not be blank")]
    BlankAuxiliaryId,

    /// Cause-of-death certificate lines run I.a through Part II (1-6).
    #[error("cause line number {line} out of range 1-6")]
    CauseLine { line: u8 },

    /// Positions within a cause line run 1-20.
    #[error("cause position {position} out of range 1-20")]
    CausePosition { position: u8 },

    /// Record-axis positions start at 1.
    #[error("record axis position must be at least 1")]
    RecordAxisPosition,
}

/// Result type alias for model construction.
pub type Result<T> = std::result::Result<T, IdentifierRangeError>;
