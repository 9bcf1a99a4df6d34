//! Error types for the envelope layer.
//!
//! Unlike the fixed-width codec, this layer fails hard: a payload that
//! cannot be parsed or dispatched is an error, not a degraded record. Kind
//! and content errors keep the generic envelope so a caller can still build
//! an extraction-error reply from its addressing and identifiers.

use thiserror::Error;

use vre_model::IdentifierRangeError;

use crate::envelope::Envelope;

#[derive(Debug, Error)]
pub enum MessageError {
    /// The payload is neither recognized wire syntax, or a recognized
    /// syntax fails to parse. No dispatch was attempted.
    #[error("malformed message payload: {reason}")]
    Format { reason: String },

    /// The header carries a type tag outside the known set.
    #[error("unknown message kind {uri}")]
    UnknownKind { uri: String, envelope: Box<Envelope> },

    /// A known kind is missing the embedded content it requires.
    #[error("{kind} message is missing required {expected}")]
    MissingContent {
        kind: &'static str,
        expected: &'static str,
        envelope: Box<Envelope>,
    },

    /// A business identifier failed its format constraint.
    #[error(transparent)]
    Identifier(#[from] IdentifierRangeError),
}

impl MessageError {
    pub fn format(reason: impl Into<String>) -> Self {
        MessageError::Format {
            reason: reason.into(),
        }
    }

    /// The partially-parsed envelope, when the failure retained one.
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            MessageError::UnknownKind { envelope, .. }
            | MessageError::MissingContent { envelope, .. } => Some(envelope),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MessageError>;
