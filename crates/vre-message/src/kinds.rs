//! Wire-level message type tags.

use std::fmt;
use std::str::FromStr;

/// The closed set of message kinds exchanged between jurisdictions and the
/// central coder. The URI form is the wire type tag; it is immutable for
/// the lifetime of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Fallback placeholder for an envelope whose wire tag is not in the
    /// known set. Never produced by [`MessageKind::from_uri`]; assigned
    /// only when reconstructing an envelope for an unknown-kind error.
    Generic,
    Submission,
    Update,
    Void,
    Alias,
    Acknowledgement,
    ExtractionError,
    Status,
    CauseOfDeathCoding,
    CauseOfDeathCodingUpdate,
    DemographicsCoding,
    DemographicsCodingUpdate,
}

impl MessageKind {
    pub const ALL: [MessageKind; 11] = [
        MessageKind::Submission,
        MessageKind::Update,
        MessageKind::Void,
        MessageKind::Alias,
        MessageKind::Acknowledgement,
        MessageKind::ExtractionError,
        MessageKind::Status,
        MessageKind::CauseOfDeathCoding,
        MessageKind::CauseOfDeathCodingUpdate,
        MessageKind::DemographicsCoding,
        MessageKind::DemographicsCodingUpdate,
    ];

    /// The URI-shaped wire tag.
    pub fn as_uri(&self) -> &'static str {
        match self {
            MessageKind::Generic => "urn:vre:message:generic",
            MessageKind::Submission => "urn:vre:message:submission",
            MessageKind::Update => "urn:vre:message:update",
            MessageKind::Void => "urn:vre:message:void",
            MessageKind::Alias => "urn:vre:message:alias",
            MessageKind::Acknowledgement => "urn:vre:message:acknowledgement",
            MessageKind::ExtractionError => "urn:vre:message:extraction_error",
            MessageKind::Status => "urn:vre:message:status",
            MessageKind::CauseOfDeathCoding => "urn:vre:message:cause_of_death_coding",
            MessageKind::CauseOfDeathCodingUpdate => {
                "urn:vre:message:cause_of_death_coding_update"
            }
            MessageKind::DemographicsCoding => "urn:vre:message:demographics_coding",
            MessageKind::DemographicsCodingUpdate => {
                "urn:vre:message:demographics_coding_update"
            }
        }
    }

    /// Whether the kind carries an embedded death record as payload.
    /// Control and coding messages travel on parameters alone.
    pub fn expects_record(&self) -> bool {
        matches!(self, MessageKind::Submission | MessageKind::Update)
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_uri() == uri)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_uri())
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_uri(s).ok_or_else(|| format!("unknown message kind: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uris_round_trip() {
        for kind in MessageKind::ALL {
            assert_eq!(MessageKind::from_uri(kind.as_uri()), Some(kind));
        }
    }

    #[test]
    fn unknown_uri_is_rejected() {
        assert!(MessageKind::from_uri("urn:vre:message:bogus").is_none());
    }
}
