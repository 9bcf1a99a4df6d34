//! Envelope wire payloads.
//!
//! An envelope travels as a sequence container holding exactly one header
//! entry and at most one record entry plus at most one parameter entry,
//! in either of two interchangeable syntaxes (JSON or XML). The syntax is
//! recognized from the first non-whitespace character; entries are found by
//! scanning for shape, not by fixed position.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vre_model::DeathRecord;

use crate::envelope::Envelope;
use crate::error::{MessageError, Result};
use crate::kinds::MessageKind;
use crate::params::ParameterBlock;
use crate::xml;

/// The two interchangeable wire syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    Xml,
}

/// Pick the syntax from the first non-whitespace character.
pub fn detect(text: &str) -> Option<Syntax> {
    match text.trim_start().chars().next()? {
        '{' => Some(Syntax::Json),
        '<' => Some(Syntax::Xml),
        _ => None,
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WireDocument {
    pub(crate) entries: Vec<WireEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum WireEntry {
    Header(WireHeader),
    Parameters(ParameterBlock),
    Record(DeathRecord),
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WireHeader {
    pub(crate) id: String,
    pub(crate) kind: String,
    pub(crate) timestamp: String,
    pub(crate) source: String,
    #[serde(default)]
    pub(crate) destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) response_to: Option<String>,
}

/// Serialize an envelope in the requested syntax.
pub fn encode(envelope: &Envelope, syntax: Syntax) -> Result<String> {
    let document = to_document(envelope);
    match syntax {
        Syntax::Json => serde_json::to_string_pretty(&document)
            .map_err(|err| MessageError::format(format!("json serialization: {err}"))),
        Syntax::Xml => xml::to_string(&document),
    }
}

/// Parse a wire payload back into an envelope.
///
/// Unrecognized syntax, a missing header, or a malformed header field are
/// format errors. A header carrying an unknown type tag yields
/// [`MessageError::UnknownKind`] with the reconstructed generic envelope
/// attached so callers can still build an error reply.
pub fn decode(text: &str) -> Result<Envelope> {
    let syntax = detect(text)
        .ok_or_else(|| MessageError::format("payload is neither JSON nor XML"))?;
    let document = match syntax {
        Syntax::Json => serde_json::from_str::<WireDocument>(text)
            .map_err(|err| MessageError::format(format!("json: {err}")))?,
        Syntax::Xml => xml::from_str(text)?,
    };
    from_document(document)
}

fn to_document(envelope: &Envelope) -> WireDocument {
    let mut entries = vec![WireEntry::Header(WireHeader {
        id: envelope.id.to_string(),
        kind: envelope.kind.as_uri().to_string(),
        timestamp: envelope.timestamp.to_rfc3339(),
        source: envelope.source.clone(),
        destinations: envelope.destinations.clone(),
        response_to: envelope.response_to.map(|id| id.to_string()),
    })];
    if !envelope.parameters.is_empty() {
        entries.push(WireEntry::Parameters(envelope.parameters.clone()));
    }
    if let Some(record) = &envelope.payload {
        entries.push(WireEntry::Record(record.clone()));
    }
    WireDocument { entries }
}

fn from_document(document: WireDocument) -> Result<Envelope> {
    let mut header = None;
    let mut parameters = None;
    let mut record = None;
    for entry in document.entries {
        match entry {
            WireEntry::Header(h) if header.is_none() => header = Some(h),
            WireEntry::Parameters(p) if parameters.is_none() => parameters = Some(p),
            WireEntry::Record(r) if record.is_none() => record = Some(r),
            _ => {}
        }
    }
    let header = header.ok_or_else(|| MessageError::format("no header entry in payload"))?;

    let id = Uuid::parse_str(&header.id)
        .map_err(|_| MessageError::format(format!("invalid message id: {}", header.id)))?;
    let timestamp = DateTime::parse_from_rfc3339(&header.timestamp)
        .map_err(|_| {
            MessageError::format(format!("invalid timestamp: {}", header.timestamp))
        })?
        .to_utc();
    let response_to = match &header.response_to {
        Some(raw) => Some(Uuid::parse_str(raw).map_err(|_| {
            MessageError::format(format!("invalid response-to id: {raw}"))
        })?),
        None => None,
    };

    let kind = MessageKind::from_uri(&header.kind);
    let envelope = Envelope {
        id,
        kind: kind.unwrap_or(MessageKind::Generic),
        timestamp,
        source: header.source,
        destinations: header.destinations,
        response_to,
        parameters: parameters.unwrap_or_default(),
        payload: record,
    };
    if kind.is_none() {
        return Err(MessageError::UnknownKind {
            uri: header.kind,
            envelope: Box::new(envelope),
        });
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_detection() {
        assert_eq!(detect("  {\"entries\":[]}"), Some(Syntax::Json));
        assert_eq!(detect("\n<message/>"), Some(Syntax::Xml));
        assert_eq!(detect("DOD_YR2024"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn json_round_trip() {
        let mut envelope = Envelope::new(MessageKind::Submission, "https://example.org/vre/MA");
        envelope.set_destination("https://example.org/vre/coder");
        envelope.set_certificate_number("42").unwrap();
        let mut record = DeathRecord::new();
        record.set_scalar("sex", "F");
        envelope.set_record(record).unwrap();

        let text = encode(&envelope, Syntax::Json).unwrap();
        let parsed = decode(&text).unwrap();
        assert_eq!(parsed, envelope);
    }

    #[test]
    fn header_entry_is_found_by_shape_not_position() {
        let envelope = Envelope::new(MessageKind::Status, "src");
        let mut document = to_document(&envelope);
        document.entries.reverse();
        let text = serde_json::to_string(&document).unwrap();
        let parsed = decode(&text).unwrap();
        assert_eq!(parsed.id(), envelope.id());
    }

    #[test]
    fn missing_header_is_a_format_error() {
        let err = decode("{\"entries\":[]}").unwrap_err();
        assert!(matches!(err, MessageError::Format { .. }));
    }

    #[test]
    fn unknown_kind_keeps_the_envelope() {
        let envelope = Envelope::new(MessageKind::Status, "src");
        let mut document = to_document(&envelope);
        let WireEntry::Header(header) = &mut document.entries[0] else {
            panic!("first entry is the header");
        };
        header.kind = "urn:vre:message:bogus".to_string();
        let text = serde_json::to_string(&document).unwrap();

        let err = decode(&text).unwrap_err();
        match err {
            MessageError::UnknownKind { uri, envelope: kept } => {
                assert_eq!(uri, "urn:vre:message:bogus");
                assert_eq!(kept.id(), envelope.id());
                assert_eq!(kept.kind(), MessageKind::Generic);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
