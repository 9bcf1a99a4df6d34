//! The addressed message envelope.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use vre_model::{
    CertificateNumber, DatePart, DeathRecord, DeathYear, JurisdictionId, StateAuxiliaryId,
};

use crate::error::Result;
use crate::kinds::MessageKind;
use crate::params::ParameterBlock;

/// Parameter names for the business identifiers carried alongside a record.
pub const CERTIFICATE_NUMBER: &str = "certificate_number";
pub const JURISDICTION_ID: &str = "jurisdiction_id";
pub const DEATH_YEAR: &str = "death_year";
pub const STATE_AUXILIARY_ID: &str = "state_auxiliary_id";

const BUSINESS_IDENTIFIERS: [&str; 4] = [
    CERTIFICATE_NUMBER,
    JURISDICTION_ID,
    DEATH_YEAR,
    STATE_AUXILIARY_ID,
];

/// One exchanged unit: a unique id, an immutable type tag, addressing, a
/// side-channel parameter block, and an optional embedded record.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub(crate) id: Uuid,
    pub(crate) kind: MessageKind,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) source: String,
    pub(crate) destinations: Vec<String>,
    pub(crate) response_to: Option<Uuid>,
    pub(crate) parameters: ParameterBlock,
    pub(crate) payload: Option<DeathRecord>,
}

impl Envelope {
    /// Build a fresh outbound envelope with a generated id and the current
    /// time.
    pub fn new(kind: MessageKind, source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            timestamp: Utc::now(),
            source: source.into(),
            destinations: Vec::new(),
            response_to: None,
            parameters: ParameterBlock::new(),
            payload: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The type tag. Fixed at construction.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn set_destinations(&mut self, destinations: Vec<String>) {
        self.destinations = destinations;
    }

    /// The destination list as one comma-joined string.
    pub fn destination(&self) -> String {
        self.destinations.join(",")
    }

    /// Set the destination list from a comma-joined string. Consistent with
    /// [`Envelope::destinations`]: splitting what `destination()` returned
    /// reproduces the list.
    pub fn set_destination(&mut self, joined: &str) {
        self.destinations = joined
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn response_to(&self) -> Option<Uuid> {
        self.response_to
    }

    pub fn set_response_to(&mut self, id: Uuid) {
        self.response_to = Some(id);
    }

    pub fn parameters(&self) -> &ParameterBlock {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterBlock {
        &mut self.parameters
    }

    pub fn record(&self) -> Option<&DeathRecord> {
        self.payload.as_ref()
    }

    /// Attach a record payload, extracting its business identifiers into
    /// the parameter block. Identifiers failing their format constraints
    /// are refused before the envelope ever carries them.
    pub fn set_record(&mut self, record: DeathRecord) -> Result<()> {
        if let Some(value) = record.scalar("certificate_number") {
            let number: CertificateNumber = value.parse()?;
            self.parameters
                .set_scalar(CERTIFICATE_NUMBER, number.to_padded());
        }
        if let Some(value) = record.scalar("jurisdiction_id") {
            let id: JurisdictionId = value.parse()?;
            self.parameters.set_scalar(JURISDICTION_ID, id.to_string());
        }
        if let Some(value) = record.date_part("death_date", DatePart::Year) {
            if value != "0000" {
                let year: DeathYear = value.parse()?;
                self.parameters.set_scalar(DEATH_YEAR, year.to_string());
            }
        }
        if let Some(value) = record.scalar("state_auxiliary_id") {
            let id: StateAuxiliaryId = value.parse()?;
            self.parameters
                .set_scalar(STATE_AUXILIARY_ID, id.to_string());
        }
        self.payload = Some(record);
        Ok(())
    }

    pub fn certificate_number(&self) -> Option<&str> {
        self.parameters.scalar(CERTIFICATE_NUMBER)
    }

    pub fn set_certificate_number(&mut self, value: &str) -> Result<()> {
        let number: CertificateNumber = value.parse()?;
        self.parameters
            .set_scalar(CERTIFICATE_NUMBER, number.to_padded());
        Ok(())
    }

    pub fn jurisdiction_id(&self) -> Option<&str> {
        self.parameters.scalar(JURISDICTION_ID)
    }

    pub fn set_jurisdiction_id(&mut self, value: &str) -> Result<()> {
        let id: JurisdictionId = value.parse()?;
        self.parameters.set_scalar(JURISDICTION_ID, id.to_string());
        Ok(())
    }

    pub fn death_year(&self) -> Option<&str> {
        self.parameters.scalar(DEATH_YEAR)
    }

    pub fn set_death_year(&mut self, value: &str) -> Result<()> {
        let year: DeathYear = value.parse()?;
        self.parameters.set_scalar(DEATH_YEAR, year.to_string());
        Ok(())
    }

    pub fn state_auxiliary_id(&self) -> Option<&str> {
        self.parameters.scalar(STATE_AUXILIARY_ID)
    }

    pub fn set_state_auxiliary_id(&mut self, value: &str) -> Result<()> {
        let id: StateAuxiliaryId = value.parse()?;
        self.parameters
            .set_scalar(STATE_AUXILIARY_ID, id.to_string());
        Ok(())
    }

    /// Build a reply envelope of the given kind: fresh id and timestamp,
    /// source and destination reversed, business identifiers copied,
    /// response-to pointing at this envelope.
    pub fn reply(&self, kind: MessageKind) -> Envelope {
        // A multi-destination original was received at one endpoint; the
        // reply originates from the first listed, never a joined compound.
        let source = self.destinations.first().cloned().unwrap_or_default();
        let mut reply = Envelope::new(kind, source);
        reply.destinations = vec![self.source.clone()];
        reply.response_to = Some(self.id);
        for name in BUSINESS_IDENTIFIERS {
            if let Some(value) = self.parameters.scalar(name) {
                reply.parameters.set_scalar(name, value.to_string());
            }
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> Envelope {
        Envelope::new(MessageKind::Submission, "https://example.org/vre/MA")
    }

    #[test]
    fn certificate_number_bounds() {
        let mut env = envelope();
        assert!(env.set_certificate_number("1000000").is_err());
        env.set_certificate_number("999999").unwrap();
        assert_eq!(env.certificate_number(), Some("999999"));
        env.set_certificate_number("42").unwrap();
        assert_eq!(env.certificate_number(), Some("000042"));
    }

    #[test]
    fn joined_destination_accessor_is_consistent() {
        let mut env = envelope();
        env.set_destination("a, b,c");
        assert_eq!(env.destinations(), ["a", "b", "c"]);
        assert_eq!(env.destination(), "a,b,c");
    }

    #[test]
    fn record_attachment_extracts_identifiers() {
        let mut record = DeathRecord::new();
        record.set_scalar("certificate_number", "42");
        record.set_scalar("jurisdiction_id", "MA");
        record.set_scalar("death_date", "2024-03-15");
        record.set_scalar("state_auxiliary_id", "AUX-1");

        let mut env = envelope();
        env.set_record(record).unwrap();
        assert_eq!(env.certificate_number(), Some("000042"));
        assert_eq!(env.jurisdiction_id(), Some("MA"));
        assert_eq!(env.death_year(), Some("2024"));
        assert_eq!(env.state_auxiliary_id(), Some("AUX-1"));
        assert!(env.record().is_some());
    }

    #[test]
    fn reply_reverses_addressing_and_copies_identifiers() {
        let mut env = envelope();
        env.set_destination("https://example.org/vre/coder");
        env.set_certificate_number("7").unwrap();
        env.set_jurisdiction_id("MA").unwrap();

        let reply = env.reply(MessageKind::Acknowledgement);
        assert_eq!(reply.source(), "https://example.org/vre/coder");
        assert_eq!(reply.destinations(), [env.source().to_string()]);
        assert_eq!(reply.response_to(), Some(env.id()));
        assert_eq!(reply.certificate_number(), Some("000007"));
        assert_eq!(reply.jurisdiction_id(), Some("MA"));
        assert_ne!(reply.id(), env.id());
    }

    #[test]
    fn reply_to_a_multi_destination_message_picks_one_source() {
        let mut env = envelope();
        env.set_destination("https://example.org/vre/coder, https://example.org/vre/audit");

        let reply = env.reply(MessageKind::Acknowledgement);
        assert_eq!(reply.source(), "https://example.org/vre/coder");
        assert_eq!(reply.destinations(), [env.source().to_string()]);
    }
}
