//! Typed messages over the generic envelope.
//!
//! Each wire kind gets a thin typed view enforcing its content contract
//! (submissions must embed a record, coding responses carry axis groups,
//! and so on). [`Message::parse`] is the single dispatch point from wire
//! payload to typed instance.

use vre_model::{CodedValue, DeathRecord, EntityAxisEntry, RecordAxisEntry};

use crate::envelope::Envelope;
use crate::error::{MessageError, Result};
use crate::kinds::MessageKind;
use crate::params::ParameterBlock;
use crate::wire::{self, Syntax};

/// Problem report carried by an extraction-error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub code: String,
    pub description: String,
}

impl Issue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Fatal => "fatal",
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
            IssueSeverity::Information => "information",
        }
    }

    fn parse(text: &str) -> Result<Self> {
        match text {
            "fatal" => Ok(IssueSeverity::Fatal),
            "error" => Ok(IssueSeverity::Error),
            "warning" => Ok(IssueSeverity::Warning),
            "information" => Ok(IssueSeverity::Information),
            other => Err(MessageError::format(format!(
                "unknown issue severity: {other}"
            ))),
        }
    }
}

macro_rules! envelope_view {
    ($name:ident) => {
        impl $name {
            pub fn envelope(&self) -> &Envelope {
                &self.envelope
            }

            pub fn envelope_mut(&mut self) -> &mut Envelope {
                &mut self.envelope
            }

            pub fn into_envelope(self) -> Envelope {
                self.envelope
            }

            pub fn to_json(&self) -> Result<String> {
                wire::encode(&self.envelope, Syntax::Json)
            }

            pub fn to_xml(&self) -> Result<String> {
                wire::encode(&self.envelope, Syntax::Xml)
            }
        }
    };
}

fn require_record(envelope: &Envelope) -> Result<()> {
    if envelope.record().is_none() {
        return Err(MessageError::MissingContent {
            kind: envelope.kind().as_uri(),
            expected: "embedded death record",
            envelope: Box::new(envelope.clone()),
        });
    }
    Ok(())
}

/// A jurisdiction's initial submission of one certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    envelope: Envelope,
}

envelope_view!(Submission);

impl Submission {
    pub fn new(record: DeathRecord, source: impl Into<String>) -> Result<Self> {
        let mut envelope = Envelope::new(MessageKind::Submission, source);
        envelope.set_record(record)?;
        Ok(Self { envelope })
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        require_record(&envelope)?;
        Ok(Self { envelope })
    }

    pub fn record(&self) -> &DeathRecord {
        self.envelope.record().unwrap_or_else(|| unreachable!())
    }
}

/// A replacement for a previously submitted certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    envelope: Envelope,
}

envelope_view!(Update);

impl Update {
    pub fn new(record: DeathRecord, source: impl Into<String>) -> Result<Self> {
        let mut envelope = Envelope::new(MessageKind::Update, source);
        envelope.set_record(record)?;
        Ok(Self { envelope })
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        require_record(&envelope)?;
        Ok(Self { envelope })
    }

    pub fn record(&self) -> &DeathRecord {
        self.envelope.record().unwrap_or_else(|| unreachable!())
    }
}

/// Voids one or more consecutively numbered certificates.
#[derive(Debug, Clone, PartialEq)]
pub struct Void {
    envelope: Envelope,
}

envelope_view!(Void);

impl Void {
    pub fn new(source: impl Into<String>) -> Self {
        let mut envelope = Envelope::new(MessageKind::Void, source);
        envelope.parameters_mut().set_unsigned("block_count", 1);
        Self { envelope }
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    /// Number of consecutive certificate numbers voided, starting at the
    /// envelope's certificate number. Absent means one.
    pub fn block_count(&self) -> u32 {
        self.envelope.parameters().unsigned("block_count").unwrap_or(1)
    }

    pub fn set_block_count(&mut self, count: u32) {
        self.envelope
            .parameters_mut()
            .set_unsigned("block_count", count);
    }
}

/// Reports an alternate decedent name for an already submitted certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    envelope: Envelope,
}

envelope_view!(Alias);

impl Alias {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::new(MessageKind::Alias, source),
        }
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    pub fn alias_given_name(&self) -> Option<&str> {
        self.envelope.parameters().scalar_in("alias", "given")
    }

    pub fn set_alias_given_name(&mut self, name: impl Into<String>) {
        self.envelope
            .parameters_mut()
            .set_scalar_in("alias", "given", name);
    }

    pub fn alias_family_name(&self) -> Option<&str> {
        self.envelope.parameters().scalar_in("alias", "family")
    }

    pub fn set_alias_family_name(&mut self, name: impl Into<String>) {
        self.envelope
            .parameters_mut()
            .set_scalar_in("alias", "family", name);
    }
}

/// Acknowledges receipt of a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledgement {
    envelope: Envelope,
}

envelope_view!(Acknowledgement);

impl Acknowledgement {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }
}

/// Reports that a received message could not be processed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionError {
    envelope: Envelope,
}

envelope_view!(ExtractionError);

impl ExtractionError {
    /// Build an extraction-error reply to any envelope, including the
    /// generic envelope recovered from a failed parse.
    pub fn replying_to(original: &Envelope, issues: &[Issue]) -> Self {
        let mut envelope = original.reply(MessageKind::ExtractionError);
        for issue in issues {
            let mut group = ParameterBlock::new();
            group.set_scalar("severity", issue.severity.as_str());
            group.set_scalar("code", issue.code.clone());
            group.set_scalar("description", issue.description.clone());
            envelope.parameters_mut().push_group("issue", group);
        }
        Self { envelope }
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    pub fn issues(&self) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        for group in self.envelope.parameters().groups("issue") {
            let severity = group
                .scalar("severity")
                .ok_or_else(|| MessageError::format("issue group is missing severity"))?;
            issues.push(Issue {
                severity: IssueSeverity::parse(severity)?,
                code: group.scalar("code").unwrap_or_default().to_string(),
                description: group.scalar("description").unwrap_or_default().to_string(),
            });
        }
        Ok(issues)
    }
}

/// Reports processing status of a previously received message.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    envelope: Envelope,
}

envelope_view!(Status);

impl Status {
    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    pub fn status(&self) -> Option<&str> {
        self.envelope.parameters().scalar("status")
    }
}

fn push_entity_axis(parameters: &mut ParameterBlock, entry: &EntityAxisEntry) {
    let mut group = ParameterBlock::new();
    group.set_unsigned("line", u32::from(entry.line()));
    group.set_unsigned("position", u32::from(entry.position()));
    group.set_scalar("code", entry.code.clone());
    group.set_scalar(
        "e_code_indicator",
        if entry.e_code_indicator { "Y" } else { "N" },
    );
    parameters.push_group("entity_axis", group);
}

fn entity_axis_entries(parameters: &ParameterBlock) -> Result<Vec<EntityAxisEntry>> {
    let mut entries = Vec::new();
    for group in parameters.groups("entity_axis") {
        let line = group
            .unsigned("line")
            .ok_or_else(|| MessageError::format("entity-axis group is missing line"))?;
        let position = group
            .unsigned("position")
            .ok_or_else(|| MessageError::format("entity-axis group is missing position"))?;
        let code = group
            .scalar("code")
            .ok_or_else(|| MessageError::format("entity-axis group is missing code"))?;
        let line = u8::try_from(line)
            .map_err(|_| MessageError::format(format!("entity-axis line out of range: {line}")))?;
        let position = u8::try_from(position).map_err(|_| {
            MessageError::format(format!("entity-axis position out of range: {position}"))
        })?;
        let e_code = group.scalar("e_code_indicator") == Some("Y");
        entries.push(EntityAxisEntry::new(line, position, code, e_code)?);
    }
    Ok(entries)
}

fn push_record_axis(parameters: &mut ParameterBlock, entry: &RecordAxisEntry) {
    let mut group = ParameterBlock::new();
    group.set_unsigned("position", u32::from(entry.position()));
    group.set_scalar("code", entry.code.clone());
    group.set_scalar("pregnancy", if entry.pregnancy { "Y" } else { "N" });
    parameters.push_group("record_axis", group);
}

fn record_axis_entries(parameters: &ParameterBlock) -> Result<Vec<RecordAxisEntry>> {
    let mut entries = Vec::new();
    for group in parameters.groups("record_axis") {
        let position = group
            .unsigned("position")
            .ok_or_else(|| MessageError::format("record-axis group is missing position"))?;
        let code = group
            .scalar("code")
            .ok_or_else(|| MessageError::format("record-axis group is missing code"))?;
        let position = u8::try_from(position).map_err(|_| {
            MessageError::format(format!("record-axis position out of range: {position}"))
        })?;
        let pregnancy = group.scalar("pregnancy") == Some("Y");
        entries.push(RecordAxisEntry::new(position, code, pregnancy)?);
    }
    Ok(entries)
}

/// Coded cause-of-death results returned by the central coder.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseOfDeathCoding {
    envelope: Envelope,
}

envelope_view!(CauseOfDeathCoding);

impl CauseOfDeathCoding {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::new(MessageKind::CauseOfDeathCoding, source),
        }
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    pub fn underlying_cause(&self) -> Option<&CodedValue> {
        self.envelope.parameters().coded("underlying_cause")
    }

    pub fn set_underlying_cause(&mut self, cause: CodedValue) {
        self.envelope
            .parameters_mut()
            .set_coded("underlying_cause", cause);
    }

    pub fn entity_axis(&self) -> Result<Vec<EntityAxisEntry>> {
        entity_axis_entries(self.envelope.parameters())
    }

    pub fn push_entity_axis(&mut self, entry: &EntityAxisEntry) {
        push_entity_axis(self.envelope.parameters_mut(), entry);
    }

    pub fn record_axis(&self) -> Result<Vec<RecordAxisEntry>> {
        record_axis_entries(self.envelope.parameters())
    }

    pub fn push_record_axis(&mut self, entry: &RecordAxisEntry) {
        push_record_axis(self.envelope.parameters_mut(), entry);
    }
}

/// Correction to previously returned cause-of-death coding.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseOfDeathCodingUpdate {
    envelope: Envelope,
}

envelope_view!(CauseOfDeathCodingUpdate);

impl CauseOfDeathCodingUpdate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::new(MessageKind::CauseOfDeathCodingUpdate, source),
        }
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    pub fn entity_axis(&self) -> Result<Vec<EntityAxisEntry>> {
        entity_axis_entries(self.envelope.parameters())
    }

    pub fn push_entity_axis(&mut self, entry: &EntityAxisEntry) {
        push_entity_axis(self.envelope.parameters_mut(), entry);
    }

    pub fn record_axis(&self) -> Result<Vec<RecordAxisEntry>> {
        record_axis_entries(self.envelope.parameters())
    }

    pub fn push_record_axis(&mut self, entry: &RecordAxisEntry) {
        push_record_axis(self.envelope.parameters_mut(), entry);
    }
}

/// Coded race and ethnicity results returned by the central coder.
#[derive(Debug, Clone, PartialEq)]
pub struct DemographicsCoding {
    envelope: Envelope,
}

envelope_view!(DemographicsCoding);

impl DemographicsCoding {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::new(MessageKind::DemographicsCoding, source),
        }
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    pub fn race_code(&self, name: &str) -> Option<&CodedValue> {
        self.envelope.parameters().coded_in("race_codes", name)
    }

    pub fn set_race_code(&mut self, name: &str, code: CodedValue) {
        self.envelope
            .parameters_mut()
            .set_coded_in("race_codes", name, code);
    }

    pub fn ethnicity_code(&self, name: &str) -> Option<&CodedValue> {
        self.envelope.parameters().coded_in("ethnicity_codes", name)
    }

    pub fn set_ethnicity_code(&mut self, name: &str, code: CodedValue) {
        self.envelope
            .parameters_mut()
            .set_coded_in("ethnicity_codes", name, code);
    }
}

/// Correction to previously returned demographics coding.
#[derive(Debug, Clone, PartialEq)]
pub struct DemographicsCodingUpdate {
    envelope: Envelope,
}

envelope_view!(DemographicsCodingUpdate);

impl DemographicsCodingUpdate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::new(MessageKind::DemographicsCodingUpdate, source),
        }
    }

    fn from_envelope(envelope: Envelope) -> Result<Self> {
        Ok(Self { envelope })
    }

    pub fn race_code(&self, name: &str) -> Option<&CodedValue> {
        self.envelope.parameters().coded_in("race_codes", name)
    }

    pub fn set_race_code(&mut self, name: &str, code: CodedValue) {
        self.envelope
            .parameters_mut()
            .set_coded_in("race_codes", name, code);
    }
}

/// The closed set of typed messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Submission(Submission),
    Update(Update),
    Void(Void),
    Alias(Alias),
    Acknowledgement(Acknowledgement),
    ExtractionError(ExtractionError),
    Status(Status),
    CauseOfDeathCoding(CauseOfDeathCoding),
    CauseOfDeathCodingUpdate(CauseOfDeathCodingUpdate),
    DemographicsCoding(DemographicsCoding),
    DemographicsCodingUpdate(DemographicsCodingUpdate),
}

impl Message {
    /// Parse a wire payload and dispatch on its type tag. The single
    /// authoritative switch from tag to typed message.
    pub fn parse(text: &str) -> Result<Message> {
        let envelope = wire::decode(text)?;
        Message::from_envelope(envelope)
    }

    pub fn from_envelope(envelope: Envelope) -> Result<Message> {
        match envelope.kind() {
            MessageKind::Submission => {
                Submission::from_envelope(envelope).map(Message::Submission)
            }
            MessageKind::Update => Update::from_envelope(envelope).map(Message::Update),
            MessageKind::Void => Void::from_envelope(envelope).map(Message::Void),
            MessageKind::Alias => Alias::from_envelope(envelope).map(Message::Alias),
            MessageKind::Acknowledgement => {
                Acknowledgement::from_envelope(envelope).map(Message::Acknowledgement)
            }
            MessageKind::ExtractionError => {
                ExtractionError::from_envelope(envelope).map(Message::ExtractionError)
            }
            MessageKind::Status => Status::from_envelope(envelope).map(Message::Status),
            MessageKind::CauseOfDeathCoding => {
                CauseOfDeathCoding::from_envelope(envelope).map(Message::CauseOfDeathCoding)
            }
            MessageKind::CauseOfDeathCodingUpdate => {
                CauseOfDeathCodingUpdate::from_envelope(envelope)
                    .map(Message::CauseOfDeathCodingUpdate)
            }
            MessageKind::DemographicsCoding => {
                DemographicsCoding::from_envelope(envelope).map(Message::DemographicsCoding)
            }
            MessageKind::DemographicsCodingUpdate => {
                DemographicsCodingUpdate::from_envelope(envelope)
                    .map(Message::DemographicsCodingUpdate)
            }
            MessageKind::Generic => Err(MessageError::UnknownKind {
                uri: envelope.kind().as_uri().to_string(),
                envelope: Box::new(envelope),
            }),
        }
    }

    pub fn envelope(&self) -> &Envelope {
        match self {
            Message::Submission(m) => m.envelope(),
            Message::Update(m) => m.envelope(),
            Message::Void(m) => m.envelope(),
            Message::Alias(m) => m.envelope(),
            Message::Acknowledgement(m) => m.envelope(),
            Message::ExtractionError(m) => m.envelope(),
            Message::Status(m) => m.envelope(),
            Message::CauseOfDeathCoding(m) => m.envelope(),
            Message::CauseOfDeathCodingUpdate(m) => m.envelope(),
            Message::DemographicsCoding(m) => m.envelope(),
            Message::DemographicsCodingUpdate(m) => m.envelope(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.envelope().kind()
    }

    /// Serialize in the requested wire syntax.
    pub fn to_wire(&self, syntax: Syntax) -> Result<String> {
        wire::encode(self.envelope(), syntax)
    }

    /// Build an acknowledgement reply to this message.
    pub fn acknowledge(&self) -> Acknowledgement {
        Acknowledgement {
            envelope: self.envelope().reply(MessageKind::Acknowledgement),
        }
    }

    /// Build an extraction-error reply carrying the given issues.
    pub fn extraction_error(&self, issues: &[Issue]) -> ExtractionError {
        ExtractionError::replying_to(self.envelope(), issues)
    }

    /// Build a status reply with the given status code.
    pub fn status(&self, status: &str) -> Status {
        let mut envelope = self.envelope().reply(MessageKind::Status);
        envelope.parameters_mut().set_scalar("status", status);
        Status { envelope }
    }
}
