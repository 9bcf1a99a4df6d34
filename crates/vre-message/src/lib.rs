//! Message envelopes for jurisdictional vital-records exchange.
//!
//! A canonical [`vre_model::DeathRecord`] (or a coded derivative of one)
//! travels wrapped in an addressed [`Envelope`]: a unique id, an immutable
//! type tag, source and destination endpoints, a timestamp, and an ordered
//! side-channel [`ParameterBlock`] for business identifiers and coding
//! payloads. Envelopes serialize to either of two interchangeable wire
//! syntaxes (JSON or XML); [`Message::parse`] recognizes the syntax,
//! reconstructs the envelope, and dispatches on the type tag to a typed
//! message.

mod envelope;
mod error;
mod kinds;
mod messages;
mod params;
mod wire;
mod xml;

pub use envelope::{
    CERTIFICATE_NUMBER, DEATH_YEAR, Envelope, JURISDICTION_ID, STATE_AUXILIARY_ID,
};
pub use error::{MessageError, Result};
pub use kinds::MessageKind;
pub use messages::{
    Acknowledgement, Alias, CauseOfDeathCoding, CauseOfDeathCodingUpdate, DemographicsCoding,
    DemographicsCodingUpdate, ExtractionError, Issue, IssueSeverity, Message, Status, Submission,
    Update, Void,
};
pub use params::{ParamValue, Parameter, ParameterBlock};
pub use wire::{Syntax, decode, detect, encode};
