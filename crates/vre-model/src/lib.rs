//! Canonical death-record model.
//!
//! The record itself is a property bag keyed by logical-field name; the
//! fixed-width codec and the message envelope both read and write through
//! its typed accessors. Business identifiers are validating newtypes so an
//! out-of-range value is rejected at construction rather than discovered on
//! the wire.

pub mod cause;
pub mod error;
pub mod ids;
pub mod record;

pub use cause::{CauseLine, CodedValue, EntityAxisEntry, RecordAxisEntry};
pub use error::IdentifierRangeError;
pub use ids::{CertificateNumber, DeathYear, JurisdictionId, StateAuxiliaryId};
pub use record::{DatePart, DeathRecord, FieldValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes() {
        let mut record = DeathRecord::new();
        record.set_scalar("sex", "M");
        record.set_dict_value("residence", "address_state", "Vermont");
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: DeathRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
