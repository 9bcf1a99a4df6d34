//! Cause-of-death structures.
//!
//! Certificate Part I carries up to four literal cause lines, each with an
//! onset interval; Part II carries contributing conditions. Coded output
//! comes back from the coding system in two groupings: per-line ("entity
//! axis") and as a flattened list ("record axis").

use serde::{Deserialize, Serialize};

use crate::error::IdentifierRangeError;

/// A (code, system, display) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedValue {
    pub code: String,
    pub system: String,
    pub display: String,
}

impl CodedValue {
    pub fn new(
        code: impl Into<String>,
        system: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            system: system.into(),
            display: display.into(),
        }
    }
}

/// One literal cause-of-death line: free text, onset interval, optional code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseLine {
    /// Literal condition text as written by the certifier.
    pub text: String,
    /// Approximate interval from onset to death (free text, e.g. "4 days").
    pub interval: String,
    /// Assigned code, present only after coding.
    pub code: Option<CodedValue>,
}

impl CauseLine {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.interval.is_empty() && self.code.is_none()
    }
}

/// One coded entry in the per-line ("entity axis") grouping.
///
/// Line numbers 1-6 correspond to certificate lines I.a through I.e plus
/// Part II; positions within a line run 1-20.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAxisEntry {
    line: u8,
    position: u8,
    pub code: String,
    pub e_code_indicator: bool,
}

impl EntityAxisEntry {
    pub fn new(
        line: u8,
        position: u8,
        code: impl Into<String>,
        e_code_indicator: bool,
    ) -> Result<Self, IdentifierRangeError> {
        if !(1..=6).contains(&line) {
            return Err(IdentifierRangeError::CauseLine { line });
        }
        if !(1..=20).contains(&position) {
            return Err(IdentifierRangeError::CausePosition { position });
        }
        Ok(Self {
            line,
            position,
            code: code.into(),
            e_code_indicator,
        })
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    pub fn position(&self) -> u8 {
        self.position
    }
}

/// One coded entry in the flattened ("record axis") grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAxisEntry {
    position: u8,
    pub code: String,
    pub pregnancy: bool,
}

impl RecordAxisEntry {
    pub fn new(
        position: u8,
        code: impl Into<String>,
        pregnancy: bool,
    ) -> Result<Self, IdentifierRangeError> {
        if position < 1 {
            return Err(IdentifierRangeError::RecordAxisPosition);
        }
        Ok(Self {
            position,
            code: code.into(),
            pregnancy,
        })
    }

    pub fn position(&self) -> u8 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_axis_bounds() {
        assert!(EntityAxisEntry::new(1, 1, "I219", false).is_ok());
        assert!(EntityAxisEntry::new(6, 20, "J449", false).is_ok());
        assert!(matches!(
            EntityAxisEntry::new(0, 1, "I219", false),
            Err(IdentifierRangeError::CauseLine { line: 0 })
        ));
        assert!(matches!(
            EntityAxisEntry::new(7, 1, "I219", false),
            Err(IdentifierRangeError::CauseLine { line: 7 })
        ));
        assert!(matches!(
            EntityAxisEntry::new(2, 21, "I219", false),
            Err(IdentifierRangeError::CausePosition { position: 21 })
        ));
    }

    #[test]
    fn record_axis_bounds() {
        assert!(RecordAxisEntry::new(1, "I219", false).is_ok());
        assert!(RecordAxisEntry::new(0, "I219", false).is_err());
    }

    #[test]
    fn empty_cause_line() {
        assert!(CauseLine::default().is_empty());
        let line = CauseLine {
            text: "Sepsis".to_string(),
            ..Default::default()
        };
        assert!(!line.is_empty());
    }
}
