//! Validated business identifiers.
//!
//! The tuple (certificate number, jurisdiction id, death year, state
//! auxiliary id) administratively identifies a record across systems.
//! Each newtype validates at construction so an invalid identifier can
//! never reach an envelope or a fixed-width field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentifierRangeError;

/// Certificate number assigned by the registering jurisdiction.
///
/// At most six digits (<= 999999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CertificateNumber(u32);

impl CertificateNumber {
    pub fn new(value: u32) -> Result<Self, IdentifierRangeError> {
        if value > 999_999 {
            return Err(IdentifierRangeError::CertificateNumber {
                value: u64::from(value),
            });
        }
        Ok(Self(value))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Render zero-padded to six digits, the width used on the wire.
    pub fn to_padded(&self) -> String {
        format!("{:06}", self.0)
    }
}

impl fmt::Display for CertificateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CertificateNumber {
    type Err = IdentifierRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value =
            trimmed
                .parse::<u64>()
                .map_err(|_| IdentifierRangeError::CertificateNumberText {
                    value: trimmed.to_string(),
                })?;
        if value > 999_999 {
            return Err(IdentifierRangeError::CertificateNumber { value });
        }
        Self::new(value as u32)
    }
}

/// Four-digit year of death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeathYear(u16);

impl DeathYear {
    pub fn new(value: u16) -> Result<Self, IdentifierRangeError> {
        if !(1000..=9999).contains(&value) {
            return Err(IdentifierRangeError::DeathYear {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for DeathYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for DeathYear {
    type Err = IdentifierRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 4 {
            return Err(IdentifierRangeError::DeathYear {
                value: trimmed.to_string(),
            });
        }
        let value = trimmed
            .parse::<u16>()
            .map_err(|_| IdentifierRangeError::DeathYear {
                value: trimmed.to_string(),
            })?;
        Self::new(value)
    }
}

/// Two-character jurisdiction (state/territory) identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JurisdictionId(String);

impl JurisdictionId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierRangeError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.chars().count() != 2 {
            return Err(IdentifierRangeError::JurisdictionId { value });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JurisdictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JurisdictionId {
    type Err = IdentifierRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Free-form auxiliary identifier assigned by the state system.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateAuxiliaryId(String);

impl StateAuxiliaryId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierRangeError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IdentifierRangeError::BlankAuxiliaryId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateAuxiliaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StateAuxiliaryId {
    type Err = IdentifierRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_number_bounds() {
        assert!(CertificateNumber::new(999_999).is_ok());
        let err = CertificateNumber::new(1_000_000).unwrap_err();
        assert!(matches!(
            err,
            IdentifierRangeError::CertificateNumber { value: 1_000_000 }
        ));
    }

    #[test]
    fn certificate_number_padding() {
        let cert = CertificateNumber::new(42).unwrap();
        assert_eq!(cert.to_padded(), "000042");
        assert_eq!(cert.to_string(), "42");
    }

    #[test]
    fn certificate_number_parses_padded_text() {
        let cert: CertificateNumber = "000123".parse().unwrap();
        assert_eq!(cert.as_u32(), 123);
    }

    #[test]
    fn death_year_must_be_four_digits() {
        assert!(DeathYear::new(2021).is_ok());
        assert!(DeathYear::new(999).is_err());
        assert!("21".parse::<DeathYear>().is_err());
        assert_eq!("2021".parse::<DeathYear>().unwrap().as_u16(), 2021);
    }

    #[test]
    fn jurisdiction_id_width() {
        assert_eq!(JurisdictionId::new("ma").unwrap().as_str(), "MA");
        assert!(JurisdictionId::new("MAS").is_err());
        assert!(JurisdictionId::new(" ").is_err());
    }

    #[test]
    fn auxiliary_id_rejects_blank() {
        assert!(StateAuxiliaryId::new("  ").is_err());
        assert_eq!(StateAuxiliaryId::new(" 12 ").unwrap().as_str(), "12");
    }
}
