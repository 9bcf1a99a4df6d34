//! Structural validation of dialect field tables.

use std::collections::BTreeSet;

use crate::error::{IjeError, Result};
use crate::field::Dialect;

/// Check a dialect's field table for structural defects: slots that start
/// before position 1 or have zero width, slots that extend past the record
/// length, and duplicate keys.
pub fn validate_table(dialect: Dialect) -> Result<()> {
    let record_len = dialect.record_len();
    let mut keys = BTreeSet::new();
    for field in dialect.fields() {
        if field.position == 0 || field.length == 0 {
            return Err(IjeError::InvalidSlot {
                key: field.key,
                position: field.position,
                length: field.length,
            });
        }
        if field.position - 1 + field.length > record_len {
            return Err(IjeError::FieldOutOfBounds {
                key: field.key,
                position: field.position,
                length: field.length,
                record_len,
            });
        }
        if !keys.insert(field.key) {
            return Err(IjeError::DuplicateField { key: field.key });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_structurally_sound() {
        validate_table(Dialect::Mortality).unwrap();
        validate_table(Dialect::CancerRegistry).unwrap();
    }

    #[test]
    fn sequence_numbers_are_strictly_increasing() {
        for dialect in [Dialect::Mortality, Dialect::CancerRegistry] {
            let fields = dialect.fields();
            for pair in fields.windows(2) {
                assert!(
                    pair[0].seq < pair[1].seq,
                    "{}: {} then {}",
                    dialect,
                    pair[0].key,
                    pair[1].key
                );
            }
        }
    }

    #[test]
    fn declared_slots_do_not_overlap() {
        for dialect in [Dialect::Mortality, Dialect::CancerRegistry] {
            let mut spans: Vec<(usize, usize, &str)> = dialect
                .fields()
                .iter()
                .map(|f| (f.position, f.position + f.length, f.key))
                .collect();
            spans.sort();
            for pair in spans.windows(2) {
                assert!(
                    pair[0].1 <= pair[1].0,
                    "{}: {} overlaps {}",
                    dialect,
                    pair[0].2,
                    pair[1].2
                );
            }
        }
    }
}
