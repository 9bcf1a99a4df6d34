//! Fixed-width encode driver.

use tracing::debug;

use vre_geo::GeoRegistry;
use vre_model::DeathRecord;

use crate::codec::{left_justified, right_zero};
use crate::field::{Dialect, Justify};

/// Encode a canonical [`DeathRecord`] into one fixed-width record.
///
/// Always produces exactly the dialect's record length. Absent data fills
/// its slot deterministically: spaces for text, zeros for numeric slots.
/// Values wider than their slot are truncated with a debug note.
pub fn encode(dialect: Dialect, record: &DeathRecord, geo: &GeoRegistry) -> String {
    let mut buffer: Vec<char> = vec![' '; dialect.record_len()];
    for field in dialect.fields() {
        let value = field.kind.read(record, geo).unwrap_or_default();
        if value.chars().count() > field.length {
            debug!(
                target: "vre_ije",
                key = field.key,
                length = field.length,
                "value truncated to slot width"
            );
        }
        let rendered = match field.justify {
            Justify::Left => left_justified(&value, field.length),
            Justify::RightZero => right_zero(&value, field.length),
        };
        let start = field.position - 1;
        for (offset, c) in rendered.chars().enumerate() {
            buffer[start + offset] = c;
        }
    }
    buffer.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_exactly_record_length() {
        let geo = GeoRegistry::builtin();
        let record = DeathRecord::new();
        assert_eq!(
            encode(Dialect::Mortality, &record, &geo).chars().count(),
            Dialect::Mortality.record_len()
        );
        assert_eq!(
            encode(Dialect::CancerRegistry, &record, &geo).chars().count(),
            Dialect::CancerRegistry.record_len()
        );
    }

    #[test]
    fn numeric_slots_zero_fill_when_absent() {
        let geo = GeoRegistry::builtin();
        let text = encode(Dialect::Mortality, &DeathRecord::new(), &geo);
        let fileno = Dialect::Mortality.field("FILENO").unwrap();
        let slot: String = text
            .chars()
            .skip(fileno.position - 1)
            .take(fileno.length)
            .collect();
        assert_eq!(slot, "000000");
    }

    #[test]
    fn void_slot_always_carries_its_constant() {
        let geo = GeoRegistry::builtin();
        let text = encode(Dialect::Mortality, &DeathRecord::new(), &geo);
        assert_eq!(text.chars().nth(12), Some('0'));
    }

    #[test]
    fn overlong_value_is_truncated_in_place() {
        let geo = GeoRegistry::builtin();
        let mut record = DeathRecord::new();
        record.set_scalar("sex", "FEMALE");
        let text = encode(Dialect::Mortality, &record, &geo);
        let sex = Dialect::Mortality.field("SEX").unwrap();
        assert_eq!(text.chars().nth(sex.position - 1), Some('F'));
        // The neighboring slot stays untouched.
        assert_eq!(text.chars().nth(sex.position), Some(' '));
    }
}
