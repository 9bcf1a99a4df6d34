//! Fixed-width decode driver.

use tracing::debug;

use vre_geo::GeoRegistry;
use vre_model::DeathRecord;

use crate::codec::{trim_field, trim_zeros};
use crate::error::{IjeError, Result};
use crate::field::{Dialect, FieldDef, Justify};

/// Decode one fixed-width record into a canonical [`DeathRecord`].
///
/// Input shorter than the dialect's record length is space-padded on the
/// right; longer input is refused. Blank slots, and numeric slots holding
/// only fill (all spaces or all zeros), leave their datum absent rather
/// than writing an empty value.
pub fn decode(dialect: Dialect, text: &str, geo: &GeoRegistry) -> Result<DeathRecord> {
    let record_len = dialect.record_len();
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() > record_len {
        return Err(IjeError::RecordTooLong {
            dialect,
            expected: record_len,
            actual: chars.len(),
        });
    }
    chars.resize(record_len, ' ');

    // Coded geography reads its scope from already-decoded parts, so fields
    // decode in priority order, not declaration order.
    let mut order: Vec<&FieldDef> = dialect.fields().iter().collect();
    order.sort_by_key(|f| (f.priority, f.seq));

    let mut record = DeathRecord::new();
    for field in order {
        let start = field.position - 1;
        let slot: String = chars[start..start + field.length].iter().collect();
        let value = match field.justify {
            Justify::Left => trim_field(&slot),
            Justify::RightZero => trim_zeros(&slot),
        };
        if value.is_empty() {
            continue;
        }
        debug!(target: "vre_ije", key = field.key, value = value.as_str(), "decoded field");
        field.kind.write(&mut record, geo, &value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::encode;

    #[test]
    fn short_input_is_padded() {
        let geo = GeoRegistry::builtin();
        let record = decode(Dialect::Mortality, "2024", &geo).unwrap();
        assert_eq!(record.scalar("death_date"), Some("2024-00-00"));
    }

    #[test]
    fn overlong_input_is_refused() {
        let geo = GeoRegistry::builtin();
        let text = " ".repeat(Dialect::Mortality.record_len() + 1);
        let err = decode(Dialect::Mortality, &text, &geo).unwrap_err();
        assert!(matches!(err, IjeError::RecordTooLong { actual, .. } if actual == 5001));
    }

    #[test]
    fn blank_record_decodes_empty() {
        let geo = GeoRegistry::builtin();
        let record = decode(Dialect::Mortality, "", &geo).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn coded_residence_geography_resolves_with_scope() {
        let geo = GeoRegistry::builtin();
        let mut source = DeathRecord::new();
        source.set_dict_value("residence", "state", "Massachusetts");
        source.set_dict_value("residence", "county", "Middlesex");
        source.set_dict_value("residence", "city", "Cambridge");

        let wire = encode(Dialect::Mortality, &source, &geo);
        let decoded = decode(Dialect::Mortality, &wire, &geo).unwrap();
        assert_eq!(decoded.dict_value("residence", "state"), Some("Massachusetts"));
        assert_eq!(decoded.dict_value("residence", "county"), Some("Middlesex"));
        assert_eq!(decoded.dict_value("residence", "city"), Some("Cambridge"));
    }

    #[test]
    fn literal_city_survives_unknown_city_code() {
        let geo = GeoRegistry::builtin();
        let mut buffer: Vec<char> = vec![' '; Dialect::Mortality.record_len()];
        let city_text = Dialect::Mortality.field("CITYTEXT_D").unwrap();
        for (i, c) in "Springfield".chars().enumerate() {
            buffer[city_text.position - 1 + i] = c;
        }
        let city_code = Dialect::Mortality.field("CITYCODE_D").unwrap();
        for (i, c) in "99999".chars().enumerate() {
            buffer[city_code.position - 1 + i] = c;
        }
        let text: String = buffer.into_iter().collect();
        let record = decode(Dialect::Mortality, &text, &geo).unwrap();
        assert_eq!(record.dict_value("death_location", "city"), Some("Springfield"));
    }
}
