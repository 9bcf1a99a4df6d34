use proptest::prelude::*;

use vre_geo::GeoRegistry;
use vre_ije::{CAUSE_OF_DEATH, Dialect, decode, encode};
use vre_model::{DatePart, DeathRecord};

fn certificate() -> DeathRecord {
    let mut r = DeathRecord::new();
    r.set_scalar("death_date", "2024-03-15");
    r.set_scalar("jurisdiction_id", "MA");
    r.set_scalar("certificate_number", "42");
    r.set_scalar("state_auxiliary_id", "000000000001");
    r.set_dict_value("name", "given", "Jane");
    r.set_dict_value("name", "middle_initial", "Q");
    r.set_dict_value("name", "family", "Doe");
    r.set_scalar("sex", "F");
    r.set_scalar("birth_date", "1948-07-01");
    r.set_dict_value("residence", "state", "Massachusetts");
    r.set_dict_value("residence", "county", "Middlesex");
    r.set_dict_value("residence", "city", "Cambridge");
    r.set_dict_value("death_location", "county", "Suffolk");
    r.set_scalar("manner_of_death", "N");
    r.set_scalar("autopsy_performed", "no");
    r.set_cause_text(CAUSE_OF_DEATH, 1, "Cardiac arrest");
    r.set_cause_interval(CAUSE_OF_DEATH, 1, "Minutes");
    r.set_cause_text(CAUSE_OF_DEATH, 2, "Coronary artery disease");
    r.set_cause_interval(CAUSE_OF_DEATH, 2, "Years");
    r
}

#[test]
fn mortality_certificate_round_trips() {
    let geo = GeoRegistry::builtin();
    let source = certificate();
    let wire = encode(Dialect::Mortality, &source, &geo);
    assert_eq!(wire.chars().count(), Dialect::Mortality.record_len());

    let decoded = decode(Dialect::Mortality, &wire, &geo).unwrap();
    assert_eq!(decoded.scalar("death_date"), Some("2024-03-15"));
    assert_eq!(decoded.scalar("jurisdiction_id"), Some("MA"));
    assert_eq!(decoded.scalar("certificate_number"), Some("42"));
    assert_eq!(decoded.dict_value("name", "given"), Some("Jane"));
    assert_eq!(decoded.dict_value("name", "family"), Some("Doe"));
    assert_eq!(decoded.dict_value("residence", "state"), Some("Massachusetts"));
    assert_eq!(decoded.dict_value("residence", "county"), Some("Middlesex"));
    assert_eq!(decoded.dict_value("residence", "city"), Some("Cambridge"));
    assert_eq!(decoded.dict_value("death_location", "county"), Some("Suffolk"));
    assert_eq!(decoded.scalar("autopsy_performed"), Some("no"));
    let lines = decoded.cause_lines(CAUSE_OF_DEATH);
    assert_eq!(lines[0].text, "Cardiac arrest");
    assert_eq!(lines[0].interval, "Minutes");
    assert_eq!(lines[1].text, "Coronary artery disease");
    assert_eq!(lines[1].interval, "Years");
}

#[test]
fn encoding_is_stable_after_a_round_trip() {
    let geo = GeoRegistry::builtin();
    let first = encode(Dialect::Mortality, &certificate(), &geo);
    let decoded = decode(Dialect::Mortality, &first, &geo).unwrap();
    let second = encode(Dialect::Mortality, &decoded, &geo);
    assert_eq!(first, second);
}

#[test]
fn family_and_injury_blocks_round_trip() {
    let geo = GeoRegistry::builtin();
    let mut source = DeathRecord::new();
    source.set_dict_value("spouse_name", "given", "Mary");
    source.set_dict_value("spouse_name", "family", "Doe");
    source.set_dict_value("father_name", "given", "James");
    source.set_dict_value("mother_name", "maiden", "Smith");
    source.set_dict_value("injury_location", "state", "Massachusetts");
    source.set_dict_value("injury_location", "county", "Middlesex");
    source.set_dict_value("injury_location", "city", "Cambridge");
    source.set_dict_value("injury_location", "description", "Private residence");

    let wire = encode(Dialect::Mortality, &source, &geo);
    let decoded = decode(Dialect::Mortality, &wire, &geo).unwrap();
    assert_eq!(decoded.dict_value("spouse_name", "given"), Some("Mary"));
    assert_eq!(decoded.dict_value("spouse_name", "family"), Some("Doe"));
    assert_eq!(decoded.dict_value("father_name", "given"), Some("James"));
    assert_eq!(decoded.dict_value("mother_name", "maiden"), Some("Smith"));
    assert_eq!(decoded.dict_value("injury_location", "state"), Some("Massachusetts"));
    assert_eq!(decoded.dict_value("injury_location", "county"), Some("Middlesex"));
    assert_eq!(decoded.dict_value("injury_location", "city"), Some("Cambridge"));
    assert_eq!(
        decoded.dict_value("injury_location", "description"),
        Some("Private residence")
    );
}

#[test]
fn empty_record_round_trips_empty() {
    let geo = GeoRegistry::builtin();
    for dialect in [Dialect::Mortality, Dialect::CancerRegistry] {
        let wire = encode(dialect, &DeathRecord::new(), &geo);
        let decoded = decode(dialect, &wire, &geo).unwrap();
        // Zero-filled numeric slots and the blank autopsy slot must not
        // materialize phantom fields.
        assert_eq!(decoded, DeathRecord::new());
    }
}

#[test]
fn year_alone_in_a_blank_buffer_decodes_to_a_partial_date() {
    let geo = GeoRegistry::builtin();
    let mut buffer = vec![' '; Dialect::Mortality.record_len()];
    for (i, c) in "1970".chars().enumerate() {
        buffer[i] = c;
    }
    let text: String = buffer.into_iter().collect();
    let record = decode(Dialect::Mortality, &text, &geo).unwrap();
    assert_eq!(record.date_part("death_date", DatePart::Year), Some("1970"));
    // Nothing else materializes from blank slots; autopsy stays absent.
    assert_eq!(record.scalar("sex"), None);
    assert_eq!(record.scalar("autopsy_performed"), None);
}

#[test]
fn cancer_registry_certificate_round_trips() {
    let geo = GeoRegistry::builtin();
    let mut source = DeathRecord::new();
    source.set_scalar("registry_id", "0022900000");
    source.set_scalar("patient_id", "123");
    source.set_dict_value("name", "family", "Doe");
    source.set_dict_value("name", "given", "John");
    source.set_scalar("sex", "1");
    source.set_scalar("birth_date", "1950-01-02");
    source.set_dict_value("residence", "state", "MA");
    source.set_scalar("death_date", "2024-03-15");
    source.set_scalar("underlying_cause_of_death", "I219");
    source.set_scalar("autopsy_performed", "yes");

    let wire = encode(Dialect::CancerRegistry, &source, &geo);
    assert_eq!(wire.chars().count(), Dialect::CancerRegistry.record_len());
    // Record type discriminator is constant.
    assert_eq!(wire.chars().next(), Some('I'));

    let decoded = decode(Dialect::CancerRegistry, &wire, &geo).unwrap();
    assert_eq!(decoded.scalar("patient_id"), Some("123"));
    assert_eq!(decoded.dict_value("name", "family"), Some("Doe"));
    assert_eq!(decoded.scalar("death_date"), Some("2024-03-15"));
    assert_eq!(decoded.scalar("underlying_cause_of_death"), Some("I219"));
    assert_eq!(decoded.scalar("autopsy_performed"), Some("yes"));
}

proptest! {
    #[test]
    fn certificate_numbers_round_trip(n in 1u32..=999_999) {
        let geo = GeoRegistry::builtin();
        let mut record = DeathRecord::new();
        record.set_scalar("certificate_number", n.to_string());
        let wire = encode(Dialect::Mortality, &record, &geo);
        let decoded = decode(Dialect::Mortality, &wire, &geo).unwrap();
        let expected = n.to_string();
        prop_assert_eq!(decoded.scalar("certificate_number"), Some(expected.as_str()));
    }

    #[test]
    fn names_round_trip(given in "[A-Z][a-z]{0,19}", family in "[A-Z][a-z]{0,19}") {
        let geo = GeoRegistry::builtin();
        let mut record = DeathRecord::new();
        record.set_dict_value("name", "given", &given);
        record.set_dict_value("name", "family", &family);
        let wire = encode(Dialect::Mortality, &record, &geo);
        let decoded = decode(Dialect::Mortality, &wire, &geo).unwrap();
        prop_assert_eq!(decoded.dict_value("name", "given"), Some(given.as_str()));
        prop_assert_eq!(decoded.dict_value("name", "family"), Some(family.as_str()));
    }

    #[test]
    fn encoded_length_is_invariant(sex in "[MFUX]", age in 0u32..200) {
        let geo = GeoRegistry::builtin();
        let mut record = DeathRecord::new();
        record.set_scalar("sex", &sex);
        record.set_scalar("age", age.to_string());
        let wire = encode(Dialect::Mortality, &record, &geo);
        prop_assert_eq!(wire.chars().count(), Dialect::Mortality.record_len());
    }
}
