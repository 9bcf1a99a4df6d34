//! Cancer-registry dialect table.
//!
//! A 24194-character layout exchanged with cancer registries. Only the
//! slots this system populates are declared; the rest of the record stays
//! space-filled. The table is extensible: new slots are added here without
//! touching the drivers.

use std::sync::OnceLock;

use vre_model::DatePart::{Day, Month, Year};

use crate::field::{FieldDef, GeoKind};

pub(crate) fn fields() -> &'static [FieldDef] {
    static TABLE: OnceLock<Vec<FieldDef>> = OnceLock::new();
    TABLE.get_or_init(build)
}

fn build() -> Vec<FieldDef> {
    vec![
        FieldDef::constant(1, "RECORD_TYPE", 1, 1, "Record Type", "I"),
        FieldDef::plain(2, "REGISTRY_TYPE", 2, 1, "Registry Type", "registry_type"),
        FieldDef::plain(3, "REGISTRY_ID", 30, 10, "Registry ID", "registry_id"),
        FieldDef::plain(4, "PATIENT_ID", 42, 8, "Patient ID Number", "patient_id").numeric(),
        FieldDef::dict(5, "NAME_LAST", 2230, 40, "Name--Last", "name", "family"),
        FieldDef::dict(6, "NAME_FIRST", 2270, 40, "Name--First", "name", "given"),
        FieldDef::dict(7, "NAME_MIDDLE", 2310, 40, "Name--Middle", "name", "middle"),
        FieldDef::dict(8, "ADDR_CITY", 2350, 45, "Addr at DX--City", "residence", "city"),
        FieldDef::plain(9, "SEX", 2395, 1, "Sex", "sex"),
        FieldDef::date(10, "DOB_YR", 2396, 4, "Date of Birth--Year", "birth_date", Year),
        FieldDef::date(11, "DOB_MO", 2400, 2, "Date of Birth--Month", "birth_date", Month),
        FieldDef::date(12, "DOB_DY", 2402, 2, "Date of Birth--Day", "birth_date", Day),
        FieldDef::geo(
            13,
            "ADDR_STATE",
            2404,
            2,
            "Addr at DX--State",
            "residence",
            GeoKind::State,
            true,
        ),
        FieldDef::geo(
            14,
            "COUNTY_DX",
            2406,
            3,
            "County at DX",
            "residence",
            GeoKind::County,
            true,
        ),
        FieldDef::plain(15, "SSN", 2409, 9, "Social Security Number", "ssn"),
        FieldDef::date(16, "DOD_YR", 2418, 4, "Date of Death--Year", "death_date", Year),
        FieldDef::date(17, "DOD_MO", 2422, 2, "Date of Death--Month", "death_date", Month),
        FieldDef::date(18, "DOD_DY", 2424, 2, "Date of Death--Day", "death_date", Day),
        FieldDef::plain(
            19,
            "ICD_REVISION",
            2426,
            1,
            "ICD Revision Number",
            "icd_revision_number",
        ),
        FieldDef::plain(
            20,
            "CAUSE_OF_DEATH_CODE",
            2427,
            4,
            "Cause of Death",
            "underlying_cause_of_death",
        ),
        FieldDef::autopsy(21, "AUTOPSY", 2431, 1, "Autopsy", "autopsy_performed"),
        FieldDef::plain(22, "VITAL_STATUS", 2432, 1, "Vital Status", "vital_status"),
    ]
}
