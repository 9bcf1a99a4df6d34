//! Legacy mortality dialect table.
//!
//! The 5000-character flat layout used for jurisdictional mortality
//! interchange. Slots are 1-based and fixed; unassigned ranges are reserved
//! and stay space-filled. Decode priority is non-zero only where a field
//! depends on another field's decoded value (coded geography needs its
//! jurisdiction scope first).

use std::sync::OnceLock;

use vre_model::DatePart::{Day, Month, Year};

use crate::field::{FieldDef, GeoKind};

pub(crate) fn fields() -> &'static [FieldDef] {
    static TABLE: OnceLock<Vec<FieldDef>> = OnceLock::new();
    TABLE.get_or_init(build)
}

#[rustfmt::skip]
fn build() -> Vec<FieldDef> {
    let mut t = vec![
        FieldDef::date(1, "DOD_YR", 1, 4, "Date of Death--Year", "death_date", Year),
        FieldDef::plain(2, "DSTATE", 5, 2, "Death State/Jurisdiction Code", "jurisdiction_id"),
        FieldDef::plain(3, "FILENO", 7, 6, "Certificate Number", "certificate_number").numeric(),
        FieldDef::constant(4, "VOID", 13, 1, "Void Flag", "0"),
        FieldDef::plain(5, "AUXNO", 14, 12, "Auxiliary State File Number", "state_auxiliary_id"),
        FieldDef::plain(6, "MFILED", 26, 1, "Source Flag: Paper/Electronic", "filing_format"),
        FieldDef::dict(7, "GNAME", 27, 50, "Decedent's Legal Name--Given", "name", "given"),
        FieldDef::dict(8, "MNAME", 77, 1, "Decedent's Legal Name--Middle Initial", "name", "middle_initial"),
        FieldDef::dict(9, "LNAME", 78, 50, "Decedent's Legal Name--Last", "name", "family"),
        FieldDef::dict(10, "SUFF", 128, 10, "Decedent's Legal Name--Suffix", "name", "suffix"),
        FieldDef::plain(11, "ALIAS", 138, 1, "Decedent's Legal Name--Alias Flag", "alias_flag"),
        FieldDef::dict(12, "FLNAME", 139, 50, "Father's Surname", "father_name", "family"),
        FieldDef::plain(13, "SEX", 189, 1, "Sex", "sex"),
        FieldDef::plain(14, "SSN", 190, 9, "Social Security Number", "ssn"),
        FieldDef::plain(15, "AGETYPE", 199, 1, "Decedent's Age--Type", "age_unit").numeric(),
        FieldDef::plain(16, "AGE", 200, 3, "Decedent's Age--Units", "age").numeric(),
        FieldDef::plain(17, "AGE_BYPASS", 203, 1, "Decedent's Age--Edit Flag", "age_bypass_flag"),
        FieldDef::date(18, "DOB_YR", 204, 4, "Date of Birth--Year", "birth_date", Year),
        FieldDef::date(19, "DOB_MO", 208, 2, "Date of Birth--Month", "birth_date", Month),
        FieldDef::date(20, "DOB_DY", 210, 2, "Date of Birth--Day", "birth_date", Day),
        FieldDef::geo(21, "BPLACE_CNT", 212, 2, "Birthplace--Country", "birth_place", GeoKind::Country, true),
        FieldDef::geo(22, "BPLACE_ST", 214, 2, "State, U.S. Territory or Canadian Province of Birth", "birth_place", GeoKind::State, true),
        FieldDef::geo(23, "CITYC", 216, 5, "Decedent's Residence--City Code", "residence", GeoKind::City, true),
        FieldDef::geo(24, "COUNTYC", 221, 3, "Decedent's Residence--County Code", "residence", GeoKind::County, true),
        FieldDef::geo(25, "STATEC", 224, 2, "Decedent's Residence--State Code", "residence", GeoKind::State, true),
        FieldDef::geo(26, "COUNTRYC", 226, 2, "Decedent's Residence--Country Code", "residence", GeoKind::Country, true),
        FieldDef::geo(27, "LIMITS", 228, 1, "Decedent's Residence--Inside City Limits", "residence", GeoKind::InsideCityLimits, false),
        FieldDef::plain(28, "MARITAL", 229, 1, "Marital Status", "marital_status"),
        FieldDef::plain(29, "MARITAL_BYPASS", 230, 1, "Marital Status--Edit Flag", "marital_bypass_flag"),
        FieldDef::plain(30, "DPLACE", 231, 1, "Place of Death", "death_place_type"),
        FieldDef::geo(31, "COD", 232, 3, "County of Death Occurrence--Code", "death_location", GeoKind::County, true),
        FieldDef::plain(32, "DISP", 237, 1, "Method of Disposition", "disposition_method"),
        FieldDef::date(33, "DOD_MO", 238, 2, "Date of Death--Month", "death_date", Month),
        FieldDef::date(34, "DOD_DY", 240, 2, "Date of Death--Day", "death_date", Day),
        FieldDef::plain(35, "TOD", 242, 4, "Time of Death", "death_time"),
        FieldDef::plain(36, "DEDUC", 246, 1, "Decedent's Education", "education_level"),
        FieldDef::plain(37, "DEDUC_BYPASS", 247, 1, "Decedent's Education--Edit Flag", "education_bypass_flag"),
        FieldDef::plain(38, "DETHNIC1", 248, 1, "Decedent of Hispanic Origin?--Mexican", "ethnicity_mexican"),
        FieldDef::plain(39, "DETHNIC2", 249, 1, "Decedent of Hispanic Origin?--Puerto Rican", "ethnicity_puerto_rican"),
        FieldDef::plain(40, "DETHNIC3", 250, 1, "Decedent of Hispanic Origin?--Cuban", "ethnicity_cuban"),
        FieldDef::plain(41, "DETHNIC4", 251, 1, "Decedent of Hispanic Origin?--Other", "ethnicity_other"),
        FieldDef::plain(42, "DETHNIC5", 252, 20, "Decedent of Hispanic Origin?--Other, Literal", "ethnicity_literal"),
        FieldDef::plain(43, "RACE1", 272, 1, "Decedent's Race--White", "race_white"),
        FieldDef::plain(44, "RACE2", 273, 1, "Decedent's Race--Black or African American", "race_black"),
        FieldDef::plain(45, "RACE3", 274, 1, "Decedent's Race--American Indian or Alaska Native", "race_american_indian"),
        FieldDef::plain(46, "RACE4", 275, 1, "Decedent's Race--Asian Indian", "race_asian_indian"),
        FieldDef::plain(47, "RACE5", 276, 1, "Decedent's Race--Chinese", "race_chinese"),
        FieldDef::plain(48, "RACE6", 277, 1, "Decedent's Race--Filipino", "race_filipino"),
        FieldDef::plain(49, "RACE7", 278, 1, "Decedent's Race--Japanese", "race_japanese"),
        FieldDef::plain(50, "RACE8", 279, 1, "Decedent's Race--Korean", "race_korean"),
        FieldDef::plain(51, "RACE9", 280, 1, "Decedent's Race--Vietnamese", "race_vietnamese"),
        FieldDef::plain(52, "RACE10", 281, 1, "Decedent's Race--Other Asian", "race_other_asian"),
        FieldDef::plain(53, "RACE11", 282, 1, "Decedent's Race--Native Hawaiian", "race_hawaiian"),
        FieldDef::plain(54, "RACE12", 283, 1, "Decedent's Race--Guamanian or Chamorro", "race_guamanian"),
        FieldDef::plain(55, "RACE13", 284, 1, "Decedent's Race--Samoan", "race_samoan"),
        FieldDef::plain(56, "RACE14", 285, 1, "Decedent's Race--Other Pacific Islander", "race_other_pacific"),
        FieldDef::plain(57, "RACE15", 286, 1, "Decedent's Race--Other", "race_other"),
        FieldDef::plain(58, "RACE16", 287, 30, "Decedent's Race--First American Indian Literal", "race_american_indian_literal_1"),
        FieldDef::plain(59, "RACE17", 317, 30, "Decedent's Race--Second American Indian Literal", "race_american_indian_literal_2"),
        FieldDef::plain(60, "RACE18", 347, 30, "Decedent's Race--First Other Asian Literal", "race_other_asian_literal_1"),
        FieldDef::plain(61, "RACE19", 377, 30, "Decedent's Race--Second Other Asian Literal", "race_other_asian_literal_2"),
        FieldDef::plain(62, "RACE20", 407, 30, "Decedent's Race--First Other Pacific Islander Literal", "race_other_pacific_literal_1"),
        FieldDef::plain(63, "RACE21", 437, 30, "Decedent's Race--Second Other Pacific Islander Literal", "race_other_pacific_literal_2"),
        FieldDef::plain(64, "RACE22", 467, 30, "Decedent's Race--First Other Literal", "race_other_literal_1"),
        FieldDef::plain(65, "RACE23", 497, 30, "Decedent's Race--Second Other Literal", "race_other_literal_2"),
    ];

    // Coded race slots filled by the demographics coding response.
    let race_codes: [(&str, &str); 8] = [
        ("RACE1E", "race_code_1"),
        ("RACE2E", "race_code_2"),
        ("RACE3E", "race_code_3"),
        ("RACE4E", "race_code_4"),
        ("RACE5E", "race_code_5"),
        ("RACE6E", "race_code_6"),
        ("RACE7E", "race_code_7"),
        ("RACE8E", "race_code_8"),
    ];
    for (idx, (key, name)) in race_codes.into_iter().enumerate() {
        t.push(FieldDef::plain(
            66 + idx as u16,
            key,
            527 + idx * 3,
            3,
            "Decedent's Race--Coded",
            name,
        ));
    }
    let literal_codes: [(&str, &str); 8] = [
        ("RACE16C", "race_literal_code_1"),
        ("RACE17C", "race_literal_code_2"),
        ("RACE18C", "race_literal_code_3"),
        ("RACE19C", "race_literal_code_4"),
        ("RACE20C", "race_literal_code_5"),
        ("RACE21C", "race_literal_code_6"),
        ("RACE22C", "race_literal_code_7"),
        ("RACE23C", "race_literal_code_8"),
    ];
    for (idx, (key, name)) in literal_codes.into_iter().enumerate() {
        t.push(FieldDef::plain(
            74 + idx as u16,
            key,
            551 + idx * 3,
            3,
            "Decedent's Race Literal--Coded",
            name,
        ));
    }

    t.extend(vec![
        FieldDef::plain(82, "RACE_MVR1", 575, 1, "Race Missing Value Reason--First", "race_missing_value_reason_1"),
        FieldDef::plain(83, "RACE_MVR2", 576, 1, "Race Missing Value Reason--Second", "race_missing_value_reason_2"),
        FieldDef::dict(84, "OCCUP", 577, 40, "Usual Occupation--Literal", "usual_work", "occupation"),
        FieldDef::noop(85, "OCCUPC", 617, 3, "Usual Occupation--Code (assigned downstream)"),
        FieldDef::dict(86, "INDUST", 620, 40, "Kind of Business/Industry--Literal", "usual_work", "industry"),
        FieldDef::noop(87, "INDUSTC", 660, 3, "Kind of Business/Industry--Code (assigned downstream)"),
        FieldDef::plain(88, "BCNO", 663, 6, "Infant Death/Birth Linking--Birth Certificate Number", "birth_certificate_number").numeric(),
        FieldDef::plain(89, "IDOB_YR", 669, 4, "Infant Death/Birth Linking--Year of Birth", "linked_birth_year").numeric(),
        FieldDef::plain(90, "BSTATE", 673, 2, "Infant Death/Birth Linking--Birth State", "birth_record_state"),
        FieldDef::plain(91, "TOBAC", 675, 1, "Did Tobacco Use Contribute to Death?", "tobacco_use"),
        FieldDef::plain(92, "PREG", 676, 1, "Pregnancy Status", "pregnancy_status"),
        FieldDef::plain(93, "PREG_BYPASS", 677, 1, "Pregnancy Status--Edit Flag", "pregnancy_bypass_flag"),
        FieldDef::date(94, "DOI_MO", 678, 2, "Date of Injury--Month", "injury_date", Month),
        FieldDef::date(95, "DOI_DY", 680, 2, "Date of Injury--Day", "injury_date", Day),
        FieldDef::date(96, "DOI_YR", 682, 4, "Date of Injury--Year", "injury_date", Year),
        FieldDef::plain(97, "TOI_HR", 686, 4, "Time of Injury", "injury_time"),
        FieldDef::plain(98, "WORKINJ", 690, 1, "Injury at Work?", "injury_at_work"),
        FieldDef::plain(99, "CERTL", 691, 30, "Title of Certifier", "certifier_title"),
        FieldDef::plain(100, "INACT", 721, 1, "Activity at Time of Death", "activity_code"),
        FieldDef::plain(101, "AUXNO2", 722, 12, "Auxiliary State File Number--Second", "state_auxiliary_id_2"),
        FieldDef::plain(102, "STATESP", 734, 30, "State Specific Data", "state_specific_data"),
        FieldDef::date(103, "SUR_MO", 764, 2, "Surgery Date--Month", "surgery_date", Month),
        FieldDef::date(104, "SUR_DY", 766, 2, "Surgery Date--Day", "surgery_date", Day),
        FieldDef::date(105, "SUR_YR", 768, 4, "Surgery Date--Year", "surgery_date", Year),
        FieldDef::plain(106, "TOI_UNIT", 772, 1, "Time of Injury Unit", "injury_time_unit"),
        FieldDef::plain(107, "ARMEDF", 775, 1, "Decedent Ever Served in Armed Forces?", "armed_forces_service"),
        FieldDef::plain(108, "DINSTI", 776, 30, "Death Institution Name", "death_institution_name"),
        FieldDef::dict(109, "ADDRESS_D", 806, 50, "Place of Death--Street and Number", "death_location", "street"),
        FieldDef::dict(110, "STNUM_D", 856, 10, "Place of Death--Street Number", "death_location", "street_number"),
        FieldDef::dict(111, "PREDIR_D", 866, 10, "Place of Death--Pre Directional", "death_location", "street_predirectional"),
        FieldDef::dict(112, "STNAME_D", 876, 50, "Place of Death--Street Name", "death_location", "street_name"),
        FieldDef::dict(113, "STDESIG_D", 926, 10, "Place of Death--Street Designator", "death_location", "street_designator"),
        FieldDef::dict(114, "POSTDIR_D", 936, 10, "Place of Death--Post Directional", "death_location", "street_postdirectional"),
        FieldDef::dict(115, "CITYTEXT_D", 946, 28, "Place of Death--City/Town Literal", "death_location", "city"),
        FieldDef::dict(116, "STATETEXT_D", 974, 28, "Place of Death--State Literal", "death_location", "state"),
        FieldDef::dict(117, "ZIP9_D", 1002, 9, "Place of Death--Zip", "death_location", "zip"),
        FieldDef::dict(118, "COUNTYTEXT_D", 1011, 28, "Place of Death--County Literal", "death_location", "county"),
        FieldDef::geo(119, "CITYCODE_D", 1039, 5, "Place of Death--City Code", "death_location", GeoKind::City, true),
        FieldDef::dict(120, "COUNTYTEXT_R", 1044, 28, "Decedent's Residence--County Literal", "residence", "county"),
        FieldDef::dict(121, "STNUM_R", 1072, 10, "Decedent's Residence--Street Number", "residence", "street_number"),
        FieldDef::dict(122, "PREDIR_R", 1082, 10, "Decedent's Residence--Pre Directional", "residence", "street_predirectional"),
        FieldDef::dict(123, "STNAME_R", 1092, 50, "Decedent's Residence--Street Name", "residence", "street_name"),
        FieldDef::dict(124, "STDESIG_R", 1142, 10, "Decedent's Residence--Street Designator", "residence", "street_designator"),
        FieldDef::dict(125, "POSTDIR_R", 1152, 10, "Decedent's Residence--Post Directional", "residence", "street_postdirectional"),
        FieldDef::dict(126, "UNITNUM_R", 1162, 7, "Decedent's Residence--Unit Number", "residence", "unit_number"),
        FieldDef::dict(127, "CITYTEXT_R", 1169, 28, "Decedent's Residence--City/Town Literal", "residence", "city"),
        FieldDef::dict(128, "ZIP9_R", 1197, 9, "Decedent's Residence--Zip", "residence", "zip"),
        FieldDef::dict(129, "STATETEXT_R", 1206, 28, "Decedent's Residence--State Literal", "residence", "state"),
        FieldDef::dict(130, "COUNTRYTEXT_R", 1234, 28, "Decedent's Residence--Country Literal", "residence", "country"),
        FieldDef::dict(131, "ADDRESS_R", 1262, 50, "Decedent's Residence--Street and Number", "residence", "street"),
        FieldDef::dict(132, "CERTFIRST", 1312, 50, "Certifier's Name--Given", "certifier_name", "given"),
        FieldDef::dict(133, "CERTMIDDLE", 1362, 1, "Certifier's Name--Middle Initial", "certifier_name", "middle_initial"),
        FieldDef::dict(134, "CERTLAST", 1363, 50, "Certifier's Name--Last", "certifier_name", "family"),
        FieldDef::dict(135, "CERTSUFFIX", 1413, 10, "Certifier's Name--Suffix", "certifier_name", "suffix"),
        FieldDef::dict(136, "CERTADDRESS", 1423, 50, "Certifier's Address--Street and Number", "certifier_address", "street"),
        FieldDef::dict(137, "CERTCITYTEXT", 1473, 28, "Certifier's Address--City Literal", "certifier_address", "city"),
        FieldDef::dict(138, "CERTSTATE", 1501, 28, "Certifier's Address--State Literal", "certifier_address", "state"),
        FieldDef::geo(139, "CERTSTATECD", 1529, 2, "Certifier's Address--State Code", "certifier_address", GeoKind::State, true),
        FieldDef::dict(140, "CERTZIP", 1531, 9, "Certifier's Address--Zip", "certifier_address", "zip"),
        FieldDef::date(141, "CERTDATE_MO", 1540, 2, "Certifier Signed--Month", "certified_date", Month),
        FieldDef::date(142, "CERTDATE_DY", 1542, 2, "Certifier Signed--Day", "certified_date", Day),
        FieldDef::date(143, "CERTDATE_YR", 1544, 4, "Certifier Signed--Year", "certified_date", Year),
        FieldDef::date(144, "DOR_YR", 1548, 4, "Date of Registration--Year", "registration_date", Year),
        FieldDef::date(145, "DOR_MO", 1552, 2, "Date of Registration--Month", "registration_date", Month),
        FieldDef::date(146, "DOR_DY", 1554, 2, "Date of Registration--Day", "registration_date", Day),
        FieldDef::plain(147, "MANNER", 1556, 1, "Manner of Death", "manner_of_death"),
        FieldDef::plain(148, "INT_REJ", 1557, 1, "Intentional Reject", "intentional_reject"),
        FieldDef::plain(149, "SYS_REJ", 1558, 1, "ACME System Reject Code", "system_reject"),
        FieldDef::plain(150, "INJPL", 1559, 1, "Place of Injury Code", "injury_place_code"),
        FieldDef::plain(151, "MAN_UC", 1560, 5, "Manual Underlying Cause", "manual_underlying_cause"),
        FieldDef::plain(152, "ACME_UC", 1565, 5, "ACME Underlying Cause", "underlying_cause_of_death"),
        FieldDef::plain(153, "EAC", 1570, 160, "Entity Axis Codes", "entity_axis_codes"),
        FieldDef::plain(154, "TRX_FLG", 1730, 1, "Transax Conversion Flag", "transax_conversion_flag"),
        FieldDef::plain(155, "RAC", 1731, 100, "Record Axis Codes", "record_axis_codes"),
        FieldDef::autopsy(156, "AUTOP", 1831, 1, "Was Autopsy Performed?", "autopsy_performed"),
        FieldDef::plain(157, "AUTOPF", 1832, 1, "Were Autopsy Findings Available?", "autopsy_findings_available"),
        FieldDef::dict(158, "POILITRL", 1833, 50, "Place of Injury--Literal", "injury_location", "description"),
        FieldDef::plain(159, "HOWINJ", 1883, 250, "Describe How Injury Occurred", "injury_description"),
        FieldDef::plain(160, "TRANSPRT", 2133, 30, "If Transportation Accident, Specify", "transportation_role"),
        FieldDef::cause_text(161, "COD1A", 2163, 120, "Cause of Death Part I Line a", 1),
        FieldDef::cause_interval(162, "INTERVAL1A", 2283, 20, "Cause of Death Part I Interval a", 1),
        FieldDef::cause_text(163, "COD1B", 2303, 120, "Cause of Death Part I Line b", 2),
        FieldDef::cause_interval(164, "INTERVAL1B", 2423, 20, "Cause of Death Part I Interval b", 2),
        FieldDef::cause_text(165, "COD1C", 2443, 120, "Cause of Death Part I Line c", 3),
        FieldDef::cause_interval(166, "INTERVAL1C", 2563, 20, "Cause of Death Part I Interval c", 3),
        FieldDef::cause_text(167, "COD1D", 2583, 120, "Cause of Death Part I Line d", 4),
        FieldDef::cause_interval(168, "INTERVAL1D", 2703, 20, "Cause of Death Part I Interval d", 4),
        FieldDef::plain(169, "OTHERCONDITION", 2723, 240, "Cause of Death Part II", "contributing_conditions"),
        FieldDef::dict(170, "DMAIDEN", 2963, 50, "Decedent's Maiden Name", "name", "maiden"),
        FieldDef::dict(171, "DBPLACECITY", 3013, 28, "Decedent's Birth Place--City Literal", "birth_place", "city"),
        FieldDef::dict(172, "DBPLACESTATE", 3041, 28, "Decedent's Birth Place--State Literal", "birth_place", "state"),
        FieldDef::dict(173, "DBPLACECOUNTRY", 3069, 28, "Decedent's Birth Place--Country Literal", "birth_place", "country"),
        FieldDef::dict(174, "DISPCITY", 3097, 28, "Disposition Place--City Literal", "disposition_location", "city"),
        FieldDef::dict(175, "DISPSTATE", 3125, 28, "Disposition Place--State Literal", "disposition_location", "state"),
        FieldDef::geo(176, "DISPSTATECD", 3153, 2, "Disposition Place--State Code", "disposition_location", GeoKind::State, true),
        FieldDef::plain(177, "FUNFACNAME", 3155, 100, "Funeral Facility Name", "funeral_facility_name"),
        FieldDef::dict(178, "FUNFACADDRESS", 3255, 100, "Funeral Facility--Street and Number", "funeral_facility", "street"),
        FieldDef::dict(179, "FUNCITYTEXT", 3355, 28, "Funeral Facility--City Literal", "funeral_facility", "city"),
        FieldDef::dict(180, "FUNSTATE", 3383, 28, "Funeral Facility--State Literal", "funeral_facility", "state"),
        FieldDef::geo(181, "FUNSTATECD", 3411, 2, "Funeral Facility--State Code", "funeral_facility", GeoKind::State, true),
        FieldDef::dict(182, "FUNZIP", 3413, 9, "Funeral Facility--Zip", "funeral_facility", "zip"),
        FieldDef::date(183, "PPDATESIGNED_MO", 3422, 2, "Pronounced Dead--Month", "pronounced_date", Month),
        FieldDef::date(184, "PPDATESIGNED_DY", 3424, 2, "Pronounced Dead--Day", "pronounced_date", Day),
        FieldDef::date(185, "PPDATESIGNED_YR", 3426, 4, "Pronounced Dead--Year", "pronounced_date", Year),
        FieldDef::plain(186, "PPTIME", 3430, 4, "Pronounced Dead--Time", "pronounced_time"),
        FieldDef::plain(187, "REPLACE", 3434, 1, "Replacement Record Flag", "replacement_record"),
        FieldDef::plain(188, "SPOUSELV", 3435, 1, "Spouse Living at Decedent's Death?", "spouse_alive"),
        FieldDef::dict(189, "SPOUSEF", 3436, 50, "Spouse's Name--Given", "spouse_name", "given"),
        FieldDef::dict(190, "SPOUSEMIDNAME", 3486, 50, "Spouse's Name--Middle", "spouse_name", "middle"),
        FieldDef::dict(191, "SPOUSEL", 3536, 50, "Spouse's Name--Last", "spouse_name", "family"),
        FieldDef::dict(192, "SPOUSESUFFIX", 3586, 10, "Spouse's Name--Suffix", "spouse_name", "suffix"),
        FieldDef::dict(193, "DDADF", 3596, 50, "Father's Name--Given", "father_name", "given"),
        FieldDef::dict(194, "DDADMID", 3646, 50, "Father's Name--Middle", "father_name", "middle"),
        FieldDef::dict(195, "FATHERSUFFIX", 3696, 10, "Father's Name--Suffix", "father_name", "suffix"),
        FieldDef::dict(196, "DMOMF", 3706, 50, "Mother's Name--Given", "mother_name", "given"),
        FieldDef::dict(197, "DMOMMID", 3756, 50, "Mother's Name--Middle", "mother_name", "middle"),
        FieldDef::dict(198, "DMOMMDN", 3806, 50, "Mother's Maiden Surname", "mother_name", "maiden"),
        FieldDef::dict(199, "MOTHERSSUFFIX", 3856, 10, "Mother's Name--Suffix", "mother_name", "suffix"),
        FieldDef::dict(200, "DMIDDLE", 3866, 50, "Decedent's Legal Name--Middle", "name", "middle"),
        FieldDef::dict(201, "ADDRESS_I", 3916, 50, "Place of Injury--Street and Number", "injury_location", "street"),
        FieldDef::dict(202, "STNUM_I", 3966, 10, "Place of Injury--Street Number", "injury_location", "street_number"),
        FieldDef::dict(203, "PREDIR_I", 3976, 10, "Place of Injury--Pre Directional", "injury_location", "street_predirectional"),
        FieldDef::dict(204, "STNAME_I", 3986, 30, "Place of Injury--Street Name", "injury_location", "street_name"),
        FieldDef::dict(205, "STDESIG_I", 4016, 10, "Place of Injury--Street Designator", "injury_location", "street_designator"),
        FieldDef::dict(206, "POSTDIR_I", 4026, 10, "Place of Injury--Post Directional", "injury_location", "street_postdirectional"),
        FieldDef::dict(207, "UNITNUM_I", 4036, 7, "Place of Injury--Unit Number", "injury_location", "unit_number"),
        FieldDef::dict(208, "CITYTEXT_I", 4043, 28, "Place of Injury--City/Town Literal", "injury_location", "city"),
        FieldDef::geo(209, "CITYCODE_I", 4071, 5, "Place of Injury--City Code", "injury_location", GeoKind::City, true),
        FieldDef::dict(210, "COUNTYTEXT_I", 4076, 28, "Place of Injury--County Literal", "injury_location", "county"),
        FieldDef::geo(211, "COUNTYCODE_I", 4104, 3, "Place of Injury--County Code", "injury_location", GeoKind::County, true),
        FieldDef::dict(212, "STATETEXT_I", 4107, 28, "Place of Injury--State Literal", "injury_location", "state"),
        FieldDef::geo(213, "STATECODE_I", 4135, 2, "Place of Injury--State Code", "injury_location", GeoKind::State, true),
        FieldDef::dict(214, "COUNTRYTEXT_I", 4137, 28, "Place of Injury--Country Literal", "injury_location", "country"),
        FieldDef::geo(215, "COUNTRYCODE_I", 4165, 2, "Place of Injury--Country Code", "injury_location", GeoKind::Country, true),
        FieldDef::dict(216, "ZIP9_I", 4167, 9, "Place of Injury--Zip", "injury_location", "zip"),
        FieldDef::dict(217, "LONG_I", 4176, 17, "Place of Injury--Longitude", "injury_location", "longitude"),
        FieldDef::dict(218, "LAT_I", 4193, 17, "Place of Injury--Latitude", "injury_location", "latitude"),
        FieldDef::dict(219, "UNITNUM_D", 4210, 7, "Place of Death--Unit Number", "death_location", "unit_number"),
        FieldDef::dict(220, "COUNTRYTEXT_D", 4217, 28, "Place of Death--Country Literal", "death_location", "country"),
        FieldDef::geo(221, "COUNTRYCODE_D", 4245, 2, "Place of Death--Country Code", "death_location", GeoKind::Country, true),
        FieldDef::dict(222, "LONG_D", 4247, 17, "Place of Death--Longitude", "death_location", "longitude"),
        FieldDef::dict(223, "LAT_D", 4264, 17, "Place of Death--Latitude", "death_location", "latitude"),
        FieldDef::dict(224, "CERTSTNUM", 4281, 10, "Certifier's Address--Street Number", "certifier_address", "street_number"),
        FieldDef::dict(225, "CERTPREDIR", 4291, 10, "Certifier's Address--Pre Directional", "certifier_address", "street_predirectional"),
        FieldDef::dict(226, "CERTSTRNAME", 4301, 30, "Certifier's Address--Street Name", "certifier_address", "street_name"),
        FieldDef::dict(227, "CERTSTRDESIG", 4331, 10, "Certifier's Address--Street Designator", "certifier_address", "street_designator"),
        FieldDef::dict(228, "CERTPOSTDIR", 4341, 10, "Certifier's Address--Post Directional", "certifier_address", "street_postdirectional"),
        FieldDef::dict(229, "CERTUNITNUM", 4351, 7, "Certifier's Address--Unit Number", "certifier_address", "unit_number"),
        FieldDef::dict(230, "FUNFACSTNUM", 4358, 10, "Funeral Facility--Street Number", "funeral_facility", "street_number"),
        FieldDef::dict(231, "FUNFACPREDIR", 4368, 10, "Funeral Facility--Pre Directional", "funeral_facility", "street_predirectional"),
        FieldDef::dict(232, "FUNFACSTRNAME", 4378, 30, "Funeral Facility--Street Name", "funeral_facility", "street_name"),
        FieldDef::dict(233, "FUNFACSTRDESIG", 4408, 10, "Funeral Facility--Street Designator", "funeral_facility", "street_designator"),
        FieldDef::dict(234, "FUNFACPOSTDIR", 4418, 10, "Funeral Facility--Post Directional", "funeral_facility", "street_postdirectional"),
        FieldDef::dict(235, "FUNFACUNITNUM", 4428, 7, "Funeral Facility--Unit Number", "funeral_facility", "unit_number"),
        FieldDef::geo(236, "DISPCITYCODE", 4435, 5, "Disposition Place--City Code", "disposition_location", GeoKind::City, true),
        FieldDef::noop(237, "DETHNICE", 4440, 3, "Decedent of Hispanic Origin?--Code (assigned downstream)"),
        FieldDef::noop(238, "DETHNIC5C", 4443, 3, "Hispanic Origin Literal--Code (assigned downstream)"),
        FieldDef::noop(239, "OCCUPC4", 4446, 4, "Usual Occupation--4-digit Code (assigned downstream)"),
        FieldDef::noop(240, "INDUSTC4", 4450, 4, "Kind of Business/Industry--4-digit Code (assigned downstream)"),
    ]);

    // Reserved placeholder block closing out the record.
    let place_ones = ["PLACE1_1", "PLACE1_2", "PLACE1_3", "PLACE1_4", "PLACE1_5", "PLACE1_6"];
    for (idx, key) in place_ones.into_iter().enumerate() {
        t.push(FieldDef::noop(241 + idx as u16, key, 4951 + idx, 1, "Reserved"));
    }
    let place_eights = ["PLACE8_1", "PLACE8_2", "PLACE8_3"];
    for (idx, key) in place_eights.into_iter().enumerate() {
        t.push(FieldDef::noop(247 + idx as u16, key, 4957 + idx * 8, 8, "Reserved"));
    }
    t.push(FieldDef::noop(250, "PLACE20", 4981, 20, "Reserved"));
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, Justify};

    #[test]
    fn table_declares_known_slots() {
        let table = fields();
        let dod_yr = table.iter().find(|f| f.key == "DOD_YR").unwrap();
        assert_eq!((dod_yr.position, dod_yr.length), (1, 4));
        let fileno = table.iter().find(|f| f.key == "FILENO").unwrap();
        assert_eq!((fileno.position, fileno.length), (7, 6));
        assert_eq!(fileno.justify, Justify::RightZero);
        let cod1a = table.iter().find(|f| f.key == "COD1A").unwrap();
        assert_eq!((cod1a.position, cod1a.length), (2163, 120));
    }

    #[test]
    fn coded_geography_decodes_after_its_scope() {
        let table = fields();
        let state = table.iter().find(|f| f.key == "STATEC").unwrap();
        let county = table.iter().find(|f| f.key == "COUNTYC").unwrap();
        let city = table.iter().find(|f| f.key == "CITYC").unwrap();
        assert!(state.priority < county.priority);
        assert!(county.priority < city.priority);
    }

    #[test]
    fn table_carries_the_full_layout() {
        let table = fields();
        assert_eq!(table.len(), 250);
        let last_end = table.iter().map(|f| f.position + f.length - 1).max().unwrap();
        assert_eq!(last_end, 5000);
        let spouse = table.iter().find(|f| f.key == "SPOUSEF").unwrap();
        assert_eq!((spouse.position, spouse.length), (3436, 50));
        let injury_state = table.iter().find(|f| f.key == "STATECODE_I").unwrap();
        let injury_city = table.iter().find(|f| f.key == "CITYCODE_I").unwrap();
        assert!(injury_state.priority < injury_city.priority);
    }

    #[test]
    fn noop_slots_map_to_nothing() {
        let table = fields();
        let occupc = table.iter().find(|f| f.key == "OCCUPC").unwrap();
        assert_eq!(occupc.kind, FieldKind::Noop);
    }
}
