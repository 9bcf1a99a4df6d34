//! Loading lookup tables from CSV files.

use std::fs;

use tempfile::TempDir;
use vre_geo::{GeoError, GeoRegistry};

fn write_tables(dir: &TempDir) {
    fs::write(
        dir.path().join("states.csv"),
        "name,code\nMassachusetts,MA\nVermont,VT\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("countries.csv"),
        "name,code\nUnited States,US\nCanada,CA\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("counties.csv"),
        "state,code,name\nMA,017,Middlesex\nMA,025,Suffolk\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("places.csv"),
        "state,county,code,name\nMA,017,11000,Cambridge\n",
    )
    .unwrap();
}

#[test]
fn loads_all_four_tables() {
    let dir = TempDir::new().unwrap();
    write_tables(&dir);

    let registry = GeoRegistry::from_csv_dir(dir.path()).expect("load tables");
    assert_eq!(registry.state_code("Vermont"), Some("VT"));
    assert_eq!(registry.country_name("CA"), Some("Canada"));
    assert_eq!(registry.county_name("MA", "025"), Some("Suffolk"));
    assert_eq!(registry.place_code("ma", "017", "CAMBRIDGE"), Some("11000"));
}

#[test]
fn missing_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("states.csv"), "name,code\nMaine,ME\n").unwrap();

    let registry = GeoRegistry::from_csv_dir(dir.path()).expect("load partial dir");
    assert_eq!(registry.state_code("Maine"), Some("ME"));
    assert_eq!(registry.county_code("ME", "Cumberland"), None);
}

#[test]
fn missing_column_is_reported_with_row() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("states.csv"),
        "name,code\nMassachusetts,MA\nVermont,\n",
    )
    .unwrap();

    let err = GeoRegistry::from_csv_dir(dir.path()).expect_err("blank code should fail");
    match err {
        GeoError::MissingColumn { row, column, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "code");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}
