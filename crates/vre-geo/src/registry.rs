//! The geographic lookup registry.
//!
//! Translates human-readable place names to the coded abbreviations used by
//! the fixed-width formats and back. Matching is case-insensitive and
//! whitespace-tolerant; scoped lookups (county within state, place within
//! state and county) return `None` when the scope is missing rather than
//! erroring, since legacy data is known to be imperfect.
//!
//! The registry is built once, then shared read-only (typically behind an
//! `Arc`) across concurrent encode/decode calls.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{GeoError, Result};
use crate::tables;

/// One name <-> code table with case-insensitive indexes.
#[derive(Debug, Clone, Default)]
struct CodeTable {
    by_name: BTreeMap<String, usize>,
    by_code: BTreeMap<String, usize>,
    entries: Vec<(String, String)>,
}

impl CodeTable {
    fn insert(&mut self, name: &str, code: &str) {
        let name = name.trim();
        let code = code.trim();
        let idx = self.entries.len();
        self.entries.push((name.to_string(), code.to_string()));
        self.by_name.entry(name.to_ascii_uppercase()).or_insert(idx);
        self.by_code.entry(code.to_ascii_uppercase()).or_insert(idx);
    }

    fn code(&self, name: &str) -> Option<&str> {
        let idx = *self.by_name.get(&name.trim().to_ascii_uppercase())?;
        Some(self.entries[idx].1.as_str())
    }

    fn name(&self, code: &str) -> Option<&str> {
        let idx = *self.by_code.get(&code.trim().to_ascii_uppercase())?;
        Some(self.entries[idx].0.as_str())
    }
}

/// Immutable geographic lookup tables.
#[derive(Debug, Clone, Default)]
pub struct GeoRegistry {
    states: CodeTable,
    countries: CodeTable,
    counties: BTreeMap<String, CodeTable>,
    places: BTreeMap<(String, String), CodeTable>,
}

impl GeoRegistry {
    /// An empty registry. Useful as a base for custom loads and in tests
    /// exercising graceful-miss behavior.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in tables: all states/territories, the shipped country
    /// list, and the county/place entries bundled with the crate.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for (name, code) in tables::STATES {
            registry.add_state(name, code);
        }
        for (name, code) in tables::COUNTRIES {
            registry.add_country(name, code);
        }
        for (state, code, name) in tables::COUNTIES {
            registry.add_county(state, name, code);
        }
        for (state, county, code, name) in tables::PLACES {
            registry.add_place(state, county, name, code);
        }
        registry
    }

    /// Load tables from a directory holding `states.csv`, `countries.csv`,
    /// `counties.csv`, and `places.csv`. Missing files are skipped so a
    /// partial directory loads what it has.
    pub fn from_csv_dir(dir: &Path) -> Result<Self> {
        let mut registry = Self::default();

        let states = dir.join("states.csv");
        if states.exists() {
            for_each_row(&states, &["name", "code"], |row| {
                registry.add_state(&row[0], &row[1]);
            })?;
        }
        let countries = dir.join("countries.csv");
        if countries.exists() {
            for_each_row(&countries, &["name", "code"], |row| {
                registry.add_country(&row[0], &row[1]);
            })?;
        }
        let counties = dir.join("counties.csv");
        if counties.exists() {
            for_each_row(&counties, &["state", "code", "name"], |row| {
                registry.add_county(&row[0], &row[2], &row[1]);
            })?;
        }
        let places = dir.join("places.csv");
        if places.exists() {
            for_each_row(&places, &["state", "county", "code", "name"], |row| {
                registry.add_place(&row[0], &row[1], &row[3], &row[2]);
            })?;
        }

        Ok(registry)
    }

    pub fn add_state(&mut self, name: &str, code: &str) {
        self.states.insert(name, code);
    }

    pub fn add_country(&mut self, name: &str, code: &str) {
        self.countries.insert(name, code);
    }

    pub fn add_county(&mut self, state_code: &str, name: &str, code: &str) {
        self.counties
            .entry(scope_key(state_code))
            .or_default()
            .insert(name, code);
    }

    pub fn add_place(&mut self, state_code: &str, county_code: &str, name: &str, code: &str) {
        self.places
            .entry((scope_key(state_code), scope_key(county_code)))
            .or_default()
            .insert(name, code);
    }

    // --- lookups ---

    pub fn state_code(&self, name: &str) -> Option<&str> {
        self.states.code(name)
    }

    pub fn state_name(&self, code: &str) -> Option<&str> {
        self.states.name(code)
    }

    pub fn country_code(&self, name: &str) -> Option<&str> {
        self.countries.code(name)
    }

    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.countries.name(code)
    }

    pub fn county_code(&self, state_code: &str, name: &str) -> Option<&str> {
        self.counties.get(&scope_key(state_code))?.code(name)
    }

    pub fn county_name(&self, state_code: &str, code: &str) -> Option<&str> {
        self.counties.get(&scope_key(state_code))?.name(code)
    }

    pub fn place_code(&self, state_code: &str, county_code: &str, name: &str) -> Option<&str> {
        self.places
            .get(&(scope_key(state_code), scope_key(county_code)))?
            .code(name)
    }

    pub fn place_name(&self, state_code: &str, county_code: &str, code: &str) -> Option<&str> {
        self.places
            .get(&(scope_key(state_code), scope_key(county_code)))?
            .name(code)
    }
}

fn scope_key(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}

/// Read a headed CSV and hand each row's requested columns to `apply`.
fn for_each_row(
    path: &Path,
    columns: &[&'static str],
    mut apply: impl FnMut(Vec<String>),
) -> Result<()> {
    let bytes = std::fs::read(path).map_err(|e| GeoError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| GeoError::csv(path, e.to_string()))?
        .clone();

    for (row_idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| GeoError::csv(path, e.to_string()))?;
        let mut values = Vec::with_capacity(columns.len());
        for column in columns {
            let value = headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(column))
                .and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(GeoError::MissingColumn {
                    path: path.to_path_buf(),
                    row: row_idx + 1,
                    column,
                })?;
            values.push(value.to_string());
        }
        apply(values);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_lookup_is_case_insensitive() {
        let registry = GeoRegistry::builtin();
        assert_eq!(registry.state_code("massachusetts"), Some("MA"));
        assert_eq!(registry.state_code(" MASSACHUSETTS "), Some("MA"));
        assert_eq!(registry.state_name("ma"), Some("Massachusetts"));
    }

    #[test]
    fn unknown_state_is_none() {
        let registry = GeoRegistry::builtin();
        assert_eq!(registry.state_code("Atlantis"), None);
        assert_eq!(registry.state_name("ZZ"), None);
    }

    #[test]
    fn county_lookup_requires_state_scope() {
        let registry = GeoRegistry::builtin();
        assert_eq!(registry.county_code("MA", "Middlesex"), Some("017"));
        assert_eq!(registry.county_name("MA", "017"), Some("Middlesex"));
        // Missing or wrong scope degrades to None, never errors.
        assert_eq!(registry.county_code("", "Middlesex"), None);
        assert_eq!(registry.county_code("ZZ", "Middlesex"), None);
    }

    #[test]
    fn place_lookup_requires_both_scopes() {
        let registry = GeoRegistry::builtin();
        assert_eq!(registry.place_code("MA", "017", "Cambridge"), Some("11000"));
        assert_eq!(registry.place_name("MA", "017", "11000"), Some("Cambridge"));
        assert_eq!(registry.place_code("MA", "", "Cambridge"), None);
    }

    #[test]
    fn country_lookup() {
        let registry = GeoRegistry::builtin();
        assert_eq!(registry.country_code("United States"), Some("US"));
        assert_eq!(registry.country_name("us"), Some("United States"));
    }

    #[test]
    fn empty_registry_misses_everything() {
        let registry = GeoRegistry::empty();
        assert_eq!(registry.state_code("Massachusetts"), None);
    }
}
