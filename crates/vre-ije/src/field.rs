//! Declarative field descriptors and their record accessors.
//!
//! Each dialect is an ordered table of [`FieldDef`] values built once at
//! startup. The descriptor carries the wire slot (1-based position, length,
//! justification) and a [`FieldKind`] naming the canonical datum it maps
//! to; `FieldKind::read`/`FieldKind::write` are the table-driven accessor
//! pair the drivers dispatch through.

use std::fmt;

use tracing::warn;

use vre_geo::GeoRegistry;
use vre_model::{DatePart, DeathRecord};

/// Fixed record length of the legacy mortality dialect.
pub const MORTALITY_RECORD_LEN: usize = 5000;

/// Fixed record length of the cancer-registry dialect.
pub const CANCER_RECORD_LEN: usize = 24194;

/// The two fixed-width dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Legacy mortality interchange layout, 5000 characters.
    Mortality,
    /// Cancer-registry layout, 24194 characters.
    CancerRegistry,
}

impl Dialect {
    pub fn record_len(&self) -> usize {
        match self {
            Dialect::Mortality => MORTALITY_RECORD_LEN,
            Dialect::CancerRegistry => CANCER_RECORD_LEN,
        }
    }

    /// The dialect's field table, built on first use.
    pub fn fields(&self) -> &'static [FieldDef] {
        match self {
            Dialect::Mortality => crate::fields::mortality::fields(),
            Dialect::CancerRegistry => crate::fields::cancer::fields(),
        }
    }

    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|f| f.key == key)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Mortality => f.write_str("mortality"),
            Dialect::CancerRegistry => f.write_str("cancer-registry"),
        }
    }
}

/// Slot justification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Free text: left-justified, space-padded right.
    Left,
    /// Numeric: right-justified, zero-padded left.
    RightZero,
}

/// Geographic part kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoKind {
    State,
    County,
    City,
    Country,
    InsideCityLimits,
}

impl GeoKind {
    /// Dictionary key the part lives under on the canonical record.
    pub fn dict_key(&self) -> &'static str {
        match self {
            GeoKind::State => "state",
            GeoKind::County => "county",
            GeoKind::City => "city",
            GeoKind::Country => "country",
            GeoKind::InsideCityLimits => "inside_city_limits",
        }
    }

    /// Default decode priority. Scoped parts decode after the parts that
    /// scope them: state before county, county before city.
    fn default_priority(&self) -> u8 {
        match self {
            GeoKind::InsideCityLimits => 0,
            GeoKind::State | GeoKind::Country => 1,
            GeoKind::County => 2,
            GeoKind::City => 3,
        }
    }
}

/// What a field maps to on the canonical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar string field.
    Plain { name: &'static str },
    /// One component of a composite `YYYY-MM-DD` date scalar.
    DatePart {
        name: &'static str,
        part: DatePart,
    },
    /// Named part of a dictionary value.
    Dict {
        name: &'static str,
        key: &'static str,
    },
    /// Geographic part of a dictionary value; `coded` fields translate
    /// through the [`GeoRegistry`].
    Geo {
        name: &'static str,
        geo: GeoKind,
        coded: bool,
    },
    /// Literal text of a cause-of-death line (1-based).
    CauseText { line: usize },
    /// Onset interval of a cause-of-death line (1-based).
    CauseInterval { line: usize },
    /// Tri-state autopsy status: `1` yes, `2` no, `9` unknown. An absent
    /// datum encodes blank; an unrecognized status encodes unknown rather
    /// than a silent "no".
    Autopsy { name: &'static str },
    /// Always encodes the given value; input is ignored.
    Constant(&'static str),
    /// Wire-compatibility filler: accepts anything, encodes blank.
    Noop,
}

/// Name of the list field holding the certificate's cause lines.
pub const CAUSE_OF_DEATH: &str = "cause_of_death";

impl FieldKind {
    /// Read the canonical value for encoding; `None` means the datum is
    /// absent and the slot gets its deterministic default fill.
    pub fn read(&self, record: &DeathRecord, geo: &GeoRegistry) -> Option<String> {
        match *self {
            FieldKind::Plain { name } => record.scalar(name).map(str::to_string),
            FieldKind::DatePart { name, part } => {
                record.date_part(name, part).map(str::to_string)
            }
            FieldKind::Dict { name, key } => record.dict_value(name, key).map(str::to_string),
            FieldKind::Geo {
                name,
                geo: kind,
                coded,
            } => geo_read(record, geo, name, kind, coded),
            FieldKind::CauseText { line } => record
                .cause_line(CAUSE_OF_DEATH, line)
                .map(|l| l.text.clone())
                .filter(|text| !text.is_empty()),
            FieldKind::CauseInterval { line } => record
                .cause_line(CAUSE_OF_DEATH, line)
                .map(|l| l.interval.clone())
                .filter(|interval| !interval.is_empty()),
            FieldKind::Autopsy { name } => record
                .scalar(name)
                .map(|status| autopsy_code(status).to_string()),
            FieldKind::Constant(value) => Some(value.to_string()),
            FieldKind::Noop => None,
        }
    }

    /// Write a decoded (already trimmed, non-empty) value onto the record.
    pub fn write(&self, record: &mut DeathRecord, geo: &GeoRegistry, raw: &str) {
        match *self {
            FieldKind::Plain { name } => record.set_scalar(name, raw),
            FieldKind::DatePart { name, part } => record.set_date_part(name, part, raw),
            FieldKind::Dict { name, key } => record.set_dict_value(name, key, raw),
            FieldKind::Geo {
                name,
                geo: kind,
                coded,
            } => geo_write(record, geo, name, kind, coded, raw),
            FieldKind::CauseText { line } => record.set_cause_text(CAUSE_OF_DEATH, line, raw),
            FieldKind::CauseInterval { line } => {
                record.set_cause_interval(CAUSE_OF_DEATH, line, raw);
            }
            FieldKind::Autopsy { name } => {
                record.set_scalar(name, autopsy_status(raw));
            }
            FieldKind::Constant(_) | FieldKind::Noop => {}
        }
    }
}

fn autopsy_code(status: &str) -> &'static str {
    match status {
        "yes" => "1",
        "no" => "2",
        _ => "9",
    }
}

fn autopsy_status(code: &str) -> &'static str {
    match code {
        "1" => "yes",
        "2" => "no",
        _ => "unknown",
    }
}

/// Resolve the two-letter state code scoping a dict's county/place parts.
///
/// The dict's own `state` part (name or code) wins; the death-location dict
/// additionally falls back to the record's jurisdiction id, which is how
/// the mortality layout scopes its county-of-death slot.
fn state_scope(record: &DeathRecord, name: &str, geo: &GeoRegistry) -> Option<String> {
    let value = record.dict_value(name, "state").or_else(|| {
        if name == "death_location" {
            record.scalar("jurisdiction_id")
        } else {
            None
        }
    })?;
    as_state_code(value, geo)
}

fn as_state_code(value: &str, geo: &GeoRegistry) -> Option<String> {
    let trimmed = value.trim();
    if let Some(code) = geo.state_code(trimmed) {
        return Some(code.to_string());
    }
    if trimmed.chars().count() == 2 {
        return Some(trimmed.to_ascii_uppercase());
    }
    None
}

fn geo_read(
    record: &DeathRecord,
    geo: &GeoRegistry,
    name: &str,
    kind: GeoKind,
    coded: bool,
) -> Option<String> {
    let value = record.dict_value(name, kind.dict_key())?;
    if !coded {
        return Some(value.to_string());
    }
    let code = match kind {
        GeoKind::InsideCityLimits => Some(value.to_string()),
        GeoKind::State => as_state_code(value, geo),
        GeoKind::Country => geo
            .country_code(value)
            .map(str::to_string)
            .or_else(|| (value.trim().chars().count() == 2).then(|| value.trim().to_ascii_uppercase())),
        GeoKind::County => {
            let scope = state_scope(record, name, geo)?;
            geo.county_code(&scope, value).map(str::to_string)
        }
        GeoKind::City => {
            let scope = state_scope(record, name, geo)?;
            let county = record.dict_value(name, "county")?;
            let county_code = geo.county_code(&scope, county)?;
            geo.place_code(&scope, county_code, value).map(str::to_string)
        }
    };
    if code.is_none() {
        warn!(target: "vre_ije", field = name, part = kind.dict_key(), value, "geo lookup miss, encoding blank");
    }
    code
}

fn geo_write(
    record: &mut DeathRecord,
    geo: &GeoRegistry,
    name: &str,
    kind: GeoKind,
    coded: bool,
    raw: &str,
) {
    let key = kind.dict_key();
    if !coded || matches!(kind, GeoKind::InsideCityLimits) {
        record.set_dict_value(name, key, raw);
        return;
    }
    let resolved = match kind {
        GeoKind::State => geo.state_name(raw).map(str::to_string),
        GeoKind::Country => geo.country_name(raw).map(str::to_string),
        GeoKind::County => {
            state_scope(record, name, geo).and_then(|scope| {
                geo.county_name(&scope, raw).map(str::to_string)
            })
        }
        GeoKind::City => state_scope(record, name, geo).and_then(|scope| {
            let county = record.dict_value(name, "county")?;
            let county_code = geo.county_code(&scope, county)?;
            geo.place_name(&scope, county_code, raw).map(str::to_string)
        }),
        GeoKind::InsideCityLimits => unreachable!(),
    };
    match resolved {
        Some(value) => record.set_dict_value(name, key, value),
        None => {
            // Lookup miss: keep the raw code, but never clobber a literal
            // value another field already decoded into the same part.
            warn!(target: "vre_ije", field = name, part = key, code = raw, "geo lookup miss, keeping raw code");
            if record.dict_value(name, key).is_none() {
                record.set_dict_value(name, key, raw);
            }
        }
    }
}

/// One declared field: wire slot plus canonical-record mapping.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Stable field key (the layout's column mnemonic).
    pub key: &'static str,
    /// Sequence number within the layout.
    pub seq: u16,
    /// 1-based offset of the slot.
    pub position: usize,
    /// Slot width in characters.
    pub length: usize,
    /// Human description from the layout documentation.
    pub description: &'static str,
    pub justify: Justify,
    pub kind: FieldKind,
    /// Decode ordering: lower decodes first; fields that depend on another
    /// field's decoded value carry a higher priority. Ties break on `seq`.
    pub priority: u8,
}

impl FieldDef {
    fn base(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            key,
            seq,
            position,
            length,
            description,
            justify: Justify::Left,
            kind,
            priority: 0,
        }
    }

    pub fn plain(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        name: &'static str,
    ) -> Self {
        Self::base(seq, key, position, length, description, FieldKind::Plain { name })
    }

    pub fn date(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        name: &'static str,
        part: DatePart,
    ) -> Self {
        Self::base(
            seq,
            key,
            position,
            length,
            description,
            FieldKind::DatePart { name, part },
        )
        .numeric()
    }

    pub fn dict(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        name: &'static str,
        dict_key: &'static str,
    ) -> Self {
        Self::base(
            seq,
            key,
            position,
            length,
            description,
            FieldKind::Dict { name, key: dict_key },
        )
    }

    pub fn geo(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        name: &'static str,
        kind: GeoKind,
        coded: bool,
    ) -> Self {
        let mut def = Self::base(
            seq,
            key,
            position,
            length,
            description,
            FieldKind::Geo {
                name,
                geo: kind,
                coded,
            },
        );
        if coded {
            def.priority = kind.default_priority();
        }
        def
    }

    pub fn cause_text(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        line: usize,
    ) -> Self {
        Self::base(seq, key, position, length, description, FieldKind::CauseText { line })
    }

    pub fn cause_interval(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        line: usize,
    ) -> Self {
        Self::base(
            seq,
            key,
            position,
            length,
            description,
            FieldKind::CauseInterval { line },
        )
    }

    pub fn autopsy(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        name: &'static str,
    ) -> Self {
        Self::base(seq, key, position, length, description, FieldKind::Autopsy { name })
    }

    pub fn constant(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
        value: &'static str,
    ) -> Self {
        Self::base(seq, key, position, length, description, FieldKind::Constant(value))
    }

    pub fn noop(
        seq: u16,
        key: &'static str,
        position: usize,
        length: usize,
        description: &'static str,
    ) -> Self {
        Self::base(seq, key, position, length, description, FieldKind::Noop)
    }

    /// Mark the slot numeric (right-justified, zero-filled).
    pub fn numeric(mut self) -> Self {
        self.justify = Justify::RightZero;
        self
    }

    /// Override the decode priority.
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo() -> GeoRegistry {
        GeoRegistry::builtin()
    }

    #[test]
    fn plain_read_write() {
        let mut record = DeathRecord::new();
        let kind = FieldKind::Plain { name: "sex" };
        kind.write(&mut record, &geo(), "F");
        assert_eq!(kind.read(&record, &geo()), Some("F".to_string()));
    }

    #[test]
    fn coded_state_translates_both_ways() {
        let registry = geo();
        let mut record = DeathRecord::new();
        let kind = FieldKind::Geo {
            name: "residence",
            geo: GeoKind::State,
            coded: true,
        };
        kind.write(&mut record, &registry, "MA");
        assert_eq!(record.dict_value("residence", "state"), Some("Massachusetts"));
        assert_eq!(kind.read(&record, &registry), Some("MA".to_string()));
    }

    #[test]
    fn coded_county_needs_state_scope() {
        let registry = geo();
        let kind = FieldKind::Geo {
            name: "residence",
            geo: GeoKind::County,
            coded: true,
        };

        let mut record = DeathRecord::new();
        record.set_dict_value("residence", "county", "Middlesex");
        // No state part: scope unresolvable, reads degrade to None.
        assert_eq!(kind.read(&record, &registry), None);

        record.set_dict_value("residence", "state", "Massachusetts");
        assert_eq!(kind.read(&record, &registry), Some("017".to_string()));
    }

    #[test]
    fn county_decode_miss_keeps_raw_code_without_clobbering() {
        let registry = geo();
        let kind = FieldKind::Geo {
            name: "residence",
            geo: GeoKind::County,
            coded: true,
        };

        let mut record = DeathRecord::new();
        record.set_dict_value("residence", "state", "Massachusetts");
        record.set_dict_value("residence", "county", "Middlesex County");
        kind.write(&mut record, &registry, "999");
        // 999 is unknown; the literal already present survives.
        assert_eq!(record.dict_value("residence", "county"), Some("Middlesex County"));

        let mut bare = DeathRecord::new();
        kind.write(&mut bare, &registry, "999");
        assert_eq!(bare.dict_value("residence", "county"), Some("999"));
    }

    #[test]
    fn death_location_county_scopes_from_jurisdiction() {
        let registry = geo();
        let kind = FieldKind::Geo {
            name: "death_location",
            geo: GeoKind::County,
            coded: true,
        };
        let mut record = DeathRecord::new();
        record.set_scalar("jurisdiction_id", "MA");
        kind.write(&mut record, &registry, "025");
        assert_eq!(record.dict_value("death_location", "county"), Some("Suffolk"));
    }

    #[test]
    fn autopsy_is_tri_state() {
        let registry = geo();
        let kind = FieldKind::Autopsy {
            name: "autopsy_performed",
        };
        let mut record = DeathRecord::new();
        // Absent encodes blank, not an invented status.
        assert_eq!(kind.read(&record, &registry), None);
        kind.write(&mut record, &registry, "1");
        assert_eq!(record.scalar("autopsy_performed"), Some("yes"));
        assert_eq!(kind.read(&record, &registry), Some("1".to_string()));
        // Present but unclassifiable encodes unknown, not a silent "no".
        record.set_scalar("autopsy_performed", "pending");
        assert_eq!(kind.read(&record, &registry), Some("9".to_string()));
    }

    #[test]
    fn constant_and_noop() {
        let registry = geo();
        let mut record = DeathRecord::new();
        FieldKind::Constant("0").write(&mut record, &registry, "X");
        FieldKind::Noop.write(&mut record, &registry, "X");
        assert!(record.is_empty());
        assert_eq!(
            FieldKind::Constant("0").read(&record, &registry),
            Some("0".to_string())
        );
        assert_eq!(FieldKind::Noop.read(&record, &registry), None);
    }
}
