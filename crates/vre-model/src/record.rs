//! The canonical death record: a property bag keyed by logical-field name.
//!
//! Values come in three shapes: scalar text, an ordered dictionary of named
//! parts (addresses and other composite values), and the ordered
//! cause-of-death lines. Composite dates support independent year/month/day
//! writes that compose into one coherent date, which is how the fixed-width
//! formats deliver them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cause::{CauseLine, CodedValue};

/// One logical-field value on a [`DeathRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValue {
    /// Scalar text.
    Text(String),
    /// Ordered named parts; sibling order is preserved across updates.
    Dict(Vec<(String, String)>),
    /// Ordered cause-of-death lines.
    Lines(Vec<CauseLine>),
}

/// Component of a composite `YYYY-MM-DD` date scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    /// Rendered width of the component within the date scalar.
    pub fn width(&self) -> usize {
        match self {
            DatePart::Year => 4,
            DatePart::Month | DatePart::Day => 2,
        }
    }

    /// Byte range of the component within a `YYYY-MM-DD` prefix.
    fn range(&self) -> std::ops::Range<usize> {
        match self {
            DatePart::Year => 0..4,
            DatePart::Month => 5..7,
            DatePart::Day => 8..10,
        }
    }
}

/// The canonical record: logical-field name -> value.
///
/// Exclusively owned by whatever wraps it (a fixed-width record or a message
/// envelope); there is no shared mutation across wrappers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeathRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl DeathRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate all populated fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Raw field access, used when reconstructing a record from the wire.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Raw field write, used when reconstructing a record from the wire.
    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    // --- scalar access ---

    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Set a scalar field. An empty (or all-whitespace) value removes the
    /// entry, so absent wire slots never leave empty strings behind.
    pub fn set_scalar(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.fields.remove(name);
        } else {
            self.fields.insert(name.to_string(), FieldValue::Text(value));
        }
    }

    // --- dictionary access ---

    pub fn dict(&self, name: &str) -> Option<&[(String, String)]> {
        match self.fields.get(name) {
            Some(FieldValue::Dict(pairs)) => Some(pairs.as_slice()),
            _ => None,
        }
    }

    pub fn dict_value(&self, name: &str, key: &str) -> Option<&str> {
        self.dict(name)?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set one named part of a dictionary value, creating the dictionary if
    /// needed. Replacing an existing key updates it in place; sibling keys
    /// keep their order and values.
    pub fn set_dict_value(&mut self, name: &str, key: &str, value: impl Into<String>) {
        let value = value.into();
        let entry = self
            .fields
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::Dict(Vec::new()));
        if !matches!(*entry, FieldValue::Dict(_)) {
            // A scalar under this name is replaced by a dictionary.
            *entry = FieldValue::Dict(Vec::new());
        }
        let FieldValue::Dict(pairs) = entry else {
            unreachable!()
        };
        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => pairs.push((key.to_string(), value)),
        }
    }

    // --- cause-of-death lines ---

    pub fn cause_lines(&self, name: &str) -> &[CauseLine] {
        match self.fields.get(name) {
            Some(FieldValue::Lines(lines)) => lines.as_slice(),
            _ => &[],
        }
    }

    /// Access a 1-based cause line.
    pub fn cause_line(&self, name: &str, line: usize) -> Option<&CauseLine> {
        if line == 0 {
            return None;
        }
        self.cause_lines(name).get(line - 1)
    }

    pub fn set_cause_text(&mut self, name: &str, line: usize, text: impl Into<String>) {
        self.cause_line_mut(name, line).text = text.into();
    }

    pub fn set_cause_interval(&mut self, name: &str, line: usize, interval: impl Into<String>) {
        self.cause_line_mut(name, line).interval = interval.into();
    }

    pub fn set_cause_code(&mut self, name: &str, line: usize, code: CodedValue) {
        self.cause_line_mut(name, line).code = Some(code);
    }

    fn cause_line_mut(&mut self, name: &str, line: usize) -> &mut CauseLine {
        assert!(line >= 1, "cause lines are 1-based");
        let entry = self
            .fields
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::Lines(Vec::new()));
        if !matches!(*entry, FieldValue::Lines(_)) {
            *entry = FieldValue::Lines(Vec::new());
        }
        let FieldValue::Lines(lines) = entry else {
            unreachable!()
        };
        while lines.len() < line {
            lines.push(CauseLine::default());
        }
        &mut lines[line - 1]
    }

    // --- composite dates ---

    /// Read one component of a composite date scalar. Returns `None` when
    /// the field is absent or not date-shaped.
    pub fn date_part(&self, name: &str, part: DatePart) -> Option<&str> {
        let text = self.scalar(name)?;
        if !is_date_shaped(text) {
            return None;
        }
        text.get(part.range())
    }

    /// Overwrite one component of a composite date scalar, starting from
    /// `0000-00-00` when no date has been stored yet. Any time-of-day suffix
    /// already present is preserved. Writing year, then month, then day
    /// through this method composes a single coherent date.
    pub fn set_date_part(&mut self, name: &str, part: DatePart, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let width = part.width();
        // Right-align within the component, zero-filled; overlong input
        // keeps its trailing characters. Truncation counts chars, not
        // bytes, so multibyte input degrades instead of panicking.
        let padded: String = format!("{value:0>width$}");
        let chars: Vec<char> = padded.chars().collect();
        let normalized: String = chars[chars.len() - width..].iter().collect();

        let existing = self.scalar(name).unwrap_or("");
        let (mut date, suffix) = if is_date_shaped(existing) {
            (existing[..10].to_string(), existing[10..].to_string())
        } else {
            ("0000-00-00".to_string(), String::new())
        };
        date.replace_range(part.range(), &normalized);
        // A date composed entirely of zero components carries no datum.
        if date == "0000-00-00" && suffix.is_empty() {
            self.fields.remove(name);
            return;
        }
        self.fields
            .insert(name.to_string(), FieldValue::Text(format!("{date}{suffix}")));
    }
}

/// True when `text` starts with a `YYYY-MM-DD` shape.
fn is_date_shaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}
