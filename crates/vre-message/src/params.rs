//! Envelope side-channel parameters.
//!
//! An ordered list of named entries carrying business identifiers and
//! coding payloads alongside the record. Entries are scalars, unsigned
//! counters, coded triples, or named groups of further entries. Updates are
//! in place: replacing a value inside a group keeps every sibling entry and
//! the group's order intact.

use serde::{Deserialize, Serialize};

use vre_model::CodedValue;

/// One typed parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Str(String),
    Unsigned(u32),
    Coded(CodedValue),
    Group(ParameterBlock),
}

/// One named entry in a parameter block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub value: ParamValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered, name-addressed parameter block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBlock {
    entries: Vec<Parameter>,
}

impl ParameterBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Parameter] {
        &self.entries
    }

    fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Set `name` to `value`, replacing an existing entry in place or
    /// appending a new one.
    fn set(&mut self, name: &str, value: ParamValue) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.value = value,
            None => self.entries.push(Parameter::new(name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name != name);
    }

    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ParamValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn set_scalar(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, ParamValue::Str(value.into()));
    }

    pub fn unsigned(&self, name: &str) -> Option<u32> {
        match self.get(name)? {
            ParamValue::Unsigned(value) => Some(*value),
            _ => None,
        }
    }

    pub fn set_unsigned(&mut self, name: &str, value: u32) {
        self.set(name, ParamValue::Unsigned(value));
    }

    pub fn coded(&self, name: &str) -> Option<&CodedValue> {
        match self.get(name)? {
            ParamValue::Coded(value) => Some(value),
            _ => None,
        }
    }

    pub fn set_coded(&mut self, name: &str, value: CodedValue) {
        self.set(name, ParamValue::Coded(value));
    }

    /// All groups carrying `name`, in block order. Repeated group names are
    /// how list-shaped payloads (coding axes, issues) travel.
    pub fn groups(&self, name: &str) -> impl Iterator<Item = &ParameterBlock> {
        self.entries.iter().filter_map(move |entry| {
            if entry.name != name {
                return None;
            }
            match &entry.value {
                ParamValue::Group(members) => Some(members),
                _ => None,
            }
        })
    }

    /// Append a group entry; repeated names are allowed.
    pub fn push_group(&mut self, name: impl Into<String>, group: ParameterBlock) {
        self.entries
            .push(Parameter::new(name, ParamValue::Group(group)));
    }

    pub fn scalar_in(&self, group: &str, name: &str) -> Option<&str> {
        self.groups(group).next()?.scalar(name)
    }

    /// Set a scalar inside the named group, creating the group when absent.
    /// Sibling entries and their order are preserved.
    pub fn set_scalar_in(&mut self, group: &str, name: &str, value: impl Into<String>) {
        self.group_mut(group).set(name, ParamValue::Str(value.into()));
    }

    pub fn coded_in(&self, group: &str, name: &str) -> Option<&CodedValue> {
        self.groups(group).next()?.coded(name)
    }

    pub fn set_coded_in(&mut self, group: &str, name: &str, value: CodedValue) {
        self.group_mut(group).set(name, ParamValue::Coded(value));
    }

    fn group_mut(&mut self, group: &str) -> &mut ParameterBlock {
        let index = self
            .entries
            .iter()
            .position(|entry| {
                entry.name == group && matches!(entry.value, ParamValue::Group(_))
            })
            .unwrap_or_else(|| {
                self.entries.push(Parameter::new(
                    group,
                    ParamValue::Group(ParameterBlock::new()),
                ));
                self.entries.len() - 1
            });
        match &mut self.entries[index].value {
            ParamValue::Group(members) => members,
            _ => unreachable!(),
        }
    }
}

impl FromIterator<Parameter> for ParameterBlock {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_set_replaces_in_place() {
        let mut block = ParameterBlock::new();
        block.set_scalar("a", "1");
        block.set_scalar("b", "2");
        block.set_scalar("a", "3");
        assert_eq!(block.scalar("a"), Some("3"));
        let names: Vec<&str> = block.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn group_update_preserves_siblings_and_order() {
        let mut block = ParameterBlock::new();
        block.set_scalar_in("coding", "a", "x");
        block.set_scalar_in("coding", "b", "y");
        block.set_scalar_in("coding", "b", "z");
        let group = block.groups("coding").next().unwrap();
        let names: Vec<&str> = group.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(group.scalar("a"), Some("x"));
        assert_eq!(group.scalar("b"), Some("z"));
    }

    #[test]
    fn repeated_groups_keep_block_order() {
        let mut block = ParameterBlock::new();
        let mut first = ParameterBlock::new();
        first.set_scalar("code", "I219");
        let mut second = ParameterBlock::new();
        second.set_scalar("code", "J189");
        block.push_group("entity_axis", first);
        block.push_group("entity_axis", second);
        let codes: Vec<&str> = block
            .groups("entity_axis")
            .filter_map(|g| g.scalar("code"))
            .collect();
        assert_eq!(codes, ["I219", "J189"]);
    }

    #[test]
    fn typed_accessors_do_not_cross_kinds() {
        let mut block = ParameterBlock::new();
        block.set_unsigned("count", 3);
        assert_eq!(block.scalar("count"), None);
        assert_eq!(block.unsigned("count"), Some(3));
    }
}
