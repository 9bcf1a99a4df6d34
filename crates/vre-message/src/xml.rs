//! XML rendition of the envelope wire payload.
//!
//! Mirrors the JSON shape element for element: a `<message>` container
//! holding one `<header>`, an optional `<parameters>` block, and an
//! optional `<record>`. Parsing goes through a small generic element tree
//! so entry discovery can scan by shape, exactly as the JSON path does.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use vre_model::{CauseLine, CodedValue, DeathRecord, FieldValue};

use crate::error::{MessageError, Result};
use crate::params::{ParamValue, Parameter, ParameterBlock};
use crate::wire::{WireDocument, WireEntry, WireHeader};

pub(crate) fn to_string(document: &WireDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("message")))
        .map_err(xml_err)?;
    for entry in &document.entries {
        match entry {
            WireEntry::Header(header) => write_header(&mut writer, header)?,
            WireEntry::Parameters(block) => {
                write_parameters(&mut writer, "parameters", block)?;
            }
            WireEntry::Record(record) => write_record(&mut writer, record)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new("message")))
        .map_err(xml_err)?;
    String::from_utf8(writer.into_inner())
        .map_err(|err| MessageError::format(format!("xml output is not utf-8: {err}")))
}

pub(crate) fn from_str(text: &str) -> Result<WireDocument> {
    let root = read_tree(text)?;
    if root.name != "message" {
        return Err(MessageError::format(format!(
            "unexpected root element <{}>",
            root.name
        )));
    }
    let mut entries = Vec::new();
    for child in root.children {
        if child.name == "header" {
            entries.push(WireEntry::Header(parse_header(&child)?));
        } else if child.name == "parameters" {
            entries.push(WireEntry::Parameters(parse_parameters(child)?));
        } else if child.name == "record" {
            entries.push(WireEntry::Record(parse_record(&child)?));
        } else {
            return Err(MessageError::format(format!(
                "unexpected element <{}> in message",
                child.name
            )));
        }
    }
    Ok(WireDocument { entries })
}

fn xml_err(err: std::io::Error) -> MessageError {
    MessageError::format(format!("xml: {err}"))
}

// --- writing ---

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)?;
    Ok(())
}

fn write_header<W: std::io::Write>(writer: &mut Writer<W>, header: &WireHeader) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("header")))
        .map_err(xml_err)?;
    write_text_element(writer, "id", &header.id)?;
    write_text_element(writer, "kind", &header.kind)?;
    write_text_element(writer, "timestamp", &header.timestamp)?;
    write_text_element(writer, "source", &header.source)?;
    for destination in &header.destinations {
        write_text_element(writer, "destination", destination)?;
    }
    if let Some(response_to) = &header.response_to {
        write_text_element(writer, "response_to", response_to)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("header")))
        .map_err(xml_err)?;
    Ok(())
}

fn write_coded<W: std::io::Write>(writer: &mut Writer<W>, name: &str, value: &CodedValue) -> Result<()> {
    let mut element = BytesStart::new(name);
    element.push_attribute(("code", value.code.as_str()));
    element.push_attribute(("system", value.system.as_str()));
    element.push_attribute(("display", value.display.as_str()));
    writer.write_event(Event::Empty(element)).map_err(xml_err)?;
    Ok(())
}

fn write_parameters<W: std::io::Write>(
    writer: &mut Writer<W>,
    wrapper: &str,
    block: &ParameterBlock,
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(wrapper)))
        .map_err(xml_err)?;
    for parameter in block.entries() {
        let mut element = BytesStart::new("parameter");
        element.push_attribute(("name", parameter.name.as_str()));
        writer.write_event(Event::Start(element)).map_err(xml_err)?;
        match &parameter.value {
            ParamValue::Str(value) => write_text_element(writer, "string", value)?,
            ParamValue::Unsigned(value) => {
                write_text_element(writer, "unsigned", &value.to_string())?;
            }
            ParamValue::Coded(value) => write_coded(writer, "coded", value)?,
            ParamValue::Group(members) => write_parameters(writer, "group", members)?,
        }
        writer
            .write_event(Event::End(BytesEnd::new("parameter")))
            .map_err(xml_err)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(wrapper)))
        .map_err(xml_err)?;
    Ok(())
}

fn write_record<W: std::io::Write>(writer: &mut Writer<W>, record: &DeathRecord) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("record")))
        .map_err(xml_err)?;
    for (name, value) in record.fields() {
        let mut element = BytesStart::new("field");
        element.push_attribute(("name", name));
        writer.write_event(Event::Start(element)).map_err(xml_err)?;
        match value {
            FieldValue::Text(text) => write_text_element(writer, "value", text)?,
            FieldValue::Dict(parts) => {
                for (key, part) in parts {
                    let mut part_element = BytesStart::new("part");
                    part_element.push_attribute(("key", key.as_str()));
                    writer
                        .write_event(Event::Start(part_element))
                        .map_err(xml_err)?;
                    writer
                        .write_event(Event::Text(BytesText::new(part)))
                        .map_err(xml_err)?;
                    writer
                        .write_event(Event::End(BytesEnd::new("part")))
                        .map_err(xml_err)?;
                }
            }
            FieldValue::Lines(lines) => {
                for line in lines {
                    writer
                        .write_event(Event::Start(BytesStart::new("line")))
                        .map_err(xml_err)?;
                    write_text_element(writer, "text", &line.text)?;
                    write_text_element(writer, "interval", &line.interval)?;
                    if let Some(code) = &line.code {
                        write_coded(writer, "code", code)?;
                    }
                    writer
                        .write_event(Event::End(BytesEnd::new("line")))
                        .map_err(xml_err)?;
                }
            }
        }
        writer
            .write_event(Event::End(BytesEnd::new("field")))
            .map_err(xml_err)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("record")))
        .map_err(xml_err)?;
    Ok(())
}

// --- reading ---

/// Generic parsed element: name, attributes, accumulated text, children.
struct Element {
    name: String,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

fn read_tree(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);
    let mut stack: Vec<Element> = Vec::new();
    loop {
        let event = reader
            .read_event()
            .map_err(|err| MessageError::format(format!("xml: {err}")))?;
        match event {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| MessageError::format("unbalanced xml"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(text) => {
                let unescaped = text
                    .xml_content()
                    .map_err(|err| MessageError::format(format!("xml: {err}")))?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&unescaped);
                }
            }
            Event::Eof => return Err(MessageError::format("empty xml document")),
            _ => {}
        }
    }
}

fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = BTreeMap::new();
    for attribute in start.attributes() {
        let attribute =
            attribute.map_err(|err| MessageError::format(format!("xml attribute: {err}")))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| MessageError::format(format!("xml attribute: {err}")))?
            .into_owned();
        attributes.insert(key, value);
    }
    Ok(Element {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

impl Element {
    fn attribute(&self, key: &str) -> Result<&str> {
        self.attributes
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| {
                MessageError::format(format!("<{}> is missing attribute {key}", self.name))
            })
    }

    fn child_text(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|child| child.name == name)
            .map(|child| child.text.as_str())
    }
}

fn parse_header(element: &Element) -> Result<WireHeader> {
    let required = |name: &str| -> Result<String> {
        element
            .child_text(name)
            .map(str::to_string)
            .ok_or_else(|| MessageError::format(format!("header is missing <{name}>")))
    };
    Ok(WireHeader {
        id: required("id")?,
        kind: required("kind")?,
        timestamp: required("timestamp")?,
        source: required("source")?,
        destinations: element
            .children
            .iter()
            .filter(|child| child.name == "destination")
            .map(|child| child.text.clone())
            .collect(),
        response_to: element.child_text("response_to").map(str::to_string),
    })
}

fn parse_parameters(element: Element) -> Result<ParameterBlock> {
    let mut entries = Vec::new();
    for child in element.children {
        if child.name != "parameter" {
            return Err(MessageError::format(format!(
                "unexpected element <{}> in parameter block",
                child.name
            )));
        }
        let name = child.attribute("name")?.to_string();
        let mut values = child.children;
        if values.len() != 1 {
            return Err(MessageError::format(format!(
                "parameter {name} must carry exactly one value element"
            )));
        }
        let value_element = values.remove(0);
        let value_tag = value_element.name.clone();
        let value = match value_tag.as_str() {
            "string" => ParamValue::Str(value_element.text),
            "unsigned" => {
                let parsed = value_element.text.parse::<u32>().map_err(|_| {
                    MessageError::format(format!(
                        "parameter {name} is not an unsigned integer: {}",
                        value_element.text
                    ))
                })?;
                ParamValue::Unsigned(parsed)
            }
            "coded" => ParamValue::Coded(parse_coded(&value_element)?),
            "group" => ParamValue::Group(parse_parameters(value_element)?),
            other => {
                return Err(MessageError::format(format!(
                    "unknown parameter value element <{other}>"
                )));
            }
        };
        entries.push(Parameter::new(name, value));
    }
    Ok(entries.into_iter().collect())
}

fn parse_coded(element: &Element) -> Result<CodedValue> {
    Ok(CodedValue::new(
        element.attribute("code")?,
        element.attribute("system")?,
        element.attribute("display")?,
    ))
}

fn parse_record(element: &Element) -> Result<DeathRecord> {
    let mut record = DeathRecord::new();
    for field in &element.children {
        if field.name != "field" {
            return Err(MessageError::format(format!(
                "unexpected element <{}> in record",
                field.name
            )));
        }
        let name = field.attribute("name")?.to_string();
        let value = parse_field_value(field)?;
        record.set_field(name, value);
    }
    Ok(record)
}

fn parse_field_value(field: &Element) -> Result<FieldValue> {
    let first = field
        .children
        .first()
        .ok_or_else(|| MessageError::format("record field has no content"))?;
    match first.name.as_str() {
        "value" => Ok(FieldValue::Text(first.text.clone())),
        "part" => {
            let mut parts = Vec::new();
            for part in &field.children {
                parts.push((part.attribute("key")?.to_string(), part.text.clone()));
            }
            Ok(FieldValue::Dict(parts))
        }
        "line" => {
            let mut lines = Vec::new();
            for line in &field.children {
                let code = line
                    .children
                    .iter()
                    .find(|child| child.name == "code")
                    .map(parse_coded)
                    .transpose()?;
                lines.push(CauseLine {
                    text: line.child_text("text").unwrap_or_default().to_string(),
                    interval: line.child_text("interval").unwrap_or_default().to_string(),
                    code,
                });
            }
            Ok(FieldValue::Lines(lines))
        }
        other => Err(MessageError::format(format!(
            "unknown record field element <{other}>"
        ))),
    }
}
