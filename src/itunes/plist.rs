//! Minimal XML property-list reader
//!
//! Parses a plist document into a [`Value`] tree using quick-xml events.
//! Only the node types that appear in iTunes library exports are supported;
//! the loader in the parent module converts the tree into the typed library.

use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed property-list node
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Array(Vec<Value>),
    /// Key/value pairs in document order
    Dict(Vec<(String, Value)>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Look up a key in a dict node
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// Property-list parsing failures
#[derive(Debug, thiserror::Error)]
pub enum PlistError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Parse a plist document into its root value
pub fn parse(xml: &str) -> Result<Value, PlistError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // Skip the XML declaration and doctype until the <plist> root opens
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"plist" => break,
            Event::Eof => return Err(PlistError::Invalid("missing <plist> root".to_string())),
            _ => {}
        }
    }

    next_value(&mut reader)
}

/// Read the next value node, opening tag included
fn next_value(reader: &mut Reader<&[u8]>) -> Result<Value, PlistError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = e.name().as_ref().to_vec();
                return read_node(reader, &tag);
            }
            Event::Empty(e) => return empty_node(e.name().as_ref()),
            Event::End(e) => {
                return Err(PlistError::Invalid(format!(
                    "expected a value, found closing </{}>",
                    String::from_utf8_lossy(e.name().as_ref())
                )))
            }
            Event::Eof => {
                return Err(PlistError::Invalid(
                    "unexpected end of document while reading a value".to_string(),
                ))
            }
            _ => {}
        }
    }
}

/// Read the body of a node whose opening tag was already consumed
fn read_node(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<Value, PlistError> {
    match tag {
        b"dict" => read_dict(reader),
        b"array" => read_array(reader),
        b"string" | b"data" | b"date" => Ok(Value::String(read_text(reader, tag)?)),
        b"integer" => {
            let text = read_text(reader, tag)?;
            text.trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| PlistError::Invalid(format!("invalid integer value: {text}")))
        }
        b"real" => {
            let text = read_text(reader, tag)?;
            text.trim()
                .parse::<f64>()
                .map(Value::Real)
                .map_err(|_| PlistError::Invalid(format!("invalid real value: {text}")))
        }
        b"true" => {
            read_text(reader, tag)?;
            Ok(Value::Boolean(true))
        }
        b"false" => {
            read_text(reader, tag)?;
            Ok(Value::Boolean(false))
        }
        other => Err(PlistError::Invalid(format!(
            "unsupported element <{}>",
            String::from_utf8_lossy(other)
        ))),
    }
}

/// Value for a self-closing tag such as `<true/>` or `<dict/>`
fn empty_node(tag: &[u8]) -> Result<Value, PlistError> {
    match tag {
        b"true" => Ok(Value::Boolean(true)),
        b"false" => Ok(Value::Boolean(false)),
        b"string" | b"data" | b"date" => Ok(Value::String(String::new())),
        b"dict" => Ok(Value::Dict(Vec::new())),
        b"array" => Ok(Value::Array(Vec::new())),
        other => Err(PlistError::Invalid(format!(
            "unsupported empty element <{}/>",
            String::from_utf8_lossy(other)
        ))),
    }
}

fn read_dict(reader: &mut Reader<&[u8]>) -> Result<Value, PlistError> {
    let mut entries = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"key" => {
                let key = read_text(reader, b"key")?;
                let value = next_value(reader)?;
                entries.push((key, value));
            }
            Event::Empty(e) if e.name().as_ref() == b"key" => {
                let value = next_value(reader)?;
                entries.push((String::new(), value));
            }
            Event::End(e) if e.name().as_ref() == b"dict" => return Ok(Value::Dict(entries)),
            Event::Start(e) => {
                return Err(PlistError::Invalid(format!(
                    "expected <key> in <dict>, found <{}>",
                    String::from_utf8_lossy(e.name().as_ref())
                )))
            }
            Event::Eof => {
                return Err(PlistError::Invalid(
                    "unexpected end of document inside <dict>".to_string(),
                ))
            }
            _ => {}
        }
    }
}

fn read_array(reader: &mut Reader<&[u8]>) -> Result<Value, PlistError> {
    let mut values = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = e.name().as_ref().to_vec();
                values.push(read_node(reader, &tag)?);
            }
            Event::Empty(e) => values.push(empty_node(e.name().as_ref())?),
            Event::End(e) if e.name().as_ref() == b"array" => return Ok(Value::Array(values)),
            Event::Eof => {
                return Err(PlistError::Invalid(
                    "unexpected end of document inside <array>".to_string(),
                ))
            }
            _ => {}
        }
    }
}

/// Accumulate text content until the matching closing tag
fn read_text(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<String, PlistError> {
    let mut out = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(t) => out.push_str(&t.unescape().unwrap_or_default()),
            Event::CData(t) => out.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::End(e) if e.name().as_ref() == tag => return Ok(out),
            Event::Eof => {
                return Err(PlistError::Invalid(format!(
                    "unexpected end of document inside <{}>",
                    String::from_utf8_lossy(tag)
                )))
            }
            _ => {}
        }
    }
}
