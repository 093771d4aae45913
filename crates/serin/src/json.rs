//! JSON front end. Parsing and printing go through `serde_json` against the
//! shared [`Value`] type; object order survives both directions.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::value::Value;

pub fn from_str(input: &str) -> Result<Value> {
    Ok(serde_json::from_str(input)?)
}

/// Compact, single-line JSON.
pub fn to_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Pretty-printed JSON with `indent` spaces per level; an indent of 0 falls
/// back to the compact form.
pub fn to_string_pretty(value: &Value, indent: usize) -> Result<String> {
    if indent == 0 {
        return to_string(value);
    }
    let pad = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(pad.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("JSON printer emits UTF-8"))
}

pub fn from_file(path: impl AsRef<Path>) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    from_str(&text)
}

pub fn to_file(value: &Value, path: impl AsRef<Path>, indent: usize) -> Result<()> {
    fs::write(path, to_string_pretty(value, indent)?)?;
    Ok(())
}
