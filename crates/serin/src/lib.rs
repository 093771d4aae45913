#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod json;
mod number;
pub mod options;
pub mod value;
pub mod yaml;

pub use crate::decode::decode;
pub use crate::encode::encode;
pub use crate::error::{Error, Result};
pub use crate::options::{DecodeOptions, Delimiter, EncodeOptions};
pub use crate::value::{Map, Number, Value};

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

pub fn encode_to_writer<W: Write>(
    mut writer: W,
    value: &Value,
    options: &EncodeOptions,
) -> Result<()> {
    writer.write_all(encode(value, options).as_bytes())?;
    Ok(())
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode(&text, options)
}

pub fn load_toon(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    decode(&text, options)
}

pub fn dump_toon(value: &Value, path: impl AsRef<Path>, options: &EncodeOptions) -> Result<()> {
    fs::write(path, encode(value, options))?;
    Ok(())
}

/// The text formats this crate can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toon,
    Yaml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toon => "toon",
            Format::Yaml => "yaml",
        }
    }

    /// Detect a format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toon" => Some(Format::Toon),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Format> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toon" => Ok(Format::Toon),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a document in the given format with default options.
pub fn loads(text: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => json::from_str(text),
        Format::Toon => decode(text, &DecodeOptions::default()),
        Format::Yaml => yaml::from_str(text),
    }
}

/// Render a document in the given format. `indent` applies to JSON and TOON;
/// YAML always uses its fixed two-space style.
pub fn dumps(value: &Value, format: Format, indent: usize) -> Result<String> {
    match format {
        Format::Json => json::to_string_pretty(value, indent),
        Format::Toon => Ok(encode(value, &EncodeOptions::default().with_indent(indent))),
        Format::Yaml => yaml::to_string(value),
    }
}

/// Read a file, picking the format from its extension.
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let format =
        Format::from_path(path).ok_or_else(|| Error::UnknownFormat(path.display().to_string()))?;
    let text = fs::read_to_string(path)?;
    loads(&text, format)
}

/// Write a file, picking the format from its extension.
pub fn dump(value: &Value, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format =
        Format::from_path(path).ok_or_else(|| Error::UnknownFormat(path.display().to_string()))?;
    fs::write(path, dumps(value, format, 2)?)?;
    Ok(())
}
