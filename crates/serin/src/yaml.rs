//! YAML front end. `serde_yaml` does the parsing and printing; only the
//! shared [`Value`] type crosses this boundary.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::value::Value;

pub fn from_str(input: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(input)?)
}

pub fn to_string(value: &Value) -> Result<String> {
    let mut out = serde_yaml::to_string(value)?;
    while out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

pub fn from_file(path: impl AsRef<Path>) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    from_str(&text)
}

pub fn to_file(value: &Value, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_string(value)?)?;
    Ok(())
}
