//! Lossless text form of one primitive, plus key and header-segment
//! formatting.

use crate::number::classify_numeric;
use crate::options::{Delimiter, EncodeOptions};
use crate::value::Value;

/// Render one primitive as a scalar token. Structured values have no scalar
/// form; they only reach this function as tabular cells, where they collapse
/// to `null`.
pub(crate) fn format_scalar(value: &Value, delimiter: Delimiter) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(true) => String::from("true"),
        Value::Bool(false) => String::from("false"),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format_string(s, delimiter),
        Value::Array(_) | Value::Object(_) => String::from("null"),
    }
}

fn is_control(c: char) -> bool {
    let u = c as u32;
    u < 0x20 || u == 0x7F
}

/// A string stays bare only when re-reading it cannot produce anything but
/// the same string: no structural characters, no literal/number look-alikes,
/// no surrounding whitespace.
pub(crate) fn needs_quotes(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    // "-" alone and "- " prefixes collide with the list item marker
    if s == "-" || s.starts_with("- ") {
        return true;
    }
    if s.contains(delimiter.as_char()) {
        return true;
    }
    if s.chars()
        .any(|c| c == ':' || c == '"' || c == '\\' || is_control(c))
    {
        return true;
    }
    classify_numeric(s).is_some()
}

pub(crate) fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if is_control(c) => {
                use core::fmt::Write as _;
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub(crate) fn format_string(s: &str, delimiter: Delimiter) -> String {
    if needs_quotes(s, delimiter) {
        escape_and_quote(s)
    } else {
        s.to_string()
    }
}

/// Keys may be bare only when they match `^[A-Za-z_][A-Za-z0-9_.]*$`.
fn key_needs_quotes(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return true,
    }
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '.' {
            return true;
        }
    }
    false
}

pub(crate) fn format_key(s: &str) -> String {
    if key_needs_quotes(s) {
        escape_and_quote(s)
    } else {
        s.to_string()
    }
}

/// Array header bracket segment: `[N]`, `[#N]`, `[N<sym>]` or `[#N<sym>]`.
/// Tab and pipe write their symbol after the length; comma is the absence.
pub(crate) fn bracket_segment(len: usize, options: &EncodeOptions) -> String {
    let marker = if options.length_marker { "#" } else { "" };
    match options.delimiter.symbol() {
        Some(sym) => format!("[{}{}{}]", marker, len, sym),
        None => format!("[{}{}]", marker, len),
    }
}

/// Tabular field-list segment: `{f1,f2}` with the active delimiter between
/// field names.
pub(crate) fn fields_segment(fields: &[&str], delimiter: Delimiter) -> String {
    let dch = delimiter.as_char();
    let mut out = String::from("{");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(dch);
        }
        out.push_str(&format_key(field));
    }
    out.push('}');
    out
}
