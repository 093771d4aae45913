use crate::encode::primitives::{self, bracket_segment, fields_segment, format_key};
use crate::encode::shape::{Shape, classify};
use crate::encode::writer::LineWriter;
use crate::options::EncodeOptions;
use crate::value::{Map, Value};

pub(crate) fn encode_root(value: &Value, w: &mut LineWriter, options: &EncodeOptions) {
    match value {
        Value::Array(items) => encode_array("", items, w, options, 0),
        Value::Object(map) => encode_object(map, w, options, 0),
        primitive => w.line(0, &primitives::format_scalar(primitive, options.delimiter)),
    }
}

fn encode_object(map: &Map, w: &mut LineWriter, options: &EncodeOptions, depth: usize) {
    for (key, value) in map {
        encode_entry(&format_key(key), value, w, options, depth);
    }
}

fn encode_entry(key: &str, value: &Value, w: &mut LineWriter, options: &EncodeOptions, depth: usize) {
    match value {
        Value::Object(map) if map.is_empty() => w.line(depth, &format!("{key}:")),
        Value::Object(map) => {
            w.line(depth, &format!("{key}:"));
            encode_object(map, w, options, depth + 1);
        }
        Value::Array(items) => encode_array(key, items, w, options, depth),
        primitive => {
            let scalar = primitives::format_scalar(primitive, options.delimiter);
            w.line(depth, &format!("{key}: {scalar}"));
        }
    }
}

/// Emit an array header plus its body. `prefix` is the formatted key, `- `
/// for arrays nested inside list blocks, or empty at the document root; the
/// body always sits one level below the header line.
fn encode_array(
    prefix: &str,
    items: &[Value],
    w: &mut LineWriter,
    options: &EncodeOptions,
    depth: usize,
) {
    let dch = options.delimiter.as_char();
    match classify(items) {
        Shape::Empty => w.line(depth, &format!("{prefix}{}{{}}:", bracket_segment(0, options))),
        Shape::AllPrimitive => {
            let cells: Vec<String> = items
                .iter()
                .map(|item| primitives::format_scalar(item, options.delimiter))
                .collect();
            w.line(
                depth,
                &format!(
                    "{prefix}{}: {}",
                    bracket_segment(items.len(), options),
                    cells.join(&dch.to_string())
                ),
            );
        }
        Shape::AllObject => {
            let first = items[0].as_object().expect("classifier guarantees object rows");
            let fields: Vec<&str> = first.keys().map(String::as_str).collect();
            w.line(
                depth,
                &format!(
                    "{prefix}{}{}:",
                    bracket_segment(items.len(), options),
                    fields_segment(&fields, options.delimiter)
                ),
            );
            for item in items {
                let row = item.as_object().expect("classifier guarantees object rows");
                let mut cells = String::new();
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        cells.push(dch);
                    }
                    // missing fields and structured values both render as
                    // null; fields beyond the header are dropped
                    match row.get(*field) {
                        Some(cell) => {
                            cells.push_str(&primitives::format_scalar(cell, options.delimiter))
                        }
                        None => cells.push_str("null"),
                    }
                }
                w.line(depth + 1, &cells);
            }
        }
        Shape::Mixed => {
            w.line(
                depth,
                &format!("{prefix}{}:", bracket_segment(items.len(), options)),
            );
            for item in items {
                encode_list_element(item, w, options, depth + 1);
            }
        }
    }
}

fn encode_list_element(item: &Value, w: &mut LineWriter, options: &EncodeOptions, depth: usize) {
    match item {
        Value::Array(items) => encode_array("- ", items, w, options, depth),
        Value::Object(map) => {
            let mut entries = map.iter();
            match entries.next() {
                // first field rides the marker line when its value is a
                // scalar; the remaining fields follow one level deeper
                Some((key, first)) if first.is_primitive() => {
                    let scalar = primitives::format_scalar(first, options.delimiter);
                    w.line(depth, &format!("- {}: {scalar}", format_key(key)));
                    for (key, value) in entries {
                        encode_entry(&format_key(key), value, w, options, depth + 1);
                    }
                }
                // structured first field: a bare marker keeps the field rows
                // below unambiguous
                Some(_) => {
                    w.line(depth, "-");
                    encode_object(map, w, options, depth + 1);
                }
                None => w.line(depth, "-"),
            }
        }
        primitive => {
            let scalar = primitives::format_scalar(primitive, options.delimiter);
            w.line(depth, &format!("- {scalar}"));
        }
    }
}
