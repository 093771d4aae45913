//! Value → TOON text, driven by the array classifier and the scalar
//! formatter.

mod encoders;
mod primitives;
mod shape;
mod writer;

pub use shape::{Shape, classify};

use crate::options::EncodeOptions;
use crate::value::Value;

/// Render a value tree as TOON text. A primitive root yields a single scalar
/// line; object and array roots recurse from depth 0. The output carries no
/// trailing newline.
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    let mut w = writer::LineWriter::new(options.indent);
    encoders::encode_root(value, &mut w, options);
    w.into_string()
}
