//! TOON text → Value: line preprocessing, then indentation-driven
//! recursive descent.

mod parser;
mod scanner;

use crate::error::Result;
use crate::options::DecodeOptions;
use crate::value::Value;

/// Reconstruct a value tree from TOON text produced by [`crate::encode`] or
/// any conforming encoder. Strict mode makes declared-vs-observed count
/// mismatches fatal; lenient mode trusts what the document contains.
pub fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    parser::parse(input, options)
}
