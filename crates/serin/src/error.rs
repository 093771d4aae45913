use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed TOON text: unterminated quote, broken header, bad
    /// indentation. Always fatal, independent of strict mode.
    #[error("syntax at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A declared count disagreeing with what the document contains.
    /// Raised only in strict mode; lenient decoding trusts the observed
    /// counts instead.
    #[error("{what} mismatch at line {line}: expected {expected}, found {actual}")]
    Mismatch {
        what: String,
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown or unsupported format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
