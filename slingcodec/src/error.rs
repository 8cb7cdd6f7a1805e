//! All error types for the slingcodec crate.
//!
//! These are returned from all fallible operations (parsing, serialization, conversion, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] jsonc_parser::errors::ParseError),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("unsupported value at `{key}`: {found}")]
    UnsupportedValue { key: String, found: String },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Creates a new unsupported-value error for the given key.
    pub fn unsupported_value(key: impl Into<String>, found: impl Into<String>) -> Self {
        Error::UnsupportedValue {
            key: key.into(),
            found: found.into(),
        }
    }
}
