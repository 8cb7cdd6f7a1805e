//! All supported i18n source file formats.
//!
//! This module re-exports the reader for each format and provides the
//! [`SourceFormat`] enum for generic format handling across the crate.

pub mod json;
pub mod properties;
pub mod xml;

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

pub use json::JsonReader;
pub use properties::PropertiesReader;
pub use xml::XmlReader;

use crate::{error::Error, traits::Reader};

/// Represents all supported i18n source file formats.
///
/// Each variant maps to one reader; [`SourceFormat::read`] dispatches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Java `key=value` properties files.
    Properties,
    /// XML files whose element nesting expresses the key hierarchy.
    Xml,
    /// JSON files whose object nesting expresses the key hierarchy.
    Json,
}

impl Display for SourceFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Properties => write!(f, "properties"),
            SourceFormat::Xml => write!(f, "xml"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for SourceFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "properties" => Ok(SourceFormat::Properties),
            "xml" => Ok(SourceFormat::Xml),
            "json" => Ok(SourceFormat::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl SourceFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Properties => "properties",
            SourceFormat::Xml => "xml",
            SourceFormat::Json => "json",
        }
    }

    /// Matches a file extension (without the dot, case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("properties") {
            Some(SourceFormat::Properties)
        } else if extension.eq_ignore_ascii_case("xml") {
            Some(SourceFormat::Xml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(SourceFormat::Json)
        } else {
            None
        }
    }

    /// Reads a source file with the reader for this format.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<HashMap<String, String>, Error> {
        match self {
            SourceFormat::Properties => PropertiesReader::read_from(path),
            SourceFormat::Xml => XmlReader::read_from(path),
            SourceFormat::Json => JsonReader::read_from(path),
        }
    }
}
