//! All supported Sling i18n output formats.
//!
//! This module holds the shared JCR/Sling vocabulary, re-exports the
//! writer for each format and provides the [`OutputFormat`] enum for
//! generic output handling across the crate.

pub mod properties;
pub mod sling_json;
pub mod sling_xml;

use std::{
    fmt::{Display, Formatter},
    io::Write,
    path::Path,
    str::FromStr,
};

pub use properties::PropertiesWriter;
pub use sling_json::{SlingJsonPropertiesWriter, SlingJsonWriter};
pub use sling_xml::SlingXmlWriter;

use crate::{error::Error, traits::Writer, types::MessageMap};

// JCR/Sling node vocabulary shared by the document writers.
pub(crate) const JCR_PRIMARY_TYPE: &str = "jcr:primaryType";
pub(crate) const JCR_MIXIN_TYPES: &str = "jcr:mixinTypes";
pub(crate) const JCR_LANGUAGE: &str = "jcr:language";
pub(crate) const NT_FOLDER: &str = "nt:folder";
pub(crate) const MIX_LANGUAGE: &str = "mix:language";
pub(crate) const SLING_MESSAGE_MIXIN: &str = "sling:Message";
pub(crate) const SLING_KEY: &str = "sling:key";
pub(crate) const SLING_MESSAGE: &str = "sling:message";

pub(crate) const NS_JCR: &str = "http://www.jcp.org/jcr/1.0";
pub(crate) const NS_MIX: &str = "http://www.jcp.org/jcr/mix/1.0";
pub(crate) const NS_NT: &str = "http://www.jcp.org/jcr/nt/1.0";
pub(crate) const NS_SLING: &str = "http://sling.apache.org/jcr/sling/1.0";

/// Represents all supported output formats for Sling i18n message files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sling Message node structure serialized as JSON.
    Json,
    /// Flat list of key/value pairs in JSON format.
    JsonProperties,
    /// Sling Message node structure serialized as JCR XML.
    Xml,
    /// Flat list of key/value pairs in Java Properties format.
    Properties,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonProperties => write!(f, "json-properties"),
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Properties => write!(f, "properties"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonproperties" => Ok(OutputFormat::JsonProperties),
            "xml" => Ok(OutputFormat::Xml),
            "properties" => Ok(OutputFormat::Properties),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl OutputFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::JsonProperties => "json",
            OutputFormat::Xml => "xml",
            OutputFormat::Properties => "properties",
        }
    }

    /// Serializes a message map to any writer with the writer for this format.
    pub fn write<W: Write>(&self, map: &MessageMap, writer: W) -> Result<(), Error> {
        match self {
            OutputFormat::Json => SlingJsonWriter::to_writer(map, writer),
            OutputFormat::JsonProperties => SlingJsonPropertiesWriter::to_writer(map, writer),
            OutputFormat::Xml => SlingXmlWriter::to_writer(map, writer),
            OutputFormat::Properties => PropertiesWriter::to_writer(map, writer),
        }
    }

    /// Serializes a message map to an in-memory byte buffer.
    pub fn to_bytes(&self, map: &MessageMap) -> Result<Vec<u8>, Error> {
        match self {
            OutputFormat::Json => SlingJsonWriter::to_bytes(map),
            OutputFormat::JsonProperties => SlingJsonPropertiesWriter::to_bytes(map),
            OutputFormat::Xml => SlingXmlWriter::to_bytes(map),
            OutputFormat::Properties => PropertiesWriter::to_bytes(map),
        }
    }

    /// Writes a message map to a file with the writer for this format.
    pub fn write_to<P: AsRef<Path>>(&self, map: &MessageMap, path: P) -> Result<(), Error> {
        match self {
            OutputFormat::Json => SlingJsonWriter::write_to(map, path),
            OutputFormat::JsonProperties => SlingJsonPropertiesWriter::write_to(map, path),
            OutputFormat::Xml => SlingXmlWriter::write_to(map, path),
            OutputFormat::Properties => PropertiesWriter::write_to(map, path),
        }
    }
}
