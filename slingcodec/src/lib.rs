#![forbid(unsafe_code)]
//! Transform i18n resource files into the Sling i18n Message format.
//!
//! Reads Java Properties, XML or JSON i18n resources into a flat, sorted
//! key/value model and serializes it as a Sling Message JSON or JCR XML
//! document, a flat JSON object, or a flat Properties file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slingcodec::{transform, OutputFormat};
//!
//! // Convert a source file straight to a Sling Message JSON document
//! transform("i18n/en.json", "SLING-INF/i18n/en.json", OutputFormat::Json)?;
//!
//! // Or work with the canonical model directly
//! let map = slingcodec::read_message_map("i18n/en.properties")?;
//! let _xml = OutputFormat::Xml.to_bytes(&map)?;
//! # Ok::<(), slingcodec::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **Sources**: Java `.properties` (UTF-8), nested key/value XML,
//!   nested JSON (block comments tolerated)
//! - **Outputs**: Sling Message JSON, flat JSON properties, Sling Message
//!   JCR XML, flat Java Properties (ISO-8859-1 safe)
//!
//! All conversion happens through the unified [`MessageMap`] model: keys
//! are dotted paths, values are plain strings, iteration is always in
//! sorted key order so output is reproducible.

pub mod error;
pub mod escape;
pub mod readers;
pub mod traits;
pub mod transform;
pub mod types;
pub mod writers;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    escape::valid_node_name,
    readers::SourceFormat,
    transform::{infer_source_format, read_message_map, transform},
    types::MessageMap,
    writers::OutputFormat,
};
