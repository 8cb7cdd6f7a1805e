//! Traits for format-agnostic reading and writing in slingcodec.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, Cursor, Write},
    path::Path,
};

use crate::{error::Error, types::MessageMap};

/// A trait for parsing one i18n source format into a raw key/value map.
///
/// # Example
///
/// ```rust
/// use slingcodec::traits::Reader;
/// let map = slingcodec::readers::PropertiesReader::from_str("key1=value1")?;
/// assert_eq!(map.get("key1").map(String::as_str), Some("value1"));
/// Ok::<(), slingcodec::Error>(())
/// ```
pub trait Reader {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<HashMap<String, String>, Error>;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<HashMap<String, String>, Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<HashMap<String, String>, Error> {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// A trait for serializing a [`MessageMap`] into one output format.
///
/// Writers never fail on a well-formed map; errors only come from the
/// underlying writer or serializer.
pub trait Writer {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(map: &MessageMap, writer: W) -> Result<(), Error>;

    /// Serialize to an in-memory byte buffer.
    fn to_bytes(map: &MessageMap) -> Result<Vec<u8>, Error> {
        let mut buffer = Vec::new();
        Self::to_writer(map, &mut buffer)?;
        Ok(buffer)
    }

    /// Serialize to a string. All output formats are ASCII-compatible or
    /// UTF-8, so this never loses data.
    fn to_string(map: &MessageMap) -> Result<String, Error> {
        String::from_utf8(Self::to_bytes(map)?).map_err(|e| Error::DataMismatch(e.to_string()))
    }

    /// Write to file path. The document is serialized in memory first, so
    /// the target file is never left behind half-written.
    fn write_to<P: AsRef<Path>>(map: &MessageMap, path: P) -> Result<(), Error> {
        let bytes = Self::to_bytes(map)?;
        std::fs::write(path, bytes).map_err(Error::Io)
    }
}
