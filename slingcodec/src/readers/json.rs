//! Support for the JSON i18n source format.
//!
//! The document must be a single JSON object; nested objects express the
//! dotted key hierarchy and every leaf must be a string. `/* ... */` block
//! comments are tolerated, matching the lenient parsers commonly used for
//! i18n resources. Numbers, booleans, null and arrays are rejected rather
//! than coerced.

use std::{
    collections::HashMap,
    io::BufRead,
};

use jsonc_parser::ParseOptions;
use serde_json::{Map, Value};

use crate::{error::Error, traits::Reader};

/// Reads i18n resources from (comment-tolerant) JSON files.
pub struct JsonReader;

impl Reader for JsonReader {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(mut reader: R) -> Result<HashMap<String, String>, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let root = jsonc_parser::parse_to_serde_value(&content, &ParseOptions::default())?
            .ok_or_else(|| Error::DataMismatch("empty JSON document".to_string()))?;
        let Value::Object(object) = root else {
            return Err(Error::DataMismatch(
                "top-level JSON value must be an object".to_string(),
            ));
        };

        let mut map = HashMap::new();
        flatten_object(&object, "", &mut map)?;
        Ok(map)
    }
}

fn flatten_object(
    object: &Map<String, Value>,
    prefix: &str,
    map: &mut HashMap<String, String>,
) -> Result<(), Error> {
    for (key, value) in object {
        match value {
            Value::Object(nested) => flatten_object(nested, &format!("{prefix}{key}."), map)?,
            Value::String(s) => {
                map.insert(format!("{prefix}{key}"), s.clone());
            }
            other => {
                return Err(Error::unsupported_value(
                    format!("{prefix}{key}"),
                    json_type_name(other),
                ));
            }
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Object(_) => "object",
    }
}
