//! Sling i18n Message output in JSON form.
//!
//! [`SlingJsonWriter`] emits the full node structure (folder plus
//! `mix:language` metadata on the root, one `sling:Message` child object
//! per entry). [`SlingJsonPropertiesWriter`] emits a flat key/value object
//! with no metadata; escaping collisions silently overwrite there, so the
//! original key is not recoverable from that output.

use std::io::Write;

use serde_json::{Map, Value};

use crate::{
    error::Error,
    escape::valid_node_name,
    traits::Writer,
    types::MessageMap,
    writers::{
        JCR_LANGUAGE, JCR_MIXIN_TYPES, JCR_PRIMARY_TYPE, MIX_LANGUAGE, NT_FOLDER, SLING_KEY,
        SLING_MESSAGE, SLING_MESSAGE_MIXIN,
    },
};

/// Writes a message map as a Sling Message JSON document.
pub struct SlingJsonWriter;

impl Writer for SlingJsonWriter {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(map: &MessageMap, mut writer: W) -> Result<(), Error> {
        let document = build_document(map);
        serde_json::to_writer_pretty(&mut writer, &Value::Object(document))?;
        Ok(())
    }
}

/// Writes a message map as a flat JSON key/value object.
pub struct SlingJsonPropertiesWriter;

impl Writer for SlingJsonPropertiesWriter {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(map: &MessageMap, mut writer: W) -> Result<(), Error> {
        let mut document = Map::new();
        for (key, value) in &map.entries {
            document.insert(valid_node_name(key), Value::from(value.as_str()));
        }
        serde_json::to_writer_pretty(&mut writer, &Value::Object(document))?;
        Ok(())
    }
}

fn build_document(map: &MessageMap) -> Map<String, Value> {
    let mut root = mix_language_document(&map.language);
    for (key, value) in &map.entries {
        let escaped_key = valid_node_name(key);
        let node = message_node(key, value, escaped_key != *key);
        root.insert(escaped_key, Value::Object(node));
    }
    root
}

/// Root object: folder node with the `mix:language` mixin and the language.
fn mix_language_document(language: &str) -> Map<String, Value> {
    let mut root = Map::new();
    root.insert(JCR_PRIMARY_TYPE.to_string(), Value::from(NT_FOLDER));
    root.insert(
        JCR_MIXIN_TYPES.to_string(),
        Value::Array(vec![Value::from(MIX_LANGUAGE)]),
    );
    root.insert(JCR_LANGUAGE.to_string(), Value::from(language));
    root
}

/// One `sling:Message` child node. The original key is only carried along
/// when escaping changed it.
fn message_node(key: &str, value: &str, generated_key_property: bool) -> Map<String, Value> {
    let mut node = Map::new();
    node.insert(JCR_PRIMARY_TYPE.to_string(), Value::from(NT_FOLDER));
    node.insert(
        JCR_MIXIN_TYPES.to_string(),
        Value::Array(vec![Value::from(SLING_MESSAGE_MIXIN)]),
    );
    if generated_key_property {
        node.insert(SLING_KEY.to_string(), Value::from(key));
    }
    node.insert(SLING_MESSAGE.to_string(), Value::from(value));
    node
}
