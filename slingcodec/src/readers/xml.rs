//! Support for the XML i18n source format.
//!
//! Element nesting expresses the dotted key hierarchy, mirroring the JSON
//! reader's convention: leaf element text is the value, every ancestor
//! element (except the document root) contributes one path segment.

use std::{collections::HashMap, io::BufRead, str};

use quick_xml::{Reader as XmlEventReader, events::Event};

use crate::{error::Error, traits::Reader};

/// Reads i18n resources from nested key/value XML files.
pub struct XmlReader;

/// Per-element parse state. The document root carries no name because it
/// does not contribute a path segment.
struct Element {
    name: Option<String>,
    text: Option<String>,
    has_children: bool,
}

impl Reader for XmlReader {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<HashMap<String, String>, Error> {
        let mut xml_reader = XmlEventReader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut map = HashMap::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = element_name(e.name().as_ref())?;
                    push_element(&mut stack, name);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing leaf, e.g. <key1/>: empty value.
                    let name = element_name(e.name().as_ref())?;
                    push_element(&mut stack, name);
                    pop_element(&mut stack, &mut map)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(Error::XmlParse)?;
                    if let Some(element) = stack.last_mut() {
                        element.text.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    let text = str::from_utf8(e.as_ref())
                        .map_err(|err| Error::DataMismatch(err.to_string()))?;
                    if let Some(element) = stack.last_mut() {
                        element.text.get_or_insert_with(String::new).push_str(text);
                    }
                }
                Ok(Event::End(_)) => {
                    pop_element(&mut stack, &mut map)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }

        Ok(map)
    }
}

fn element_name(raw: &[u8]) -> Result<String, Error> {
    str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| Error::DataMismatch(e.to_string()))
}

fn push_element(stack: &mut Vec<Element>, name: String) {
    if let Some(parent) = stack.last_mut() {
        parent.has_children = true;
    }
    // The first element of the document is the root container; its name is
    // not part of any key.
    let name = if stack.is_empty() { None } else { Some(name) };
    stack.push(Element {
        name,
        text: None,
        has_children: false,
    });
}

fn pop_element(
    stack: &mut Vec<Element>,
    map: &mut HashMap<String, String>,
) -> Result<(), Error> {
    let Some(element) = stack.pop() else {
        return Ok(());
    };

    let key = {
        let mut segments: Vec<&str> = stack.iter().filter_map(|e| e.name.as_deref()).collect();
        if let Some(name) = element.name.as_deref() {
            segments.push(name);
        }
        segments.join(".")
    };

    if element.has_children {
        if matches!(&element.text, Some(text) if !text.is_empty()) {
            return Err(Error::unsupported_value(key, "mixed element content"));
        }
    } else if element.name.is_some() {
        map.insert(key, element.text.unwrap_or_default());
    }
    // A childless root (name == None) yields no entry.
    Ok(())
}
