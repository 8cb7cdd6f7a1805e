//! Sling i18n Message output in JCR XML form.
//!
//! Structurally equivalent to the Sling JSON document: a `jcr:root`
//! element carrying the folder/`mix:language` metadata as namespaced
//! attributes, and one empty child element per entry named after the
//! escaped key.

use std::io::Write;

use quick_xml::{
    Writer as XmlEventWriter,
    events::{BytesDecl, BytesEnd, BytesStart, Event},
};

use crate::{
    error::Error,
    escape::valid_node_name,
    traits::Writer,
    types::MessageMap,
    writers::{
        JCR_LANGUAGE, JCR_MIXIN_TYPES, JCR_PRIMARY_TYPE, MIX_LANGUAGE, NS_JCR, NS_MIX, NS_NT,
        NS_SLING, NT_FOLDER, SLING_KEY, SLING_MESSAGE, SLING_MESSAGE_MIXIN,
    },
};

const ROOT_ELEMENT: &str = "jcr:root";

/// Writes a message map as a Sling Message JCR XML document.
pub struct SlingXmlWriter;

impl Writer for SlingXmlWriter {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(map: &MessageMap, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = XmlEventWriter::new_with_indent(&mut writer, b' ', 2);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new(ROOT_ELEMENT);
        root.push_attribute(("xmlns:jcr", NS_JCR));
        root.push_attribute(("xmlns:mix", NS_MIX));
        root.push_attribute(("xmlns:nt", NS_NT));
        root.push_attribute(("xmlns:sling", NS_SLING));
        root.push_attribute((JCR_PRIMARY_TYPE, NT_FOLDER));
        let language_mixins = format!("[{MIX_LANGUAGE}]");
        root.push_attribute((JCR_MIXIN_TYPES, language_mixins.as_str()));
        root.push_attribute((JCR_LANGUAGE, map.language.as_str()));
        xml_writer.write_event(Event::Start(root))?;

        let message_mixins = format!("[{SLING_MESSAGE_MIXIN}]");
        for (key, value) in &map.entries {
            let escaped_key = valid_node_name(key);
            let mut element = BytesStart::new(escaped_key.as_str());
            element.push_attribute((JCR_PRIMARY_TYPE, NT_FOLDER));
            element.push_attribute((JCR_MIXIN_TYPES, message_mixins.as_str()));
            if escaped_key != *key {
                element.push_attribute((SLING_KEY, key.as_str()));
            }
            element.push_attribute((SLING_MESSAGE, value.as_str()));
            xml_writer.write_event(Event::Empty(element))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> MessageMap {
        MessageMap::new(
            "en",
            vec![
                ("key1".to_string(), "value1".to_string()),
                ("key3 with special chars".to_string(), "value3".to_string()),
            ],
        )
    }

    #[test]
    fn test_namespace_declarations_on_root() {
        let xml = SlingXmlWriter::to_string(&sample_map()).unwrap();
        assert!(xml.contains(r#"xmlns:jcr="http://www.jcp.org/jcr/1.0""#));
        assert!(xml.contains(r#"xmlns:mix="http://www.jcp.org/jcr/mix/1.0""#));
        assert!(xml.contains(r#"xmlns:nt="http://www.jcp.org/jcr/nt/1.0""#));
        assert!(xml.contains(r#"xmlns:sling="http://sling.apache.org/jcr/sling/1.0""#));
    }

    #[test]
    fn test_root_metadata_attributes() {
        let xml = SlingXmlWriter::to_string(&sample_map()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<jcr:root"));
        assert!(xml.contains(r#"jcr:primaryType="nt:folder""#));
        assert!(xml.contains(r#"jcr:mixinTypes="[mix:language]""#));
        assert!(xml.contains(r#"jcr:language="en""#));
        assert!(xml.ends_with("</jcr:root>"));
    }

    #[test]
    fn test_entry_elements() {
        let xml = SlingXmlWriter::to_string(&sample_map()).unwrap();
        assert!(xml.contains(r#"<key1 jcr:primaryType="nt:folder" jcr:mixinTypes="[sling:Message]" sling:message="value1"/>"#));
        // Escaped key: element named after the escaped form, original key kept.
        assert!(xml.contains("<key3-with-special-chars"));
        assert!(xml.contains(r#"sling:key="key3 with special chars""#));
        assert!(xml.contains(r#"sling:message="value3""#));
    }

    #[test]
    fn test_unescaped_key_has_no_key_attribute() {
        let map = MessageMap::new("en", vec![("key1".to_string(), "value1".to_string())]);
        let xml = SlingXmlWriter::to_string(&map).unwrap();
        assert!(!xml.contains("sling:key"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let map = MessageMap::new(
            "en",
            vec![("key1".to_string(), "a < b & \"c\"".to_string())],
        );
        let xml = SlingXmlWriter::to_string(&map).unwrap();
        assert!(xml.contains("sling:message=\"a &lt; b &amp; &quot;c&quot;\""));
    }

    #[test]
    fn test_entries_in_sorted_order() {
        let map = MessageMap::new(
            "en",
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ],
        );
        let xml = SlingXmlWriter::to_string(&map).unwrap();
        assert!(xml.find("<a ").unwrap() < xml.find("<b ").unwrap());
    }
}
