//! Flat Java Properties output.
//!
//! One `escapedkey=value` line per entry in sorted order, no comment
//! header. Property files are conventionally ISO-8859-1 encoded; the
//! native `\uXXXX` escaping keeps the emitted bytes pure ASCII, which is
//! valid in both ISO-8859-1 and UTF-8.

use std::{fmt::Write as _, io::Write};

use crate::{error::Error, escape::valid_node_name, traits::Writer, types::MessageMap};

/// Writes a message map as a flat Java Properties file.
pub struct PropertiesWriter;

impl Writer for PropertiesWriter {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(map: &MessageMap, mut writer: W) -> Result<(), Error> {
        for (key, value) in &map.entries {
            let line = format!(
                "{}={}\n",
                store_convert(&valid_node_name(key), true),
                store_convert(value, false)
            );
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

/// Escapes one key or value for storage, following the Properties format
/// conventions: backslash escapes for separators and control characters,
/// `\uXXXX` (UTF-16 units) for everything outside `0x20..=0x7E`. Keys
/// escape every space; values only a leading one.
fn store_convert(s: &str, escape_all_spaces: bool) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for (index, ch) in s.chars().enumerate() {
        match ch {
            ' ' => {
                if index == 0 || escape_all_spaces {
                    out.push('\\');
                }
                out.push(' ');
            }
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Infallible for a String target.
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_entries_sorted() {
        let map = MessageMap::new(
            "en",
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ],
        );
        let text = PropertiesWriter::to_string(&map).unwrap();
        assert_eq!(text, "a=1\nb=2\n");
    }

    #[test]
    fn test_no_comment_header() {
        let map = MessageMap::new("en", vec![("a".to_string(), "1".to_string())]);
        let text = PropertiesWriter::to_string(&map).unwrap();
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_keys_are_escaped_node_names() {
        let map = MessageMap::new(
            "en",
            vec![("key3 with special chars".to_string(), "value3".to_string())],
        );
        let text = PropertiesWriter::to_string(&map).unwrap();
        assert_eq!(text, "key3-with-special-chars=value3\n");
        assert!(!text.contains("key3 with special chars"));
    }

    #[test]
    fn test_non_ascii_values_use_unicode_escapes() {
        let map = MessageMap::new(
            "en",
            vec![("key4".to_string(), "value4 äöüß€".to_string())],
        );
        let bytes = PropertiesWriter::to_bytes(&map).unwrap();
        assert!(bytes.iter().all(u8::is_ascii));
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "key4=value4 \\u00E4\\u00F6\\u00FC\\u00DF\\u20AC\n"
        );
    }

    #[test]
    fn test_astral_chars_use_surrogate_pairs() {
        let map = MessageMap::new("en", vec![("emoji".to_string(), "\u{1F600}".to_string())]);
        let text = PropertiesWriter::to_string(&map).unwrap();
        assert_eq!(text, "emoji=\\uD83D\\uDE00\n");
    }

    #[test]
    fn test_separator_chars_in_values_are_escaped() {
        let map = MessageMap::new(
            "en",
            vec![("a".to_string(), "x=y:z #c !d".to_string())],
        );
        let text = PropertiesWriter::to_string(&map).unwrap();
        assert_eq!(text, "a=x\\=y\\:z \\#c \\!d\n");
    }

    #[test]
    fn test_leading_space_in_value_is_escaped() {
        let map = MessageMap::new("en", vec![("a".to_string(), " padded".to_string())]);
        let text = PropertiesWriter::to_string(&map).unwrap();
        assert_eq!(text, "a=\\ padded\n");
    }

    #[test]
    fn test_control_chars() {
        let map = MessageMap::new(
            "en",
            vec![("a".to_string(), "tab\there\nnewline".to_string())],
        );
        let text = PropertiesWriter::to_string(&map).unwrap();
        assert_eq!(text, "a=tab\\there\\nnewline\n");
    }
}
