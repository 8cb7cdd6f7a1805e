//! Support for the Java `.properties` i18n source format.
//!
//! Files are decoded as UTF-8 regardless of the historical ISO-8859-1
//! default of the format. Keys are taken verbatim as already-dotted
//! strings; no hierarchy is synthesized.

use std::{collections::HashMap, io::BufRead};

use crate::{error::Error, traits::Reader};

/// Reads i18n resources from Java `.properties` files.
pub struct PropertiesReader;

impl Reader for PropertiesReader {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<HashMap<String, String>, Error> {
        // lines() decodes UTF-8 and fails on invalid bytes instead of
        // replacing them.
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

        let mut map = HashMap::new();
        let mut index = 0;
        while index < lines.len() {
            let mut line = lines[index].trim_start().to_string();
            index += 1;

            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            // A logical line continues while it ends in an unescaped backslash.
            while ends_with_continuation(&line) && index < lines.len() {
                line.pop();
                line.push_str(lines[index].trim_start());
                index += 1;
            }

            let (key, value) = split_key_value(&line);
            map.insert(unescape(key)?, unescape(value)?);
        }
        Ok(map)
    }
}

/// An odd number of trailing backslashes marks a continuation line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits a logical line at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut separator = None;
    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                separator = Some((idx, true));
                break;
            }
            c if c.is_whitespace() => {
                separator = Some((idx, false));
                break;
            }
            _ => {}
        }
    }

    match separator {
        None => (line, ""),
        Some((idx, explicit)) => {
            let key = &line[..idx];
            let mut rest = &line[idx..];
            if explicit {
                rest = &rest[1..];
            }
            let mut rest = rest.trim_start();
            if !explicit {
                // "key  = value" style: one separator char may still follow.
                if let Some(stripped) = rest.strip_prefix(['=', ':']) {
                    rest = stripped.trim_start();
                }
            }
            (key, rest)
        }
    }
}

/// Resolves `\t`, `\n`, `\r`, `\f`, `\uXXXX` and escaped separator chars.
/// Unknown escapes drop the backslash, as `java.util.Properties` does.
fn unescape(s: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return Err(Error::DataMismatch(format!(
                        "truncated \\u escape: \\u{hex}"
                    )));
                }
                let code = u32::from_str_radix(&hex, 16)
                    .map_err(|_| Error::DataMismatch(format!("invalid \\u escape: \\u{hex}")))?;
                let ch = char::from_u32(code)
                    .ok_or_else(|| Error::DataMismatch(format!("invalid \\u escape: \\u{hex}")))?;
                out.push(ch);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}
