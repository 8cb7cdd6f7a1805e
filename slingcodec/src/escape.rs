//! Escaping of i18n keys into valid JCR node names.

/// Creates a valid node name from an arbitrary i18n key.
///
/// The lowercase umlauts `ä`, `ö`, `ü` and `ß` are replaced with their
/// ASCII digraphs first; every remaining character outside `a-z`, `A-Z`,
/// `0-9`, `_` and `.` becomes a `-`.
///
/// The function is pure and idempotent. Two distinct keys may escape to
/// the same node name; callers that need the original key back have to
/// carry it separately (see the `sling:key` property emitted by the
/// document writers).
///
/// # Example
/// ```rust
/// use slingcodec::escape::valid_node_name;
/// assert_eq!(valid_node_name("key1"), "key1");
/// assert_eq!(valid_node_name("grüße an alle"), "gruesse-an-alle");
/// ```
pub fn valid_node_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for ch in key.chars() {
        match ch {
            'ä' => name.push_str("ae"),
            'ö' => name.push_str("oe"),
            'ü' => name.push_str("ue"),
            'ß' => name.push_str("ss"),
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '.' => name.push(ch),
            _ => name.push('-'),
        }
    }
    name
}
