//! Property-based tests for the node-name escaping.

use proptest::prelude::*;
use slingcodec::valid_node_name;

fn is_valid_node_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
}

proptest! {
    #[test]
    fn escape_is_idempotent(key in ".*") {
        let once = valid_node_name(&key);
        prop_assert_eq!(valid_node_name(&once), once);
    }

    #[test]
    fn escaped_names_use_the_node_name_alphabet(key in ".*") {
        let escaped = valid_node_name(&key);
        prop_assert!(escaped.chars().all(is_valid_node_char), "escaped: {:?}", escaped);
    }

    #[test]
    fn safe_keys_are_unchanged(key in "[A-Za-z0-9_.]*") {
        prop_assert_eq!(valid_node_name(&key), key);
    }

    #[test]
    fn umlauts_never_survive(key in "[a-zäöüß]{1,20}") {
        let escaped = valid_node_name(&key);
        prop_assert!(!escaped.contains(['ä', 'ö', 'ü', 'ß']));
    }

    #[test]
    fn length_grows_only_through_digraphs(key in "[a-z äöüß]{0,20}") {
        let digraphs = key.chars().filter(|c| matches!(c, 'ä' | 'ö' | 'ü' | 'ß')).count();
        let escaped = valid_node_name(&key);
        prop_assert_eq!(escaped.chars().count(), key.chars().count() + digraphs);
    }
}

#[test]
fn cafe_loses_its_accent() {
    let escaped = valid_node_name("café");
    assert!(!escaped.contains('é'));
    assert_eq!(escaped, "caf-");
}
