//! All three readers must produce the same canonical mapping from
//! equivalent fixtures: plain keys, nested (dotted) keys and non-ASCII
//! content.

use std::collections::HashMap;

use indoc::indoc;
use slingcodec::readers::{JsonReader, PropertiesReader, XmlReader};
use slingcodec::traits::Reader;

fn expected_map() -> HashMap<String, String> {
    HashMap::from([
        ("key1".to_string(), "value1".to_string()),
        ("key21.key22.key23".to_string(), "value 2".to_string()),
        ("key3".to_string(), "valueäöüß€".to_string()),
    ])
}

#[test]
fn properties_fixture_matches_expected_map() {
    let content = indoc! {"
        # sample i18n resources
        key1=value1
        key21.key22.key23=value 2
        key3=valueäöüß€
    "};
    let result = PropertiesReader::from_str(content).unwrap();
    assert_eq!(result, expected_map());
}

#[test]
fn xml_fixture_matches_expected_map() {
    let content = indoc! {r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <i18n>
          <key1>value1</key1>
          <key21>
            <key22>
              <key23>value 2</key23>
            </key22>
          </key21>
          <key3>valueäöüß€</key3>
        </i18n>
    "#};
    let result = XmlReader::from_str(content).unwrap();
    assert_eq!(result, expected_map());
}

#[test]
fn json_fixture_matches_expected_map() {
    let content = indoc! {r#"
        /* sample i18n resources */
        {
          "key1": "value1",
          "key21": {
            "key22": {
              "key23": "value 2"
            }
          },
          "key3": "valueäöüß€"
        }
    "#};
    let result = JsonReader::from_str(content).unwrap();
    assert_eq!(result, expected_map());
}

#[test]
fn all_three_formats_agree() {
    let from_properties =
        PropertiesReader::from_str("key1=value1\nkey21.key22.key23=value 2\nkey3=valueäöüß€")
            .unwrap();
    let from_xml = XmlReader::from_str(
        "<i18n><key1>value1</key1><key21><key22><key23>value 2</key23></key22></key21><key3>valueäöüß€</key3></i18n>",
    )
    .unwrap();
    let from_json = JsonReader::from_str(
        r#"{"key1":"value1","key21":{"key22":{"key23":"value 2"}},"key3":"valueäöüß€"}"#,
    )
    .unwrap();

    assert_eq!(from_properties, from_xml);
    assert_eq!(from_xml, from_json);
}
