//! Serde helper functions for request deserialization.
//!
//! Browsers and scripts send week numbers both as `"3"` and as `3`; both
//! must land on the same partition key.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Identifier {
    Text(String),
    Integer(i64),
}

/// Deserialize an optional identifier given as a JSON string or integer.
///
/// Integers are rendered with `to_string`, so `3` and `"3"` are equal.
pub fn deserialize_optional_identifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Identifier> = Option::deserialize(deserializer)?;
    Ok(value.map(|id| match id {
        Identifier::Text(s) => s,
        Identifier::Integer(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_identifier")]
        week: Option<String>,
    }

    #[test]
    fn test_string_identifier() {
        let parsed: TestStruct = serde_json::from_str(r#"{"week": "wildcard"}"#).unwrap();
        assert_eq!(parsed.week, Some("wildcard".to_string()));
    }

    #[test]
    fn test_integer_identifier_matches_string_form() {
        let from_int: TestStruct = serde_json::from_str(r#"{"week": 3}"#).unwrap();
        let from_str: TestStruct = serde_json::from_str(r#"{"week": "3"}"#).unwrap();
        assert_eq!(from_int, from_str);
    }

    #[test]
    fn test_missing_and_null_identifier() {
        let missing: TestStruct = serde_json::from_str("{}").unwrap();
        let null: TestStruct = serde_json::from_str(r#"{"week": null}"#).unwrap();
        assert_eq!(missing.week, None);
        assert_eq!(null.week, None);
    }

    #[test]
    fn test_rejects_non_identifier_values() {
        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"week": [1]}"#);
        assert!(result.is_err());
    }
}
