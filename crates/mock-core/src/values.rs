//! Values produced by generators.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Value produced by a generator.
///
/// Serialized untagged, so JSON output carries the bare value
/// (`42`, `"abc"`, `true`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MockValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Array of values
    Array(Vec<MockValue>),

    /// Object/map of values
    Object(HashMap<String, MockValue>),

    /// Null value
    Null,
}

impl MockValue {
    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Convert a configured YAML value.
    ///
    /// Goes through the untagged `Deserialize` impl, so scalars, sequences and
    /// string-keyed mappings map onto the matching variant. Anything else
    /// (tagged nodes, non-string keys) is kept as its YAML text.
    pub fn from_yaml(value: &serde_yaml::Value) -> Self {
        serde_yaml::from_value(value.clone()).unwrap_or_else(|_| {
            let text = serde_yaml::to_string(value).unwrap_or_default();
            Self::String(text.trim_end().to_string())
        })
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<MockValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&HashMap<String, MockValue>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Renders strings without quotes and containers as JSON.
impl fmt::Display for MockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::Array(_) | Self::Object(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for MockValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MockValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for MockValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for MockValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for MockValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_value_accessors() {
        assert_eq!(MockValue::Bool(true).as_bool(), Some(true));
        assert_eq!(MockValue::Int(42).as_i64(), Some(42));
        assert_eq!(MockValue::Int(2).as_f64(), Some(2.0));
        assert_eq!(MockValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(MockValue::string("abc").as_str(), Some("abc"));
        assert!(MockValue::Null.is_null());
        assert_eq!(MockValue::Null.as_str(), None);
    }

    #[test]
    fn test_mock_value_json_is_untagged() {
        assert_eq!(serde_json::to_string(&MockValue::Int(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&MockValue::string("x")).unwrap(),
            "\"x\""
        );
        assert_eq!(serde_json::to_string(&MockValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_mock_value_display() {
        assert_eq!(MockValue::string("raw").to_string(), "raw");
        assert_eq!(MockValue::Bool(false).to_string(), "false");
        assert_eq!(MockValue::Int(-3).to_string(), "-3");
        assert_eq!(
            MockValue::Array(vec![MockValue::Int(1), MockValue::string("a")]).to_string(),
            "[1,\"a\"]"
        );
    }

    fn yaml(text: &str) -> MockValue {
        MockValue::from_yaml(&serde_yaml::from_str(text).unwrap())
    }

    #[test]
    fn test_from_yaml_scalars() {
        assert_eq!(yaml("~"), MockValue::Null);
        assert_eq!(yaml("true"), MockValue::Bool(true));
        assert_eq!(yaml("42"), MockValue::Int(42));
        assert_eq!(yaml("1.5"), MockValue::Float(1.5));
        assert_eq!(yaml("hello"), MockValue::string("hello"));
        assert_eq!(yaml("'42'"), MockValue::string("42"));
    }

    #[test]
    fn test_from_yaml_containers() {
        let arr = yaml("[1, two, 3]");
        let arr = arr.as_array().expect("Expected Array");
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1], MockValue::string("two"));

        let obj = yaml("{ version: 1, name: test }");
        let obj = obj.as_object().expect("Expected Object");
        assert_eq!(obj.get("version"), Some(&MockValue::Int(1)));
        assert_eq!(obj.get("name"), Some(&MockValue::string("test")));
    }

    #[test]
    fn test_from_yaml_non_string_keys_keep_text() {
        let value = yaml("{ 2: x }");
        assert!(value.as_str().is_some(), "got {value:?}");
    }
}
