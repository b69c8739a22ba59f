//! Generic record abstraction used by the list filters.
//!
//! Every entity shown in a table exposes its columns through [`Record::field`],
//! an explicit mapping from logical field name to a typed scalar. Unknown
//! names read as [`FieldValue::Null`], so a filter that references a column
//! the entity does not have degrades to "empty" instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Scalar value of a single record field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Numeric view of the value; text, booleans and null are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Text form used by substring search: null is empty, integral numbers
/// print without a fractional part.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A row of tabular data addressable by field name.
pub trait Record {
    /// Value of `name`, or [`FieldValue::Null`] when the record has no such field.
    fn field(&self, name: &str) -> FieldValue;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> FieldValue {
        (**self).field(name)
    }
}

impl Record for HashMap<String, FieldValue> {
    fn field(&self, name: &str) -> FieldValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

/// JSON objects are records too. Arrays and nested objects are not scalars
/// and read as null.
impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> FieldValue {
        match self.get(name) {
            Some(serde_json::Value::String(s)) => FieldValue::Text(s.clone()),
            Some(serde_json::Value::Number(n)) => {
                n.as_f64().map(FieldValue::Number).unwrap_or_default()
            }
            Some(serde_json::Value::Bool(b)) => FieldValue::Bool(*b),
            _ => FieldValue::Null,
        }
    }
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> FieldValue {
        match self {
            serde_json::Value::Object(map) => map.field(name),
            _ => FieldValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_matches_search_text() {
        assert_eq!(FieldValue::Number(12.0).to_string(), "12");
        assert_eq!(FieldValue::Number(4.8).to_string(), "4.8");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::from("USB-C Cable").to_string(), "USB-C Cable");
    }

    #[test]
    fn test_json_object_fields() {
        let row = json!({
            "name": "Desk Lamp LED",
            "stock": 8,
            "active": false,
            "tags": ["a", "b"],
            "note": null
        });

        assert_eq!(row.field("name"), FieldValue::from("Desk Lamp LED"));
        assert_eq!(row.field("stock").as_number(), Some(8.0));
        assert_eq!(row.field("active"), FieldValue::Bool(false));
        assert!(row.field("tags").is_null());
        assert!(row.field("note").is_null());
        assert!(row.field("missing").is_null());
        assert!(json!([1, 2, 3]).field("name").is_null());
    }

    #[test]
    fn test_map_fields() {
        let mut row: HashMap<String, FieldValue> = HashMap::new();
        row.insert("name".to_string(), "Notebook A5".into());
        row.insert("stock".to_string(), 234u32.into());

        assert_eq!(row.field("name"), FieldValue::from("Notebook A5"));
        assert_eq!(row.field("stock").as_number(), Some(234.0));
        assert!(row.field("supplier").is_null());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(FieldValue::from(Some(5u32)), FieldValue::Number(5.0));
        assert_eq!(FieldValue::from(None::<u32>), FieldValue::Null);
    }

    #[test]
    fn test_untagged_serde() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"["Electronics", 12.5, true, null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::from("Electronics"),
                FieldValue::Number(12.5),
                FieldValue::Bool(true),
                FieldValue::Null,
            ]
        );
    }
}
