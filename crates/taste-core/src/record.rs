//! Loosely-typed search result items and the cell values projected from them.
//!
//! The search API does not guarantee its response shape, so a result item is
//! kept as a plain JSON object and individual fields are read through
//! [`RawRecord::field`], which never fails: a missing, `null`, or nested
//! value becomes [`FieldValue::Empty`].

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// One point-of-interest object exactly as returned by the search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Wraps `value` if it is a JSON object; anything else is not a record.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Reads `key` as a cell value, defaulting to [`FieldValue::Empty`].
    #[must_use]
    pub fn field(&self, key: &str) -> FieldValue {
        match self.0.get(key) {
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(Value::Number(n)) => n.as_f64().map_or(FieldValue::Empty, FieldValue::Number),
            Some(Value::Bool(b)) => FieldValue::Text(b.to_string()),
            Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => FieldValue::Empty,
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    #[default]
    Empty,
}

impl FieldValue {
    /// Numeric view used for ranking.
    ///
    /// Numbers and numeric strings (the API sends scores both ways) yield
    /// `Some`; empty, non-numeric, and non-finite values yield `None`.
    #[must_use]
    pub fn sort_key(&self) -> Option<f64> {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
            FieldValue::Empty => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Empty => Ok(()),
        }
    }
}

impl Serialize for FieldValue {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Empty => serializer.serialize_str(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> RawRecord {
        RawRecord::from_value(value).expect("fixture must be an object")
    }

    #[test]
    fn field_reads_strings_and_numbers() {
        let r = record(json!({"nm": "을지로 냉면", "score": 87, "user_score": 4.5}));
        assert_eq!(r.field("nm"), FieldValue::Text("을지로 냉면".to_string()));
        assert_eq!(r.field("score"), FieldValue::Number(87.0));
        assert_eq!(r.field("user_score"), FieldValue::Number(4.5));
    }

    #[test]
    fn field_defaults_missing_and_null_to_empty() {
        let r = record(json!({"phone": null, "category": ["한식"]}));
        assert_eq!(r.field("phone"), FieldValue::Empty);
        assert_eq!(r.field("category"), FieldValue::Empty);
        assert_eq!(r.field("road_addr"), FieldValue::Empty);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(RawRecord::from_value(json!("nope")).is_none());
        assert!(RawRecord::from_value(json!([1, 2])).is_none());
    }

    #[test]
    fn sort_key_parses_numeric_text() {
        assert_eq!(FieldValue::Text(" 4.8 ".into()).sort_key(), Some(4.8));
        assert_eq!(FieldValue::Number(12.0).sort_key(), Some(12.0));
        assert_eq!(FieldValue::Text("n/a".into()).sort_key(), None);
        assert_eq!(FieldValue::Text("NaN".into()).sort_key(), None);
        assert_eq!(FieldValue::Empty.sort_key(), None);
    }

    #[test]
    fn display_renders_empty_as_blank() {
        assert_eq!(FieldValue::Empty.to_string(), "");
        assert_eq!(FieldValue::Number(12.0).to_string(), "12");
        assert_eq!(FieldValue::Number(4.5).to_string(), "4.5");
    }

    #[test]
    fn serializes_integral_numbers_without_fraction() {
        let json = serde_json::to_string(&vec![
            FieldValue::Number(12.0),
            FieldValue::Number(4.5),
            FieldValue::Empty,
            FieldValue::Text("카페".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"[12,4.5,"","카페"]"#);
    }
}
