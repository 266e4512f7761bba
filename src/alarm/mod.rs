//! CloudWatch alarm records
//!
//! Alarms arrive either as `aws cloudwatch describe-alarms` exports (PascalCase
//! keys, plus AWS metadata that is ignored) or as hand-written documents
//! (camelCase keys). Both shapes go through [`normalize`] once, producing a
//! [`NormalizedAlarm`], and [`validate`] turns that into a typed [`Alarm`].

/// Free-text dimension list parsing
pub mod dimensions;

/// Exported/manual field folding
pub mod normalizer;

/// Ordered validation rules
pub mod validator;

pub use dimensions::parse_dimensions;
pub use normalizer::normalize;
pub use validator::validate;

use crate::error::InputError;
use crate::output::number_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single CloudWatch dimension (`{"Name": ..., "Value": ...}`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// Dimension name, e.g. `InstanceId`
    #[serde(rename = "Name")]
    pub name: String,
    /// Dimension value, e.g. `i-1234567890abcdef0`
    #[serde(rename = "Value")]
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Read a dimension from a raw JSON entry
    ///
    /// Returns `None` unless the entry is an object whose `Name` and `Value`
    /// are both truthy scalars.
    pub fn from_value(entry: &Value) -> Option<Self> {
        let name = entry.get("Name").filter(|v| is_truthy(v))?;
        let value = entry.get("Value").filter(|v| is_truthy(v))?;
        Some(Self::new(scalar_text(name)?, scalar_text(value)?))
    }
}

/// Alarm with canonical field names and untyped values
///
/// Only the ten fields the translator consults are kept. Values are copied
/// as-is from the input; interpretation happens in [`validate`].
/// Serializing a `NormalizedAlarm` yields a manual-format document, so
/// normalizing it again is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAlarm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datapoints_to_alarm: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Value>,
}

/// Alarm that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub alarm_name: String,
    pub metric_name: String,
    pub namespace: String,
    pub statistic: String,
    /// Evaluation period in seconds (at least 60)
    pub period: u64,
    pub threshold: f64,
    /// Raw CloudWatch operator name, absent when the input had none
    pub comparison_operator: Option<String>,
    pub evaluation_periods: u64,
    /// Never greater than `evaluation_periods`
    pub datapoints_to_alarm: u64,
    pub dimensions: Vec<Dimension>,
}

/// Parse raw alarm text as pasted by a user
///
/// # Errors
///
/// Returns `InputError::Empty` for blank input and `InputError::InvalidJson`
/// when the text is not valid JSON.
pub fn parse_alarm_json(text: &str) -> Result<Value, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    serde_json::from_str(trimmed).map_err(|e| InputError::InvalidJson(e.to_string()))
}

/// Whether a value counts as set: `null`, `false`, `0` and `""` do not
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a scalar value; `None` for null, arrays and objects
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dimension_from_value() {
        let dim = Dimension::from_value(&json!({"Name": "InstanceId", "Value": "i-123"}));
        assert_eq!(dim, Some(Dimension::new("InstanceId", "i-123")));
    }

    #[test]
    fn test_dimension_from_value_numeric_value() {
        let dim = Dimension::from_value(&json!({"Name": "Port", "Value": 8080}));
        assert_eq!(dim, Some(Dimension::new("Port", "8080")));
    }

    #[test]
    fn test_dimension_from_value_rejects_malformed() {
        assert_eq!(Dimension::from_value(&json!({"Name": "InstanceId"})), None);
        assert_eq!(Dimension::from_value(&json!({"Name": "", "Value": "x"})), None);
        assert_eq!(
            Dimension::from_value(&json!({"Name": "a", "Value": {"nested": true}})),
            None
        );
        assert_eq!(Dimension::from_value(&json!("InstanceId")), None);
    }

    #[test]
    fn test_dimension_serializes_pascal_case() {
        let json = serde_json::to_value(Dimension::new("InstanceId", "i-1")).unwrap();
        assert_eq!(json, json!({"Name": "InstanceId", "Value": "i-1"}));
    }

    #[test]
    fn test_parse_alarm_json_empty() {
        assert_eq!(parse_alarm_json("   \n"), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_alarm_json_invalid() {
        let err = parse_alarm_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON format: "));
    }

    #[test]
    fn test_parse_alarm_json_valid() {
        let value = parse_alarm_json(r#"  {"alarmName": "A"}  "#).unwrap();
        assert_eq!(value["alarmName"], "A");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!(1.5)));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_scalar_text_integral_float() {
        assert_eq!(scalar_text(&json!(80.0)).as_deref(), Some("80"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(scalar_text(&json!([1])), None);
    }
}
