//! Validation of normalized alarms
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. `alarmName`, `metricName`, `namespace`, `statistic` and `threshold` are present
//! 2. `threshold >= 0`
//! 3. `period >= 60`
//! 4. `evaluationPeriods >= 1` and `datapointsToAlarm >= 1`
//! 5. `datapointsToAlarm <= evaluationPeriods`
//! 6. dimensions, when given, are a list of `{Name, Value}` entries
//!
//! Zero is an accepted threshold even though the message says "positive".

use crate::alarm::{is_truthy, scalar_text, Alarm, Dimension, NormalizedAlarm};
use crate::error::ValidationError;
use log::debug;
use serde_json::Value;

/// Minimum CloudWatch period accepted for translation, in seconds
pub const MIN_PERIOD_SECONDS: i64 = 60;

/// Check a normalized alarm and convert it into a typed [`Alarm`]
///
/// Absent optional fields take CloudWatch defaults: `period` 60 seconds,
/// `evaluationPeriods` 1, and `datapointsToAlarm` equal to `evaluationPeriods`.
///
/// # Errors
///
/// Returns the `ValidationError` of the first violated rule.
pub fn validate(alarm: &NormalizedAlarm) -> Result<Alarm, ValidationError> {
    let required = [
        ("alarmName", &alarm.alarm_name),
        ("metricName", &alarm.metric_name),
        ("namespace", &alarm.namespace),
        ("statistic", &alarm.statistic),
        ("threshold", &alarm.threshold),
    ];
    for (field, value) in required {
        if value.as_ref().map_or(true, is_blank) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let alarm_name = text_field("alarmName", &alarm.alarm_name)?;
    let metric_name = text_field("metricName", &alarm.metric_name)?;
    let namespace = text_field("namespace", &alarm.namespace)?;
    let statistic = text_field("statistic", &alarm.statistic)?;
    let threshold = number_field("threshold", &alarm.threshold)?;

    if threshold < 0.0 {
        return Err(ValidationError::NegativeThreshold);
    }

    let period = integer_field("period", &alarm.period)?.unwrap_or(MIN_PERIOD_SECONDS);
    if period < MIN_PERIOD_SECONDS {
        return Err(ValidationError::PeriodTooShort);
    }

    let evaluation_periods = integer_field("evaluationPeriods", &alarm.evaluation_periods)?.unwrap_or(1);
    let datapoints_to_alarm =
        integer_field("datapointsToAlarm", &alarm.datapoints_to_alarm)?.unwrap_or(evaluation_periods);
    if evaluation_periods < 1 || datapoints_to_alarm < 1 {
        return Err(ValidationError::TooFewPeriods);
    }
    if datapoints_to_alarm > evaluation_periods {
        return Err(ValidationError::DatapointsExceedPeriods);
    }

    // Non-scalar operators keep their JSON text and map to the default condition
    let comparison_operator = alarm
        .comparison_operator
        .as_ref()
        .filter(|v| is_truthy(v))
        .map(|value| scalar_text(value).unwrap_or_else(|| value.to_string()));

    let dimensions = dimension_list(alarm.dimensions.as_ref())?;

    debug!(
        "Validated alarm '{}' ({} / {}), {} dimension(s)",
        alarm_name,
        namespace,
        metric_name,
        dimensions.len()
    );

    Ok(Alarm {
        alarm_name,
        metric_name,
        namespace,
        statistic,
        period: period as u64,
        threshold,
        comparison_operator,
        evaluation_periods: evaluation_periods as u64,
        datapoints_to_alarm: datapoints_to_alarm as u64,
        dimensions,
    })
}

/// Whether a present value stringifies to blank text
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
    }
}

fn text_field(field: &'static str, value: &Option<Value>) -> Result<String, ValidationError> {
    value
        .as_ref()
        .and_then(scalar_text)
        .ok_or(ValidationError::InvalidValue(field))
}

fn number_field(field: &'static str, value: &Option<Value>) -> Result<f64, ValidationError> {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::InvalidValue(field))
}

/// Integer field; `Ok(None)` when absent or null
fn integer_field(field: &'static str, value: &Option<Value>) -> Result<Option<i64>, ValidationError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        Some(_) => None,
    };

    number.map(Some).ok_or(ValidationError::InvalidValue(field))
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn dimension_list(dimensions: Option<&Value>) -> Result<Vec<Dimension>, ValidationError> {
    match dimensions {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| Dimension::from_value(entry).ok_or(ValidationError::MalformedDimension))
            .collect(),
        Some(_) => Err(ValidationError::DimensionsNotArray),
    }
}
