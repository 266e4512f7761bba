//! Folding of exported and manual alarm documents into one canonical record

use crate::alarm::{is_truthy, NormalizedAlarm};
use log::{debug, warn};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Exported (PascalCase) key → canonical (camelCase) key
///
/// The exported key wins when both are present.
pub const FIELD_MAPPING: [(&str, &str); 10] = [
    ("AlarmName", "alarmName"),
    ("MetricName", "metricName"),
    ("Namespace", "namespace"),
    ("Statistic", "statistic"),
    ("Period", "period"),
    ("Threshold", "threshold"),
    ("ComparisonOperator", "comparisonOperator"),
    ("EvaluationPeriods", "evaluationPeriods"),
    ("DatapointsToAlarm", "datapointsToAlarm"),
    ("Dimensions", "dimensions"),
];

/// Normalize a raw alarm document
///
/// Never fails: anything that is not an object simply yields an alarm with no
/// fields, which validation then rejects.
pub fn normalize(raw: &Value) -> NormalizedAlarm {
    let mut fields: HashMap<&'static str, Value> = FIELD_MAPPING
        .iter()
        .filter_map(|&(exported, canonical)| {
            raw.get(exported)
                .or_else(|| raw.get(canonical))
                .map(|value| (canonical, value.clone()))
        })
        .collect();

    debug!("Normalized alarm fields: {:?}", fields.keys().collect::<Vec<_>>());

    NormalizedAlarm {
        alarm_name: fields.remove("alarmName"),
        metric_name: fields.remove("metricName"),
        namespace: fields.remove("namespace"),
        statistic: fields.remove("statistic"),
        period: fields.remove("period"),
        threshold: fields.remove("threshold"),
        comparison_operator: fields.remove("comparisonOperator"),
        evaluation_periods: fields.remove("evaluationPeriods"),
        datapoints_to_alarm: fields.remove("datapointsToAlarm"),
        dimensions: fields.remove("dimensions").map(normalize_dimensions),
    }
}

/// Rewrite `{name, value}` entries to `{Name, Value}`
///
/// Non-array values and entries of any other shape are left untouched.
fn normalize_dimensions(dimensions: Value) -> Value {
    match dimensions {
        Value::Array(entries) => Value::Array(entries.into_iter().map(normalize_dimension).collect()),
        other => other,
    }
}

fn normalize_dimension(entry: Value) -> Value {
    let truthy = |key: &str| entry.get(key).is_some_and(is_truthy);

    if truthy("Name") && truthy("Value") {
        return entry;
    }

    if truthy("name") && truthy("value") {
        return json!({
            "Name": entry["name"],
            "Value": entry["value"],
        });
    }

    warn!("Dimension entry has neither Name/Value nor name/value: {}", entry);
    entry
}
