use crate::alarm::Alarm;
use crate::rules::{AlertDocument, AlertGroup, AlertRule, Annotations, LabelSet};
use crate::translator::condition::convert_comparison_operator;
use crate::translator::duration::to_for_duration;
use crate::translator::metrics::to_prometheus_metric;
use crate::translator::query::build_query;
use crate::translator::TranslationOptions;
use log::debug;

/// Folder used for group naming when none was chosen
pub const DEFAULT_FOLDER: &str = "cloudwatch";

/// Evaluation interval of every generated group
pub const GROUP_INTERVAL: &str = "1m";

/// Assemble the rule document for a validated alarm
pub fn assemble(alarm: &Alarm, options: &TranslationOptions) -> AlertDocument {
    let metric = to_prometheus_metric(&alarm.namespace, &alarm.metric_name, options.metric_format);
    let expr = build_query(&metric, &alarm.statistic, &alarm.dimensions);
    let for_duration = to_for_duration(
        alarm.evaluation_periods,
        alarm.datapoints_to_alarm,
        alarm.period,
    );
    debug!("Built expression '{}' with for '{}'", expr, for_duration);

    let (threshold, condition) = match alarm.comparison_operator.as_deref() {
        Some(operator) => (
            Some(alarm.threshold),
            Some(convert_comparison_operator(operator).to_string()),
        ),
        None => (None, None),
    };

    let rule = AlertRule {
        alert: alarm.alarm_name.clone(),
        expr,
        for_duration,
        labels: build_labels(alarm),
        annotations: build_annotations(alarm),
        threshold,
        condition,
    };

    let folder = options.folder.as_deref().filter(|folder| !folder.is_empty());

    AlertDocument {
        groups: vec![AlertGroup {
            name: group_name(folder.unwrap_or(DEFAULT_FOLDER)),
            interval: GROUP_INTERVAL.to_string(),
            rules: vec![rule],
            folder: folder.map(str::to_string),
        }],
    }
}

/// `"<folder lowercased, whitespace runs as '-'>-alerts"`
pub fn group_name(folder: &str) -> String {
    let mut name = String::with_capacity(folder.len() + "-alerts".len());
    let mut in_whitespace = false;

    for c in folder.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            name.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    name.push_str("-alerts");
    name
}

/// Fixed labels followed by one label per dimension (lowercased name, last write wins)
pub fn build_labels(alarm: &Alarm) -> LabelSet {
    let mut labels = LabelSet::new();
    labels.insert("severity", "warning");
    labels.insert("source", "cloudwatch");
    labels.insert("namespace", alarm.namespace.as_str());
    labels.insert("metric", alarm.metric_name.as_str());

    for dim in &alarm.dimensions {
        labels.insert(dim.name.to_lowercase(), dim.value.as_str());
    }

    labels
}

pub fn build_annotations(alarm: &Alarm) -> Annotations {
    Annotations {
        summary: format!("{} alert", alarm.alarm_name),
        description: format!(
            "CloudWatch alarm {} for {} in {}",
            alarm.alarm_name, alarm.metric_name, alarm.namespace
        ),
        runbook_url: String::new(),
        dashboard_url: String::new(),
    }
}
