//! Grafana/Prometheus alerting-rule documents
//!
//! These types mirror the rule file layout consumed by Grafana's Prometheus
//! provisioning: a document holds groups, a group holds rules. Field order
//! here is the order fields are serialized in.

/// Insertion-ordered label map
pub mod labels;

pub use labels::LabelSet;

use serde::Serialize;

/// Top-level translation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertDocument {
    pub groups: Vec<AlertGroup>,
}

/// A named group of rules evaluated on a shared interval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertGroup {
    pub name: String,
    pub interval: String,
    pub rules: Vec<AlertRule>,
    /// Only set when the caller chose a folder explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// A single alerting rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRule {
    pub alert: String,
    pub expr: String,
    #[serde(rename = "for")]
    pub for_duration: String,
    pub labels: LabelSet,
    pub annotations: Annotations,
    /// Present together with `condition`, or not at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Human-facing rule annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotations {
    pub summary: String,
    pub description: String,
    pub runbook_url: String,
    pub dashboard_url: String,
}

impl AlertDocument {
    /// The first rule of the first group
    ///
    /// Translation always produces exactly one of each.
    pub fn rule(&self) -> Option<&AlertRule> {
        self.groups.first().and_then(|group| group.rules.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_rule(threshold: Option<f64>, condition: Option<&str>) -> AlertRule {
        let mut labels = LabelSet::new();
        labels.insert("severity", "warning");

        AlertRule {
            alert: "TestAlarm".to_string(),
            expr: "avg_over_time(test_metric)".to_string(),
            for_duration: "10m".to_string(),
            labels,
            annotations: Annotations {
                summary: "TestAlarm alert".to_string(),
                description: "desc".to_string(),
                runbook_url: String::new(),
                dashboard_url: String::new(),
            },
            threshold,
            condition: condition.map(str::to_string),
        }
    }

    #[test]
    fn test_rule_serializes_for_key() {
        let json = serde_json::to_value(create_test_rule(None, None)).unwrap();
        assert_eq!(json["for"], "10m");
        assert!(json.get("for_duration").is_none());
    }

    #[test]
    fn test_absent_threshold_fields_are_omitted() {
        let json = serde_json::to_value(create_test_rule(None, None)).unwrap();
        assert!(json.get("threshold").is_none());
        assert!(json.get("condition").is_none());
    }

    #[test]
    fn test_threshold_fields_serialized() {
        let json = serde_json::to_value(create_test_rule(Some(80.0), Some(">"))).unwrap();
        assert_eq!(json["threshold"], json!(80.0));
        assert_eq!(json["condition"], ">");
    }

    #[test]
    fn test_group_folder_omitted_when_none() {
        let group = AlertGroup {
            name: "cloudwatch-alerts".to_string(),
            interval: "1m".to_string(),
            rules: vec![create_test_rule(None, None)],
            folder: None,
        };
        let json = serde_json::to_value(&group).unwrap();
        assert!(json.get("folder").is_none());

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "interval", "rules"]);
    }

    #[test]
    fn test_document_rule_accessor() {
        let doc = AlertDocument {
            groups: vec![AlertGroup {
                name: "g".to_string(),
                interval: "1m".to_string(),
                rules: vec![create_test_rule(None, None)],
                folder: None,
            }],
        };
        assert_eq!(doc.rule().map(|r| r.alert.as_str()), Some("TestAlarm"));
        assert_eq!(AlertDocument { groups: vec![] }.rule(), None);
    }
}
