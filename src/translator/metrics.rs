//! CloudWatch metric → Prometheus metric name mapping
//!
//! Well-known metrics resolve through a built-in table. Anything else gets a
//! derived name whose shape depends on how the metrics reach Prometheus:
//! through YACE (yet-another-cloudwatch-exporter), which prefixes `aws_`, or
//! pushed directly under the namespace's own name.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Naming convention for metrics missing from the built-in table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFormat {
    /// `aws_<namespace>_<metric>`, as exported by YACE
    #[default]
    Yace,
    /// `<namespace>_<metric>`, as pushed by the application
    PushMetric,
}

impl MetricFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricFormat::Yace => "yace",
            MetricFormat::PushMetric => "push_metric",
        }
    }
}

impl fmt::Display for MetricFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yace" => Ok(MetricFormat::Yace),
            "push_metric" => Ok(MetricFormat::PushMetric),
            other => Err(format!(
                "unknown metric format '{}', expected 'yace' or 'push_metric'",
                other
            )),
        }
    }
}

/// Built-in namespace → (CloudWatch metric, Prometheus metric) table
static SUPPORTED_METRICS: &[(&str, &[(&str, &str)])] = &[
    (
        "AWS/EC2",
        &[
            ("CPUUtilization", "aws_ec2_cpu_utilization_percent"),
            ("NetworkIn", "aws_ec2_network_in_bytes"),
            ("NetworkOut", "aws_ec2_network_out_bytes"),
            ("DiskReadOps", "aws_ec2_disk_read_ops_total"),
            ("DiskWriteOps", "aws_ec2_disk_write_ops_total"),
        ],
    ),
    (
        "AWS/RDS",
        &[
            ("CPUUtilization", "aws_rds_cpu_utilization_percent"),
            ("DatabaseConnections", "aws_rds_database_connections"),
            ("FreeableMemory", "aws_rds_freeable_memory_bytes"),
            ("FreeStorageSpace", "aws_rds_free_storage_space_bytes"),
        ],
    ),
    (
        "AWS/ELB",
        &[
            ("RequestCount", "aws_elb_request_count_total"),
            ("Latency", "aws_elb_target_response_time_seconds"),
            ("HTTPCode_Target_2XX_Count", "aws_elb_http_2xx_requests_total"),
            ("HTTPCode_Target_4XX_Count", "aws_elb_http_4xx_requests_total"),
            ("HTTPCode_Target_5XX_Count", "aws_elb_http_5xx_requests_total"),
        ],
    ),
    (
        "AWS/S3",
        &[
            ("BucketSizeBytes", "aws_s3_bucket_size_bytes"),
            ("NumberOfObjects", "aws_s3_bucket_number_of_objects"),
        ],
    ),
];

/// Look up a metric in the built-in table (exact, case-sensitive match)
pub fn lookup_metric(namespace: &str, metric_name: &str) -> Option<&'static str> {
    SUPPORTED_METRICS
        .iter()
        .find(|(ns, _)| *ns == namespace)
        .and_then(|(_, metrics)| metrics.iter().find(|(name, _)| *name == metric_name))
        .map(|(_, prometheus)| *prometheus)
}

/// Convert a CloudWatch namespace and metric name to a Prometheus metric name
///
/// Table hits are returned verbatim regardless of `format`.
pub fn to_prometheus_metric(namespace: &str, metric_name: &str, format: MetricFormat) -> String {
    if let Some(known) = lookup_metric(namespace, metric_name) {
        debug!("Mapped {}/{} to built-in metric {}", namespace, metric_name, known);
        return known.to_string();
    }

    let namespace_part = sanitize(namespace);
    let metric_part = sanitize(metric_name);

    let derived = match format {
        MetricFormat::PushMetric => format!("{}_{}", namespace_part, metric_part),
        // Only the first occurrence is dropped, so `AWS/...` keeps a single prefix
        MetricFormat::Yace => format!("aws_{}_{}", namespace_part.replacen("aws_", "", 1), metric_part),
    };

    warn!(
        "Metric {}/{} is not in the built-in table, using derived name {} ({})",
        namespace, metric_name, derived, format
    );
    derived
}

/// Snapshot of the built-in table, keyed by namespace then CloudWatch metric
pub fn get_supported_metrics() -> BTreeMap<&'static str, BTreeMap<&'static str, &'static str>> {
    SUPPORTED_METRICS
        .iter()
        .map(|(namespace, metrics)| (*namespace, metrics.iter().copied().collect()))
        .collect()
}

/// Replace everything outside `[A-Za-z0-9]` with `_` and lowercase
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
