/// Error types for the alarm translator
pub mod error;

/// CloudWatch alarm records, normalization and validation
pub mod alarm;

/// CloudWatch to Prometheus translation pipeline
pub mod translator;

/// Grafana/Prometheus alert rule documents
pub mod rules;

/// Document serializers
pub mod output;

/// Configuration management
pub mod config;

// Re-export commonly used types
pub use alarm::{normalize, parse_alarm_json, parse_dimensions, validate, Alarm, Dimension, NormalizedAlarm};
pub use error::{ConfigError, InputError, InvalidDimensionsError, TranslationError, ValidationError};
pub use rules::{AlertDocument, AlertGroup, AlertRule, Annotations, LabelSet};
pub use translator::{
    get_supported_metrics, to_prometheus_metric, translate, MetricFormat, TranslationOptions,
    Translator,
};
