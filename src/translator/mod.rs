//! CloudWatch alarm → Grafana/Prometheus alert rule translation
//!
//! The pipeline is linear and stateless:
//! normalize → validate → map metric → build expression → compute `for`
//! → labels/annotations → rule → group → document.

pub mod assembler;
pub mod condition;
pub mod duration;
pub mod metrics;
pub mod query;

pub use assembler::{assemble, group_name, DEFAULT_FOLDER, GROUP_INTERVAL};
pub use condition::{convert_comparison_operator, DEFAULT_CONDITION};
pub use duration::to_for_duration;
pub use metrics::{get_supported_metrics, lookup_metric, to_prometheus_metric, MetricFormat};
pub use query::{build_query, convert_statistic, Statistic};

use crate::alarm::{normalize, validate, NormalizedAlarm};
use crate::error::TranslationError;
use crate::rules::AlertDocument;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-supplied translation options
///
/// Deserializes from the camelCase options record (`folder`, `noDataState`,
/// `metricFormat`); every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationOptions {
    /// Target folder; also names the group. Blank means unset.
    pub folder: Option<String>,
    /// Carried for callers, not used by the translation
    pub no_data_state: Option<String>,
    pub metric_format: MetricFormat,
}

/// Translator bound to a set of options
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslationOptions,
}

impl Translator {
    pub fn new(options: TranslationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranslationOptions {
        &self.options
    }

    /// Translate a raw alarm document (exported or manual shape)
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` when the alarm fails validation.
    pub fn translate(&self, raw: &Value) -> Result<AlertDocument, TranslationError> {
        self.translate_normalized(&normalize(raw))
    }

    /// Translate an alarm that was already normalized
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` when the alarm fails validation.
    pub fn translate_normalized(
        &self,
        normalized: &NormalizedAlarm,
    ) -> Result<AlertDocument, TranslationError> {
        let alarm = validate(normalized).map_err(|e| {
            debug!("Alarm rejected: {}", e);
            TranslationError::from(e)
        })?;

        let document = assemble(&alarm, &self.options);
        info!(
            "Translated alarm '{}' ({} {})",
            alarm.alarm_name, alarm.namespace, alarm.metric_name
        );
        Ok(document)
    }
}

/// Translate a raw alarm document with the given options
///
/// # Errors
///
/// Returns `TranslationError` when the alarm fails validation.
pub fn translate(raw: &Value, options: &TranslationOptions) -> Result<AlertDocument, TranslationError> {
    Translator::new(options.clone()).translate(raw)
}
