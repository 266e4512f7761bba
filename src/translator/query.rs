use crate::alarm::Dimension;
use log::warn;

/// CloudWatch statistics that have a PromQL `*_over_time` counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Average,
    Sum,
    Minimum,
    Maximum,
}

impl Statistic {
    pub fn from_cloudwatch(statistic: &str) -> Option<Self> {
        match statistic {
            "Average" => Some(Statistic::Average),
            "Sum" => Some(Statistic::Sum),
            "Minimum" => Some(Statistic::Minimum),
            "Maximum" => Some(Statistic::Maximum),
            _ => None,
        }
    }

    /// PromQL function that aggregates the same way
    pub fn function(self) -> &'static str {
        match self {
            Statistic::Average => "avg_over_time",
            Statistic::Sum => "sum_over_time",
            Statistic::Minimum => "min_over_time",
            Statistic::Maximum => "max_over_time",
        }
    }
}

/// Map a CloudWatch statistic name to its PromQL function, if any
pub fn convert_statistic(statistic: &str) -> Option<&'static str> {
    Statistic::from_cloudwatch(statistic).map(Statistic::function)
}

/// Build the PromQL expression for a metric
///
/// Dimensions become a label matcher in input order; values are quoted as-is.
/// Statistics without a PromQL counterpart (e.g. `SampleCount`, percentiles)
/// leave the selector unwrapped. The threshold is never part of the expression.
pub fn build_query(metric: &str, statistic: &str, dimensions: &[Dimension]) -> String {
    let mut query = metric.to_string();

    if !dimensions.is_empty() {
        let filters = dimensions
            .iter()
            .map(|dim| format!("{}=\"{}\"", dim.name, dim.value))
            .collect::<Vec<_>>()
            .join(",");
        query.push('{');
        query.push_str(&filters);
        query.push('}');
    }

    match convert_statistic(statistic) {
        Some(function) => format!("{}({})", function, query),
        None => {
            warn!(
                "Statistic '{}' has no PromQL equivalent, leaving expression unwrapped",
                statistic
            );
            query
        }
    }
}
