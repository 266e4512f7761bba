use log::warn;

/// Comparison used when the CloudWatch operator is not recognised
pub const DEFAULT_CONDITION: &str = ">";

/// Map a CloudWatch comparison operator to a PromQL comparison
///
/// Unknown operators (including the anomaly-detection band operators) fall
/// back to `>` instead of failing.
pub fn convert_comparison_operator(operator: &str) -> &'static str {
    match operator {
        "GreaterThanThreshold" => ">",
        "GreaterThanOrEqualToThreshold" => ">=",
        "LessThanThreshold" => "<",
        "LessThanOrEqualToThreshold" => "<=",
        other => {
            warn!(
                "Unknown comparison operator '{}', defaulting to '{}'",
                other, DEFAULT_CONDITION
            );
            DEFAULT_CONDITION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_operators() {
        assert_eq!(convert_comparison_operator("GreaterThanThreshold"), ">");
        assert_eq!(convert_comparison_operator("GreaterThanOrEqualToThreshold"), ">=");
        assert_eq!(convert_comparison_operator("LessThanThreshold"), "<");
        assert_eq!(convert_comparison_operator("LessThanOrEqualToThreshold"), "<=");
    }

    #[test]
    fn test_unknown_operator_defaults() {
        assert_eq!(convert_comparison_operator("UnknownOperator"), ">");
        assert_eq!(
            convert_comparison_operator("LessThanLowerOrGreaterThanUpperThreshold"),
            ">"
        );
    }
}
