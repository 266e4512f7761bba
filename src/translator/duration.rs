/// Convert CloudWatch evaluation settings to a rule `for` duration
///
/// The alarm can fire once `min(evaluation_periods, datapoints_to_alarm)`
/// periods have breached. The result uses the largest fitting unit and
/// truncates: 5400 seconds is `"1h"`, not `"1h30m"`.
pub fn to_for_duration(evaluation_periods: u64, datapoints_to_alarm: u64, period: u64) -> String {
    let total_seconds = evaluation_periods.min(datapoints_to_alarm).saturating_mul(period);

    if total_seconds < 60 {
        format!("{}s", total_seconds)
    } else if total_seconds < 3600 {
        format!("{}m", total_seconds / 60)
    } else {
        format!("{}h", total_seconds / 3600)
    }
}
