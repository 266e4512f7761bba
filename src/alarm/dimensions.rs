use crate::alarm::Dimension;
use crate::error::InvalidDimensionsError;
use serde_json::Value;

/// Parse a free-text dimension list such as `[{"Name": "InstanceId", "Value": "i-1"}]`
///
/// Blank input yields an empty list. Used to check dimension text before it
/// is merged into an alarm document.
///
/// # Errors
///
/// Returns `InvalidDimensionsError` when the text is not JSON, is not a list,
/// or holds an entry without a truthy `Name` and `Value`.
pub fn parse_dimensions(text: &str) -> Result<Vec<Dimension>, InvalidDimensionsError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| InvalidDimensionsError::Syntax(e.to_string()))?;

    let entries = parsed.as_array().ok_or(InvalidDimensionsError::NotAnArray)?;

    entries
        .iter()
        .map(|entry| Dimension::from_value(entry).ok_or(InvalidDimensionsError::MissingProperties))
        .collect()
}
