//! Block-style YAML rendering
//!
//! Produces the layout Grafana rule files are usually written in: two spaces
//! per nesting level, `{}`/`[]` for empty collections, and sequence items
//! holding collections written as a bare `-` with the collection one level
//! deeper. Strings stay unquoted unless they would read back as something
//! else.

use serde::Serialize;
use serde_json::{Number, Value};

/// Characters that start YAML syntax when they lead a plain scalar
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '%', '@', '`',
];

/// Render any serializable value as YAML (no trailing newline)
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(render_value(&serde_json::to_value(value)?))
}

/// Render a JSON value as YAML (no trailing newline)
pub fn render_value(value: &Value) -> String {
    let mut lines = Vec::new();
    write_lines(value, 0, &mut lines);
    lines.join("\n")
}

fn write_lines(value: &Value, indent: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(indent);

    match value {
        Value::Array(items) => {
            for item in items {
                match inline_collection(item) {
                    Some(empty) => lines.push(format!("{}- {}", pad, empty)),
                    None if is_collection(item) => {
                        lines.push(format!("{}-", pad));
                        write_lines(item, indent + 1, lines);
                    }
                    None => lines.push(format!("{}- {}", pad, scalar(item))),
                }
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let key = quote_if_needed(key);
                match inline_collection(child) {
                    Some(empty) => lines.push(format!("{}{}: {}", pad, key, empty)),
                    None if is_collection(child) => {
                        lines.push(format!("{}{}:", pad, key));
                        write_lines(child, indent + 1, lines);
                    }
                    None => lines.push(format!("{}{}: {}", pad, key, scalar(child))),
                }
            }
        }
        other => lines.push(format!("{}{}", pad, scalar(other))),
    }
}

fn is_collection(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// `[]`/`{}` for empty collections
fn inline_collection(value: &Value) -> Option<&'static str> {
    match value {
        Value::Array(items) if items.is_empty() => Some("[]"),
        Value::Object(map) if map.is_empty() => Some("{}"),
        _ => None,
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => quote_if_needed(s),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Shortest decimal text of a number
///
/// Integral values drop the fraction (`80.0` is `80`). Magnitudes of at
/// least `1e21` or below `1e-6` use exponent notation with a signed
/// exponent (`1e+21`, `1.5e-7`).
pub fn number_text(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }

    match number.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => exponent_text(f),
        Some(f) if f.fract() == 0.0 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}

fn exponent_text(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

fn needs_quotes(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };

    s.contains('\n')
        || s.contains('"')
        || first.is_ascii_digit()
        || matches!(s, "true" | "false" | "null")
        || INDICATORS.contains(&first)
        || first == ' '
        || s.ends_with(' ')
        || s.ends_with(':')
        || s.contains(": ")
        || s.contains(" #")
}

fn quote_if_needed(s: &str) -> String {
    if !needs_quotes(s) {
        return s.to_string();
    }

    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_strings_unquoted() {
        assert_eq!(quote_if_needed("HighCPUUtilization"), "HighCPUUtilization");
        assert_eq!(quote_if_needed("AWS/EC2"), "AWS/EC2");
        assert_eq!(
            quote_if_needed("CloudWatch alarm A for B in AWS/EC2"),
            "CloudWatch alarm A for B in AWS/EC2"
        );
        assert_eq!(quote_if_needed("<"), "<");
    }

    #[test]
    fn test_quoting_rules() {
        assert_eq!(quote_if_needed("10m"), "\"10m\"");
        assert_eq!(quote_if_needed("true"), "\"true\"");
        assert_eq!(quote_if_needed("false"), "\"false\"");
        assert_eq!(quote_if_needed("null"), "\"null\"");
        assert_eq!(quote_if_needed("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote_if_needed("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_yaml_syntax_is_quoted() {
        assert_eq!(quote_if_needed(""), "\"\"");
        assert_eq!(quote_if_needed(">"), "\">\"");
        assert_eq!(quote_if_needed(">="), "\">=\"");
        assert_eq!(quote_if_needed("-padded"), "\"-padded\"");
        assert_eq!(quote_if_needed("key: value"), "\"key: value\"");
        assert_eq!(quote_if_needed("a #comment"), "\"a #comment\"");
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(&Number::from(80)), "80");
        assert_eq!(number_text(&Number::from_f64(80.0).unwrap()), "80");
        assert_eq!(number_text(&Number::from_f64(0.5).unwrap()), "0.5");
        assert_eq!(number_text(&Number::from_f64(-0.0).unwrap()), "0");
        assert_eq!(number_text(&Number::from_f64(85.25).unwrap()), "85.25");
    }

    #[test]
    fn test_number_text_exponent_ranges() {
        assert_eq!(number_text(&Number::from_f64(0.0000001).unwrap()), "1e-7");
        assert_eq!(number_text(&Number::from_f64(1.5e-7).unwrap()), "1.5e-7");
        assert_eq!(number_text(&Number::from_f64(0.000001).unwrap()), "0.000001");
        assert_eq!(number_text(&Number::from_f64(1e21).unwrap()), "1e+21");
        assert_eq!(number_text(&Number::from_f64(-2.5e22).unwrap()), "-2.5e+22");
        assert_eq!(
            number_text(&Number::from_f64(1e20).unwrap()),
            "100000000000000000000"
        );
    }

    #[test]
    fn test_nested_mapping() {
        let value = json!({
            "name": "cloudwatch-alerts",
            "labels": {"severity": "warning"},
            "empty_map": {},
            "empty_list": []
        });
        assert_eq!(
            render_value(&value),
            "name: cloudwatch-alerts\nlabels:\n  severity: warning\nempty_map: {}\nempty_list: []"
        );
    }

    #[test]
    fn test_sequence_of_mappings() {
        let value = json!({"rules": [{"alert": "A", "for": "5m"}, {"alert": "B"}]});
        assert_eq!(
            render_value(&value),
            "rules:\n  -\n    alert: A\n    for: \"5m\"\n  -\n    alert: B"
        );
    }

    #[test]
    fn test_sequence_of_scalars() {
        let value = json!({"values": [1, "two", true, null, [], {}]});
        assert_eq!(
            render_value(&value),
            "values:\n  - 1\n  - two\n  - true\n  - null\n  - []\n  - {}"
        );
    }

    #[test]
    fn test_top_level_scalar() {
        assert_eq!(render_value(&json!("plain")), "plain");
        assert_eq!(render_value(&json!(3)), "3");
    }
}
