//! Rendering of cell values as grouping keys.

use polars::prelude::*;

/// Renders a cell as the text used for grouping, or `None` for null.
///
/// Numbers are written without trailing zeros so that `3.0` and `3`
/// group together.
pub fn any_to_key(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) if v.is_nan() => return None,
        AnyValue::Float64(v) if v.is_nan() => return None,
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    };
    Some(text)
}

/// Formats a float without trailing zeros after the decimal point.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_has_no_key() {
        assert_eq!(any_to_key(AnyValue::Null), None);
        assert_eq!(any_to_key(AnyValue::Float64(f64::NAN)), None);
    }

    #[test]
    fn test_numbers_render_without_trailing_zeros() {
        assert_eq!(any_to_key(AnyValue::Int64(90210)), Some("90210".to_string()));
        assert_eq!(any_to_key(AnyValue::Float64(3.0)), Some("3".to_string()));
        assert_eq!(any_to_key(AnyValue::Float64(2.50)), Some("2.5".to_string()));
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(0.0), "0");
    }

    #[test]
    fn test_strings_are_kept_verbatim() {
        assert_eq!(any_to_key(AnyValue::String(" NYC ")), Some(" NYC ".to_string()));
        assert_eq!(any_to_key(AnyValue::String("")), Some(String::new()));
    }
}
