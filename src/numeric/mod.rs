//! Numeric guards shared by every analytics component.
//!
//! Dashboard payloads arrive with nulls, empty strings, and stringified
//! numbers. These helpers coerce all of that to finite values so no
//! downstream ratio can leak a NaN or infinity into a rendered percentage.

use serde_json::Value;
use tracing::debug;

/// Replaces non-finite values with `0.0`. Negative zero normalizes to zero.
pub fn safe_f64(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Coerces an arbitrary JSON primitive to a finite number.
///
/// Null, empty strings, and non-numeric strings all collapse to `0.0`;
/// numeric strings are trimmed and parsed. Total over every input: never
/// panics, never returns a non-finite value.
pub fn safe_num(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(number) => safe_f64(number.as_f64().unwrap_or(0.0)),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return 0.0;
            }
            match trimmed.parse::<f64>() {
                Ok(parsed) => safe_f64(parsed),
                Err(_) => {
                    debug!("coerced non-numeric value `{trimmed}` to 0");
                    0.0
                }
            }
        }
        Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Clamps a value into `[min, max]` after guarding non-finite input.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let value = safe_f64(value);
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Percentage of `numerator` over `denominator`, clamped to `[0, 100]`.
///
/// A zero or unusable denominator yields `0` rather than NaN, so callers can
/// divide without checking first.
pub fn safe_percentage(numerator: f64, denominator: f64) -> f64 {
    let denominator = safe_f64(denominator);
    if denominator == 0.0 {
        return 0.0;
    }
    clamp(safe_f64(numerator) / denominator * 100.0, 0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn safe_f64_absorbs_non_finite_values() {
        assert_eq!(safe_f64(f64::NAN), 0.0);
        assert_eq!(safe_f64(f64::INFINITY), 0.0);
        assert_eq!(safe_f64(f64::NEG_INFINITY), 0.0);
        assert_eq!(safe_f64(-0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(safe_f64(42.5), 42.5);
    }

    #[test]
    fn safe_num_handles_malformed_primitives() {
        assert_eq!(safe_num(&Value::Null), 0.0);
        assert_eq!(safe_num(&json!("")), 0.0);
        assert_eq!(safe_num(&json!("   ")), 0.0);
        assert_eq!(safe_num(&json!("abc")), 0.0);
        assert_eq!(safe_num(&json!("12.5")), 12.5);
        assert_eq!(safe_num(&json!(" -3 ")), -3.0);
        assert_eq!(safe_num(&json!("inf")), 0.0);
        assert_eq!(safe_num(&json!(true)), 1.0);
        assert_eq!(safe_num(&json!(false)), 0.0);
        assert_eq!(safe_num(&json!([1, 2])), 0.0);
        assert_eq!(safe_num(&json!({"nested": 1})), 0.0);
        assert_eq!(safe_num(&json!(7)), 7.0);
    }

    #[test]
    fn safe_percentage_guards_zero_denominator() {
        assert_eq!(safe_percentage(50.0, 0.0), 0.0);
        assert_eq!(safe_percentage(f64::INFINITY, 0.0), 0.0);
        assert_eq!(safe_percentage(50.0, f64::NAN), 0.0);
    }

    #[test]
    fn safe_percentage_clamps_to_unit_range() {
        assert_eq!(safe_percentage(150.0, 100.0), 100.0);
        assert_eq!(safe_percentage(-10.0, 100.0), 0.0);
        assert_eq!(safe_percentage(25.0, 100.0), 25.0);
    }

    #[test]
    fn clamp_guards_non_finite_input() {
        assert_eq!(clamp(f64::NAN, 0.0, 100.0), 0.0);
        assert_eq!(clamp(250.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp(-5.0, 0.0, 100.0), 0.0);
    }
}
