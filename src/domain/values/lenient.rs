//! Best-effort field parsers for provider rows.
//!
//! Providers send numbers as JSON numbers or numeric strings, and sometimes
//! not at all. A bad field degrades to a default instead of failing the row.

use serde_json::Value;

/// Number or numeric string as `f64`. Anything else is `None`.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Annual rate as a fraction; missing, malformed or negative rates become 0.0.
pub fn rate(value: Option<&Value>) -> f64 {
    match number(value) {
        Some(r) if r > 0.0 => r,
        _ => 0.0,
    }
}

/// Optional amount; missing or malformed is `None`, never zero.
pub fn amount(value: Option<&Value>) -> Option<f64> {
    number(value)
}

/// Whole number of days. Fractional or negative values are `None`.
pub fn days(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => match n.as_u64() {
            Some(d) => u32::try_from(d).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                .map(|f| f as u32),
        },
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Non-empty string field.
pub fn text(value: Option<&Value>) -> Option<String> {
    value?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
