//! Safe Numeric Coercion
//!
//! Sole sanitization boundary between caller JSON and the numeric pipeline.
//! Never fails: anything that is not a finite number becomes the default.

use serde_json::Value;

/// Outcome of coercing one raw field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    /// Caller supplied a usable number
    Parsed(f64),
    /// Field missing or malformed, default substituted
    Defaulted(f64),
}

impl Coerced {
    pub fn value(self) -> f64 {
        match self {
            Coerced::Parsed(v) | Coerced::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(self) -> bool {
        matches!(self, Coerced::Defaulted(_))
    }
}

/// Coerce an optional JSON value, falling back to `default`
pub fn coerce(value: Option<&Value>, default: f64) -> Coerced {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_finite(s),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Coerced::Parsed(v),
        _ => Coerced::Defaulted(default),
    }
}

/// Trimmed string to a finite float. Blank, garbage and non-finite text
/// (`"nan"`, `"inf"`) give `None`.
pub fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
