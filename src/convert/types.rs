use serde::Serialize;
use std::fmt;

/// Placeholder shown when the input could not be converted
pub const UNAVAILABLE: &str = "---";

/// How many decimal digits a result is displayed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Fixed number of decimal digits
    Fixed(usize),
    /// Shown as-is (temperature identity conversions)
    Exact,
}

/// A single conversion to perform
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Raw text as typed by the user
    pub input: String,
}

impl ConversionRequest {
    pub fn new(
        category: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            input: input.into(),
        }
    }
}

/// Outcome of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Conversion {
    /// Converted value, kept unrounded; `precision` applies on display
    Value { value: f64, precision: Precision },
    /// Input was not a finite number
    Unavailable,
}

impl Conversion {
    pub(crate) fn from_raw(value: f64, precision: Precision) -> Self {
        if value.is_finite() {
            Conversion::Value { value, precision }
        } else {
            Conversion::Unavailable
        }
    }

    /// Unrounded value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Conversion::Value { value, .. } => Some(*value),
            Conversion::Unavailable => None,
        }
    }

    /// Value rounded to its display precision
    pub fn rounded(&self) -> Option<f64> {
        match self {
            Conversion::Value {
                value,
                precision: Precision::Fixed(digits),
            } => {
                let scale = 10f64.powi(*digits as i32);
                let scaled = value * scale;
                // Values this large have no fractional digits left to round
                if !scaled.is_finite() {
                    return Some(*value);
                }
                Some(scaled.round() / scale)
            }
            Conversion::Value {
                value,
                precision: Precision::Exact,
            } => Some(*value),
            Conversion::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Conversion::Value { .. })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Value {
                value,
                precision: Precision::Fixed(digits),
            } => write!(f, "{:.*}", digits, value),
            Conversion::Value {
                value,
                precision: Precision::Exact,
            } => write!(f, "{}", value),
            Conversion::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}
