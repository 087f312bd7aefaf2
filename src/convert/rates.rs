// Currency rate sources
//
// Rates are expressed relative to a pivot currency whose rate is 1.0.
// The built-in basket is a static snapshot and goes stale; swap in another
// provider for live data.

use crate::convert::catalog::CURRENCY;
use crate::convert::error::ConvertError;
use std::collections::HashSet;

/// Supplies exchange rates relative to a pivot currency
pub trait RateProvider {
    /// Code of the pivot currency (rate 1.0)
    fn pivot(&self) -> &str;

    /// Currency codes in display order
    fn currencies(&self) -> Vec<String>;

    /// Units of `code` per one unit of the pivot currency
    fn rate(&self, code: &str) -> Option<f64>;
}

/// Fixed rate table
#[derive(Debug, Clone, PartialEq)]
pub struct StaticRates {
    pivot: String,
    rates: Vec<(String, f64)>,
}

/// Approximate rates against USD
const DEFAULT_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 150.5),
    ("INR", 83.1),
    ("CAD", 1.35),
    ("AUD", 1.52),
];

impl StaticRates {
    /// Build a rate table, checking every rate and the pivot
    pub fn new(
        pivot: impl Into<String>,
        rates: Vec<(String, f64)>,
    ) -> Result<Self, ConvertError> {
        let pivot = pivot.into();

        let mut seen = HashSet::with_capacity(rates.len());
        for (code, rate) in &rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(ConvertError::InvalidFactor {
                    unit: code.clone(),
                    factor: *rate,
                });
            }
            if !seen.insert(code.as_str()) {
                return Err(ConvertError::DuplicateUnit {
                    category: CURRENCY.to_string(),
                    unit: code.clone(),
                });
            }
        }

        match rates.iter().find(|(code, _)| *code == pivot) {
            None => return Err(ConvertError::MissingPivot(pivot)),
            Some((_, rate)) if *rate != 1.0 => {
                return Err(ConvertError::PivotRate {
                    code: pivot,
                    rate: *rate,
                })
            }
            Some(_) => {}
        }

        Ok(Self { pivot, rates })
    }
}

impl Default for StaticRates {
    fn default() -> Self {
        Self {
            pivot: "USD".to_string(),
            rates: DEFAULT_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}

impl RateProvider for StaticRates {
    fn pivot(&self) -> &str {
        &self.pivot
    }

    fn currencies(&self) -> Vec<String> {
        self.rates.iter().map(|(code, _)| code.clone()).collect()
    }

    fn rate(&self, code: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, rate)| *rate)
    }
}
