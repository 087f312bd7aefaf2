use crate::convert::catalog::{CategoryKind, TemperatureUnit, UnitCatalog, UnitCategory};
use crate::convert::error::ConvertError;
use crate::convert::input::parse_numeric;
use crate::convert::rates::{RateProvider, StaticRates};
use crate::convert::types::{Conversion, ConversionRequest, Precision};
use tracing::debug;

/// Display precision of linear categories
pub const LINEAR_PRECISION: Precision = Precision::Fixed(4);
pub const TEMPERATURE_PRECISION: Precision = Precision::Fixed(2);
pub const CURRENCY_PRECISION: Precision = Precision::Fixed(2);

/// Scale through the unit with factor 1
pub fn convert_linear(value: f64, from_factor: f64, to_factor: f64) -> f64 {
    (value / from_factor) * to_factor
}

/// Convert through Celsius
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_celsius(from.to_celsius(value))
}

/// Unit conversion over a catalog of categories and a currency rate source
pub struct Converter {
    catalog: UnitCatalog,
    rates: Box<dyn RateProvider>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Built-in categories with the static currency basket
    pub fn new() -> Self {
        Self {
            catalog: UnitCatalog::default(),
            rates: Box::new(StaticRates::default()),
        }
    }

    pub fn with_parts(catalog: UnitCatalog, rates: Box<dyn RateProvider>) -> Self {
        Self { catalog, rates }
    }

    /// Replace the currency rate source
    pub fn with_rates(mut self, rates: Box<dyn RateProvider>) -> Self {
        self.rates = rates;
        self
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    pub fn categories(&self) -> Vec<&str> {
        self.catalog.names()
    }

    /// Units of a category in display order
    pub fn units(&self, category: &str) -> Result<Vec<String>, ConvertError> {
        let category = self.category(category)?;
        Ok(match &category.kind {
            CategoryKind::Linear(units) => units.iter().map(|(name, _)| name.clone()).collect(),
            CategoryKind::Temperature => TemperatureUnit::ALL
                .iter()
                .map(|unit| unit.name().to_string())
                .collect(),
            CategoryKind::Currency => self.rates.currencies(),
        })
    }

    /// Initial (from, to) selection for a category: its first two units
    pub fn default_pair(&self, category: &str) -> Result<(String, String), ConvertError> {
        let units = self.units(category)?;
        let from = units
            .first()
            .cloned()
            .ok_or_else(|| ConvertError::EmptyCategory(category.to_string()))?;
        let to = units.get(1).cloned().unwrap_or_else(|| from.clone());
        Ok((from, to))
    }

    /// Find the category that owns both units, preferring the catalog order
    pub fn find_category(&self, from_unit: &str, to_unit: &str) -> Option<&str> {
        self.catalog
            .names()
            .into_iter()
            .find(|name| self.check_units(name, from_unit, to_unit).is_ok())
    }

    /// Check that both units belong to the category
    pub fn validate(&self, request: &ConversionRequest) -> Result<(), ConvertError> {
        self.check_units(&request.category, &request.from_unit, &request.to_unit)
    }

    fn check_units(&self, category: &str, from_unit: &str, to_unit: &str) -> Result<(), ConvertError> {
        let units = self.units(category)?;
        for unit in [from_unit, to_unit] {
            if !units.iter().any(|u| u == unit) {
                return Err(ConvertError::UnknownUnit {
                    category: category.to_string(),
                    unit: unit.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        self.convert(
            &request.category,
            &request.from_unit,
            &request.to_unit,
            &request.input,
        )
    }

    /// Convert user-typed text. Text that is not a finite number yields
    /// [`Conversion::Unavailable`]; unknown categories or units are errors.
    pub fn convert(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        input: &str,
    ) -> Result<Conversion, ConvertError> {
        match parse_numeric(input) {
            Some(value) => self.convert_value(category, from_unit, to_unit, value),
            None => {
                // Units are still checked so a bad selection never hides behind bad input
                self.check_units(category, from_unit, to_unit)?;
                debug!(category, input, "input is not a number");
                Ok(Conversion::Unavailable)
            }
        }
    }

    /// Convert an already parsed value
    pub fn convert_value(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> Result<Conversion, ConvertError> {
        let entry = self.category(category)?;

        let conversion = match &entry.kind {
            CategoryKind::Linear(_) => {
                let from = self.linear_factor(entry, from_unit)?;
                let to = self.linear_factor(entry, to_unit)?;
                if from_unit == to_unit {
                    Conversion::from_raw(value, LINEAR_PRECISION)
                } else {
                    Conversion::from_raw(convert_linear(value, from, to), LINEAR_PRECISION)
                }
            }
            CategoryKind::Temperature => {
                let from: TemperatureUnit = from_unit.parse()?;
                let to: TemperatureUnit = to_unit.parse()?;
                if from == to {
                    Conversion::from_raw(value, Precision::Exact)
                } else {
                    Conversion::from_raw(
                        convert_temperature(value, from, to),
                        TEMPERATURE_PRECISION,
                    )
                }
            }
            CategoryKind::Currency => {
                let from = self.currency_rate(from_unit)?;
                let to = self.currency_rate(to_unit)?;
                if from_unit == to_unit {
                    Conversion::from_raw(value, CURRENCY_PRECISION)
                } else {
                    Conversion::from_raw(
                        convert_linear(value, from, to),
                        CURRENCY_PRECISION,
                    )
                }
            }
        };

        debug!(category, from_unit, to_unit, value, result = %conversion, "converted");
        Ok(conversion)
    }

    fn category(&self, name: &str) -> Result<&UnitCategory, ConvertError> {
        self.catalog
            .get(name)
            .ok_or_else(|| ConvertError::UnknownCategory(name.to_string()))
    }

    fn linear_factor(&self, category: &UnitCategory, unit: &str) -> Result<f64, ConvertError> {
        category.factor(unit).ok_or_else(|| ConvertError::UnknownUnit {
            category: category.name.clone(),
            unit: unit.to_string(),
        })
    }

    fn currency_rate(&self, code: &str) -> Result<f64, ConvertError> {
        self.rates.rate(code).ok_or_else(|| ConvertError::UnknownUnit {
            category: crate::convert::catalog::CURRENCY.to_string(),
            unit: code.to_string(),
        })
    }
}
