use crate::convert::error::ConvertError;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub const LENGTH: &str = "Length";
pub const WEIGHT: &str = "Weight";
pub const TEMPERATURE: &str = "Temperature";
pub const CURRENCY: &str = "Currency";

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Feet", 3.28084),
    ("Inches", 39.3701),
    ("Kilometers", 0.001),
    ("Miles", 0.000621371),
];

const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("Kilograms", 1.0),
    ("Pounds", 2.20462),
    ("Ounces", 35.274),
    ("Grams", 1000.0),
];

/// How a category converts between its units
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryKind {
    /// Unit name -> factor relative to the unit with factor 1
    Linear(Vec<(String, f64)>),
    /// Affine conversion through Celsius
    Temperature,
    /// Rates supplied by a [`RateProvider`](super::RateProvider)
    Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitCategory {
    pub name: String,
    pub kind: CategoryKind,
}

impl UnitCategory {
    /// Create a linear category. Units must be non-empty, uniquely named and
    /// have finite positive factors.
    pub fn linear(name: impl Into<String>, units: Vec<(String, f64)>) -> Result<Self, ConvertError> {
        let name = name.into();
        if units.is_empty() {
            return Err(ConvertError::EmptyCategory(name));
        }

        let mut seen = HashSet::with_capacity(units.len());
        for (unit, factor) in &units {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(ConvertError::InvalidFactor {
                    unit: unit.clone(),
                    factor: *factor,
                });
            }
            if !seen.insert(unit.as_str()) {
                return Err(ConvertError::DuplicateUnit {
                    category: name,
                    unit: unit.clone(),
                });
            }
        }
        Ok(Self {
            name,
            kind: CategoryKind::Linear(units),
        })
    }

    fn builtin_linear(name: &str, units: &[(&str, f64)]) -> Self {
        Self {
            name: name.to_string(),
            kind: CategoryKind::Linear(
                units
                    .iter()
                    .map(|(unit, factor)| (unit.to_string(), *factor))
                    .collect(),
            ),
        }
    }

    /// Factor of `unit` in a linear category
    pub fn factor(&self, unit: &str) -> Option<f64> {
        match &self.kind {
            CategoryKind::Linear(units) => units
                .iter()
                .find(|(name, _)| name == unit)
                .map(|(_, factor)| *factor),
            _ => None,
        }
    }
}

/// Ordered set of known categories
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCatalog {
    categories: Vec<UnitCategory>,
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                UnitCategory::builtin_linear(LENGTH, LENGTH_UNITS),
                UnitCategory::builtin_linear(WEIGHT, WEIGHT_UNITS),
                UnitCategory {
                    name: TEMPERATURE.to_string(),
                    kind: CategoryKind::Temperature,
                },
                UnitCategory {
                    name: CURRENCY.to_string(),
                    kind: CategoryKind::Currency,
                },
            ],
        }
    }
}

impl UnitCatalog {
    pub fn get(&self, name: &str) -> Option<&UnitCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn categories(&self) -> &[UnitCategory] {
        &self.categories
    }

    /// Add a category; names must be unique
    pub fn add(&mut self, category: UnitCategory) -> Result<(), ConvertError> {
        if self.get(&category.name).is_some() {
            return Err(ConvertError::DuplicateCategory(category.name));
        }
        self.categories.push(category);
        Ok(())
    }
}

/// The three temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| ConvertError::UnknownUnit {
                category: TEMPERATURE.to_string(),
                unit: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = UnitCatalog::default();
        assert_eq!(catalog.names(), vec![LENGTH, WEIGHT, TEMPERATURE, CURRENCY]);
    }

    #[test]
    fn test_linear_factor_lookup() {
        let catalog = UnitCatalog::default();
        let length = catalog.get(LENGTH).unwrap();
        assert_eq!(length.factor("Meters"), Some(1.0));
        assert_eq!(length.factor("Feet"), Some(3.28084));
        assert_eq!(length.factor("Pounds"), None);
        assert_eq!(catalog.get(TEMPERATURE).unwrap().factor("Celsius"), None);
    }

    #[test]
    fn test_add_category() {
        let mut catalog = UnitCatalog::default();
        let volume = UnitCategory::linear(
            "Volume",
            vec![("Liters".into(), 1.0), ("Milliliters".into(), 1000.0)],
        )
        .unwrap();
        catalog.add(volume).unwrap();
        assert!(catalog.get("Volume").is_some());

        let dup = UnitCategory::linear("Length", vec![("Meters".into(), 1.0)]).unwrap();
        assert_eq!(
            catalog.add(dup),
            Err(ConvertError::DuplicateCategory("Length".into()))
        );
    }

    #[test]
    fn test_rejects_invalid_factor() {
        let result = UnitCategory::linear("Bad", vec![("X".into(), -1.0)]);
        assert!(matches!(result, Err(ConvertError::InvalidFactor { .. })));
    }

    #[test]
    fn test_rejects_empty_category() {
        assert_eq!(
            UnitCategory::linear("Volume", Vec::new()),
            Err(ConvertError::EmptyCategory("Volume".into()))
        );
    }

    #[test]
    fn test_rejects_duplicate_unit() {
        let result = UnitCategory::linear(
            "Volume",
            vec![("Liters".into(), 1.0), ("Liters".into(), 1000.0)],
        );
        assert_eq!(
            result,
            Err(ConvertError::DuplicateUnit {
                category: "Volume".into(),
                unit: "Liters".into()
            })
        );
    }

    #[test]
    fn test_temperature_unit_parse() {
        assert_eq!("Kelvin".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
        assert!("Rankine".parse::<TemperatureUnit>().is_err());
    }
}
