#[cfg(test)]
mod tests {
    use super::super::catalog::*;
    use super::super::engine::Converter;
    use super::super::error::ConvertError;
    use super::super::rates::{RateProvider, StaticRates};
    use super::super::types::*;
    use proptest::prelude::*;

    fn rounded(conversion: Conversion) -> f64 {
        conversion.rounded().expect("conversion should be available")
    }

    #[test]
    fn test_temperature_reference_points() {
        let converter = Converter::new();
        let c_to_f = |v: &str| rounded(converter.convert(TEMPERATURE, "Celsius", "Fahrenheit", v).unwrap());

        assert_eq!(c_to_f("0"), 32.0);
        assert_eq!(c_to_f("100"), 212.0);
        assert_eq!(
            rounded(converter.convert(TEMPERATURE, "Fahrenheit", "Celsius", "32").unwrap()),
            0.0
        );
        assert_eq!(
            rounded(converter.convert(TEMPERATURE, "Celsius", "Kelvin", "0").unwrap()),
            273.15
        );
        assert_eq!(
            rounded(converter.convert(TEMPERATURE, "Kelvin", "Fahrenheit", "0").unwrap()),
            -459.67
        );
    }

    #[test]
    fn test_temperature_display() {
        let converter = Converter::new();
        let result = converter
            .convert(TEMPERATURE, "Celsius", "Fahrenheit", "100")
            .unwrap();
        assert_eq!(result.to_string(), "212.00");

        // Identity is shown exactly as parsed
        let result = converter
            .convert(TEMPERATURE, "Kelvin", "Kelvin", "12.345")
            .unwrap();
        assert_eq!(result.to_string(), "12.345");
    }

    #[test]
    fn test_length_meters_to_feet() {
        let converter = Converter::new();
        let result = converter.convert(LENGTH, "Meters", "Feet", "1").unwrap();
        assert_eq!(rounded(result), 3.2808);
        assert_eq!(result.to_string(), "3.2808");
    }

    #[test]
    fn test_weight_kilograms_to_grams() {
        let converter = Converter::new();
        let result = converter.convert(WEIGHT, "Kilograms", "Grams", "2.5").unwrap();
        assert_eq!(result.to_string(), "2500.0000");
    }

    #[test]
    fn test_currency_fixed_basket() {
        let converter = Converter::new();
        let result = converter.convert(CURRENCY, "USD", "EUR", "1").unwrap();
        assert_eq!(rounded(result), 0.92);
        assert_eq!(result.to_string(), "0.92");

        let back = converter.convert(CURRENCY, "EUR", "USD", "0.92").unwrap();
        assert_eq!(back.to_string(), "1.00");
    }

    #[test]
    fn test_invalid_input_is_unavailable() {
        let converter = Converter::new();
        for input in ["abc", "", "   ", "-", "NaN", "Infinity"] {
            let result = converter.convert(LENGTH, "Meters", "Feet", input).unwrap();
            assert_eq!(result, Conversion::Unavailable, "input {:?}", input);
            assert_eq!(result.to_string(), UNAVAILABLE);
            assert_eq!(result.value(), None);
        }
    }

    #[test]
    fn test_overflow_is_unavailable() {
        let converter = Converter::new();
        let result = converter
            .convert_value(WEIGHT, "Kilograms", "Grams", f64::MAX)
            .unwrap();
        assert_eq!(result, Conversion::Unavailable);
    }

    #[test]
    fn test_huge_value_rounds_to_itself() {
        let converter = Converter::new();
        let result = converter
            .convert_value(WEIGHT, "Kilograms", "Grams", 1e305)
            .unwrap();
        let value = result.value().unwrap();
        assert!(value.is_finite());
        assert!((value / 1e308 - 1.0).abs() < 1e-12);
        assert_eq!(result.rounded(), Some(value));
    }

    #[test]
    fn test_unknown_category_and_unit() {
        let converter = Converter::new();
        assert_eq!(
            converter.convert("Volume", "Liters", "Cups", "1"),
            Err(ConvertError::UnknownCategory("Volume".into()))
        );
        assert_eq!(
            converter.convert(LENGTH, "Meters", "Pounds", "1"),
            Err(ConvertError::UnknownUnit {
                category: LENGTH.into(),
                unit: "Pounds".into()
            })
        );
        // Bad units are reported even when the input is not a number
        assert!(converter.convert(CURRENCY, "USD", "XYZ", "abc").is_err());
        assert!(converter.convert(TEMPERATURE, "Rankine", "Celsius", "1").is_err());
    }

    #[test]
    fn test_validate_request() {
        let converter = Converter::new();
        let ok = ConversionRequest::new(WEIGHT, "Pounds", "Ounces", "1");
        assert!(converter.validate(&ok).is_ok());
        assert_eq!(rounded(converter.convert_request(&ok).unwrap()), 16.0);

        let bad = ConversionRequest::new(WEIGHT, "Pounds", "Feet", "1");
        assert!(converter.validate(&bad).is_err());
    }

    #[test]
    fn test_units_and_defaults() {
        let converter = Converter::new();
        assert_eq!(
            converter.units(TEMPERATURE).unwrap(),
            vec!["Celsius", "Fahrenheit", "Kelvin"]
        );
        assert_eq!(
            converter.default_pair(LENGTH).unwrap(),
            ("Meters".to_string(), "Feet".to_string())
        );
        assert_eq!(
            converter.default_pair(CURRENCY).unwrap(),
            ("USD".to_string(), "EUR".to_string())
        );
    }

    #[test]
    fn test_find_category() {
        let converter = Converter::new();
        assert_eq!(converter.find_category("Feet", "Miles"), Some(LENGTH));
        assert_eq!(converter.find_category("GBP", "JPY"), Some(CURRENCY));
        assert_eq!(converter.find_category("Celsius", "Kelvin"), Some(TEMPERATURE));
        assert_eq!(converter.find_category("Feet", "Grams"), None);
    }

    struct FlatRates;

    impl RateProvider for FlatRates {
        fn pivot(&self) -> &str {
            "AAA"
        }

        fn currencies(&self) -> Vec<String> {
            vec!["AAA".into(), "BBB".into()]
        }

        fn rate(&self, code: &str) -> Option<f64> {
            match code {
                "AAA" => Some(1.0),
                "BBB" => Some(4.0),
                _ => None,
            }
        }
    }

    #[test]
    fn test_injected_rate_provider() {
        let converter = Converter::new().with_rates(Box::new(FlatRates));
        assert_eq!(converter.units(CURRENCY).unwrap(), vec!["AAA", "BBB"]);
        assert_eq!(
            rounded(converter.convert(CURRENCY, "BBB", "AAA", "10").unwrap()),
            2.5
        );
        assert!(converter.convert(CURRENCY, "USD", "AAA", "1").is_err());
    }

    #[test]
    fn test_custom_linear_category() {
        let mut catalog = UnitCatalog::default();
        catalog
            .add(
                UnitCategory::linear(
                    "Volume",
                    vec![("Liters".into(), 1.0), ("Milliliters".into(), 1000.0)],
                )
                .unwrap(),
            )
            .unwrap();
        let converter = Converter::with_parts(catalog, Box::new(StaticRates::default()));
        assert_eq!(
            converter
                .convert("Volume", "Milliliters", "Liters", "250")
                .unwrap()
                .to_string(),
            "0.2500"
        );
    }

    fn all_pairs(converter: &Converter) -> Vec<(String, String, String)> {
        let mut pairs = Vec::new();
        for category in converter.categories() {
            let units = converter.units(category).unwrap();
            for a in &units {
                for b in &units {
                    pairs.push((category.to_string(), a.clone(), b.clone()));
                }
            }
        }
        pairs
    }

    proptest! {
        #[test]
        fn prop_identity_is_exact(x in -1.0e6f64..1.0e6, idx in 0usize..1000) {
            let converter = Converter::new();
            let pairs = all_pairs(&converter);
            let (category, unit, _) = &pairs[idx % pairs.len()];
            let result = converter.convert_value(category, unit, unit, x).unwrap();
            prop_assert_eq!(result.value(), Some(x));
        }

        #[test]
        fn prop_linear_round_trip(x in 1.0e-3f64..1.0e6, idx in 0usize..1000) {
            let converter = Converter::new();
            let pairs: Vec<_> = all_pairs(&converter)
                .into_iter()
                .filter(|(c, _, _)| c != TEMPERATURE)
                .collect();
            let (category, a, b) = &pairs[idx % pairs.len()];
            let there = converter.convert_value(category, b, a, x).unwrap().value().unwrap();
            let back = converter.convert_value(category, a, b, there).unwrap().value().unwrap();
            prop_assert!((back - x).abs() <= x * 1e-9, "{} -> {} -> {}", x, there, back);
        }

        #[test]
        fn prop_temperature_round_trip(x in -500.0f64..5000.0, from in 0usize..3, to in 0usize..3) {
            let from = TemperatureUnit::ALL[from];
            let to = TemperatureUnit::ALL[to];
            let there = super::super::engine::convert_temperature(x, from, to);
            let back = super::super::engine::convert_temperature(there, to, from);
            prop_assert!((back - x).abs() < 1e-9);
        }

        #[test]
        fn prop_never_nan(input in ".{0,12}") {
            let converter = Converter::new();
            let result = converter.convert(LENGTH, "Meters", "Feet", &input).unwrap();
            if let Some(v) = result.value() {
                prop_assert!(v.is_finite());
            }
        }
    }
}
