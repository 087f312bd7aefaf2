// Unit, temperature and currency conversion
//
// Linear categories scale through the unit with factor 1, temperature goes
// through Celsius, and currency goes through the pivot of a rate provider.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod input;
pub mod rates;
pub mod types;

#[cfg(test)]
mod tests;

pub use catalog::{CategoryKind, TemperatureUnit, UnitCatalog, UnitCategory};
pub use engine::{convert_linear, convert_temperature, Converter};
pub use error::ConvertError;
pub use input::parse_numeric;
pub use rates::{RateProvider, StaticRates};
pub use types::{Conversion, ConversionRequest, Precision, UNAVAILABLE};
