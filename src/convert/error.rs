use thiserror::Error;

/// Contract violations raised by the conversion engine.
///
/// Malformed numeric input is not an error; it yields
/// [`Conversion::Unavailable`](super::Conversion::Unavailable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unit '{unit}' is not part of category '{category}'")]
    UnknownUnit { category: String, unit: String },

    #[error("Invalid factor for '{unit}': {factor} (must be finite and positive)")]
    InvalidFactor { unit: String, factor: f64 },

    #[error("Category '{0}' is already defined")]
    DuplicateCategory(String),

    #[error("Pivot currency '{0}' has no rate")]
    MissingPivot(String),

    #[error("Pivot currency '{code}' must have rate 1, got {rate}")]
    PivotRate { code: String, rate: f64 },

    #[error("Unit '{unit}' appears more than once in '{category}'")]
    DuplicateUnit { category: String, unit: String },

    #[error("Category '{0}' has no units")]
    EmptyCategory(String),
}
