use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Password length must be between {min} and {max}, got {got}")]
    PasswordLength { min: usize, max: usize, got: usize },

    #[error("Tip percent must be between 0 and {max}, got {got}")]
    TipPercent { max: f64, got: f64 },

    #[error("Date of birth {0} is in the future")]
    BirthInFuture(chrono::NaiveDate),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
