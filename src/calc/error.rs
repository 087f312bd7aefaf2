use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Expression cannot be empty")]
    Empty,

    #[error("Invalid character '{0}' at position {1}")]
    InvalidCharacter(char, usize),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("Expression is nested more than {0} levels deep")]
    TooDeep(usize),

    #[error("Result is not a finite number")]
    NonFinite,
}
