// Standard and scientific calculator

pub mod error;
pub mod keypad;
pub mod parser;

pub use error::CalcError;
pub use keypad::{Calculator, Key, ERROR_DISPLAY};
pub use parser::{evaluate, format_result};
