use crate::calc::parser::{evaluate, format_result};
use serde::Serialize;
use tracing::debug;

/// Display text after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

const FUNCTION_KEYS: [&str; 4] = ["sin", "cos", "tan", "log"];

/// A calculator keypad press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// All clear
    Clear,
    /// Delete last character
    Delete,
    Equals,
    /// Function key, inserted as `name(`
    Function(String),
    /// Digit, operator, parenthesis or constant, inserted verbatim
    Input(String),
}

impl Key {
    /// Map a keypad label ("AC", "DEL", "=", "sin", "7", "×", ...) to a key
    pub fn from_label(label: &str) -> Self {
        match label {
            "AC" => Key::Clear,
            "DEL" => Key::Delete,
            "=" => Key::Equals,
            l if FUNCTION_KEYS.contains(&l) => Key::Function(l.to_string()),
            l => Key::Input(l.to_string()),
        }
    }
}

/// Keypad calculator state: the display line, the last evaluated
/// expression, and whether scientific keys are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculator {
    display: String,
    history: String,
    scientific: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            history: String::new(),
            scientific: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific
    }

    pub fn toggle_mode(&mut self) {
        self.scientific = !self.scientific;
    }

    /// Press a key by its label
    pub fn press_label(&mut self, label: &str) {
        self.press(Key::from_label(label));
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Clear => {
                self.display = "0".to_string();
                self.history.clear();
            }
            Key::Delete => {
                self.display.pop();
                if self.display.is_empty() {
                    self.display = "0".to_string();
                }
            }
            Key::Equals => match evaluate(&self.display) {
                Ok(value) => {
                    self.history = std::mem::take(&mut self.display);
                    self.display = format_result(value);
                }
                Err(e) => {
                    debug!(expression = %self.display, error = %e, "evaluation failed");
                    self.display = ERROR_DISPLAY.to_string();
                }
            },
            Key::Function(name) => self.append(&format!("{}(", name)),
            Key::Input(text) => self.append(&text),
        }
    }

    fn append(&mut self, text: &str) {
        if self.display == "0" || self.display == ERROR_DISPLAY {
            self.display = text.to_string();
        } else {
            self.display.push_str(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, labels: &[&str]) {
        for label in labels {
            calc.press_label(label);
        }
    }

    #[test]
    fn test_basic_sequence() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", "+", "3", "×", "2"]);
        assert_eq!(calc.display(), "12+3×2");

        calc.press(Key::Equals);
        assert_eq!(calc.display(), "18");
        assert_eq!(calc.history(), "12+3×2");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut calc = Calculator::new();
        calc.press_label("7");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_delete() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "÷"]);
        calc.press(Key::Delete);
        assert_eq!(calc.display(), "4");
        calc.press(Key::Delete);
        assert_eq!(calc.display(), "0");
        calc.press(Key::Delete);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_error_then_recover() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "="]);
        assert_eq!(calc.display(), ERROR_DISPLAY);

        calc.press_label("8");
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn test_function_keys() {
        let mut calc = Calculator::new();
        calc.toggle_mode();
        assert!(calc.is_scientific());

        press_all(&mut calc, &["log", "1", "0", "0", ")", "="]);
        assert_eq!(calc.history(), "log(100)");
        assert_eq!(calc.display(), "2");

        press_all(&mut calc, &["+", "sin"]);
        assert_eq!(calc.display(), "2+sin(");
    }

    #[test]
    fn test_clear() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "=", "AC"]);
        assert_eq!(calc, Calculator::new());
    }
}
