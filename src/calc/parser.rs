use crate::calc::error::CalcError;
use std::f64::consts::{E, PI};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    // Identifier: constant or function name
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Sqrt,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => f.write_str(name),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Percent => f.write_str("%"),
            Token::Sqrt => f.write_str("√"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some((pos, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' | '−' => Token::Minus,
            '*' | '×' => Token::Star,
            '/' | '÷' => Token::Slash,
            '%' => Token::Percent,
            '√' => Token::Sqrt,
            'π' => Token::Ident("pi".to_string()),
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        literal.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber(literal.clone()))?;
                Token::Number(value)
            }
            c if c.is_ascii_alphabetic() => {
                let mut name = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_alphabetic() || next.is_ascii_digit() {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(name.to_ascii_lowercase())
            }
            other => return Err(CalcError::InvalidCharacter(other, pos)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

// Grammar:
//   expr    := term (('+' | '-') term)*
//   term    := unary (('*' | '/' | '%') unary)*
//   unary   := ('+' | '-' | '√') unary | primary
//   primary := number | constant | function '(' expr ')' | '(' expr ')'
//
// Every nesting level passes through `unary`, so it carries the depth check.
const MAX_DEPTH: usize = 256;

struct Evaluator {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Evaluator {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), CalcError> {
        match self.next() {
            Some(ref token) if *token == expected => Ok(()),
            Some(token) => Err(CalcError::UnexpectedToken(token.to_string())),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                Some(Token::Percent) => {
                    self.pos += 1;
                    value %= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let value = self.unary_inner();
        self.depth -= 1;
        value
    }

    fn unary_inner(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(Token::Sqrt) => {
                self.pos += 1;
                Ok(self.unary()?.sqrt())
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            Some(Token::Ident(name)) => match name.as_str() {
                "pi" => Ok(PI),
                "e" => Ok(E),
                "sin" | "cos" | "tan" | "log" | "sqrt" => {
                    self.expect(Token::LParen)?;
                    let arg = self.expr()?;
                    self.expect(Token::RParen)?;
                    Ok(apply_function(&name, arg))
                }
                _ => Err(CalcError::UnknownFunction(name)),
            },
            Some(token) => Err(CalcError::UnexpectedToken(token.to_string())),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

fn apply_function(name: &str, arg: f64) -> f64 {
    match name {
        "sin" => arg.sin(),
        "cos" => arg.cos(),
        "tan" => arg.tan(),
        "log" => arg.log10(),
        _ => arg.sqrt(),
    }
}

/// Evaluate a calculator expression.
///
/// Supports `+ - * / %` (with `×` and `÷`), parentheses, `π`/`pi`, `e`,
/// `sin cos tan` in radians, `log` (base 10) and `sqrt`/`√`.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }

    let mut evaluator = Evaluator {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = evaluator.expr()?;

    if let Some(token) = evaluator.peek() {
        return Err(CalcError::UnexpectedToken(token.to_string()));
    }

    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }

    debug!(input, value, "evaluated expression");
    Ok(value)
}

/// Round to 8 decimals and drop trailing zeros
pub fn format_result(value: f64) -> String {
    let rounded = (value * 1e8).round() / 1e8;
    // Avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.8}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str) -> f64 {
        evaluate(input).unwrap()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1+2*3"), 7.0);
        assert_eq!(eval("(1+2)*3"), 9.0);
        assert_eq!(eval("10-4-3"), 3.0);
        assert_eq!(eval("8/2/2"), 2.0);
        assert_eq!(eval("7%4+1"), 4.0);
    }

    #[test]
    fn test_keypad_symbols() {
        assert_eq!(eval("6×7"), 42.0);
        assert_eq!(eval("9÷3"), 3.0);
        assert_eq!(eval("√(16)"), 4.0);
        assert_eq!(eval("√16+1"), 5.0);
        assert_eq!(eval("2×π"), 2.0 * PI);
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval("-3+5"), 2.0);
        assert_eq!(eval("2*-3"), -6.0);
        assert_eq!(eval("--4"), 4.0);
    }

    #[test]
    fn test_functions() {
        assert!((eval("log(1000)") - 3.0).abs() < 1e-12);
        assert_eq!(eval("sin(0)"), 0.0);
        assert_eq!(eval("cos(0)"), 1.0);
        assert_eq!(eval("sqrt(2)*sqrt(2)").round(), 2.0);
        assert_eq!(eval("e"), E);
    }

    #[test]
    fn test_errors() {
        assert_eq!(evaluate(""), Err(CalcError::Empty));
        assert_eq!(evaluate("1+"), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate("sin(1"), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate("(1+2))"), Err(CalcError::UnexpectedToken(")".into())));
        assert_eq!(evaluate("1..2"), Err(CalcError::InvalidNumber("1..2".into())));
        assert_eq!(evaluate("foo(1)"), Err(CalcError::UnknownFunction("foo".into())));
        assert_eq!(evaluate("1/0"), Err(CalcError::NonFinite));
        assert_eq!(evaluate("2$3"), Err(CalcError::InvalidCharacter('$', 1)));
        assert!(evaluate("2π").is_err());
    }

    #[test]
    fn test_deep_nesting_rejected() {
        let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(evaluate(&parens), Err(CalcError::TooDeep(MAX_DEPTH)));

        let minuses = format!("{}1", "-".repeat(100_000));
        assert_eq!(evaluate(&minuses), Err(CalcError::TooDeep(MAX_DEPTH)));

        let roots = format!("{}16", "√".repeat(100_000));
        assert_eq!(evaluate(&roots), Err(CalcError::TooDeep(MAX_DEPTH)));

        let calls = format!("{}1{}", "sqrt(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(evaluate(&calls), Err(CalcError::TooDeep(MAX_DEPTH)));
    }

    #[test]
    fn test_moderate_nesting_allowed() {
        let parens = format!("{}2{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(eval(&parens), 2.0);
        assert_eq!(eval(&format!("{}3", "-".repeat(100))), 3.0);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(3.0), "3");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.33333333");
        assert_eq!(format_result(-2.5), "-2.5");
        assert_eq!(format_result(-1e-12), "0");
        assert_eq!(format_result(1200.0), "1200");
    }
}
