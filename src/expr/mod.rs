//! Safe arithmetic evaluation for amount fields
//!
//! Users may type `40*52/12` instead of a plain number. Input is first
//! checked against a fixed character whitelist (digits, `+ - * / ( ) .` and
//! whitespace), then tokenized and evaluated by a small recursive-descent
//! parser. Identifiers, calls and any other construct cannot be expressed.
//!
//! # Example
//!
//! ```
//! use tally_cli::expr::evaluate;
//!
//! assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
//! assert!(evaluate("10/0").is_err());
//! ```

mod lexer;
mod parser;

pub use lexer::{check_whitelist, is_whitelisted};
pub use parser::MAX_DEPTH;

use thiserror::Error;
use tracing::debug;

/// Reasons an expression is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,

    #[error("character '{ch}' at position {position} is not allowed")]
    DisallowedCharacter { ch: char, position: usize },

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("operator '{op}' at position {position} is not supported")]
    UnsupportedOperator { op: String, position: usize },

    #[error("unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("parenthesis opened at position {position} is never closed")]
    UnclosedParen { position: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("expression nests deeper than {max} levels")]
    TooDeep { max: usize },

    #[error("result is not a finite number")]
    NotFinite,
}

/// Evaluate a user-typed amount
///
/// Plain decimal literals are returned as-is. Anything else must pass the
/// whitelist and parse as arithmetic over `+ - * /` with parentheses and
/// unary signs. Zero and negative results are returned; rejecting them is
/// the caller's policy.
pub fn evaluate(input: &str) -> Result<f64, ExprError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExprError::Empty);
    }

    if let Some(value) = parse_decimal(trimmed) {
        return Ok(value);
    }

    check_whitelist(trimmed)?;
    let tokens = lexer::tokenize(trimmed)?;
    let value = parser::evaluate_tokens(&tokens)?;

    debug!(input = trimmed, value, "evaluated amount expression");
    Ok(value)
}

/// Parse `s` when it is a plain decimal literal
///
/// Accepts an optional sign followed by digits with at most one decimal
/// point and at least one digit. Exponents, `inf` and `nan` are not decimal
/// literals.
fn parse_decimal(s: &str) -> Option<f64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);

    let mut seen_digit = false;
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return None,
        }
    }

    if !seen_digit {
        return None;
    }

    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_basic_expressions() {
        assert_eq!(evaluate("2+2").unwrap(), 4.0);
        assert!(approx(evaluate("40*52/12").unwrap(), 173.333_333_333));
        assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(evaluate("10/0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate(""), Err(ExprError::Empty));
        assert_eq!(evaluate("   \t "), Err(ExprError::Empty));
        assert_eq!(evaluate("1+"), Err(ExprError::UnexpectedEnd));
    }

    #[test]
    fn test_decimal_literals_match_float_parse() {
        for s in ["0", "12", "12.5", ".75", "3.", "-4.25", "+8", "007.10", "1234567.891"] {
            assert_eq!(evaluate(s).unwrap(), s.parse::<f64>().unwrap(), "literal {}", s);
        }
    }

    #[test]
    fn test_literal_with_surrounding_whitespace() {
        assert_eq!(evaluate("  42.5 \n").unwrap(), 42.5);
        assert_eq!(evaluate(" 1 + 1 ").unwrap(), 2.0);
    }

    #[test]
    fn test_non_whitelisted_characters_rejected() {
        for s in [
            "__import__('os')",
            "2+x",
            "1e3",
            "inf",
            "nan",
            "5%",
            "$10",
            "1,000",
            "2^3",
            "abs(-1)",
            "1;2",
        ] {
            assert!(
                matches!(evaluate(s), Err(ExprError::DisallowedCharacter { .. })),
                "{} should be rejected by the whitelist",
                s
            );
        }
    }

    #[test]
    fn test_zero_is_a_valid_result() {
        assert_eq!(evaluate("0").unwrap(), 0.0);
        assert_eq!(evaluate("5-5").unwrap(), 0.0);
    }

    #[test]
    fn test_unary_support() {
        assert_eq!(evaluate("-5").unwrap(), -5.0);
        assert_eq!(evaluate("-(2+3)*2").unwrap(), -10.0);
        assert_eq!(evaluate("+(4)").unwrap(), 4.0);
    }

    #[test]
    fn test_idempotent() {
        let first = evaluate("100*1.15/4");
        for _ in 0..10 {
            assert_eq!(evaluate("100*1.15/4"), first);
        }
        let rejected = evaluate("1/0");
        assert_eq!(evaluate("1/0"), rejected);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1.5"), Some(1.5));
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("1+2"), None);
        assert_eq!(parse_decimal("--1"), None);
    }
}
