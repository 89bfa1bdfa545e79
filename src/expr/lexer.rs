//! Tokenizer for amount expressions
//!
//! Only numeric literals, the four arithmetic operators and parentheses can
//! ever become tokens. Anything else is rejected before parsing starts.

use super::ExprError;

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl TokenKind {
    /// Source spelling used in error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Star => "*".into(),
            Self::Slash => "/".into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
        }
    }
}

/// A token with the character position it started at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Whether `c` belongs to the accepted character set
pub fn is_whitelisted(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
}

/// Reject the first character outside the whitelist
pub fn check_whitelist(input: &str) -> Result<(), ExprError> {
    match input.chars().enumerate().find(|(_, c)| !is_whitelisted(*c)) {
        Some((position, ch)) => Err(ExprError::DisallowedCharacter { ch, position }),
        None => Ok(()),
    }
}

/// Split a whitelisted expression into tokens
///
/// Positions are character offsets into `input`. Callers are expected to
/// run [`check_whitelist`] first; stray characters are still reported here.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let value = literal
                .parse::<f64>()
                .map_err(|_| ExprError::MalformedNumber(literal.clone()))?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                position: start,
            });
            continue;
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' | '/' => {
                // `**` and `//` are not among the four operators
                if chars.get(i + 1) == Some(&c) {
                    return Err(ExprError::UnsupportedOperator {
                        op: format!("{}{}", c, c),
                        position: i,
                    });
                }
                if c == '*' {
                    TokenKind::Star
                } else {
                    TokenKind::Slash
                }
            }
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            other => {
                return Err(ExprError::DisallowedCharacter {
                    ch: other,
                    position: i,
                })
            }
        };

        tokens.push(Token { kind, position: i });
        i += 1;
    }

    Ok(tokens)
}
