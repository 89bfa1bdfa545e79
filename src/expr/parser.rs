//! Recursive-descent evaluator over amount tokens
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Values are computed while parsing; no tree is built.

use super::lexer::{Token, TokenKind};
use super::ExprError;

/// Maximum number of nested parentheses and unary signs
pub const MAX_DEPTH: usize = 256;

/// Evaluate a token stream produced by the lexer
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, ExprError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };

    let value = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(ExprError::UnexpectedToken {
            token: token.kind.describe(),
            position: token.position,
        });
    }

    if !value.is_finite() {
        return Err(ExprError::NotFinite);
    }

    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExprError::TooDeep { max: MAX_DEPTH });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut value = self.term()?;

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Plus => {
                    self.pos += 1;
                    value += self.term()?;
                }
                TokenKind::Minus => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ExprError> {
        let mut value = self.unary()?;

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Star => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                TokenKind::Slash => {
                    self.pos += 1;
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, ExprError> {
        let sign = match self.peek().map(|t| t.kind) {
            Some(TokenKind::Plus) => 1.0,
            Some(TokenKind::Minus) => -1.0,
            _ => return self.primary(),
        };

        self.pos += 1;
        self.enter()?;
        let value = self.unary()?;
        self.leave();

        Ok(sign * value)
    }

    fn primary(&mut self) -> Result<f64, ExprError> {
        let token = self.next().ok_or(ExprError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number(n) => Ok(n),
            TokenKind::LParen => {
                self.enter()?;
                let value = self.expr()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => {}
                    Some(other) => {
                        return Err(ExprError::UnexpectedToken {
                            token: other.kind.describe(),
                            position: other.position,
                        })
                    }
                    None => {
                        return Err(ExprError::UnclosedParen {
                            position: token.position,
                        })
                    }
                }
                self.leave();
                Ok(value)
            }
            other => Err(ExprError::UnexpectedToken {
                token: other.describe(),
                position: token.position,
            }),
        }
    }
}
