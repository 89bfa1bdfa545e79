//! Amount field parsing
//!
//! Applies the domain policy on top of the expression evaluator: recorded
//! amounts must be strictly positive, calculator inputs non-negative.

use tracing::debug;

use crate::error::{TallyError, TallyResult};
use crate::expr;
use crate::models::Amount;

/// Evaluate an amount field that must be greater than zero
pub fn parse_amount(input: &str) -> TallyResult<Amount> {
    let value = expr::evaluate(input).map_err(|e| {
        debug!(input, error = %e, "rejected amount expression");
        TallyError::invalid_expression(input.trim(), e)
    })?;

    if value <= 0.0 {
        return Err(TallyError::NonPositiveAmount(value));
    }

    Ok(Amount::new(value))
}

/// Evaluate a calculator input that may be zero but not negative
pub fn parse_non_negative(input: &str, field: &str) -> TallyResult<f64> {
    let value =
        expr::evaluate(input).map_err(|e| TallyError::invalid_expression(input.trim(), e))?;

    if value < 0.0 {
        return Err(TallyError::Validation(format!(
            "{} cannot be negative (got {})",
            field, value
        )));
    }

    Ok(value)
}
