//! Line item model
//!
//! A line item is a single recorded income source or expense. Items are
//! immutable once added; the only way to change one is to remove it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// A recorded income source or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Income source or expense name
    pub label: String,

    /// Amount, strictly positive once recorded
    pub amount: Amount,

    /// Expense category (income items have none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl LineItem {
    /// Create an income item
    pub fn income(source: impl Into<String>, amount: Amount) -> Self {
        Self {
            label: source.into(),
            amount,
            category: None,
        }
    }

    /// Create an expense item in a category
    pub fn expense(name: impl Into<String>, amount: Amount, category: impl Into<String>) -> Self {
        Self {
            label: name.into(),
            amount,
            category: Some(category.into()),
        }
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), LineItemValidationError> {
        if self.label.trim().is_empty() {
            return Err(LineItemValidationError::EmptyLabel);
        }

        if !self.amount.value().is_finite() || !self.amount.is_positive() {
            return Err(LineItemValidationError::NonPositiveAmount(self.amount.value()));
        }

        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(LineItemValidationError::EmptyCategory);
            }
        }

        Ok(())
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{} [{}]: {}", self.label, category, self.amount),
            None => write!(f, "{}: {}", self.label, self.amount),
        }
    }
}

/// Validation errors for line items
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemValidationError {
    EmptyLabel,
    NonPositiveAmount(f64),
    EmptyCategory,
}

impl fmt::Display for LineItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Item label cannot be empty"),
            Self::NonPositiveAmount(v) => write!(f, "Item amount must be positive (got {})", v),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for LineItemValidationError {}
