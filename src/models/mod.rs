//! Core data models for Tally
//!
//! This module contains the data structures of the budgeting domain:
//! amounts, line items, the category set and the per-session state.

pub mod amount;
pub mod category;
pub mod line_item;
pub mod state;

pub use amount::Amount;
pub use category::{same_category, CategorySet, CategoryValidationError, DEFAULT_CATEGORIES};
pub use line_item::{LineItem, LineItemValidationError};
pub use state::BudgetState;
