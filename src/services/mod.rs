//! Service layer for Tally
//!
//! The service layer holds the command handlers that mutate a session's
//! `BudgetState`, handling validation and the amount policy.

pub mod amount;
pub mod budget;
pub mod category;

pub use amount::{parse_amount, parse_non_negative};
pub use budget::BudgetService;
pub use category::{CategoryService, CategoryUsage};
