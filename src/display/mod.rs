//! Display formatting for terminal output
//!
//! Provides utilities for formatting line items, categories, budget
//! summaries and tip splits for terminal display.

pub mod category;
pub mod items;
pub mod report;
pub mod tip;

pub use category::format_category_list;
pub use items::{format_expense_table, format_income_table};
pub use report::{format_breakdown, format_summary};
pub use tip::format_tip_split;
