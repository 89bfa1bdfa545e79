//! Reports module for Tally
//!
//! The aggregator: budget totals, net balance, the per-category expense
//! breakdown and the tip split calculator.

pub mod summary;
pub mod tip;

pub use summary::{
    expenses_by_category, net_balance, total_expenses, total_income, BalanceStatus,
    BudgetSummary, CategoryBreakdown,
};
pub use tip::{split_bill, TipSplit};
