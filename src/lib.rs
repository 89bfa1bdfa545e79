//! Tally - terminal budget tracker and tip calculator
//!
//! Tally keeps a single in-memory budget per session: income sources,
//! categorized expenses and a net balance, plus a bill/tip splitter.
//! Every amount the user types goes through a small arithmetic evaluator
//! that only accepts numbers, `+ - * /` and parentheses.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `expr`: Safe arithmetic expression evaluator
//! - `models`: Amounts, line items, categories and the session state
//! - `services`: Operations that mutate a session's state
//! - `reports`: Totals, balance status, category breakdown and tip split
//! - `export`: JSON/YAML/CSV export and JSON load
//! - `display`: Terminal formatting
//! - `config`: Paths and user settings
//! - `cli`: Command handlers and the interactive session
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use tally_cli::models::BudgetState;
//! use tally_cli::reports::BudgetSummary;
//! use tally_cli::services::BudgetService;
//!
//! let mut state = BudgetState::default();
//! let mut service = BudgetService::new(&mut state);
//! service.add_income("Salary", "40*52/12*25").unwrap();
//! service.add_expense("Housing", "Rent", "1500").unwrap();
//!
//! let summary = BudgetSummary::generate(&state);
//! assert!(summary.net_balance.is_positive());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod expr;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{TallyError, TallyResult};
