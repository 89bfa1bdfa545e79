//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod eval;
pub mod report;
pub mod session;
pub mod tip;

pub use eval::{handle_eval_command, EvalArgs};
pub use report::{handle_report_command, ReportArgs};
pub use session::{run_session, Outcome, Session};
pub use tip::{handle_tip_command, TipArgs};
