//! Report CLI command
//!
//! Prints the tables and summary for a saved JSON export.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_table, format_income_table, format_summary};
use crate::error::TallyResult;
use crate::export::load_export_file;
use crate::models::BudgetState;
use crate::reports::BudgetSummary;

/// Arguments for `tally report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to a JSON export
    pub file: PathBuf,

    /// Only show the summary
    #[arg(short, long)]
    pub summary_only: bool,
}

/// Render the report for a loaded budget
pub fn render_report(state: &BudgetState, symbol: &str, summary_only: bool) -> String {
    let mut output = String::new();

    if !summary_only {
        output.push_str("Income\n");
        output.push_str(&format_income_table(&state.income_items, symbol));
        output.push_str("\n\nExpenses\n");
        output.push_str(&format_expense_table(&state.expense_items, symbol));
        output.push_str("\n\n");
    }

    output.push_str(&format_summary(&BudgetSummary::generate(state), symbol));
    output
}

/// Handle the report command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> TallyResult<()> {
    let state = load_export_file(&args.file)?;
    print!(
        "{}",
        render_report(&state, &settings.currency_symbol, args.summary_only)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::BudgetService;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::default();
        let mut service = BudgetService::new(&mut state);
        service.add_income("Salary", "3000").unwrap();
        service.add_expense("Food & Dining", "Groceries", "400").unwrap();
        state
    }

    #[test]
    fn test_full_report() {
        let text = render_report(&sample_state(), "$", false);
        assert!(text.contains("Income"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("$2,600.00 surplus"));
    }

    #[test]
    fn test_summary_only() {
        let text = render_report(&sample_state(), "$", true);
        assert!(!text.contains("Groceries"));
        assert!(text.starts_with("Budget Summary"));
    }
}
