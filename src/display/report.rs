//! Report formatting utilities for terminal output
//!
//! Summary metrics, the category breakdown chart and a few shared helpers.

use crate::models::Amount;
use crate::reports::{BalanceStatus, BudgetSummary};

const BAR_WIDTH: usize = 20;
const REPORT_WIDTH: usize = 48;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the income/expense/net metrics and the category chart
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:    {:>16}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:  {:>16}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Balance:     {:>16}  ({})\n",
        summary.net_balance.format_with_symbol(symbol),
        format_status(summary.net_balance, summary.status, symbol)
    ));

    if !summary.breakdown.is_empty() {
        output.push('\n');
        output.push_str(&format_breakdown(summary, symbol));
    }

    output
}

/// `$200.00 surplus` / `$50.00 deficit`
pub fn format_status(net: Amount, status: BalanceStatus, symbol: &str) -> String {
    format!("{} {}", net.abs().format_with_symbol(symbol), status)
}

/// Format the expenses-by-category chart
pub fn format_breakdown(summary: &BudgetSummary, symbol: &str) -> String {
    if summary.breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let name_width = summary
        .breakdown
        .iter()
        .map(|b| b.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);
    let max = summary.largest_category_total().value();

    let mut output = String::from("Expenses by Category\n");
    for row in &summary.breakdown {
        output.push_str(&format!(
            "{:<width$}  {}  {:>14}  {:>5}\n",
            row.category,
            format_bar(row.total.value(), max, BAR_WIDTH),
            row.total.format_with_symbol(symbol),
            format_percentage(row.percentage),
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetState, LineItem};

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_format_summary_surplus() {
        let mut state = BudgetState::default();
        state
            .income_items
            .push(LineItem::income("Salary", Amount::new(5000.0)));
        state
            .expense_items
            .push(LineItem::expense("Rent", Amount::new(1500.0), "Housing"));

        let text = format_summary(&BudgetSummary::generate(&state), "$");
        assert!(text.contains("Total Income:"));
        assert!(text.contains("$5,000.00"));
        assert!(text.contains("$3,500.00 surplus"));
        assert!(text.contains("Housing"));
        assert!(text.contains("100%"));
    }

    #[test]
    fn test_format_status_deficit() {
        let net = Amount::new(-42.0);
        assert_eq!(
            format_status(net, BalanceStatus::from_net(net), "€"),
            "€42.00 deficit"
        );
    }

    #[test]
    fn test_empty_breakdown() {
        let summary = BudgetSummary::generate(&BudgetState::default());
        assert_eq!(format_breakdown(&summary, "$"), "No expenses recorded.\n");
        assert!(!format_summary(&summary, "$").contains("Expenses by Category"));
    }
}
