//! Line item display formatting
//!
//! Income and expense lists are shown as tables with 1-based positions,
//! which are the positions `rm` commands take.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::LineItem;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format income items as a table
pub fn format_income_table(items: &[LineItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No income items added yet. Use 'income add <source> <amount>'.".to_string();
    }

    let rows = items.iter().enumerate().map(|(i, item)| IncomeRow {
        position: i + 1,
        source: item.label.clone(),
        amount: item.amount.format_with_symbol(symbol),
    });

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format expense items as a table
pub fn format_expense_table(items: &[LineItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No expense items added yet. Use 'expense add <name> <amount> -c <category>'."
            .to_string();
    }

    let rows = items.iter().enumerate().map(|(i, item)| ExpenseRow {
        position: i + 1,
        category: item.category.clone().unwrap_or_default(),
        name: item.label.clone(),
        amount: item.amount.format_with_symbol(symbol),
    });

    Table::new(rows).with(Style::sharp()).to_string()
}
