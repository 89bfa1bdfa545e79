//! CSV Export functionality
//!
//! Writes every line item as one row, income first, in display order.

use crate::error::{TallyError, TallyResult};
use crate::models::BudgetState;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CsvRow<'a> {
    kind: &'static str,
    category: &'a str,
    label: &'a str,
    amount: String,
}

/// Export all line items to CSV
pub fn export_items_csv<W: Write>(state: &BudgetState, writer: W) -> TallyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let income = state.income_items.iter().map(|item| ("income", item));
    let expenses = state.expense_items.iter().map(|item| ("expense", item));

    for (kind, item) in income.chain(expenses) {
        csv_writer.serialize(CsvRow {
            kind,
            category: item.category.as_deref().unwrap_or_default(),
            label: &item.label,
            amount: format!("{:.2}", item.amount.value()),
        })?;
    }

    // An empty budget still gets a header row
    if state.has_no_items() {
        csv_writer.write_record(["kind", "category", "label", "amount"])?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}
