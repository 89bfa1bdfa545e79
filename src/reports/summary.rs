//! Budget Summary
//!
//! Totals, net balance and the per-category expense breakdown. All
//! functions are pure over their inputs.

use std::collections::HashMap;
use std::fmt;

use crate::models::{Amount, BudgetState, LineItem};

/// Whether the budget ends with money left over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Surplus,
    Deficit,
}

impl BalanceStatus {
    /// Zero counts as a surplus
    pub fn from_net(net: Amount) -> Self {
        if net.value() >= 0.0 {
            Self::Surplus
        } else {
            Self::Deficit
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surplus => write!(f, "surplus"),
            Self::Deficit => write!(f, "deficit"),
        }
    }
}

/// Sum of all income items
pub fn total_income(items: &[LineItem]) -> Amount {
    items.iter().map(|i| i.amount).sum()
}

/// Sum of all expense items
pub fn total_expenses(items: &[LineItem]) -> Amount {
    items.iter().map(|i| i.amount).sum()
}

/// Income minus expenses
pub fn net_balance(income: &[LineItem], expenses: &[LineItem]) -> Amount {
    total_income(income) - total_expenses(expenses)
}

/// Expense totals keyed by category
///
/// Items without a category are grouped under an empty key.
pub fn expenses_by_category(items: &[LineItem]) -> HashMap<String, Amount> {
    let mut totals: HashMap<String, Amount> = HashMap::new();
    for item in items {
        let key = item.category.clone().unwrap_or_default();
        *totals.entry(key).or_default() += item.amount;
    }
    totals
}

/// One category's share of total expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: Amount,
    pub item_count: usize,
    /// Percentage of total expenses (0 when there are none)
    pub percentage: f64,
}

/// Everything the summary screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub net_balance: Amount,
    pub status: BalanceStatus,
    /// Categories with spending, largest first
    pub breakdown: Vec<CategoryBreakdown>,
    pub income_count: usize,
    pub expense_count: usize,
}

impl BudgetSummary {
    /// Compute the summary for a session's state
    pub fn generate(state: &BudgetState) -> Self {
        let total_income = total_income(&state.income_items);
        let total_expenses = total_expenses(&state.expense_items);
        let net_balance = total_income - total_expenses;

        let by_category = expenses_by_category(&state.expense_items);
        let mut breakdown: Vec<CategoryBreakdown> = by_category
            .into_iter()
            .map(|(category, total)| {
                let item_count = state
                    .expense_items
                    .iter()
                    .filter(|i| i.category.as_deref().unwrap_or_default() == category)
                    .count();
                let percentage = if total_expenses.value() > 0.0 {
                    total.value() / total_expenses.value() * 100.0
                } else {
                    0.0
                };
                CategoryBreakdown {
                    category,
                    total,
                    item_count,
                    percentage,
                }
            })
            .collect();

        // Largest first, ties broken by name for stable output
        breakdown.sort_by(|a, b| {
            b.total
                .value()
                .total_cmp(&a.total.value())
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            total_income,
            total_expenses,
            net_balance,
            status: BalanceStatus::from_net(net_balance),
            breakdown,
            income_count: state.income_items.len(),
            expense_count: state.expense_items.len(),
        }
    }

    /// Largest category total, used to scale bar charts
    pub fn largest_category_total(&self) -> Amount {
        self.breakdown
            .first()
            .map(|b| b.total)
            .unwrap_or_else(Amount::zero)
    }
}
