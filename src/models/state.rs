//! Session budget state
//!
//! One `BudgetState` lives for the duration of a session and is passed
//! explicitly to the services that mutate it. Nothing here is global.

use serde::{Deserialize, Serialize};

use super::category::{same_category, CategorySet};
use super::line_item::LineItem;

/// Income, expenses and categories of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    /// Income items in insertion order
    pub income_items: Vec<LineItem>,

    /// Expense items in insertion order
    pub expense_items: Vec<LineItem>,

    /// Categories available to expenses
    pub categories: CategorySet,
}

impl BudgetState {
    /// Create an empty state with the given categories
    pub fn new(categories: CategorySet) -> Self {
        Self {
            income_items: Vec::new(),
            expense_items: Vec::new(),
            categories,
        }
    }

    /// Number of expenses filed under `category` (case-insensitive)
    pub fn expenses_in_category(&self, category: &str) -> usize {
        self.expense_items
            .iter()
            .filter(|item| {
                item.category
                    .as_deref()
                    .is_some_and(|c| same_category(c, category))
            })
            .count()
    }

    /// True when no income or expense has been recorded
    pub fn has_no_items(&self) -> bool {
        self.income_items.is_empty() && self.expense_items.is_empty()
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::new(CategorySet::with_defaults())
    }
}
