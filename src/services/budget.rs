//! Budget service
//!
//! Command handlers for recording and removing income and expense items.
//! Every handler validates its input completely before touching the state,
//! so a failed command leaves the state exactly as it was.

use tracing::info;

use super::amount::parse_amount;
use crate::error::{TallyError, TallyResult};
use crate::models::{Amount, BudgetState, LineItem};

/// Service for income and expense management
pub struct BudgetService<'a> {
    state: &'a mut BudgetState,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service over a session's state
    pub fn new(state: &'a mut BudgetState) -> Self {
        Self { state }
    }

    // === Income ===

    /// Record income from a typed amount field (expressions allowed)
    pub fn add_income(&mut self, source: &str, amount_input: &str) -> TallyResult<LineItem> {
        let source = require_text(source, "Income source")?;
        let amount = parse_amount(amount_input)?;
        self.record_income(source, amount)
    }

    /// Record income from an already evaluated amount
    pub fn record_income(&mut self, source: &str, amount: Amount) -> TallyResult<LineItem> {
        let source = require_text(source, "Income source")?;
        require_positive(amount)?;

        let item = LineItem::income(source, amount);
        self.state.income_items.push(item.clone());

        info!(source = %item.label, amount = amount.value(), "added income");
        Ok(item)
    }

    /// Remove the income item at `index` (0-based)
    pub fn remove_income(&mut self, index: usize) -> TallyResult<LineItem> {
        let item = remove_at(&mut self.state.income_items, index, "income")?;
        info!(source = %item.label, index, "removed income");
        Ok(item)
    }

    // === Expenses ===

    /// Record an expense from a typed amount field (expressions allowed)
    pub fn add_expense(
        &mut self,
        category: &str,
        name: &str,
        amount_input: &str,
    ) -> TallyResult<LineItem> {
        let name = require_text(name, "Expense name")?;
        let amount = parse_amount(amount_input)?;
        self.record_expense(category, name, amount)
    }

    /// Record an expense from an already evaluated amount
    ///
    /// The category must already exist; the stored spelling is used.
    pub fn record_expense(
        &mut self,
        category: &str,
        name: &str,
        amount: Amount,
    ) -> TallyResult<LineItem> {
        let name = require_text(name, "Expense name")?;
        require_positive(amount)?;

        let category = require_text(category, "Category")?;
        let category = self
            .state
            .categories
            .find(category)
            .ok_or_else(|| TallyError::UnknownCategory(category.to_string()))?
            .to_string();

        let item = LineItem::expense(name, amount, category);
        self.state.expense_items.push(item.clone());

        info!(
            name = %item.label,
            category = item.category.as_deref().unwrap_or_default(),
            amount = amount.value(),
            "added expense"
        );
        Ok(item)
    }

    /// Remove the expense item at `index` (0-based)
    pub fn remove_expense(&mut self, index: usize) -> TallyResult<LineItem> {
        let item = remove_at(&mut self.state.expense_items, index, "expense")?;
        info!(name = %item.label, index, "removed expense");
        Ok(item)
    }

    // === Whole budget ===

    /// Drop every income and expense item, keeping the categories
    pub fn clear(&mut self) -> usize {
        let removed = self.state.income_items.len() + self.state.expense_items.len();
        self.state.income_items.clear();
        self.state.expense_items.clear();
        info!(removed, "cleared budget items");
        removed
    }

    /// Replace the whole state, e.g. with one loaded from an export
    pub fn replace(&mut self, state: BudgetState) {
        info!(
            income = state.income_items.len(),
            expenses = state.expense_items.len(),
            categories = state.categories.len(),
            "replaced budget state"
        );
        *self.state = state;
    }

    pub fn income_items(&self) -> &[LineItem] {
        &self.state.income_items
    }

    pub fn expense_items(&self) -> &[LineItem] {
        &self.state.expense_items
    }
}

fn require_text<'s>(value: &'s str, field: &'static str) -> TallyResult<&'s str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TallyError::EmptyField(field));
    }
    Ok(value)
}

fn require_positive(amount: Amount) -> TallyResult<()> {
    if !amount.value().is_finite() || !amount.is_positive() {
        return Err(TallyError::NonPositiveAmount(amount.value()));
    }
    Ok(())
}

fn remove_at(items: &mut Vec<LineItem>, index: usize, kind: &'static str) -> TallyResult<LineItem> {
    if index >= items.len() {
        return Err(TallyError::IndexOutOfRange {
            kind,
            position: index + 1,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}
