//! Category service
//!
//! Adds and removes expense categories while keeping every expense
//! pointing at an existing category.

use tracing::info;

use crate::error::{TallyError, TallyResult};
use crate::models::{Amount, BudgetState, CategoryValidationError};

/// Service for category management
pub struct CategoryService<'a> {
    state: &'a mut BudgetState,
}

/// A category with how much it is used
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUsage {
    pub name: String,
    pub expense_count: usize,
    pub total: Amount,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(state: &'a mut BudgetState) -> Self {
        Self { state }
    }

    /// Add a category, returning its stored name
    pub fn add_category(&mut self, name: &str) -> TallyResult<String> {
        let name = self.state.categories.insert(name).map_err(|e| match e {
            CategoryValidationError::EmptyName => TallyError::EmptyField("Category name"),
            CategoryValidationError::Duplicate(existing) => TallyError::DuplicateCategory(existing),
            other => TallyError::Validation(other.to_string()),
        })?;

        info!(category = %name, "added category");
        Ok(name)
    }

    /// Remove a category that no expense references
    pub fn remove_category(&mut self, name: &str) -> TallyResult<String> {
        let stored = self
            .state
            .categories
            .find(name)
            .ok_or_else(|| TallyError::UnknownCategory(name.trim().to_string()))?
            .to_string();

        let count = self.state.expenses_in_category(&stored);
        if count > 0 {
            return Err(TallyError::CategoryInUse {
                category: stored,
                count,
            });
        }

        let removed = self
            .state
            .categories
            .remove(&stored)
            .ok_or_else(|| TallyError::UnknownCategory(stored.clone()))?;

        info!(category = %removed, "removed category");
        Ok(removed)
    }

    /// List categories in insertion order with their usage
    pub fn list_categories(&self) -> Vec<CategoryUsage> {
        self.state
            .categories
            .iter()
            .map(|name| {
                let items: Vec<_> = self
                    .state
                    .expense_items
                    .iter()
                    .filter(|i| i.category.as_deref() == Some(name))
                    .collect();
                CategoryUsage {
                    name: name.to_string(),
                    expense_count: items.len(),
                    total: items.iter().map(|i| i.amount).sum(),
                }
            })
            .collect()
    }
}
