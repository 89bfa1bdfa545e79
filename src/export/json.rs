//! JSON Export functionality
//!
//! Serializes a session's income, expenses and categories into the export
//! document, and loads such a document back into a fresh state.

use crate::error::{TallyError, TallyResult};
use crate::models::{Amount, BudgetState, CategorySet, LineItem};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One income entry of the export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub source: String,
    pub amount: Amount,
}

/// One expense entry of the export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub category: String,
    pub name: String,
    pub amount: Amount,
}

/// The export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetExport {
    pub income: Vec<IncomeRecord>,
    pub expenses: Vec<ExpenseRecord>,
    /// Absent in documents written without a category list
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl BudgetExport {
    /// Build the export document from a session's state
    pub fn from_state(state: &BudgetState) -> Self {
        let income = state
            .income_items
            .iter()
            .map(|item| IncomeRecord {
                source: item.label.clone(),
                amount: item.amount,
            })
            .collect();

        let expenses = state
            .expense_items
            .iter()
            .map(|item| ExpenseRecord {
                category: item.category.clone().unwrap_or_default(),
                name: item.label.clone(),
                amount: item.amount,
            })
            .collect();

        Self {
            income,
            expenses,
            categories: Some(state.categories.to_vec()),
        }
    }

    /// Validate the document
    ///
    /// Every item must pass line item validation and every expense category
    /// must appear in `categories`.
    pub fn validate(&self) -> Result<(), String> {
        self.checked_categories().map(|_| ())
    }

    /// Build the category set the document describes
    ///
    /// Every `categories` entry must be a valid, unique name. A document
    /// without the key takes its categories from the expenses, in order of
    /// first use.
    fn category_set(&self) -> Result<CategorySet, String> {
        let mut set = CategorySet::new();

        match &self.categories {
            Some(names) => {
                for (i, name) in names.iter().enumerate() {
                    set.insert(name)
                        .map_err(|e| format!("Category entry {}: {}", i + 1, e))?;
                }
            }
            None => {
                for (i, record) in self.expenses.iter().enumerate() {
                    if !set.contains(&record.category) {
                        set.insert(&record.category)
                            .map_err(|e| format!("Expense entry {}: {}", i + 1, e))?;
                    }
                }
            }
        }

        Ok(set)
    }

    fn checked_categories(&self) -> Result<CategorySet, String> {
        let categories = self.category_set()?;

        for (i, record) in self.income.iter().enumerate() {
            LineItem::income(&record.source, record.amount)
                .validate()
                .map_err(|e| format!("Income entry {}: {}", i + 1, e))?;
        }

        for (i, record) in self.expenses.iter().enumerate() {
            LineItem::expense(&record.name, record.amount, &record.category)
                .validate()
                .map_err(|e| format!("Expense entry {}: {}", i + 1, e))?;

            if !categories.contains(&record.category) {
                return Err(format!(
                    "Expense entry {} references unknown category '{}'",
                    i + 1,
                    record.category
                ));
            }
        }

        Ok(categories)
    }

    /// Rebuild a session state from the document
    ///
    /// Expense categories are normalised to the spelling kept in the
    /// category set.
    pub fn into_state(self) -> TallyResult<BudgetState> {
        let categories = self.checked_categories().map_err(TallyError::Import)?;

        let income_items = self
            .income
            .into_iter()
            .map(|r| LineItem::income(r.source.trim(), r.amount))
            .collect();

        let mut expense_items = Vec::with_capacity(self.expenses.len());
        for r in self.expenses {
            let category = categories
                .find(&r.category)
                .ok_or_else(|| TallyError::Import(format!("Unknown category '{}'", r.category)))?
                .to_string();
            expense_items.push(LineItem::expense(r.name.trim(), r.amount, category));
        }

        Ok(BudgetState {
            income_items,
            expense_items,
            categories,
        })
    }
}

/// Export a session to JSON
pub fn export_json<W: Write>(state: &BudgetState, writer: &mut W, pretty: bool) -> TallyResult<()> {
    let export = BudgetExport::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)?;
    } else {
        serde_json::to_writer(writer, &export)?;
    }

    Ok(())
}

/// Parse and validate a JSON export, returning the rebuilt state
pub fn import_from_json(json_str: &str) -> TallyResult<BudgetState> {
    let export: BudgetExport =
        serde_json::from_str(json_str).map_err(|e| TallyError::Import(e.to_string()))?;

    export.into_state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{BudgetService, CategoryService};
    use serde_json::Value;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::default();
        CategoryService::new(&mut state).add_category("Pets").unwrap();
        let mut budget = BudgetService::new(&mut state);
        budget.add_income("Salary", "4000").unwrap();
        budget.add_expense("Housing", "Rent", "1500").unwrap();
        budget.add_expense("pets", "Vet", "80.5").unwrap();
        state
    }

    #[test]
    fn test_document_shape() {
        let state = sample_state();
        let mut out = Vec::new();
        export_json(&state, &mut out, false).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["categories", "expenses", "income"]);

        assert_eq!(value["income"][0]["source"], "Salary");
        assert_eq!(value["income"][0]["amount"], 4000.0);
        assert_eq!(value["expenses"][1]["category"], "Pets");
        assert_eq!(value["expenses"][1]["name"], "Vet");
        assert_eq!(value["expenses"][1]["amount"], 80.5);
        assert_eq!(value["categories"].as_array().unwrap().last().unwrap(), "Pets");
    }

    #[test]
    fn test_export_write_failure_is_json_error() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = export_json(&sample_state(), &mut FailingWriter, false).unwrap_err();
        assert!(matches!(err, TallyError::Json(ref m) if m.contains("disk full")));
    }

    #[test]
    fn test_export_then_load() {
        let state = sample_state();
        let mut out = Vec::new();
        export_json(&state, &mut out, true).unwrap();

        let loaded = import_from_json(std::str::from_utf8(&out).unwrap()).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_rejects_unknown_category() {
        let json = r#"{
            "income": [],
            "expenses": [{"category": "Boats", "name": "Fuel", "amount": 10}],
            "categories": ["Housing"]
        }"#;

        let err = import_from_json(json).unwrap_err();
        assert!(matches!(err, TallyError::Import(ref m) if m.contains("Boats")));
    }

    #[test]
    fn test_load_rejects_non_positive_amount() {
        let json = r#"{"income": [{"source": "Gift", "amount": 0}], "expenses": [], "categories": []}"#;
        assert!(import_from_json(json).is_err());

        let json = r#"{"income": [{"source": " ", "amount": 5}], "expenses": [], "categories": []}"#;
        assert!(import_from_json(json).is_err());
    }

    #[test]
    fn test_load_document_without_categories() {
        let json = r#"{"income": [{"source": "Salary", "amount": 2500.0}], "expenses": []}"#;
        let state = import_from_json(json).unwrap();
        assert_eq!(state.income_items.len(), 1);
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_load_without_categories_uses_expense_categories() {
        let json = r#"{
            "income": [{"source": "Salary", "amount": 3000}],
            "expenses": [
                {"category": "Housing", "name": "Rent", "amount": 1200},
                {"category": "Food", "name": "Groceries", "amount": 300},
                {"category": "housing", "name": "Insurance", "amount": 40}
            ]
        }"#;
        let state = import_from_json(json).unwrap();

        assert_eq!(
            state.categories.to_vec(),
            vec!["Housing".to_string(), "Food".to_string()]
        );
        assert_eq!(state.expense_items[2].category.as_deref(), Some("Housing"));
        assert_eq!(state.expenses_in_category("Housing"), 2);
    }

    #[test]
    fn test_load_matches_non_ascii_category_case() {
        let json = r#"{
            "income": [],
            "expenses": [{"category": "café", "name": "Latte", "amount": 4.5}],
            "categories": ["CAFÉ"]
        }"#;
        let state = import_from_json(json).unwrap();
        assert_eq!(state.expense_items[0].category.as_deref(), Some("CAFÉ"));
    }

    #[test]
    fn test_load_rejects_invalid_category_entries() {
        let long_name = "x".repeat(51);
        for categories in [
            r#"["Housing", "  "]"#.to_string(),
            format!(r#"["{}"]"#, long_name),
            r#"["Food", "FOOD"]"#.to_string(),
        ] {
            let json = format!(
                r#"{{"income": [], "expenses": [], "categories": {}}}"#,
                categories
            );
            let err = import_from_json(&json).unwrap_err();
            assert!(
                matches!(err, TallyError::Import(ref m) if m.starts_with("Category entry")),
                "categories {}",
                categories
            );
        }
    }

    #[test]
    fn test_load_normalises_category_spelling() {
        let json = r#"{
            "income": [],
            "expenses": [{"category": "housing", "name": "Rent", "amount": 900}],
            "categories": ["Housing"]
        }"#;
        let state = import_from_json(json).unwrap();
        assert_eq!(state.expense_items[0].category.as_deref(), Some("Housing"));
    }
}
