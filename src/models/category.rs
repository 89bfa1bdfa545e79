//! Expense category set
//!
//! Categories are plain names kept in insertion order for display.
//! Uniqueness is case-insensitive, so "food" and "Food" are the same.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a category name
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// Categories every new budget starts with
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Housing",
    "Transportation",
    "Food & Dining",
    "Utilities",
    "Healthcare",
    "Entertainment",
    "Shopping",
    "Savings",
    "Other",
];

/// An ordered set of expense category names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a set seeded with the built-in defaults
    pub fn with_defaults() -> Self {
        Self::from_names(DEFAULT_CATEGORIES.iter().copied())
    }

    /// Build a set from names, dropping blanks and case-insensitive repeats
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            let _ = set.insert(name.as_ref());
        }
        set
    }

    /// Find the stored spelling of a category (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|c| same_category(c, name))
            .map(String::as_str)
    }

    /// Check whether the category exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Insert a category, returning the stored name
    pub fn insert(&mut self, name: &str) -> Result<String, CategoryValidationError> {
        let name = name.trim();
        validate_name(name)?;

        if let Some(existing) = self.find(name) {
            return Err(CategoryValidationError::Duplicate(existing.to_string()));
        }

        self.0.push(name.to_string());
        Ok(name.to_string())
    }

    /// Remove a category, returning the stored name if it was present
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.0.iter().position(|c| same_category(c, name))?;
        Some(self.0.remove(pos))
    }

    /// Iterate names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names as an owned list
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Whether two category names refer to the same category
///
/// Surrounding whitespace is ignored and case is folded over all of
/// Unicode, so "CAFÉ" and "café" match.
pub fn same_category(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if name.chars().count() > MAX_CATEGORY_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(name.chars().count()));
    }

    Ok(())
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    Duplicate(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_NAME_LEN
            ),
            Self::Duplicate(name) => write!(f, "Category already exists: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
