//! Category model
//!
//! A category owns an ordered list of expenses. Insertion order is display
//! order. Deleting a category deletes its expenses with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::storage::decode_list;

use super::expense::{category_total, Expense};
use super::ids::{CategoryId, ExpenseId};

/// Colour tag used when none is given
pub const DEFAULT_COLOR: &str = "#9e9e9e";

/// A spending category (e.g., "Non-Negotiables", "Subscriptions")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: CategoryId,

    /// Display label; duplicates are allowed
    #[serde(default = "default_name")]
    pub name: String,

    /// Display-only colour tag
    #[serde(default = "default_color")]
    pub color: String,

    /// Unreadable stored expenses are dropped, the rest kept
    #[serde(default, deserialize_with = "deserialize_expenses")]
    pub expenses: Vec<Expense>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Label given to a stored category that has none
pub const UNNAMED_CATEGORY: &str = "Unnamed category";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_name() -> String {
    UNNAMED_CATEGORY.to_string()
}

fn deserialize_expenses<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Expense>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(decode_list(value, "expenses"))
}

impl Category {
    /// Create a new, empty category
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: default_color(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new category with a colour tag
    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        let mut category = Self::new(name);
        category.color = color.into();
        category
    }

    /// Monthly total of every expense in this category, in dollars
    pub fn monthly_total(&self) -> f64 {
        category_total(&self.expenses)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.updated_at = Utc::now();
    }

    /// Append an expense, keeping insertion order
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
        self.updated_at = Utc::now();
    }

    pub fn get_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn get_expense_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Remove an expense, returning it if it was present
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        self.updated_at = Utc::now();
        Some(self.expenses.remove(index))
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Starter categories created on first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    NonNegotiables,
    Subscriptions,
    DateNights,
    Savings,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::NonNegotiables,
            Self::Subscriptions,
            Self::DateNights,
            Self::Savings,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NonNegotiables => "Non-Negotiables",
            Self::Subscriptions => "Subscriptions",
            Self::DateNights => "Date Nights",
            Self::Savings => "Savings",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::NonNegotiables => "#e57373",
            Self::Subscriptions => "#64b5f6",
            Self::DateNights => "#f06292",
            Self::Savings => "#81c784",
        }
    }

    pub fn to_category(&self) -> Category {
        Category::with_color(self.name(), self.color())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
