//! Core data models for playmoney
//!
//! The budgeting domain: income, categories, expenses, cadences, and the
//! money type they share.

pub mod budget;
pub mod cadence;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::Budget;
pub use cadence::{normalize_to_monthly, sanitize_amount, Cadence};
pub use category::{Category, CategoryValidationError, DefaultCategory};
pub use expense::{category_total, Expense, ExpenseValidationError};
pub use ids::{CategoryId, ExpenseId};
pub use money::Money;
