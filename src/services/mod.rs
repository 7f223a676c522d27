//! Service layer for playmoney
//!
//! The service layer owns the in-memory budget and applies validated
//! commands to it, persisting each change through the key-value store.

pub mod budget;

pub use budget::{BudgetService, ExpenseUpdate, NewExpense};
