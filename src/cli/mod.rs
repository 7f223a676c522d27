//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod export;
pub mod history;
pub mod income;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_split_command, handle_summary_command};

use crate::error::{BudgetError, BudgetResult};
use crate::models::CategoryId;
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Resolve a category argument (name or ID) to its ID
pub(crate) fn resolve_category<S: KeyValueStore>(
    service: &BudgetService<S>,
    identifier: &str,
) -> BudgetResult<CategoryId> {
    service
        .find_category(identifier)
        .map(|c| c.id)
        .ok_or_else(|| BudgetError::category_not_found(identifier))
}
