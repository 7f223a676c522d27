//! Expense CLI commands
//!
//! Expenses always live in a category, so every command names the category
//! first. Amounts and cadences are parsed leniently.

use clap::Subcommand;

use super::resolve_category;
use crate::config::settings::Settings;
use crate::display::{format_category_tree, format_expense_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Cadence, Money};
use crate::services::{BudgetService, ExpenseUpdate, NewExpense};
use crate::storage::KeyValueStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to a category
    Add {
        /// Category name or ID
        category: String,
        /// Expense name
        name: String,
        /// Amount charged each time (e.g., "180" or "12.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// How often it is charged: weekly, monthly, bi-monthly, quarterly, yearly
        #[arg(short, long)]
        cadence: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Category name or ID
        category: String,
        /// Expense name or ID
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New cadence
        #[arg(short, long)]
        cadence: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Category name or ID
        category: String,
        /// Expense name or ID
        expense: String,
    },

    /// List expenses, optionally for one category
    List {
        /// Category name or ID
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            category,
            name,
            amount,
            cadence,
        } => {
            let category_id = resolve_category(service, &category)?;
            let cadence = cadence
                .as_deref()
                .map(Cadence::parse_lenient)
                .unwrap_or(settings.default_cadence);
            let new_expense = NewExpense::new(name, Money::parse_lenient(&amount), cadence);

            let expense = service.add_expense(category_id, new_expense)?;
            println!(
                "Added {} to {}: {}/{} ({}/mo)",
                expense.name,
                category,
                expense.amount.format_with_symbol(symbol),
                expense.cadence.short_label(),
                crate::display::format_amount(expense.monthly_amount(), symbol)
            );
        }

        ExpenseCommands::Edit {
            category,
            expense,
            name,
            amount,
            cadence,
        } => {
            let category_id = resolve_category(service, &category)?;
            let expense_id = service
                .find_expense(category_id, &expense)
                .map(|e| e.id)
                .ok_or_else(|| BudgetError::expense_not_found(&expense))?;

            let update = ExpenseUpdate {
                name,
                amount: amount.as_deref().map(Money::parse_lenient),
                cadence: cadence.as_deref().map(Cadence::parse_lenient),
            };

            if update.is_empty() {
                println!("No changes specified. Use --name, --amount, or --cadence.");
                return Ok(());
            }

            let updated = service.update_expense(category_id, expense_id, update)?;
            println!("Updated expense: {}", updated);
        }

        ExpenseCommands::Delete { category, expense } => {
            let category_id = resolve_category(service, &category)?;
            let expense_id = service
                .find_expense(category_id, &expense)
                .map(|e| e.id)
                .ok_or_else(|| BudgetError::expense_not_found(&expense))?;

            let removed = service.delete_expense(category_id, expense_id)?;
            println!("Deleted expense: {}", removed.name);
        }

        ExpenseCommands::List { category } => match category {
            Some(category) => {
                let id = resolve_category(service, &category)?;
                let category = service.get_category(id)?;
                print!("{}", format_expense_list(category, symbol));
            }
            None => print!("{}", format_category_tree(service.categories(), symbol)),
        },
    }

    Ok(())
}
