//! Category CLI commands
//!
//! Implements CLI commands for category management. Categories are looked
//! up by name (case-insensitive) or by ID.

use clap::Subcommand;

use super::resolve_category;
use crate::config::settings::Settings;
use crate::display::{format_category_list, format_category_tree};
use crate::error::BudgetResult;
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their expenses
    List {
        /// Show a compact table instead of the tree
        #[arg(long)]
        compact: bool,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Color tag (e.g., "#64b5f6")
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        new_name: String,
    },

    /// Change a category's color tag
    Color {
        /// Category name or ID
        category: String,
        /// New color tag
        color: String,
    },

    /// Delete a category and all of its expenses
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List { compact } => {
            if compact {
                print!("{}", format_category_list(service.categories(), symbol));
            } else {
                print!("{}", format_category_tree(service.categories(), symbol));
            }
        }

        CategoryCommands::Add { name, color } => {
            let category = service.add_category(&name, color.as_deref())?;
            println!("Created category: {}", category.name);
            println!("  Color: {}", category.color);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Rename { category, new_name } => {
            let id = resolve_category(service, &category)?;
            let renamed = service.rename_category(id, &new_name)?;
            println!("Renamed '{}' to '{}'", category, renamed.name);
        }

        CategoryCommands::Color { category, color } => {
            let id = resolve_category(service, &category)?;
            let updated = service.recolor_category(id, &color)?;
            println!("Set color of '{}' to {}", updated.name, updated.color);
        }

        CategoryCommands::Delete { category } => {
            let id = resolve_category(service, &category)?;
            let removed = service.delete_category(id)?;
            println!(
                "Deleted category: {} ({} expenses removed)",
                removed.name,
                removed.expenses.len()
            );
        }
    }

    Ok(())
}
