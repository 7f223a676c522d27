//! Summary and split commands

use crate::config::settings::Settings;
use crate::display::{format_split, format_summary};
use crate::error::BudgetResult;
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Print income, totals and play money
pub fn handle_summary_command<S: KeyValueStore>(
    service: &BudgetService<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    let totals = service.totals();
    print!("{}", format_summary(&totals, &settings.currency_symbol));
    Ok(())
}

/// Print the income split legend
pub fn handle_split_command<S: KeyValueStore>(
    service: &BudgetService<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    let split = service.split();
    println!("Income Split");
    print!("{}", format_split(&split, &settings.currency_symbol));
    Ok(())
}
