//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_amount;
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set monthly take-home income
    Set {
        /// Income amount (e.g., "4000" or "$4,000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show monthly and yearly income
    Show,
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            if Money::parse(&amount).map_or(true, |m| m.is_negative()) {
                println!("'{}' is not a valid amount, using 0", amount.trim());
            }

            let income = service.set_income_input(&amount)?;
            println!(
                "Monthly income set to {}",
                income.format_with_symbol(symbol)
            );
        }

        IncomeCommands::Show => {
            let totals = service.totals();
            println!(
                "Monthly income: {}",
                format_amount(totals.monthly_income, symbol)
            );
            println!(
                "Yearly income:  {}",
                format_amount(totals.yearly_income, symbol)
            );
        }
    }

    Ok(())
}
