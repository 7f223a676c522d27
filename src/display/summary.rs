//! Budget summary formatting
//!
//! Formats income, overall expense and the play-money line.

use crate::models::Money;
use crate::reports::{BudgetTotals, PlayMoneyStatus};

/// Format a dollar figure to whole cents with `symbol`
pub fn format_amount(dollars: f64, symbol: &str) -> String {
    Money::from_dollars_f64(dollars).format_with_symbol(symbol)
}

/// The one-line play-money message
///
/// Before anything is allocated the whole income is reported as play
/// money; once expenses exist the remainder (or overspend) is reported.
pub fn play_money_label(totals: &BudgetTotals, symbol: &str) -> String {
    match totals.status() {
        PlayMoneyStatus::Unallocated => format!(
            "Nothing allocated yet: all {}/mo is play money",
            format_amount(totals.play_money, symbol)
        ),
        PlayMoneyStatus::Remaining => format!(
            "You've got {}/mo to play with",
            format_amount(totals.play_money, symbol)
        ),
        PlayMoneyStatus::Overspent => format!(
            "Over budget by {}/mo",
            format_amount(-totals.play_money, symbol)
        ),
    }
}

/// Format the budget summary block
pub fn format_summary(totals: &BudgetTotals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!(
        "  Monthly income:  {:>14}\n",
        format_amount(totals.monthly_income, symbol)
    ));
    output.push_str(&format!(
        "  Yearly income:   {:>14}\n",
        format_amount(totals.yearly_income, symbol)
    ));
    output.push_str(&format!(
        "  Monthly expense: {:>14}\n",
        format_amount(totals.total_expense, symbol)
    ));
    output.push_str(&format!(
        "  Play money:      {:>14}\n",
        format_amount(totals.play_money, symbol)
    ));
    output.push('\n');

    if !totals.per_category.is_empty() {
        let name_width = totals
            .per_category
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(8)
            .max(8);

        for category in &totals.per_category {
            output.push_str(&format!(
                "  {:<width$}  {:>12}/mo\n",
                category.name,
                format_amount(category.monthly_total, symbol),
                width = name_width
            ));
        }
        output.push('\n');
    }

    output.push_str(&play_money_label(totals, symbol));
    output.push('\n');

    output
}
