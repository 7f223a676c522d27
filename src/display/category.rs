//! Category display formatting
//!
//! Formats categories and their expenses for terminal output in tree and
//! table views.

use super::summary::format_amount;
use crate::models::Category;

/// Format categories as a tree with each expense and the category total
pub fn format_category_tree(categories: &[Category], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'playmoney init' to create the starter categories.\n"
            .to_string();
    }

    let mut output = String::new();

    for (i, category) in categories.iter().enumerate() {
        output.push_str(&format!(
            "{} [{}]  {}/mo\n",
            category.name,
            category.color,
            format_amount(category.monthly_total(), symbol)
        ));

        if category.expenses.is_empty() {
            output.push_str("  (no expenses)\n");
        } else {
            for (j, expense) in category.expenses.iter().enumerate() {
                let is_last = j == category.expenses.len() - 1;
                let prefix = if is_last { "└── " } else { "├── " };

                output.push_str(&format!(
                    "  {}{}  {}/{} = {}/mo\n",
                    prefix,
                    expense.name,
                    expense.amount.format_with_symbol(symbol),
                    expense.cadence.short_label(),
                    format_amount(expense.monthly_amount(), symbol)
                ));
            }
        }

        if i < categories.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>8}  {:>12}  {}\n",
        "Category",
        "Expenses",
        "Monthly",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->8}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:>8}  {:>12}  {}\n",
            category.name,
            category.expenses.len(),
            format_amount(category.monthly_total(), symbol),
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format the expenses of one category
pub fn format_expense_list(category: &Category, symbol: &str) -> String {
    let mut output = format!("{}\n", category.name);

    if category.expenses.is_empty() {
        output.push_str("  (no expenses)\n");
        return output;
    }

    let name_width = category
        .expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    output.push_str(&format!(
        "  {:<width$}  {:>12}  {:<10}  {:>12}  {}\n",
        "Expense",
        "Amount",
        "Cadence",
        "Monthly",
        "ID",
        width = name_width
    ));

    for expense in &category.expenses {
        output.push_str(&format!(
            "  {:<width$}  {:>12}  {:<10}  {:>12}  {}\n",
            expense.name,
            expense.amount.format_with_symbol(symbol),
            expense.cadence.as_str(),
            format_amount(expense.monthly_amount(), symbol),
            expense.id,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "  Total: {}/mo\n",
        format_amount(category.monthly_total(), symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, Expense, Money};

    fn subscriptions() -> Category {
        let mut category = Category::with_color("Subscriptions", "#64b5f6");
        category.add_expense(Expense::new("netflix", Money::from_dollars(180), Cadence::Yearly));
        category.add_expense(Expense::monthly("music", Money::from_dollars(10)));
        category
    }

    #[test]
    fn test_tree_empty() {
        let output = format_category_tree(&[], "$");
        assert!(output.contains("playmoney init"));
    }

    #[test]
    fn test_tree_shows_normalized_amounts() {
        let output = format_category_tree(&[subscriptions(), Category::new("Savings")], "$");
        assert!(output.contains("Subscriptions [#64b5f6]  $25.00/mo"));
        assert!(output.contains("├── netflix  $180.00/yr = $15.00/mo"));
        assert!(output.contains("└── music  $10.00/mo = $10.00/mo"));
        assert!(output.contains("(no expenses)"));
    }

    #[test]
    fn test_expense_list() {
        let output = format_expense_list(&subscriptions(), "$");
        assert!(output.contains("yearly"));
        assert!(output.contains("Total: $25.00/mo"));
    }

    #[test]
    fn test_category_list() {
        let output = format_category_list(&[subscriptions()], "$");
        assert!(output.contains("Subscriptions"));
        assert!(output.contains("$25.00"));
    }
}
