//! CSV Export functionality
//!
//! One row per expense with its monthly equivalent, followed by one total
//! row per category and the overall summary rows.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;
use crate::reports::BudgetTotals;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Kind")]
    kind: &'static str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Expense")]
    expense: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Cadence")]
    cadence: &'a str,
    #[serde(rename = "Monthly")]
    monthly: String,
}

fn dollars(value: f64) -> String {
    format!("{:.2}", value)
}

/// Export the budget to CSV
pub fn export_csv<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<()> {
    let totals = BudgetTotals::compute(budget);
    let mut csv_writer = csv::Writer::from_writer(writer);

    for category in &budget.categories {
        for expense in &category.expenses {
            csv_writer
                .serialize(CsvRow {
                    kind: "expense",
                    category: &category.name,
                    expense: &expense.name,
                    amount: dollars(expense.amount.as_dollars()),
                    cadence: expense.cadence.as_str(),
                    monthly: dollars(expense.monthly_amount()),
                })
                .map_err(|e| BudgetError::Export(e.to_string()))?;
        }
    }

    for category in &totals.per_category {
        csv_writer
            .serialize(CsvRow {
                kind: "category_total",
                category: &category.name,
                expense: "",
                amount: String::new(),
                cadence: "",
                monthly: dollars(category.monthly_total),
            })
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    let summary = [
        ("income", totals.monthly_income),
        ("total_expense", totals.total_expense),
        ("play_money", totals.play_money),
    ];
    for (kind, value) in summary {
        csv_writer
            .serialize(CsvRow {
                kind,
                category: "",
                expense: "",
                amount: String::new(),
                cadence: "",
                monthly: dollars(value),
            })
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, Category, Expense, Money};

    #[test]
    fn test_export_csv() {
        let mut budget = Budget::new(Money::from_dollars(4000));
        let mut bills = Category::new("Non-Negotiables");
        bills.add_expense(Expense::monthly("rent", Money::from_dollars(1200)));
        bills.add_expense(Expense::monthly("electric, gas", Money::from_dollars(150)));
        let mut subs = Category::new("Subscriptions");
        subs.add_expense(Expense::new("netflix", Money::from_dollars(180), Cadence::Yearly));
        budget.categories.push(bills);
        budget.categories.push(subs);

        let mut output = Vec::new();
        export_csv(&budget, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "Kind,Category,Expense,Amount,Cadence,Monthly");
        assert!(lines.contains(&"expense,Subscriptions,netflix,180.00,yearly,15.00"));
        assert!(lines.contains(&"expense,Non-Negotiables,\"electric, gas\",150.00,monthly,150.00"));
        assert!(lines.contains(&"category_total,Non-Negotiables,,,,1350.00"));
        assert!(lines.contains(&"play_money,,,,,2635.00"));
        assert_eq!(lines.len(), 1 + 3 + 2 + 3);
    }

    #[test]
    fn test_export_csv_empty_budget() {
        let mut output = Vec::new();
        export_csv(&Budget::default(), &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.starts_with("Kind,Category"));
        assert!(csv_string.contains("income,,,,,0.00"));
    }
}
