//! JSON Export functionality
//!
//! Exports the budget with its totals and split to JSON format with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Category, Money};
use crate::reports::{BudgetTotals, IncomeSplit};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of a budget and everything derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Monthly income in cents
    pub monthly_income: Money,

    /// Categories with their expenses, in display order
    pub categories: Vec<Category>,

    pub totals: BudgetTotals,

    pub split: IncomeSplit,
}

impl BudgetExport {
    pub fn from_budget(budget: &Budget) -> Self {
        let totals = BudgetTotals::compute(budget);
        let split = IncomeSplit::from_totals(&totals);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            monthly_income: budget.monthly_income,
            categories: budget.categories.clone(),
            totals,
            split,
        }
    }
}

/// Export the budget to JSON
pub fn export_json<W: Write>(budget: &Budget, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let export = BudgetExport::from_budget(budget);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, Expense};

    fn sample_budget() -> Budget {
        let mut budget = Budget::new(Money::from_dollars(4000));
        let mut subs = Category::new("Subscriptions");
        subs.add_expense(Expense::new("netflix", Money::from_dollars(180), Cadence::Yearly));
        budget.categories.push(subs);
        budget
    }

    #[test]
    fn test_json_export() {
        let budget = sample_budget();

        let mut output = Vec::new();
        export_json(&budget, &mut output, true).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        assert!(json_str.contains("\"schema_version\": \"1.0.0\""));
        assert!(json_str.contains("netflix"));
        assert!(json_str.contains("\"cadence\": \"yearly\""));

        let parsed: BudgetExport = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.categories, budget.categories);
        assert_eq!(parsed.totals.total_expense, 15.0);
        assert_eq!(parsed.totals.play_money, 3985.0);
        assert_eq!(parsed.split.slices.len(), 1);
    }

    #[test]
    fn test_json_export_compact() {
        let mut output = Vec::new();
        export_json(&Budget::default(), &mut output, false).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        assert_eq!(json_str.lines().count(), 1);
        assert!(json_str.contains("\"categories\":[]"));
    }
}
