//! YAML Export functionality
//!
//! Exports the budget snapshot to YAML format for human reading.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetExport;
use crate::models::Budget;

/// Export the budget to YAML format
pub fn export_yaml<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<()> {
    let export = BudgetExport::from_budget(budget);

    writeln!(writer, "# playmoney budget export")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};

    #[test]
    fn test_yaml_export() {
        let mut budget = Budget::new(Money::from_dollars(2000));
        let mut bills = Category::new("Non-Negotiables");
        bills.add_expense(Expense::monthly("rent", Money::from_dollars(1200)));
        budget.categories.push(bills);

        let mut output = Vec::new();
        export_yaml(&budget, &mut output).unwrap();

        let yaml_str = String::from_utf8(output).unwrap();
        assert!(yaml_str.starts_with("# playmoney budget export"));
        assert!(yaml_str.contains("schema_version:"));
        assert!(yaml_str.contains("Non-Negotiables"));

        let parsed: BudgetExport = serde_yaml::from_str(&yaml_str).unwrap();
        assert_eq!(parsed.totals.play_money, 800.0);
        assert_eq!(parsed.monthly_income, Money::from_dollars(2000));
    }
}
