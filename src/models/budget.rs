//! Budget root aggregate
//!
//! Holds the monthly income and the user's categories. Totals are never
//! stored; they are derived on demand (see `reports::BudgetTotals`).

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::CategoryId;
use super::money::Money;

/// The whole budget: income plus categories in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Monthly take-home income (already net of taxes)
    #[serde(default)]
    pub monthly_income: Money,

    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Budget {
    pub fn new(monthly_income: Money) -> Self {
        Self {
            monthly_income,
            categories: Vec::new(),
        }
    }

    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn get_category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Find the first category with this name (case-insensitive)
    pub fn get_category_by_name(&self, name: &str) -> Option<&Category> {
        let name_lower = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
    }

    /// Remove a category and every expense it owns
    pub fn remove_category(&mut self, id: CategoryId) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        Some(self.categories.remove(index))
    }

    /// Number of expenses across all categories
    pub fn expense_count(&self) -> usize {
        self.categories.iter().map(|c| c.expenses.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, Expense};
    use crate::reports::BudgetTotals;

    #[test]
    fn test_empty_budget() {
        let budget = Budget::new(Money::from_dollars(5000));
        assert_eq!(budget.expense_count(), 0);

        let totals = BudgetTotals::compute(&budget);
        assert_eq!(totals.total_expense, 0.0);
        assert_eq!(totals.play_money, 5000.0);
    }

    #[test]
    fn test_duplicate_names_are_distinct_categories() {
        let mut budget = Budget::default();
        budget.categories.push(Category::new("Fun"));
        budget.categories.push(Category::new("Fun"));

        let first = budget.categories[0].id;
        let second = budget.categories[1].id;
        assert_ne!(first, second);

        budget.remove_category(first);
        assert_eq!(budget.categories.len(), 1);
        assert!(budget.get_category(second).is_some());
    }

    #[test]
    fn test_remove_category_cascades() {
        let mut budget = Budget::new(Money::from_dollars(3000));
        let mut bills = Category::new("Bills");
        bills.add_expense(Expense::monthly("Rent", Money::from_dollars(1000)));
        bills.add_expense(Expense::new("Car", Money::from_dollars(600), Cadence::Yearly));
        let id = bills.id;
        budget.categories.push(bills);
        assert_eq!(budget.expense_count(), 2);

        let removed = budget.remove_category(id).unwrap();
        assert_eq!(removed.expenses.len(), 2);
        assert_eq!(budget.expense_count(), 0);
        assert_eq!(BudgetTotals::compute(&budget).play_money, 3000.0);
    }

    #[test]
    fn test_overspend_is_negative() {
        let mut budget = Budget::new(Money::from_dollars(1000));
        let mut bills = Category::new("Bills");
        bills.add_expense(Expense::monthly("Rent", Money::from_dollars(1500)));
        budget.categories.push(bills);
        assert_eq!(BudgetTotals::compute(&budget).play_money, -500.0);
    }

    #[test]
    fn test_lookup_by_name() {
        let mut budget = Budget::default();
        budget.categories.push(Category::new("Date Nights"));
        assert!(budget.get_category_by_name("date nights").is_some());
        assert!(budget.get_category_by_name("Groceries").is_none());
    }
}
