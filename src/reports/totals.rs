//! Budget totals and play money
//!
//! Derives per-category monthly totals, the overall monthly expense, and the
//! play money left from income. The arithmetic is always
//! `income - total_expense`; whether anything has been allocated only
//! changes how the result is labelled, never its value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Budget, CategoryId};

/// Monthly total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub name: String,
    pub color: String,
    pub expense_count: usize,
    /// Sum of normalized monthly amounts, in dollars
    pub monthly_total: f64,
}

/// How the play-money figure should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMoneyStatus {
    /// Nothing entered yet; the whole income is unallocated
    Unallocated,
    /// Expenses fit within income
    Remaining,
    /// Expenses exceed income
    Overspent,
}

/// Derived totals for a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// One entry per category, in category order
    pub per_category: Vec<CategoryTotal>,
    pub monthly_income: f64,
    pub yearly_income: f64,
    pub total_expense: f64,
    pub play_money: f64,
    pub has_allocations: bool,
}

impl BudgetTotals {
    /// Compute totals for the whole budget
    pub fn compute(budget: &Budget) -> Self {
        let per_category: Vec<CategoryTotal> = budget
            .categories
            .iter()
            .map(|category| CategoryTotal {
                category_id: category.id,
                name: category.name.clone(),
                color: category.color.clone(),
                expense_count: category.expenses.len(),
                monthly_total: category.monthly_total(),
            })
            .collect();

        let total_expense: f64 = per_category.iter().map(|c| c.monthly_total).sum();
        Self::from_parts(budget.monthly_income.as_dollars(), per_category, total_expense)
    }

    fn from_parts(monthly_income: f64, per_category: Vec<CategoryTotal>, total_expense: f64) -> Self {
        let monthly_income = if monthly_income.is_finite() {
            monthly_income
        } else {
            0.0
        };

        Self {
            per_category,
            monthly_income,
            yearly_income: monthly_income * 12.0,
            total_expense,
            play_money: play_money(monthly_income, total_expense),
            has_allocations: total_expense > 0.0,
        }
    }

    /// Monthly total for one category
    pub fn total_for(&self, id: CategoryId) -> Option<f64> {
        self.per_category
            .iter()
            .find(|c| c.category_id == id)
            .map(|c| c.monthly_total)
    }

    /// Per-category totals keyed by id
    pub fn as_map(&self) -> HashMap<CategoryId, f64> {
        self.per_category
            .iter()
            .map(|c| (c.category_id, c.monthly_total))
            .collect()
    }

    pub fn status(&self) -> PlayMoneyStatus {
        if !self.has_allocations {
            PlayMoneyStatus::Unallocated
        } else if self.play_money < 0.0 {
            PlayMoneyStatus::Overspent
        } else {
            PlayMoneyStatus::Remaining
        }
    }
}

/// Income left after expenses; negative signals overspend
pub fn play_money(monthly_income: f64, total_expense: f64) -> f64 {
    monthly_income - total_expense
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, Category, Expense, Money};

    #[test]
    fn test_play_money_arithmetic() {
        assert_eq!(play_money(5000.0, 3000.0), 2000.0);
        assert_eq!(play_money(5000.0, 0.0), 5000.0);
        assert_eq!(play_money(1000.0, 1250.0), -250.0);
    }

    #[test]
    fn test_zero_allocation_reports_full_income() {
        let mut budget = Budget::new(Money::from_dollars(5000));
        budget.categories.push(Category::new("Subscriptions"));

        let totals = BudgetTotals::compute(&budget);
        assert!(!totals.has_allocations);
        assert_eq!(totals.play_money, 5000.0);
        assert_eq!(totals.status(), PlayMoneyStatus::Unallocated);
        assert_eq!(totals.per_category.len(), 1);
        assert_eq!(totals.per_category[0].monthly_total, 0.0);
    }

    #[test]
    fn test_status_variants() {
        let mut budget = Budget::new(Money::from_dollars(5000));
        let mut bills = Category::new("Bills");
        bills.add_expense(Expense::monthly("Rent", Money::from_dollars(3000)));
        budget.categories.push(bills);

        let totals = BudgetTotals::compute(&budget);
        assert_eq!(totals.play_money, 2000.0);
        assert_eq!(totals.status(), PlayMoneyStatus::Remaining);

        budget.monthly_income = Money::from_dollars(2000);
        let totals = BudgetTotals::compute(&budget);
        assert_eq!(totals.play_money, -1000.0);
        assert_eq!(totals.status(), PlayMoneyStatus::Overspent);
    }

    #[test]
    fn test_scenario_with_mixed_cadences() {
        let mut budget = Budget::new(Money::from_dollars(4000));

        let mut non_negotiables = Category::new("Non-Negotiables");
        non_negotiables.add_expense(Expense::monthly("rent", Money::from_dollars(1200)));
        non_negotiables.add_expense(Expense::monthly("electric", Money::from_dollars(150)));
        let nn_id = non_negotiables.id;

        let mut subscriptions = Category::new("Subscriptions");
        subscriptions.add_expense(Expense::new(
            "netflix",
            Money::from_dollars(180),
            Cadence::Yearly,
        ));
        let subs_id = subscriptions.id;

        budget.categories.push(non_negotiables);
        budget.categories.push(subscriptions);

        let totals = BudgetTotals::compute(&budget);
        assert_eq!(totals.total_for(nn_id), Some(1350.0));
        assert_eq!(totals.total_for(subs_id), Some(15.0));
        assert_eq!(totals.total_expense, 1365.0);
        assert_eq!(totals.play_money, 2635.0);
        assert_eq!(totals.yearly_income, 48000.0);
        assert!(totals.has_allocations);

        let map = totals.as_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&subs_id], 15.0);
    }

    #[test]
    fn test_category_totals_are_independent() {
        let mut budget = Budget::new(Money::from_dollars(100));
        let mut a = Category::new("A");
        a.add_expense(Expense::monthly("x", Money::from_dollars(10)));
        let b = Category::new("B");
        let b_id = b.id;
        budget.categories.push(a);
        budget.categories.push(b);

        let totals = BudgetTotals::compute(&budget);
        assert_eq!(totals.total_for(b_id), Some(0.0));
        assert_eq!(totals.total_for(CategoryId::new()), None);
    }
}
