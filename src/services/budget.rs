//! Budget service
//!
//! The single owner of budget state. It is built once from a
//! `KeyValueStore`, applies commands to the in-memory `Budget`, and writes
//! the affected key back in the same call. There is no batching: every
//! successful command is persisted before it returns. Changes are staged on
//! a copy and only replace the live budget once the save succeeds.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{BudgetError, BudgetResult};
use crate::models::category::DEFAULT_COLOR;
use crate::models::{Budget, Cadence, Category, CategoryId, Expense, ExpenseId, Money};
use crate::reports::{BudgetTotals, IncomeSplit};
use crate::storage::{self, KeyValueStore};

/// Input for a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub name: String,
    pub amount: Money,
    pub cadence: Cadence,
}

impl NewExpense {
    pub fn new(name: impl Into<String>, amount: Money, cadence: Cadence) -> Self {
        Self {
            name: name.into(),
            amount,
            cadence,
        }
    }

    /// Build from raw text fields; bad numbers become 0, unknown cadences monthly
    pub fn from_input(name: &str, amount: &str, cadence: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            amount: Money::parse_lenient(amount),
            cadence: cadence.map(Cadence::parse_lenient).unwrap_or_default(),
        }
    }
}

/// Partial edit of an expense; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub cadence: Option<Cadence>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.cadence.is_none()
    }
}

/// Owns the budget and applies commands to it
pub struct BudgetService<S: KeyValueStore> {
    store: S,
    budget: Budget,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> BudgetService<S> {
    /// Load the budget from `store`; missing or corrupted data loads as empty
    pub fn load(store: S) -> Self {
        let budget = storage::load_budget(&store);
        tracing::debug!(
            categories = budget.categories.len(),
            expenses = budget.expense_count(),
            "budget loaded"
        );
        Self {
            store,
            budget,
            audit: None,
        }
    }

    /// Record every mutation to `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn categories(&self) -> &[Category] {
        &self.budget.categories
    }

    // === Income ===

    pub fn income(&self) -> Money {
        self.budget.monthly_income
    }

    /// Set monthly income; negative values are stored as zero
    pub fn set_income(&mut self, income: Money) -> BudgetResult<Money> {
        let income = if income.is_negative() {
            Money::zero()
        } else {
            income
        };

        let before = self.budget.monthly_income;
        storage::save_income(&self.store, income)?;
        self.budget.monthly_income = income;

        tracing::info!(income = %income, "income updated");
        self.record(AuditEntry::update(
            EntityType::Income,
            storage::NET_INCOME_KEY,
            None,
            &before,
            &income,
            Some(format!("{} -> {}", before, income)),
        ));

        Ok(income)
    }

    /// Set monthly income from raw text; unparseable input means zero
    pub fn set_income_input(&mut self, raw: &str) -> BudgetResult<Money> {
        self.set_income(Money::parse_lenient(raw))
    }

    // === Categories ===

    /// Find a category by name (case-insensitive), full id, or short id
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        if let Some(category) = self.budget.get_category_by_name(identifier) {
            return Some(category);
        }

        if let Ok(id) = identifier.trim().parse::<CategoryId>() {
            return self.budget.get_category(id);
        }

        self.budget
            .categories
            .iter()
            .find(|c| c.id.matches_short(identifier.trim()))
    }

    pub fn get_category(&self, id: CategoryId) -> BudgetResult<&Category> {
        self.budget
            .get_category(id)
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))
    }

    pub fn add_category(&mut self, name: &str, color: Option<&str>) -> BudgetResult<Category> {
        let mut category = Category::new(name.trim());
        if let Some(color) = color.map(str::trim).filter(|c| !c.is_empty()) {
            category.set_color(color);
        }

        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.commit(|budget| {
            budget.categories.push(category.clone());
            Ok(())
        })?;

        tracing::info!(category = %category.name, id = %category.id, "category added");
        self.record(AuditEntry::create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        ));

        Ok(category)
    }

    pub fn rename_category(&mut self, id: CategoryId, new_name: &str) -> BudgetResult<Category> {
        let new_name = new_name.trim();
        let (before, renamed) = self.commit(|budget| {
            let category = category_mut(budget, id)?;
            let before = category.clone();
            category.rename(new_name);
            category
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;
            Ok((before, category.clone()))
        })?;

        tracing::info!(from = %before.name, to = %renamed.name, "category renamed");
        self.record(AuditEntry::update(
            EntityType::Category,
            id.to_string(),
            Some(renamed.name.clone()),
            &before,
            &renamed,
            Some(format!("name: {} -> {}", before.name, renamed.name)),
        ));

        Ok(renamed)
    }

    pub fn recolor_category(&mut self, id: CategoryId, color: &str) -> BudgetResult<Category> {
        let color = color.trim();
        let (before, updated) = self.commit(|budget| {
            let category = category_mut(budget, id)?;
            let before = category.clone();
            category.set_color(if color.is_empty() { DEFAULT_COLOR } else { color });
            Ok((before, category.clone()))
        })?;

        self.record(AuditEntry::update(
            EntityType::Category,
            id.to_string(),
            Some(updated.name.clone()),
            &before,
            &updated,
            Some(format!("color: {} -> {}", before.color, updated.color)),
        ));

        Ok(updated)
    }

    /// Delete a category together with all of its expenses
    pub fn delete_category(&mut self, id: CategoryId) -> BudgetResult<Category> {
        let removed = self.commit(|budget| {
            budget
                .remove_category(id)
                .ok_or_else(|| BudgetError::category_not_found(id.to_string()))
        })?;

        tracing::info!(
            category = %removed.name,
            expenses = removed.expenses.len(),
            "category deleted"
        );
        self.record(AuditEntry::delete(
            EntityType::Category,
            id.to_string(),
            Some(removed.name.clone()),
            &removed,
        ));

        Ok(removed)
    }

    /// Create the starter categories when the budget has none
    ///
    /// Returns how many categories were created.
    pub fn seed_defaults(&mut self) -> BudgetResult<usize> {
        if !self.budget.categories.is_empty() {
            return Ok(0);
        }

        let defaults = storage::init::default_categories();
        let count = defaults.len();
        self.commit(|budget| {
            budget.categories = defaults;
            Ok(())
        })?;

        for category in &self.budget.categories {
            self.record(AuditEntry::create(
                EntityType::Category,
                category.id.to_string(),
                Some(category.name.clone()),
                category,
            ));
        }

        Ok(count)
    }

    // === Expenses ===

    /// Find an expense in a category by name (case-insensitive) or id
    pub fn find_expense(&self, category_id: CategoryId, identifier: &str) -> Option<&Expense> {
        let category = self.budget.get_category(category_id)?;
        let identifier = identifier.trim();
        let name_lower = identifier.to_lowercase();

        if let Some(expense) = category
            .expenses
            .iter()
            .find(|e| e.name.to_lowercase() == name_lower)
        {
            return Some(expense);
        }

        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return category.get_expense(id);
        }

        category.expenses.iter().find(|e| e.id.matches_short(identifier))
    }

    pub fn add_expense(
        &mut self,
        category_id: CategoryId,
        new_expense: NewExpense,
    ) -> BudgetResult<Expense> {
        let expense = Expense::new(
            new_expense.name.trim(),
            new_expense.amount,
            new_expense.cadence,
        );
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let category_name = self.commit(|budget| {
            let category = category_mut(budget, category_id)?;
            category.add_expense(expense.clone());
            Ok(category.name.clone())
        })?;

        tracing::info!(
            category = %category_name,
            expense = %expense.name,
            monthly = expense.monthly_amount(),
            "expense added"
        );
        self.record(AuditEntry::create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(format!("{} / {}", category_name, expense.name)),
            &expense,
        ));

        Ok(expense)
    }

    pub fn update_expense(
        &mut self,
        category_id: CategoryId,
        expense_id: ExpenseId,
        update: ExpenseUpdate,
    ) -> BudgetResult<Expense> {
        let (category_name, before, updated) = self.commit(|budget| {
            let category = category_mut(budget, category_id)?;
            let category_name = category.name.clone();
            let expense = category
                .get_expense_mut(expense_id)
                .ok_or_else(|| BudgetError::expense_not_found(expense_id.to_string()))?;

            let before = expense.clone();
            if let Some(name) = &update.name {
                expense.rename(name.trim());
            }
            if let Some(amount) = update.amount {
                expense.set_amount(amount);
            }
            if let Some(cadence) = update.cadence {
                expense.set_cadence(cadence);
            }
            expense
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            Ok((category_name, before, expense.clone()))
        })?;

        let mut changes = Vec::new();
        if before.name != updated.name {
            changes.push(format!("name: {} -> {}", before.name, updated.name));
        }
        if before.amount != updated.amount {
            changes.push(format!("amount: {} -> {}", before.amount, updated.amount));
        }
        if before.cadence != updated.cadence {
            changes.push(format!("cadence: {} -> {}", before.cadence, updated.cadence));
        }

        if !changes.is_empty() {
            tracing::info!(expense = %updated.name, changes = %changes.join(", "), "expense updated");
            self.record(AuditEntry::update(
                EntityType::Expense,
                expense_id.to_string(),
                Some(format!("{} / {}", category_name, updated.name)),
                &before,
                &updated,
                Some(changes.join(", ")),
            ));
        }

        Ok(updated)
    }

    pub fn delete_expense(
        &mut self,
        category_id: CategoryId,
        expense_id: ExpenseId,
    ) -> BudgetResult<Expense> {
        let (category_name, removed) = self.commit(|budget| {
            let category = category_mut(budget, category_id)?;
            let removed = category
                .remove_expense(expense_id)
                .ok_or_else(|| BudgetError::expense_not_found(expense_id.to_string()))?;
            Ok((category.name.clone(), removed))
        })?;

        tracing::info!(category = %category_name, expense = %removed.name, "expense deleted");
        self.record(AuditEntry::delete(
            EntityType::Expense,
            expense_id.to_string(),
            Some(format!("{} / {}", category_name, removed.name)),
            &removed,
        ));

        Ok(removed)
    }

    // === Derived figures ===

    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals::compute(&self.budget)
    }

    pub fn split(&self) -> IncomeSplit {
        IncomeSplit::from_totals(&self.totals())
    }

    // === Internals ===

    /// Apply `change` to a copy of the budget, save its categories, then swap it in
    ///
    /// A failed change or a failed save leaves the live budget untouched.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Budget) -> BudgetResult<T>,
    ) -> BudgetResult<T> {
        let mut staged = self.budget.clone();
        let output = change(&mut staged)?;
        storage::save_categories(&self.store, &staged.categories)?;
        self.budget = staged;
        Ok(output)
    }

    /// Audit failures never undo a saved change
    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

fn category_mut(budget: &mut Budget, id: CategoryId) -> BudgetResult<&mut Category> {
    budget
        .get_category_mut(id)
        .ok_or_else(|| BudgetError::category_not_found(id.to_string()))
}
