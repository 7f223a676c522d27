//! Storage layer for playmoney
//!
//! The budget lives under two keys of a `KeyValueStore`: the net income and
//! the category list (expenses are nested inside their category). Loading
//! is fail-soft: anything missing or malformed reads as its default.

pub mod file_io;
pub mod init;
pub mod kv;

pub use file_io::{read_json, write_json_atomic};
pub use init::{default_categories, needs_initialization};
pub use kv::{decode_list, save_value, JsonFileStore, KeyValueStore, MemoryStore};

use serde_json::Value;

use crate::error::BudgetResult;
use crate::models::{Budget, Category, Money};

/// Key holding monthly net income, in cents
pub const NET_INCOME_KEY: &str = "netIncome";

/// Key holding the ordered category list with their expenses
pub const CATEGORIES_KEY: &str = "categories";

/// Load the monthly income, tolerating legacy shapes
///
/// Integer cents is the current format. A float or numeric string is read
/// as dollars. Anything else, including negatives, loads as zero.
pub fn load_income<S: KeyValueStore + ?Sized>(store: &S) -> Money {
    match store.load(NET_INCOME_KEY) {
        Some(value @ (Value::Number(_) | Value::String(_))) => Money::from_stored(&value),
        Some(other) => {
            tracing::warn!(value = %other, "unexpected income value, using zero");
            Money::zero()
        }
        None => Money::zero(),
    }
}

pub fn save_income<S: KeyValueStore + ?Sized>(store: &S, income: Money) -> BudgetResult<()> {
    save_value(store, NET_INCOME_KEY, &income)
}

/// Load the category list, keeping every entry that can be read
pub fn load_categories<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Category> {
    store
        .load(CATEGORIES_KEY)
        .map(|value| decode_list(value, CATEGORIES_KEY))
        .unwrap_or_default()
}

pub fn save_categories<S: KeyValueStore + ?Sized>(
    store: &S,
    categories: &[Category],
) -> BudgetResult<()> {
    save_value(store, CATEGORIES_KEY, &categories)
}

/// Load the whole budget from the store
pub fn load_budget<S: KeyValueStore + ?Sized>(store: &S) -> Budget {
    Budget {
        monthly_income: load_income(store),
        categories: load_categories(store),
    }
}

/// Persist the whole budget
pub fn save_budget<S: KeyValueStore + ?Sized>(store: &S, budget: &Budget) -> BudgetResult<()> {
    save_income(store, budget.monthly_income)?;
    save_categories(store, &budget.categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, Expense};
    use serde_json::json;

    #[test]
    fn test_empty_store_loads_default_budget() {
        let store = MemoryStore::new();
        let budget = load_budget(&store);
        assert_eq!(budget, Budget::default());
    }

    #[test]
    fn test_budget_round_trip() {
        let store = MemoryStore::new();
        let mut budget = Budget::new(Money::from_dollars(4000));
        let mut subs = Category::new("Subscriptions");
        subs.add_expense(Expense::new("Netflix", Money::from_dollars(180), Cadence::Yearly));
        budget.categories.push(subs);

        save_budget(&store, &budget).unwrap();
        assert_eq!(store.load(NET_INCOME_KEY), Some(json!(400000)));

        let loaded = load_budget(&store);
        assert_eq!(loaded, budget);
    }

    #[test]
    fn test_legacy_income_shapes() {
        let store = MemoryStore::new();

        store.insert_raw(NET_INCOME_KEY, json!("5000")).unwrap();
        assert_eq!(load_income(&store), Money::from_dollars(5000));

        store.insert_raw(NET_INCOME_KEY, json!("lots")).unwrap();
        assert_eq!(load_income(&store), Money::zero());

        store.insert_raw(NET_INCOME_KEY, json!({"amount": 1})).unwrap();
        assert_eq!(load_income(&store), Money::zero());

        store.insert_raw(NET_INCOME_KEY, json!(-100)).unwrap();
        assert_eq!(load_income(&store), Money::zero());
    }

    #[test]
    fn test_one_bad_entry_does_not_drop_the_rest() {
        let store = MemoryStore::new();
        store
            .insert_raw(
                CATEGORIES_KEY,
                json!([
                    {
                        "id": "550e8400-e29b-41d4-a716-446655440000",
                        "name": "Subscriptions",
                        "expenses": [
                            {"name": "netflix", "amount": "12.50", "cadence": "monthly"},
                            {"name": "gym", "amount": 40.25, "cadence": "fortnightly"},
                            42
                        ]
                    },
                    {"color": "#81c784", "expenses": [{"name": "rent", "amount": 1200.5}]},
                    "not a category",
                    {"name": "Savings", "created_at": "yesterday"}
                ]),
            )
            .unwrap();

        let budget = load_budget(&store);
        assert_eq!(budget.categories.len(), 2);

        let subs = &budget.categories[0];
        assert_eq!(subs.name, "Subscriptions");
        assert_eq!(subs.expenses.len(), 2);
        assert_eq!(subs.expenses[0].amount, Money::from_cents(1250));
        assert_eq!(subs.expenses[1].amount, Money::from_cents(4025));
        assert_eq!(subs.expenses[1].cadence, Cadence::Monthly);

        let unnamed = &budget.categories[1];
        assert_eq!(unnamed.name, crate::models::category::UNNAMED_CATEGORY);
        assert_eq!(unnamed.expenses[0].amount, Money::from_cents(120050));
        assert_eq!(unnamed.monthly_total(), 1200.5);
    }

    #[test]
    fn test_corrupted_categories_load_empty() {
        let store = MemoryStore::new();
        store.insert_raw(CATEGORIES_KEY, json!({"oops": true})).unwrap();
        store.insert_raw(NET_INCOME_KEY, json!(250000)).unwrap();

        let budget = load_budget(&store);
        assert!(budget.categories.is_empty());
        assert_eq!(budget.monthly_income, Money::from_dollars(2500));
    }
}
