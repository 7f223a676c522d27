//! playmoney - a monthly budget calculator for the terminal
//!
//! Enter monthly take-home income, group recurring bills into categories,
//! and each bill is normalized to a monthly figure whatever its cadence.
//! What is left after all bills is your play money. The split of income
//! across categories is also available as pie-chart slice geometry.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data (money, cadence, expenses, categories, budget)
//! - `reports`: Derived figures (totals, play money, income split)
//! - `storage`: Key-value persistence with fail-soft loading
//! - `services`: The budget controller that applies and persists commands
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `audit`: Append-only log of every change
//! - `config`: Paths and user settings
//! - `cli`: Command handlers for the `playmoney` binary
//!
//! # Example
//!
//! ```rust
//! use playmoney::models::{Cadence, Money};
//! use playmoney::services::{BudgetService, NewExpense};
//! use playmoney::storage::MemoryStore;
//!
//! let mut service = BudgetService::load(MemoryStore::new());
//! service.set_income(Money::from_dollars(4000)).unwrap();
//! let subs = service.add_category("Subscriptions", None).unwrap();
//! service
//!     .add_expense(subs.id, NewExpense::new("netflix", Money::from_dollars(180), Cadence::Yearly))
//!     .unwrap();
//!
//! let totals = service.totals();
//! assert_eq!(totals.total_expense, 15.0);
//! assert_eq!(totals.play_money, 3985.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::BudgetError;
