//! Derived figures for playmoney
//!
//! - `totals`: per-category monthly totals, overall expense, play money
//! - `split`: proportional income split for the pie chart

pub mod split;
pub mod totals;

pub use split::{project_split, IncomeSplit, SplitEntry, SplitSlice, START_ANGLE};
pub use totals::{play_money, BudgetTotals, CategoryTotal, PlayMoneyStatus};
