//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.
//! Amounts are rendered with the configured currency symbol.

pub mod category;
pub mod split;
pub mod summary;

pub use category::{format_category_list, format_category_tree, format_expense_list};
pub use split::format_split;
pub use summary::{format_amount, format_summary, play_money_label};
