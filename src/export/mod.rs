//! Export module for playmoney
//!
//! Writes the current budget and its derived figures in three formats:
//! - CSV: one row per expense plus category totals (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with schema versioning
//! - YAML: the same snapshot in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use self::json::{export_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
