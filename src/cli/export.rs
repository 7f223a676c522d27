//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::models::Budget;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense plus totals
    Csv,
    /// JSON snapshot with totals and split
    Json,
    /// YAML snapshot, human-readable
    Yaml,
}

/// Export the budget to `output`, or to stdout when no path is given
pub fn handle_export_command(
    budget: &Budget,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> BudgetResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(budget, format, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            println!("Budget exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(budget, format, &mut writer, pretty)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    budget: &Budget,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    match format {
        ExportFormat::Csv => export_csv(budget, writer),
        ExportFormat::Json => export_json(budget, writer, pretty),
        ExportFormat::Yaml => export_yaml(budget, writer),
    }
}
