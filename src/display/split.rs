//! Income split legend
//!
//! Renders the pie projection as a legend table. Rows keep slice order, so
//! the first row is the slice starting at twelve o'clock.

use tabled::{settings::Style, Table, Tabled};

use super::summary::format_amount;
use crate::reports::IncomeSplit;

#[derive(Tabled)]
struct SplitRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Degrees")]
    degrees: String,
}

/// Format the split legend and the unallocated remainder
pub fn format_split(split: &IncomeSplit, symbol: &str) -> String {
    if split.is_empty() {
        return format!(
            "Nothing allocated yet.\nUnallocated: {}/mo\n",
            format_amount(split.remainder, symbol)
        );
    }

    let rows: Vec<SplitRow> = split
        .slices
        .iter()
        .map(|slice| SplitRow {
            label: slice.label.clone(),
            monthly: format_amount(slice.monthly_amount, symbol),
            share: format!("{:.1}%", slice.percentage()),
            degrees: format!("{:.1}", slice.span().to_degrees()),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "Allocated:   {}/mo\n",
        format_amount(split.total, symbol)
    ));

    if split.remainder < 0.0 {
        output.push_str(&format!(
            "Overspent:   {}/mo\n",
            format_amount(-split.remainder, symbol)
        ));
    } else {
        output.push_str(&format!(
            "Unallocated: {}/mo\n",
            format_amount(split.remainder, symbol)
        ));
    }

    output
}
