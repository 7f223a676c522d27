//! Income split (pie chart) projection
//!
//! Turns an ordered list of labelled monthly amounts into pie slices. Order
//! is both legend order and slice order: the first slice starts at twelve
//! o'clock and the rest follow clockwise. Angles use the canvas convention
//! (y axis pointing down), so twelve o'clock is `-π/2` and clockwise means
//! increasing angle.
//!
//! Entries with zero or negative amounts stay in the legend with an empty
//! span. The part of income not covered by the slices is reported as
//! `remainder` and never drawn as a slice.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use super::totals::BudgetTotals;

/// Angle of twelve o'clock in canvas coordinates
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// One labelled input to the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitEntry {
    pub label: String,
    pub monthly_amount: f64,
}

impl SplitEntry {
    pub fn new(label: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            label: label.into(),
            monthly_amount,
        }
    }
}

/// One renderable slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSlice {
    pub label: String,
    pub monthly_amount: f64,
    /// Share of the sliced total, 0.0 ..= 1.0
    pub fraction_of_total: f64,
    pub start_angle_radians: f64,
    pub end_angle_radians: f64,
}

impl SplitSlice {
    pub fn span(&self) -> f64 {
        self.end_angle_radians - self.start_angle_radians
    }

    pub fn percentage(&self) -> f64 {
        self.fraction_of_total * 100.0
    }
}

/// The projected pie plus the unsliced remainder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSplit {
    /// Empty when nothing positive was allocated
    pub slices: Vec<SplitSlice>,
    /// Sum of the positive amounts
    pub total: f64,
    pub income: f64,
    /// `income - total`; negative when allocations exceed income
    pub remainder: f64,
}

impl IncomeSplit {
    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Build the split from category totals, keeping zero rows visible
    pub fn from_totals(totals: &BudgetTotals) -> Self {
        let entries: Vec<SplitEntry> = totals
            .per_category
            .iter()
            .map(|c| SplitEntry::new(c.name.clone(), c.monthly_total))
            .collect();
        project_split(totals.monthly_income, &entries)
    }
}

/// Project labelled monthly amounts into pie slices
///
/// # Examples
/// ```
/// use playmoney::reports::{project_split, SplitEntry};
///
/// let split = project_split(1000.0, &[SplitEntry::new("A", 250.0), SplitEntry::new("B", 250.0)]);
/// assert_eq!(split.total, 500.0);
/// assert_eq!(split.remainder, 500.0);
/// assert_eq!(split.slices[0].fraction_of_total, 0.5);
/// ```
pub fn project_split(income: f64, entries: &[SplitEntry]) -> IncomeSplit {
    let income = if income.is_finite() { income } else { 0.0 };
    let total: f64 = entries.iter().map(|e| positive_part(e.monthly_amount)).sum();
    let remainder = income - total;

    if total <= 0.0 || !total.is_finite() {
        return IncomeSplit {
            slices: Vec::new(),
            total: 0.0,
            income,
            remainder: income,
        };
    }

    let mut angle = START_ANGLE;
    let slices = entries
        .iter()
        .map(|entry| {
            let fraction = positive_part(entry.monthly_amount) / total;
            let start = angle;
            angle += fraction * TAU;
            SplitSlice {
                label: entry.label.clone(),
                monthly_amount: entry.monthly_amount,
                fraction_of_total: fraction,
                start_angle_radians: start,
                end_angle_radians: angle,
            }
        })
        .collect();

    IncomeSplit {
        slices,
        total,
        income,
        remainder,
    }
}

fn positive_part(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}
