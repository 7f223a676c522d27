//! Expense model
//!
//! A recurring bill owned by exactly one category. The stored amount is the
//! charge per occurrence; `monthly_amount` gives its normalized value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cadence::{normalize_to_monthly, Cadence};
use super::ids::ExpenseId;
use super::money::{deserialize_lenient, Money};

/// Label given to a stored expense that has none
pub const UNNAMED_EXPENSE: &str = "Unnamed expense";

fn default_name() -> String {
    UNNAMED_EXPENSE.to_string()
}

/// A single recurring expense (bill)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: ExpenseId,

    /// Display label
    #[serde(default = "default_name")]
    pub name: String,

    /// Amount charged per occurrence; unreadable stored values load as zero
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub amount: Money,

    /// How often the amount is charged
    #[serde(default)]
    pub cadence: Cadence,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    ///
    /// Negative amounts are clamped to zero.
    pub fn new(name: impl Into<String>, amount: Money, cadence: Cadence) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount: clamp_non_negative(amount),
            cadence,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a monthly expense
    pub fn monthly(name: impl Into<String>, amount: Money) -> Self {
        Self::new(name, amount, Cadence::Monthly)
    }

    /// Monthly equivalent of this expense, in dollars
    pub fn monthly_amount(&self) -> f64 {
        normalize_to_monthly(self.amount.as_dollars(), self.cadence)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = clamp_non_negative(amount);
        self.updated_at = Utc::now();
    }

    pub fn set_cadence(&mut self, cadence: Cadence) {
        self.cadence = cadence;
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if self.name.len() > 80 {
            return Err(ExpenseValidationError::NameTooLong(self.name.len()));
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.name, self.amount, self.cadence.short_label())
    }
}

fn clamp_non_negative(amount: Money) -> Money {
    if amount.is_negative() {
        Money::zero()
    } else {
        amount
    }
}

/// Sum of the monthly equivalents of `expenses`
///
/// An empty slice sums to exactly zero.
pub fn category_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::monthly_amount).sum()
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Expense name too long ({} chars, max 80)", len),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Netflix", Money::from_dollars(180), Cadence::Yearly);
        assert_eq!(expense.name, "Netflix");
        assert_eq!(expense.amount.cents(), 18000);
        assert_eq!(expense.cadence, Cadence::Yearly);
        assert_eq!(expense.monthly_amount(), 15.0);
    }

    #[test]
    fn test_negative_amount_is_clamped() {
        let mut expense = Expense::monthly("Refund", Money::from_cents(-500));
        assert!(expense.amount.is_zero());

        expense.set_amount(Money::from_cents(-1));
        assert!(expense.amount.is_zero());
        assert_eq!(expense.monthly_amount(), 0.0);
    }

    #[test]
    fn test_empty_category_total_is_zero() {
        let total = category_total(&[]);
        assert_eq!(total, 0.0);
        assert!(!total.is_nan());
    }

    #[test]
    fn test_mixed_cadence_total() {
        let expenses = vec![
            Expense::monthly("Gym", Money::from_dollars(100)),
            Expense::new("Domain", Money::from_dollars(120), Cadence::Yearly),
        ];
        assert_eq!(category_total(&expenses), 110.0);
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::monthly("Rent", Money::from_dollars(1200));
        assert!(expense.validate().is_ok());

        expense.name = "   ".into();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyName));

        expense.name = "x".repeat(81);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NameTooLong(81))
        ));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","name":"Water"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.amount.is_zero());
        assert_eq!(expense.cadence, Cadence::Monthly);
    }

    #[test]
    fn test_deserialize_tolerates_legacy_amounts() {
        let expense: Expense =
            serde_json::from_str(r#"{"name":"Netflix","amount":"12.50","cadence":"monthly"}"#)
                .unwrap();
        assert_eq!(expense.amount.cents(), 1250);

        let expense: Expense = serde_json::from_str(r#"{"name":"Rent","amount":1200.5}"#).unwrap();
        assert_eq!(expense.amount.cents(), 120050);

        let expense: Expense = serde_json::from_str(r#"{"amount":"lots"}"#).unwrap();
        assert!(expense.amount.is_zero());
        assert_eq!(expense.name, UNNAMED_EXPENSE);

        let expense: Expense = serde_json::from_str(r#"{"name":"Gift","amount":-40}"#).unwrap();
        assert!(expense.amount.is_zero());
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("Spotify", Money::from_cents(1099), Cadence::Monthly);
        assert_eq!(expense.to_string(), "Spotify $10.99/mo");
    }
}
