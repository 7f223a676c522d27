//! Expense cadence and monthly normalization
//!
//! Every bill is entered at whatever interval it is actually charged and then
//! converted to a monthly equivalent so that bills of different cadences can
//! be summed. Cadence parsing is lenient: an unrecognized value is treated as
//! monthly rather than rejected, both for user input and for persisted data.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How often an expense is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cadence {
    Weekly,
    #[default]
    Monthly,
    /// Charged twice a month
    BiMonthly,
    Quarterly,
    Yearly,
}

impl Cadence {
    /// All cadences in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Weekly,
            Self::Monthly,
            Self::BiMonthly,
            Self::Quarterly,
            Self::Yearly,
        ]
    }

    /// Canonical name used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::BiMonthly => "bi-monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Short suffix for compact display ("$12.00/wk")
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Weekly => "wk",
            Self::Monthly => "mo",
            Self::BiMonthly => "2x/mo",
            Self::Quarterly => "qtr",
            Self::Yearly => "yr",
        }
    }

    /// Parse a cadence, falling back to monthly for anything unrecognized
    ///
    /// # Examples
    /// ```
    /// use playmoney::models::Cadence;
    /// assert_eq!(Cadence::parse_lenient("yr"), Cadence::Yearly);
    /// assert_eq!(Cadence::parse_lenient("fortnightly"), Cadence::Monthly);
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Cadence {
    type Err = UnknownCadence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "weekly" | "week" | "wk" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "mo" | "m" => Ok(Self::Monthly),
            "bimonthly" | "bi" | "semimonthly" | "twicemonthly" => Ok(Self::BiMonthly),
            "quarterly" | "quarter" | "qtr" | "q" => Ok(Self::Quarterly),
            "yearly" | "year" | "yr" | "y" | "annual" | "annually" => Ok(Self::Yearly),
            _ => Err(UnknownCadence(s.to_string())),
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Cadence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Cadence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Cadence::parse_lenient(&s),
            _ => Cadence::Monthly,
        })
    }
}

/// Returned by strict parsing; lenient callers never see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCadence(pub String);

impl fmt::Display for UnknownCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown cadence: {}", self.0)
    }
}

impl std::error::Error for UnknownCadence {}

/// Clamp a raw amount into the domain the normalizer accepts
///
/// NaN, infinities and negative values all become zero.
pub fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Convert one charge at `cadence` into its monthly equivalent
///
/// # Examples
/// ```
/// use playmoney::models::{normalize_to_monthly, Cadence};
/// assert_eq!(normalize_to_monthly(120.0, Cadence::Yearly), 10.0);
/// assert_eq!(normalize_to_monthly(f64::NAN, Cadence::Weekly), 0.0);
/// ```
pub fn normalize_to_monthly(amount: f64, cadence: Cadence) -> f64 {
    let amount = sanitize_amount(amount);
    // Divide, don't multiply by the reciprocal: 180/12 must be exactly 15
    match cadence {
        Cadence::Weekly => amount * 52.0 / 12.0,
        Cadence::Monthly => amount,
        Cadence::BiMonthly => amount * 2.0,
        Cadence::Quarterly => amount / 3.0,
        Cadence::Yearly => amount / 12.0,
    }
}
