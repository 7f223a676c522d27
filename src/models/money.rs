//! Money type for representing currency amounts
//!
//! Stored amounts (bill amounts, income) are kept in cents (i64). Normalized
//! monthly figures are fractional and live as `f64` dollars; `Money` converts
//! between the two at the edges.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use playmoney::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Convert a fractional dollar figure to the nearest cent
    ///
    /// Non-finite input becomes zero.
    pub fn from_dollars_f64(dollars: f64) -> Self {
        if !dollars.is_finite() {
            return Self::zero();
        }
        Self((dollars * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as fractional dollars
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,200.00"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let cleaned: String = s.chars().filter(|c| *c != ',').collect();
        let s = cleaned.as_str();

        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if s.contains('.') {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let dollars: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
            };

            // Pad or truncate cents to 2 digits
            let cents_str = parts[1];
            if !cents_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            dollars
                .checked_mul(100)
                .and_then(|d| d.checked_add(cents))
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        } else {
            s.parse::<i64>()
                .ok()
                .and_then(|d| d.checked_mul(100))
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse user input the forgiving way: anything unparseable or negative is zero
    ///
    /// # Examples
    /// ```
    /// use playmoney::models::Money;
    /// assert_eq!(Money::parse_lenient("12.5").cents(), 1250);
    /// assert_eq!(Money::parse_lenient("twelve").cents(), 0);
    /// assert_eq!(Money::parse_lenient("-40").cents(), 0);
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        match Self::parse(s) {
            Ok(m) if !m.is_negative() => m,
            _ => Self::zero(),
        }
    }

    /// Decode a stored amount of any shape
    ///
    /// Integers are cents, floats are dollars, strings are parsed as dollar
    /// amounts. Everything else, and any negative result, is zero.
    ///
    /// # Examples
    /// ```
    /// use playmoney::models::Money;
    /// use serde_json::json;
    /// assert_eq!(Money::from_stored(&json!(1250)).cents(), 1250);
    /// assert_eq!(Money::from_stored(&json!("12.50")).cents(), 1250);
    /// assert_eq!(Money::from_stored(&json!(null)).cents(), 0);
    /// ```
    pub fn from_stored(value: &Value) -> Self {
        let amount = match value {
            Value::Number(n) => match n.as_i64() {
                Some(cents) => Self::from_cents(cents),
                None => n.as_f64().map(Self::from_dollars_f64).unwrap_or_default(),
            },
            Value::String(s) => Self::parse_lenient(s),
            _ => Self::zero(),
        };

        if amount.is_negative() {
            Self::zero()
        } else {
            amount
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// `deserialize_with` helper that never fails; see [`Money::from_stored`]
pub fn deserialize_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(Money::from_stored(&value))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_dollar_conversions() {
        assert_eq!(Money::from_dollars(120).as_dollars(), 120.0);
        assert_eq!(Money::from_dollars_f64(43.3333).cents(), 4333);
        assert_eq!(Money::from_dollars_f64(-2.5).cents(), -250);
        assert_eq!(Money::from_dollars_f64(f64::NAN), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("1,200").unwrap().cents(), 120000);
        assert!(Money::parse("").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Money::parse_lenient(" 5000 ").cents(), 500000);
        assert_eq!(Money::parse_lenient("").cents(), 0);
        assert_eq!(Money::parse_lenient("NaN").cents(), 0);
        assert_eq!(Money::parse_lenient("-3").cents(), 0);
    }

    #[test]
    fn test_parse_rejects_repeated_sign() {
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-$-5").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("5.-1").is_err());
        assert!(Money::parse_lenient("--5").is_zero());
    }

    #[test]
    fn test_from_stored_shapes() {
        use serde_json::json;

        assert_eq!(Money::from_stored(&json!(120000)).cents(), 120000);
        assert_eq!(Money::from_stored(&json!(1200.5)).cents(), 120050);
        assert_eq!(Money::from_stored(&json!("12.50")).cents(), 1250);
        assert_eq!(Money::from_stored(&json!("$1,200")).cents(), 120000);
        assert!(Money::from_stored(&json!("abc")).is_zero());
        assert!(Money::from_stored(&json!(-300)).is_zero());
        assert!(Money::from_stored(&json!(-3.5)).is_zero());
        assert!(Money::from_stored(&json!({"cents": 5})).is_zero());
        assert!(Money::from_stored(&json!(null)).is_zero());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
