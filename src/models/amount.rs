//! Amount type for currency values
//!
//! Amounts come out of the expression evaluator as floating point numbers
//! and are kept that way so exports carry the value the user typed. Display
//! rounds to cents and groups thousands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// A currency amount in whole units (dollars), possibly fractional
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a value in whole units
    ///
    /// # Examples
    /// ```
    /// use tally_cli::models::Amount;
    /// let amount = Amount::new(10.5); // $10.50
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Value rounded to the nearest cent, as an integer number of cents
    ///
    /// Saturates beyond the `i128` range.
    pub fn cents(&self) -> i128 {
        (self.0 * 100.0).round() as i128
    }

    /// Check if the amount rounds to zero cents
    pub fn is_zero(&self) -> bool {
        self.cents() == 0
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Format with a currency symbol, e.g. `$1,234.50` or `-€3.10`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if self.0 < 0.0 && fixed != "0.00" {
            "-"
        } else {
            ""
        };
        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(10.5).to_string(), "$10.50");
        assert_eq!(Amount::zero().to_string(), "$0.00");
        assert_eq!(Amount::new(-10.5).to_string(), "-$10.50");
        assert_eq!(Amount::new(0.05).to_string(), "$0.05");
        assert_eq!(Amount::new(1234567.891).to_string(), "$1,234,567.89");
        assert_eq!(Amount::new(1000.0).to_string(), "$1,000.00");
        assert_eq!(Amount::new(999.999).to_string(), "$1,000.00");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(Amount::new(-0.001).to_string(), "$0.00");
    }

    #[test]
    fn test_display_beyond_integer_cents() {
        assert_eq!(
            Amount::new(1e20).to_string(),
            "$100,000,000,000,000,000,000.00"
        );
        assert_eq!(
            Amount::new(-1e17).format_with_symbol("€"),
            "-€100,000,000,000,000,000.00"
        );
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Amount::new(3.1).format_with_symbol("€"), "€3.10");
        assert_eq!(Amount::new(-2500.0).format_with_symbol("£"), "-£2,500.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0);
        let b = Amount::new(4.5);

        assert_eq!((a + b).value(), 14.5);
        assert_eq!((a - b).value(), 5.5);
        assert_eq!((-a).value(), -10.0);
    }

    #[test]
    fn test_is_checks() {
        assert!(Amount::zero().is_zero());
        assert!(Amount::new(1.0).is_positive());
        assert!(Amount::new(-1.0).is_negative());
        assert!(!Amount::zero().is_positive());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(1.0), Amount::new(2.0), Amount::new(3.0)];
        let by_ref: Amount = amounts.iter().sum();
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total.value(), 6.0);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let a = Amount::new(173.5);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "173.5");

        let deserialized: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(a, deserialized);
    }
}
