//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A 40.00/day sedan over 30 days must price to exactly 1200.00,      │
//! │  not 1199.9999999999998.                                            │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    4000 cents × 30 days = 120000 cents. Exact, always.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! // Create from cents (preferred)
//! let per_day = Money::from_cents(4000); // 40.00
//!
//! // Quote price: daily price × rental days
//! let total = per_day * 3;
//! assert_eq!(total.cents(), 12000);
//!
//! // Seed files carry decimal prices
//! let parsed: Money = "25.50".parse().unwrap();
//! assert_eq!(parsed.cents(), 2550);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: totals never overflow for realistic rental durations
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type: car type
/// daily prices, quote totals, and the price frozen into a reservation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_cents(4000); // 40.00
    /// assert_eq!(price.cents(), 4000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_major_minor(25, 50); // 25.50
    /// assert_eq!(price.cents(), 2550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Decimal Parsing
// =============================================================================

/// Error parsing a decimal money string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money amount: {input:?}")]
pub struct ParseMoneyError {
    input: String,
}

/// Parses decimal strings such as `"40.0"`, `"25.50"` or `"120"`.
///
/// Seed files carry daily prices in this format. At most two fraction
/// digits are accepted; a lone fraction digit means tenths (`"40.5"` is
/// 40.50, not 40.05).
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError {
            input: s.to_string(),
        };
        let s = s.trim();

        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major_str.is_empty() || minor_str.len() > 2 {
            return Err(err());
        }
        // The sign was stripped above; both parts must be bare digits so
        // embedded signs ("40.-5", "--5.50") don't sneak through parse()
        if !major_str.bytes().all(|b| b.is_ascii_digit())
            || !minor_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let major: i64 = major_str.parse().map_err(|_| err())?;
        let minor: i64 = match minor_str {
            "" => 0,
            m => {
                let parsed: i64 = m.parse().map_err(|_| err())?;
                // "40.5" means 40.50
                if m.len() == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            }
        };

        Ok(Money::from_cents(sign * (major * 100 + minor)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major_part().abs(), self.minor_part())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (daily price × rental days).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2550);
        assert_eq!(money.cents(), 2550);
        assert_eq!(money.major_part(), 25);
        assert_eq!(money.minor_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(40, 0).cents(), 4000);
        assert_eq!(Money::from_major_minor(25, 50).cents(), 2550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4000)), "40.00");
        assert_eq!(format!("{}", Money::from_cents(2555)), "25.55");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("40.0".parse::<Money>().unwrap().cents(), 4000);
        assert_eq!("40.00".parse::<Money>().unwrap().cents(), 4000);
        assert_eq!("25.5".parse::<Money>().unwrap().cents(), 2550);
        assert_eq!("25.55".parse::<Money>().unwrap().cents(), 2555);
        assert_eq!("120".parse::<Money>().unwrap().cents(), 12000);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("40.123".parse::<Money>().is_err());
        assert!(".5".parse::<Money>().is_err());
        assert!("4 0".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_embedded_signs() {
        // A sign inside the fraction must not subtract from the major part
        assert!("40.-5".parse::<Money>().is_err());
        assert!("40.+5".parse::<Money>().is_err());
        assert!("--5.50".parse::<Money>().is_err());
        assert!("+40".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }

    /// Quote pricing property: daily price × whole days, exact.
    #[test]
    fn test_quote_price_exact() {
        let per_day = Money::from_cents(4000);
        assert_eq!((per_day * 30).cents(), 120_000);
    }
}
