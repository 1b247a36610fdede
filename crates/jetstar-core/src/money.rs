//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing REAL columns:                                                  │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The store keeps REAL columns; jetstar-db converts them to cents     │
//! │    once, at the row boundary. Every sum, total and average in the      │
//! │    app is integer arithmetic from then on.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use jetstar_core::money::Money;
//!
//! let price = Money::from_cents(350); // $3.50
//! let line = price * 2;               // $7.00
//! assert_eq!(line.to_string(), "$7.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that net profit can go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use jetstar_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use jetstar_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(500);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 1000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Divides by `divisor`, rounding half away from zero to the nearest cent.
    ///
    /// Returns `None` when `divisor` is zero; callers pick the fallback.
    ///
    /// ## Example
    /// ```rust
    /// use jetstar_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(6000).divide_rounded(3), Some(Money::from_cents(2000)));
    /// assert_eq!(Money::from_cents(1000).divide_rounded(3), Some(Money::from_cents(333)));
    /// assert_eq!(Money::from_cents(200).divide_rounded(3), Some(Money::from_cents(67)));
    /// assert_eq!(Money::from_cents(100).divide_rounded(0), None);
    /// ```
    pub fn divide_rounded(&self, divisor: i64) -> Option<Money> {
        if divisor == 0 {
            return None;
        }

        // i128 keeps `2 * cents` from overflowing on extreme values
        let numerator = self.0 as i128 * 2;
        let denominator = divisor as i128 * 2;
        let half = divisor.unsigned_abs() as i128;

        // Push the numerator away from zero by half a divisor, then truncate
        let adjusted = if numerator >= 0 {
            numerator + half
        } else {
            numerator - half
        };

        Some(Money((adjusted / denominator) as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34` / `-$5.50`.
///
/// Screens format through `ConfigState` to honor the configured symbol;
/// this impl is for logs and tests.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
