//! Money type for representing signed amounts
//!
//! Wraps an exact decimal so that sums never pick up floating-point error
//! and do not depend on the order entries are added in. Expenses are
//! negative, income is positive. Amounts are only rounded when displayed.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

/// Largest magnitude accepted by [`Money::parse`]
///
/// Keeps any realistic number of rows far below the point where summing
/// them could overflow a `Decimal`.
pub const MAX_MAGNITUDE: i64 = 1_000_000_000_000_000;

/// A signed monetary amount with full decimal precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(-1050); // -10.50
    /// assert_eq!(amount.to_string(), "-10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative (expense)
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Ratio of this amount's magnitude to `max`'s, in `0.0..=1.0` when
    /// `|self| <= |max|`. Returns 0 when `max` is zero.
    pub fn magnitude_ratio(&self, max: Money) -> f64 {
        if max.is_zero() {
            return 0.0;
        }
        let ratio = self.0.abs() / max.0.abs();
        ratio.to_f64().unwrap_or(0.0)
    }

    /// Parse an amount from a string
    ///
    /// Accepts "10.50", "-10.5", "10", "$10.50" and scientific notation
    /// such as "-1e3". Magnitudes above [`MAX_MAGNITUDE`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let body = body.strip_prefix('$').unwrap_or(body);

        if body.is_empty() || body.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(body)
            .or_else(|_| Decimal::from_scientific(body))
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if value > Decimal::new(MAX_MAGNITUDE, 0) {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Ok(if negative { -Self(value) } else { Self(value) })
    }

    /// Plain decimal string used in ledger files, e.g. "-12.5"
    pub fn to_ledger_string(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl fmt::Display for Money {
    /// Two decimals, midpoint rounded away from zero
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        if self.0.is_zero() {
            return Self::zero();
        }
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::OutOfRange(s) => write!(
                f,
                "Amount '{}' is out of range (at most {} either way)",
                s.trim(),
                MAX_MAGNITUDE
            ),
        }
    }
}

impl std::error::Error for MoneyParseError {}
