//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64). Integer cents rule out the
//! NaN/Infinity class of bugs entirely: an amount is always a finite number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use costwise::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by an occurrence count, e.g. annualizing a weekly amount
    pub const fn times(&self, factor: i64) -> Self {
        Self(self.0 * factor)
    }

    /// Divide evenly into `n` parts, truncating toward zero (display use only)
    pub const fn divided_by(&self, n: i64) -> Self {
        Self(self.0 / n)
    }

    /// This amount as a percentage of `base`
    ///
    /// Callers must validate that `base` is positive first; percentage math
    /// against a zero or negative income base is rejected upstream with
    /// `CostwiseError::InvalidIncomeBase`.
    pub fn percent_of(&self, base: Money) -> f64 {
        (self.0 as f64 / base.0 as f64) * 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "$-10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s;
        let s = s.trim();

        // The sign may appear before or after the currency symbol, once
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) if !negative => (true, rest),
            Some(_) => return Err(MoneyParseError::InvalidFormat(input.to_string())),
            None => (negative, s),
        };

        // From here on the magnitude must be unsigned digits; a stray sign
        // inside the number fails the integer parses below
        let cents = if let Some((dollars_str, cents_str)) = s.split_once('.') {
            let dollars: u64 = dollars_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(input.to_string()))?;

            // Pad or truncate the fractional part to 2 digits; the slice is
            // bounds- and char-boundary-checked so non-ASCII input is a
            // parse error, never a panic
            let cents: u64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<u64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(input.to_string()))?
                        * 10
                }
                _ => cents_str
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(input.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(input.to_string()))?,
            };

            dollars
                .checked_mul(100)
                .and_then(|d| d.checked_add(cents))
                .ok_or_else(|| MoneyParseError::InvalidFormat(input.to_string()))?
        } else {
            // Integer format - assume whole dollars
            s.parse::<u64>()
                .map_err(|_| MoneyParseError::InvalidFormat(input.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::InvalidFormat(input.to_string()))?
        };

        let cents = i64::try_from(cents)
            .map_err(|_| MoneyParseError::InvalidFormat(input.to_string()))?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
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

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
