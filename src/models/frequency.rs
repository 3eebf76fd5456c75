//! Recurrence frequency for expenses
//!
//! The stored set is closed: an expense recurs once, daily, weekly, monthly,
//! or yearly. Annualization factors are fixed; a one-time expense counts once
//! and is never treated as a recurring yearly burden.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How often an expense recurs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// A single, non-recurring expense
    Once,
    /// Every day (365 occurrences per year)
    Daily,
    /// Every week (52 occurrences per year)
    Weekly,
    /// Every month
    #[default]
    Monthly,
    /// Once a year
    Yearly,
}

impl Frequency {
    /// Number of occurrences counted per year
    ///
    /// `Once` yields 1: a one-time cost contributes its raw amount to a
    /// yearly total, exactly once.
    pub const fn per_year(&self) -> i64 {
        match self {
            Self::Once => 1,
            Self::Daily => 365,
            Self::Weekly => 52,
            Self::Monthly => 12,
            Self::Yearly => 1,
        }
    }

    /// The yearly-equivalent cost of an amount recurring at this frequency
    pub fn yearly_equivalent(&self, amount: Money) -> Money {
        amount.times(self.per_year())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once => write!(f, "once"),
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}
