//! Expense model
//!
//! A recorded cost with a recurrence frequency and two independent category
//! flags: `favorite` (a want) and `need` (an essential). The flags are not
//! mutually exclusive at the data level; whether the UI presents them as
//! radio buttons or checkboxes is presentation policy, not schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::Frequency;
use super::ids::{ExpenseId, UserId};
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Owning user; every store query filters by this
    pub user_id: UserId,

    /// Human-readable description
    pub description: String,

    /// Cost per occurrence (non-negative)
    pub amount: Money,

    /// How often this cost recurs
    pub frequency: Frequency,

    /// Tagged as a want
    #[serde(default)]
    pub favorite: bool,

    /// Tagged as an essential need
    #[serde(default)]
    pub need: bool,

    /// When the record was created; assigned at insert time, never updated
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new untagged expense
    pub fn new(
        user_id: UserId,
        description: impl Into<String>,
        amount: Money,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            user_id,
            description: description.into(),
            amount,
            frequency,
            favorite: false,
            need: false,
            created_at: Utc::now(),
        }
    }

    /// The yearly-equivalent cost of this expense
    pub fn yearly_cost(&self) -> Money {
        self.frequency.yearly_equivalent(self.amount)
    }

    /// Flip the want flag; the need flag is left untouched
    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    /// Flip the need flag; the want flag is left untouched
    pub fn toggle_need(&mut self) {
        self.need = !self.need;
    }

    /// Check whether the expense carries either category tag
    pub fn is_tagged(&self) -> bool {
        self.favorite || self.need
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.description, self.amount, self.frequency)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative (got {})", amount)
            }
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
