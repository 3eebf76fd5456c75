//! Core data models for costwise
//!
//! This module contains the data structures of the expense-tracking domain:
//! money, recurrence frequencies, expenses, and income profiles.

pub mod expense;
pub mod frequency;
pub mod ids;
pub mod money;
pub mod profile;

pub use expense::{Expense, ExpenseValidationError};
pub use frequency::Frequency;
pub use ids::{ExpenseId, UserId};
pub use money::{Money, MoneyParseError};
pub use profile::{IncomeProfile, ProfileValidationError};
