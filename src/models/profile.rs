//! Income profile model
//!
//! The denominator side of every percentage in the application: a user's
//! gross yearly salary plus the optional US state used for the after-tax
//! estimate.

use serde::{Deserialize, Serialize};

use super::ids::UserId;
use super::money::Money;

/// A user's income settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeProfile {
    /// Owning user
    pub user_id: UserId,

    /// Gross yearly salary
    pub yearly_salary: Money,

    /// US state used for tax estimation; `None` means percentages fall back
    /// to gross income
    #[serde(default)]
    pub state: Option<String>,
}

impl IncomeProfile {
    /// Create a new income profile without a state
    pub fn new(user_id: UserId, yearly_salary: Money) -> Self {
        Self {
            user_id,
            yearly_salary,
            state: None,
        }
    }

    /// Set the state used for tax estimation
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Gross monthly salary (truncated to cents, display use only)
    pub fn monthly_salary(&self) -> Money {
        self.yearly_salary.divided_by(12)
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if !self.yearly_salary.is_positive() {
            return Err(ProfileValidationError::NonPositiveSalary(
                self.yearly_salary,
            ));
        }
        Ok(())
    }
}

/// Validation errors for income profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    NonPositiveSalary(Money),
}

impl std::fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveSalary(amount) => {
                write!(f, "Yearly salary must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ProfileValidationError {}
