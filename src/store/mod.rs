//! Collaborator seams for expense and profile data
//!
//! The calculation core never talks to a database: it consumes whatever
//! implements these traits. `InMemoryStore` is the owned implementation used
//! by the CLI (backed by a JSON snapshot file) and by tests. Queries always
//! filter by owning user; the core performs no filtering of its own beyond
//! the category flag.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CostwiseError, CostwiseResult};
use crate::models::{Expense, ExpenseId, Frequency, IncomeProfile, Money, UserId};

/// Which category of expenses a query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseFilter {
    /// Every record owned by the user
    #[default]
    All,
    /// Records tagged as essential needs
    Needs,
    /// Records tagged as favorites (wants)
    Favorites,
}

impl ExpenseFilter {
    /// Whether an expense matches this filter
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Needs => expense.need,
            Self::Favorites => expense.favorite,
        }
    }
}

/// Read access to a user's expense records
pub trait ExpenseSource {
    /// Expenses owned by `user` that match `filter`, in insertion order
    fn expenses_for(&self, user: &UserId, filter: ExpenseFilter) -> CostwiseResult<Vec<Expense>>;
}

/// Read access to a user's income profile
pub trait ProfileSource {
    /// The profile for `user`, or `None` if income was never set
    fn profile_for(&self, user: &UserId) -> CostwiseResult<Option<IncomeProfile>>;
}

/// Serializable snapshot document: one profile plus the expense list
///
/// This is the CLI's on-disk format. It is deliberately not a storage
/// engine: load, mutate in memory, write back atomically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Option<IncomeProfile>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    /// Load a snapshot from disk; a missing file is an empty snapshot
    pub fn load(path: impl AsRef<Path>) -> CostwiseResult<Self> {
        read_json(path)
    }

    /// Write the snapshot back atomically
    pub fn save(&self, path: impl AsRef<Path>) -> CostwiseResult<()> {
        write_json_atomic(path, self)
    }
}

/// Owned, in-memory implementation of both collaborator traits
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profile: Option<IncomeProfile>,
    expenses: Vec<Expense>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot document
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            profile: snapshot.profile,
            expenses: snapshot.expenses,
        }
    }

    /// Turn the store back into a snapshot document
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            profile: self.profile,
            expenses: self.expenses,
        }
    }

    /// Set or replace the income profile
    pub fn set_profile(&mut self, profile: IncomeProfile) -> CostwiseResult<()> {
        profile
            .validate()
            .map_err(|e| CostwiseError::Validation(e.to_string()))?;
        self.profile = Some(profile);
        Ok(())
    }

    /// Insert a new expense record
    pub fn add_expense(&mut self, expense: Expense) -> CostwiseResult<ExpenseId> {
        expense
            .validate()
            .map_err(|e| CostwiseError::Validation(e.to_string()))?;
        let id = expense.id;
        self.expenses.push(expense);
        Ok(id)
    }

    /// Remove an expense record, returning it
    pub fn remove_expense(&mut self, id: &ExpenseId) -> CostwiseResult<Expense> {
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == *id)
            .ok_or_else(|| CostwiseError::expense_not_found(id.to_string()))?;
        Ok(self.expenses.remove(pos))
    }

    /// Update an expense's amount
    pub fn set_amount(&mut self, id: &ExpenseId, amount: Money) -> CostwiseResult<()> {
        if amount.is_negative() {
            return Err(CostwiseError::Validation(format!(
                "Expense amount cannot be negative (got {})",
                amount
            )));
        }
        self.expense_mut(id)?.amount = amount;
        Ok(())
    }

    /// Update an expense's recurrence frequency
    pub fn set_frequency(&mut self, id: &ExpenseId, frequency: Frequency) -> CostwiseResult<()> {
        self.expense_mut(id)?.frequency = frequency;
        Ok(())
    }

    /// Flip the want flag on an expense
    pub fn toggle_favorite(&mut self, id: &ExpenseId) -> CostwiseResult<bool> {
        let expense = self.expense_mut(id)?;
        expense.toggle_favorite();
        Ok(expense.favorite)
    }

    /// Flip the need flag on an expense
    pub fn toggle_need(&mut self, id: &ExpenseId) -> CostwiseResult<bool> {
        let expense = self.expense_mut(id)?;
        expense.toggle_need();
        Ok(expense.need)
    }

    /// Resolve user input to an expense id
    ///
    /// Accepts the full UUID or the short `exp-` form that listings display
    /// (any unique UUID prefix works). An ambiguous prefix is a validation
    /// error, a prefix matching nothing is not-found.
    pub fn resolve_expense_id(&self, input: &str) -> CostwiseResult<ExpenseId> {
        if let Ok(id) = input.parse::<ExpenseId>() {
            return Ok(id);
        }

        let prefix = input.strip_prefix("exp-").unwrap_or(input);
        if prefix.is_empty() {
            return Err(CostwiseError::expense_not_found(input.to_string()));
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.as_uuid().to_string().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense.id),
            (Some(_), Some(_)) => Err(CostwiseError::Validation(format!(
                "Ambiguous expense id: {}",
                input
            ))),
            (None, _) => Err(CostwiseError::expense_not_found(input.to_string())),
        }
    }

    fn expense_mut(&mut self, id: &ExpenseId) -> CostwiseResult<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|e| e.id == *id)
            .ok_or_else(|| CostwiseError::expense_not_found(id.to_string()))
    }
}

impl ExpenseSource for InMemoryStore {
    fn expenses_for(&self, user: &UserId, filter: ExpenseFilter) -> CostwiseResult<Vec<Expense>> {
        Ok(self
            .expenses
            .iter()
            .filter(|e| e.user_id == *user && filter.matches(e))
            .cloned()
            .collect())
    }
}

impl ProfileSource for InMemoryStore {
    fn profile_for(&self, user: &UserId) -> CostwiseResult<Option<IncomeProfile>> {
        Ok(self
            .profile
            .as_ref()
            .filter(|p| p.user_id == *user)
            .cloned())
    }
}
