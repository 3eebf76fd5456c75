//! CLI command handlers
//!
//! Bridges clap argument parsing with the calculation core and the snapshot
//! store.

pub mod expense;
pub mod income;
pub mod project;
pub mod summary;
pub mod tax;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use project::handle_project;
pub use summary::handle_summary;
pub use tax::{handle_states, handle_tax};

use crate::models::UserId;
use crate::store::Snapshot;

/// The snapshot file is single-user: the owner is whoever the profile names,
/// or a fixed local uid before a profile exists
pub(crate) fn snapshot_owner(snapshot: &Snapshot) -> UserId {
    snapshot
        .profile
        .as_ref()
        .map(|p| p.user_id.clone())
        .unwrap_or_else(|| UserId::from("local"))
}
