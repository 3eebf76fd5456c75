//! CLI commands for expense records

use std::path::Path;

use clap::{Subcommand, ValueEnum};

use crate::display;
use crate::error::{CostwiseError, CostwiseResult};
use crate::models::{Expense, Frequency, Money};
use crate::store::{ExpenseFilter, ExpenseSource, InMemoryStore, Snapshot};

use super::snapshot_owner;

/// Which category tag a toggle targets
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TagFlag {
    /// The essential-need tag
    Need,
    /// The want tag
    Favorite,
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Human-readable description
        description: String,

        /// Cost per occurrence, e.g. "15.99"
        amount: String,

        /// How often the cost recurs
        #[arg(short, long, value_enum, default_value_t = Frequency::Monthly)]
        frequency: Frequency,

        /// Tag as an essential need
        #[arg(long)]
        need: bool,

        /// Tag as a want
        #[arg(long)]
        favorite: bool,
    },

    /// List expenses
    List {
        /// Show only essential needs
        #[arg(long, conflicts_with = "favorites")]
        needs: bool,

        /// Show only wants
        #[arg(long)]
        favorites: bool,
    },

    /// Remove an expense by id
    Remove {
        /// Expense id (full UUID or the short "exp-" form from `list`)
        id: String,
    },

    /// Flip a category tag on an expense; the other tag is never touched
    Toggle {
        /// Expense id
        id: String,

        /// Which tag to flip
        #[arg(value_enum)]
        flag: TagFlag,
    },
}

/// Handle expense commands against the snapshot file
pub fn handle_expense_command(path: &Path, cmd: ExpenseCommands) -> CostwiseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            frequency,
            need,
            favorite,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| CostwiseError::Validation(e.to_string()))?;

            let snapshot = Snapshot::load(path)?;
            let owner = snapshot_owner(&snapshot);
            let mut store = InMemoryStore::from_snapshot(snapshot);

            let mut expense = Expense::new(owner, description, amount, frequency);
            expense.need = need;
            expense.favorite = favorite;

            let id = store.add_expense(expense)?;
            store.into_snapshot().save(path)?;
            println!("Added expense {}.", id);
            Ok(())
        }
        ExpenseCommands::List { needs, favorites } => {
            let snapshot = Snapshot::load(path)?;
            let owner = snapshot_owner(&snapshot);
            let store = InMemoryStore::from_snapshot(snapshot);

            let filter = if needs {
                ExpenseFilter::Needs
            } else if favorites {
                ExpenseFilter::Favorites
            } else {
                ExpenseFilter::All
            };

            let expenses = store.expenses_for(&owner, filter)?;
            if expenses.is_empty() {
                println!("No expenses recorded.");
            } else {
                println!("{}", display::expense_table(&expenses));
            }
            Ok(())
        }
        ExpenseCommands::Remove { id } => {
            let mut store = InMemoryStore::from_snapshot(Snapshot::load(path)?);
            let id = store.resolve_expense_id(&id)?;
            let removed = store.remove_expense(&id)?;
            store.into_snapshot().save(path)?;
            println!("Removed \"{}\".", removed.description);
            Ok(())
        }
        ExpenseCommands::Toggle { id, flag } => {
            let mut store = InMemoryStore::from_snapshot(Snapshot::load(path)?);
            let id = store.resolve_expense_id(&id)?;
            let now_set = match flag {
                TagFlag::Need => store.toggle_need(&id)?,
                TagFlag::Favorite => store.toggle_favorite(&id)?,
            };
            store.into_snapshot().save(path)?;
            let tag = match flag {
                TagFlag::Need => "need",
                TagFlag::Favorite => "favorite",
            };
            println!("{} is now {}.", tag, if now_set { "set" } else { "unset" });
            Ok(())
        }
    }
}
