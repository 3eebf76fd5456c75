//! CLI commands for the income profile

use std::path::Path;

use clap::Subcommand;

use crate::analysis::tax;
use crate::error::{CostwiseError, CostwiseResult};
use crate::models::{IncomeProfile, Money};
use crate::store::Snapshot;

use super::snapshot_owner;

/// Income profile subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Set the yearly salary and optionally the state for tax estimation
    Set {
        /// Gross yearly salary, e.g. "60000" or "60000.00"
        salary: String,

        /// US state used for the after-tax estimate
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Show the current income profile
    Show,
}

/// Handle income commands against the snapshot file
pub fn handle_income_command(path: &Path, cmd: IncomeCommands) -> CostwiseResult<()> {
    match cmd {
        IncomeCommands::Set { salary, state } => {
            let salary =
                Money::parse(&salary).map_err(|e| CostwiseError::Validation(e.to_string()))?;

            let mut snapshot = Snapshot::load(path)?;
            let mut profile = IncomeProfile::new(snapshot_owner(&snapshot), salary);
            if let Some(state) = state {
                if tax::state_rate(&state).is_none() {
                    println!(
                        "Note: no tax data for \"{}\"; percentages will use gross income.",
                        state
                    );
                }
                profile = profile.with_state(state);
            }
            profile
                .validate()
                .map_err(|e| CostwiseError::Validation(e.to_string()))?;

            snapshot.profile = Some(profile);
            snapshot.save(path)?;
            println!("Income profile saved.");
            Ok(())
        }
        IncomeCommands::Show => {
            let snapshot = Snapshot::load(path)?;
            match snapshot.profile {
                Some(profile) => {
                    println!("Gross yearly salary: {}", profile.yearly_salary);
                    match profile.state.as_deref() {
                        Some(state) => match tax::estimate_after_tax(state, profile.yearly_salary)
                        {
                            Some(after_tax) => println!(
                                "State: {} (estimated after-tax: {})",
                                state, after_tax
                            ),
                            None => println!("State: {} (no tax data)", state),
                        },
                        None => println!("State: not set"),
                    }
                }
                None => println!("Income profile not set. Run `costwise income set <salary>`."),
            }
            Ok(())
        }
    }
}
