//! CLI command for projecting a single cost
//!
//! Answers "what does this amount really cost me per year, at every cadence,
//! against my income".

use crate::analysis::{project, tax};
use crate::display;
use crate::error::{CostwiseError, CostwiseResult};
use crate::models::Money;

/// Handle the `project` command
pub fn handle_project(amount: &str, income: &str, state: Option<&str>) -> CostwiseResult<()> {
    let amount = Money::parse(amount).map_err(|e| CostwiseError::Validation(e.to_string()))?;
    let gross = Money::parse(income).map_err(|e| CostwiseError::Validation(e.to_string()))?;

    let (income_base, basis_label) = match state {
        Some(state) => match tax::estimate_after_tax(state, gross) {
            Some(after_tax) => (after_tax, format!("after-tax income in {}", state)),
            None => {
                println!(
                    "No tax data for \"{}\"; using gross income instead.",
                    state
                );
                (gross, "gross income".to_string())
            }
        },
        None => (gross, "gross income".to_string()),
    };

    let analysis = project(amount, income_base)?;

    println!("Projection of {} against {} ({})", amount, income_base, basis_label);
    println!("{}", display::projection_table(&analysis));

    Ok(())
}
