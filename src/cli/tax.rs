//! CLI commands for tax estimation and the state rate table

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analysis::tax;
use crate::error::{CostwiseError, CostwiseResult};
use crate::models::Money;

/// Handle the `tax` command: estimate after-tax income for a state
pub fn handle_tax(state: &str, gross: &str) -> CostwiseResult<()> {
    let gross = Money::parse(gross).map_err(|e| CostwiseError::Validation(e.to_string()))?;

    match tax::estimate_after_tax(state, gross) {
        Some(after_tax) => {
            let state_rate = tax::state_rate(state).unwrap_or(0.0);
            println!("Estimated after-tax income in {}: {}", state, after_tax);
            println!(
                "  (state {:.2}% + federal {:.2}% + FICA {:.2}% on {} gross)",
                state_rate,
                tax::FEDERAL_RATE,
                tax::FICA_RATE,
                gross
            );
            println!("This is a flat-rate estimate, not a bracketed tax computation.");
        }
        None => {
            println!(
                "No tax data for \"{}\". Percentages will fall back to gross income.",
                state
            );
            println!("Run `costwise states` to list supported states.");
        }
    }

    Ok(())
}

#[derive(Tabled)]
struct StateRow {
    #[tabled(rename = "State")]
    state: &'static str,
    #[tabled(rename = "Flat rate")]
    rate: String,
}

/// Handle the `states` command: list every state in the rate table
pub fn handle_states() -> CostwiseResult<()> {
    let rows: Vec<StateRow> = tax::state_rates()
        .iter()
        .map(|(state, rate)| StateRow {
            state,
            rate: format!("{:.2}%", rate),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));
    println!(
        "Federal rate {:.2}%, FICA {:.2}% apply on top of every state rate.",
        tax::FEDERAL_RATE,
        tax::FICA_RATE
    );

    Ok(())
}
