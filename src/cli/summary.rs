//! CLI command for the financial summary and advisories

use std::path::Path;

use crate::advice;
use crate::display;
use crate::error::CostwiseResult;
use crate::reports::FinancialSummary;
use crate::store::Snapshot;

/// Handle the `summary` command
///
/// `top` limits the number of advisories; when more rules fire, the most
/// severe survive.
pub fn handle_summary(path: &Path, top: Option<usize>) -> CostwiseResult<()> {
    let snapshot = Snapshot::load(path)?;

    let Some(profile) = snapshot.profile else {
        println!("Income profile not set. Run `costwise income set <salary>` first.");
        return Ok(());
    };

    let summary = FinancialSummary::generate(&profile, &snapshot.expenses)?;
    print!("{}", display::render_summary(&summary));

    let advisories = advice::recommend(&summary.snapshot(), top);
    println!();
    print!("{}", display::render_advisories(&advisories));

    Ok(())
}
