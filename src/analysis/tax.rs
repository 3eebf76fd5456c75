//! Flat-rate income tax estimation
//!
//! Applies a per-state flat rate plus fixed federal and FICA rates to a gross
//! yearly salary. This is deliberately a rough estimate: real taxes are
//! progressive and bracketed, and the output should always be presented to
//! the user as an estimate.
//!
//! A state missing from the table yields `None` ("unavailable"), which is a
//! different thing from the legitimate 0% rate of the no-income-tax states:
//! callers fall back to gross income and label percentages accordingly.

use crate::models::Money;

/// Effective average federal income tax rate, applied uniformly
pub const FEDERAL_RATE: f64 = 12.00;

/// FICA rate (Social Security + Medicare), applied uniformly
pub const FICA_RATE: f64 = 7.65;

/// Flat state income tax rates, percent of gross
///
/// 0.00 entries are real no-income-tax states, not missing data.
const STATE_RATES: &[(&str, f64)] = &[
    ("Alabama", 5.00),
    ("Alaska", 0.00),
    ("Arizona", 2.50),
    ("Arkansas", 4.40),
    ("California", 13.30),
    ("Colorado", 4.40),
    ("Connecticut", 6.99),
    ("Delaware", 6.60),
    ("Florida", 0.00),
    ("Georgia", 5.39),
    ("Hawaii", 11.00),
    ("Idaho", 5.80),
    ("Illinois", 4.95),
    ("Indiana", 3.05),
    ("Iowa", 6.00),
    ("Kansas", 5.70),
    ("Kentucky", 5.00),
    ("Louisiana", 4.25),
    ("Maine", 7.15),
    ("Maryland", 5.75),
    ("Massachusetts", 5.00),
    ("Michigan", 4.25),
    ("Minnesota", 9.85),
    ("Mississippi", 5.00),
    ("Missouri", 5.40),
    ("Montana", 6.75),
    ("Nebraska", 6.84),
    ("Nevada", 0.00),
    ("New Hampshire", 0.00),
    ("New Jersey", 10.75),
    ("New Mexico", 5.90),
    ("New York", 10.90),
    ("North Carolina", 4.50),
    ("North Dakota", 2.90),
    ("Ohio", 3.99),
    ("Oklahoma", 5.00),
    ("Oregon", 9.90),
    ("Pennsylvania", 3.07),
    ("Rhode Island", 5.99),
    ("South Carolina", 7.00),
    ("South Dakota", 0.00),
    ("Tennessee", 0.00),
    ("Texas", 0.00),
    ("Utah", 4.55),
    ("Vermont", 8.75),
    ("Virginia", 5.75),
    ("Washington", 0.00),
    ("West Virginia", 6.50),
    ("Wisconsin", 7.65),
    ("Wyoming", 0.00),
];

/// Look up the flat state rate, or `None` if the state is not in the table
pub fn state_rate(state: &str) -> Option<f64> {
    STATE_RATES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, rate)| *rate)
}

/// All state names in the table, in table order
///
/// Pure accessor for presentation-layer selection controls.
pub fn state_names() -> Vec<&'static str> {
    STATE_RATES.iter().map(|(name, _)| *name).collect()
}

/// All (state, rate) pairs in the table
pub fn state_rates() -> &'static [(&'static str, f64)] {
    STATE_RATES
}

/// Estimate the yearly after-tax income for a state and gross yearly salary
///
/// `gross x (1 - state/100 - federal/100 - fica/100)`, rounded to cents.
/// Returns `None` when the state has no table entry. The formula is linear,
/// so a zero or negative gross simply yields a zero or negative estimate.
pub fn estimate_after_tax(state: &str, gross: Money) -> Option<Money> {
    let rate = state_rate(state)?;
    let kept = 1.0 - (rate + FEDERAL_RATE + FICA_RATE) / 100.0;
    Some(Money::from_cents((gross.cents() as f64 * kept).round() as i64))
}
