//! Cost projection across recurrence cadences
//!
//! Given a single amount and a yearly income figure, projects what the cost
//! adds up to at each cadence and what share of income it consumes. The
//! projection is an ephemeral derived value: it is recomputed on demand and
//! never stored.

use serde::Serialize;

use crate::error::{CostwiseError, CostwiseResult};
use crate::models::Money;

/// One projected cadence: the yearly-equivalent cost and its share of income
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketProjection {
    /// Yearly-equivalent amount for this cadence
    pub amount: Money,
    /// Percentage of the income base, unrounded
    pub percentage: f64,
}

/// Projection of a single amount across all supported cadences
///
/// The one-time bucket reports the raw amount and is never annualized: a
/// one-time cost is not a recurring yearly burden. The yearly bucket equals
/// the monthly bucket (both are amount x 12) because the projection answers
/// "what if this amount recurred monthly / what is that per year".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostAnalysis {
    pub one_time: BucketProjection,
    pub daily: BucketProjection,
    pub weekly: BucketProjection,
    pub monthly: BucketProjection,
    pub every_four_months: BucketProjection,
    pub yearly: BucketProjection,
}

impl CostAnalysis {
    /// Iterate the buckets in presentation order with their labels
    pub fn buckets(&self) -> [(&'static str, BucketProjection); 6] {
        [
            ("one-time", self.one_time),
            ("daily", self.daily),
            ("weekly", self.weekly),
            ("monthly", self.monthly),
            ("every 4 months", self.every_four_months),
            ("yearly", self.yearly),
        ]
    }
}

/// Project `amount` across every cadence as a share of `income_base`
///
/// `income_base` is a yearly figure: either gross salary or an after-tax
/// estimate, chosen by the caller. It must be strictly positive; a zero or
/// negative base yields `CostwiseError::InvalidIncomeBase` rather than a
/// nonsense percentage. Rounding is left to the presentation layer.
///
/// Pure function: no shared state, safe to call from any number of callers.
pub fn project(amount: Money, income_base: Money) -> CostwiseResult<CostAnalysis> {
    if amount.is_negative() {
        return Err(CostwiseError::Validation(format!(
            "cannot project a negative amount: {}",
            amount
        )));
    }
    if !income_base.is_positive() {
        return Err(CostwiseError::InvalidIncomeBase(income_base));
    }

    let bucket = |yearly: Money| BucketProjection {
        amount: yearly,
        percentage: yearly.percent_of(income_base),
    };

    Ok(CostAnalysis {
        one_time: bucket(amount),
        daily: bucket(amount.times(365)),
        weekly: bucket(amount.times(52)),
        monthly: bucket(amount.times(12)),
        every_four_months: bucket(amount.times(3)),
        yearly: bucket(amount.times(12)),
    })
}
