//! Financial summary report
//!
//! Aggregates a user's expenses into yearly totals per category (needs and
//! favorites), expresses each as a percentage of income, and produces the
//! spending snapshot the advisory rules consume. The report is a derived
//! value recomputed on demand; nothing here is persisted.

use serde::Serialize;

use crate::advice::SpendingSnapshot;
use crate::analysis::tax;
use crate::error::{CostwiseError, CostwiseResult};
use crate::models::{Expense, IncomeProfile, Money};

/// Aggregated figures for one expense category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// Sum of yearly-equivalent costs
    pub yearly_total: Money,
    /// Yearly total spread over twelve months (truncated to cents)
    pub monthly_average: Money,
    /// Number of records in the category
    pub count: usize,
    /// Share of the income base, unrounded
    pub percentage: f64,
}

/// Which income figure the percentages were computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeBasis {
    /// After-tax estimate was available and used
    AfterTax,
    /// No usable state, percentages are against gross salary
    Gross,
}

impl std::fmt::Display for IncomeBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AfterTax => write!(f, "after-tax"),
            Self::Gross => write!(f, "gross"),
        }
    }
}

/// The user's income figures as used by the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeFigures {
    pub gross_yearly: Money,
    pub gross_monthly: Money,
    /// Present only when the profile's state resolved in the tax table
    pub after_tax_yearly: Option<Money>,
}

/// Full financial summary for one user
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub income: IncomeFigures,
    /// Denominator used for every percentage below
    pub basis: IncomeBasis,
    pub needs: CategoryBreakdown,
    pub favorites: CategoryBreakdown,
    pub combined: CategoryBreakdown,
}

impl FinancialSummary {
    /// Build the summary from a profile and the user's expense records
    ///
    /// Percentages use the after-tax estimate when the profile's state is in
    /// the tax table, otherwise gross salary; `basis` records which. A record
    /// tagged both need and favorite counts in both categories, matching the
    /// stored-data semantics (the flags are independent).
    pub fn generate(profile: &IncomeProfile, expenses: &[Expense]) -> CostwiseResult<Self> {
        if !profile.yearly_salary.is_positive() {
            return Err(CostwiseError::InvalidIncomeBase(profile.yearly_salary));
        }

        let after_tax = profile
            .state
            .as_deref()
            .and_then(|state| tax::estimate_after_tax(state, profile.yearly_salary));

        let (income_base, basis) = match after_tax {
            Some(net) => (net, IncomeBasis::AfterTax),
            None => (profile.yearly_salary, IncomeBasis::Gross),
        };
        if !income_base.is_positive() {
            return Err(CostwiseError::InvalidIncomeBase(income_base));
        }

        let needs = breakdown(
            expenses.iter().filter(|e| e.need),
            income_base,
        );
        let favorites = breakdown(
            expenses.iter().filter(|e| e.favorite),
            income_base,
        );

        let combined_total = needs.yearly_total + favorites.yearly_total;
        let combined = CategoryBreakdown {
            yearly_total: combined_total,
            monthly_average: combined_total.divided_by(12),
            count: needs.count + favorites.count,
            percentage: combined_total.percent_of(income_base),
        };

        Ok(Self {
            income: IncomeFigures {
                gross_yearly: profile.yearly_salary,
                gross_monthly: profile.monthly_salary(),
                after_tax_yearly: after_tax,
            },
            basis,
            needs,
            favorites,
            combined,
        })
    }

    /// The aggregate metrics consumed by `advice::recommend`
    pub fn snapshot(&self) -> SpendingSnapshot {
        SpendingSnapshot {
            needs_pct: self.needs.percentage,
            needs_count: self.needs.count,
            favorites_pct: self.favorites.percentage,
            favorites_count: self.favorites.count,
            combined_pct: self.combined.percentage,
        }
    }
}

fn breakdown<'a>(
    expenses: impl Iterator<Item = &'a Expense>,
    income_base: Money,
) -> CategoryBreakdown {
    let mut yearly_total = Money::zero();
    let mut count = 0;
    for expense in expenses {
        yearly_total += expense.yearly_cost();
        count += 1;
    }

    CategoryBreakdown {
        yearly_total,
        monthly_average: yearly_total.divided_by(12),
        count,
        percentage: yearly_total.percent_of(income_base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, UserId};

    fn uid() -> UserId {
        UserId::from("user-1")
    }

    fn expense(amount_cents: i64, frequency: Frequency, need: bool, favorite: bool) -> Expense {
        let mut e = Expense::new(uid(), "item", Money::from_cents(amount_cents), frequency);
        e.need = need;
        e.favorite = favorite;
        e
    }

    #[test]
    fn test_yearly_totals_per_category() {
        let profile = IncomeProfile::new(uid(), Money::from_cents(6_000_000)); // $60k gross
        let expenses = vec![
            expense(100_000, Frequency::Monthly, true, false), // $1,000/mo rent
            expense(5_000, Frequency::Weekly, true, false),    // $50/wk groceries
            expense(1_500, Frequency::Monthly, false, true),   // $15/mo streaming
            expense(80_000, Frequency::Once, false, true),     // $800 one-time
        ];

        let summary = FinancialSummary::generate(&profile, &expenses).unwrap();

        // needs: 100_000*12 + 5_000*52 = 1_460_000 cents/yr
        assert_eq!(summary.needs.yearly_total, Money::from_cents(1_460_000));
        assert_eq!(summary.needs.count, 2);

        // favorites: 1_500*12 + 80_000 (once counts once)
        assert_eq!(summary.favorites.yearly_total, Money::from_cents(98_000));
        assert_eq!(summary.favorites.count, 2);

        assert_eq!(summary.combined.yearly_total, Money::from_cents(1_558_000));
        assert_eq!(summary.combined.count, 4);
    }

    #[test]
    fn test_gross_basis_without_state() {
        let profile = IncomeProfile::new(uid(), Money::from_cents(6_000_000));
        let expenses = vec![expense(100_000, Frequency::Monthly, true, false)];

        let summary = FinancialSummary::generate(&profile, &expenses).unwrap();
        assert_eq!(summary.basis, IncomeBasis::Gross);
        assert!(summary.income.after_tax_yearly.is_none());
        // $12,000/yr of $60,000 gross
        assert_eq!(summary.needs.percentage, 20.0);
    }

    #[test]
    fn test_after_tax_basis_with_known_state() {
        let profile =
            IncomeProfile::new(uid(), Money::from_cents(10_000_000)).with_state("Texas");
        let expenses = vec![expense(100_000, Frequency::Monthly, true, false)];

        let summary = FinancialSummary::generate(&profile, &expenses).unwrap();
        assert_eq!(summary.basis, IncomeBasis::AfterTax);
        assert_eq!(
            summary.income.after_tax_yearly,
            Some(Money::from_cents(8_035_000))
        );
        // $12,000/yr of the $80,350 after-tax figure
        assert_eq!(
            summary.needs.percentage,
            (1_200_000f64 / 8_035_000f64) * 100.0
        );
    }

    #[test]
    fn test_unknown_state_falls_back_to_gross() {
        let profile =
            IncomeProfile::new(uid(), Money::from_cents(6_000_000)).with_state("Atlantis");
        let summary = FinancialSummary::generate(&profile, &[]).unwrap();
        assert_eq!(summary.basis, IncomeBasis::Gross);
        assert!(summary.income.after_tax_yearly.is_none());
    }

    #[test]
    fn test_double_tagged_record_counts_in_both() {
        let profile = IncomeProfile::new(uid(), Money::from_cents(6_000_000));
        let expenses = vec![expense(10_000, Frequency::Monthly, true, true)];

        let summary = FinancialSummary::generate(&profile, &expenses).unwrap();
        assert_eq!(summary.needs.count, 1);
        assert_eq!(summary.favorites.count, 1);
        // Combined is the sum of the two category totals, so the record is
        // counted twice there, as it is in the stored-data semantics
        assert_eq!(summary.combined.yearly_total, Money::from_cents(240_000));
    }

    #[test]
    fn test_zero_salary_rejected() {
        let profile = IncomeProfile::new(uid(), Money::zero());
        let err = FinancialSummary::generate(&profile, &[]).unwrap_err();
        assert!(err.is_invalid_income_base());
    }

    #[test]
    fn test_snapshot_feeds_advice() {
        let profile = IncomeProfile::new(uid(), Money::from_cents(6_000_000));
        let expenses = vec![
            expense(100_000, Frequency::Monthly, true, false),
            expense(1_500, Frequency::Monthly, false, true),
        ];
        let summary = FinancialSummary::generate(&profile, &expenses).unwrap();
        let snapshot = summary.snapshot();

        assert_eq!(snapshot.needs_count, 1);
        assert_eq!(snapshot.favorites_count, 1);
        assert_eq!(snapshot.combined_pct, summary.combined.percentage);

        let advisories = crate::advice::recommend(&snapshot, None);
        // Spending well under 50%: the healthy-saving rule fires
        assert!(advisories.iter().any(|a| a.code == "healthy-saving"));
    }

    #[test]
    fn test_empty_expense_list() {
        let profile = IncomeProfile::new(uid(), Money::from_cents(6_000_000));
        let summary = FinancialSummary::generate(&profile, &[]).unwrap();
        assert_eq!(summary.combined.yearly_total, Money::zero());
        assert_eq!(summary.combined.percentage, 0.0);
    }
}
