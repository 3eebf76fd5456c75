//! Spending advisories
//!
//! A fixed rule table over aggregated spending metrics. Each rule fires
//! independently (except where an if/else chain makes alternatives mutually
//! exclusive) and contributes one advisory; the result is an ordered list the
//! presentation layer renders as-is. No rule firing is a normal outcome, not
//! an error.

use serde::Serialize;
use std::fmt;

/// Severity tier of an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Info,
    Success,
}

impl Severity {
    /// Sort key when a result limit forces truncation: danger first
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Danger => 0,
            Self::Warning => 1,
            Self::Info => 2,
            Self::Success => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Danger => write!(f, "danger"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// One qualitative advisory produced by the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    /// Stable rule identifier
    pub code: &'static str,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    /// Optional suggested action
    pub action: Option<&'static str>,
}

/// Aggregated spending metrics the rule table evaluates
///
/// Percentages are shares of the income base (after-tax when available);
/// counts are numbers of tagged expense records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpendingSnapshot {
    pub needs_pct: f64,
    pub needs_count: usize,
    pub favorites_pct: f64,
    pub favorites_count: usize,
    pub combined_pct: f64,
}

/// Evaluate the rule table against a spending snapshot
///
/// When `max` is given and more rules fired, advisories are stable-sorted by
/// severity priority and truncated; ties keep rule-table order. Without a
/// limit the rule-table order is preserved untouched.
pub fn recommend(snapshot: &SpendingSnapshot, max: Option<usize>) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    // Overall spending level: the three branches are mutually exclusive
    if snapshot.combined_pct > 90.0 {
        advisories.push(Advisory {
            code: "critical-spending",
            severity: Severity::Danger,
            title: "Critical spending level",
            description: "Your expenses are extremely high relative to your income, \
                          leaving little room for savings or emergencies.",
            action: Some("Look for immediate ways to reduce expenses or increase income."),
        });
    } else if snapshot.combined_pct > 80.0 {
        advisories.push(Advisory {
            code: "high-spending",
            severity: Severity::Danger,
            title: "High spending level",
            description: "Your expenses are very high relative to your income.",
            action: Some("Consider reducing non-essential spending and creating a budget."),
        });
    } else if snapshot.combined_pct < 50.0 {
        advisories.push(Advisory {
            code: "healthy-saving",
            severity: Severity::Success,
            title: "Healthy saving habits",
            description: "Your spending is below 50% of your income, which is great \
                          for saving and investing!",
            action: Some(
                "Consider putting the extra money into emergency funds, retirement \
                 accounts, or investments.",
            ),
        });
    }

    // Essential spending
    if snapshot.needs_pct > 50.0 {
        advisories.push(Advisory {
            code: "high-essentials",
            severity: Severity::Warning,
            title: "High essential costs",
            description: "Essential needs exceed 50% of your income.",
            action: Some(
                "Look for ways to reduce essential costs where possible, such as \
                 refinancing, finding better deals, or downsizing.",
            ),
        });
    } else if snapshot.needs_pct < 20.0 && snapshot.needs_count > 0 {
        advisories.push(Advisory {
            code: "low-essentials",
            severity: Severity::Success,
            title: "Low essential costs",
            description: "Your essential costs are well-managed at less than 20% of \
                          your income.",
            action: Some(
                "Great job keeping essentials low! This gives you flexibility for \
                 other financial goals.",
            ),
        });
    }

    // Discretionary spending
    if snapshot.favorites_pct > 30.0 {
        advisories.push(Advisory {
            code: "high-discretionary",
            severity: Severity::Warning,
            title: "High discretionary spending",
            description: "Your favorite expenses take up a significant portion of \
                          your income.",
            action: Some(
                "Consider prioritizing which favorite expenses are most important to you.",
            ),
        });
    }

    // Missing data
    if snapshot.needs_count == 0 {
        advisories.push(Advisory {
            code: "track-essentials",
            severity: Severity::Info,
            title: "Track essential expenses",
            description: "You haven't marked any expenses as essential needs.",
            action: Some(
                "Mark your regular essential expenses like rent, utilities, and \
                 groceries as needs for better tracking.",
            ),
        });
    }

    // 50/30/20 rule
    if snapshot.needs_count > 0 && snapshot.favorites_count > 0 {
        advisories.push(Advisory {
            code: "budget-rule",
            severity: Severity::Info,
            title: "Consider the 50/30/20 budget rule",
            description: "Financial experts often recommend spending 50% on needs, \
                          30% on wants, and saving 20% of your income.",
            action: Some(
                "Compare your spending patterns to this guideline to see if \
                 adjustments would help.",
            ),
        });
    }

    if let Some(max) = max {
        if advisories.len() > max {
            // Vec::sort_by_key is stable, so ties keep rule-table order
            advisories.sort_by_key(|a| a.severity.priority());
            advisories.truncate(max);
        }
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(advisories: &[Advisory]) -> Vec<&'static str> {
        advisories.iter().map(|a| a.code).collect()
    }

    #[test]
    fn test_low_spender_no_needs() {
        let snapshot = SpendingSnapshot {
            combined_pct: 30.0,
            ..Default::default()
        };
        let advisories = recommend(&snapshot, None);
        let codes = codes(&advisories);

        assert!(codes.contains(&"healthy-saving"));
        assert!(codes.contains(&"track-essentials"));
        // needs_count is 0, so no 50/30/20 advisory
        assert!(!codes.contains(&"budget-rule"));
    }

    #[test]
    fn test_spending_tiers_are_exclusive() {
        let at_85 = recommend(
            &SpendingSnapshot {
                combined_pct: 85.0,
                needs_count: 1,
                ..Default::default()
            },
            None,
        );
        assert!(codes(&at_85).contains(&"high-spending"));
        assert!(!codes(&at_85).contains(&"critical-spending"));

        let at_95 = recommend(
            &SpendingSnapshot {
                combined_pct: 95.0,
                needs_count: 1,
                ..Default::default()
            },
            None,
        );
        assert!(codes(&at_95).contains(&"critical-spending"));
        assert!(!codes(&at_95).contains(&"high-spending"));
    }

    #[test]
    fn test_boundary_values_do_not_fire() {
        // The comparisons are strict: exactly 90, 80, 50 fire nothing here
        let snapshot = SpendingSnapshot {
            combined_pct: 50.0,
            needs_pct: 50.0,
            needs_count: 1,
            favorites_pct: 30.0,
            favorites_count: 0,
        };
        let advisories = recommend(&snapshot, None);
        assert!(codes(&advisories).is_empty());
    }

    #[test]
    fn test_max_limit_sorts_by_severity() {
        // Fires: high-essentials (warning), budget-rule (info). No danger tier.
        let snapshot = SpendingSnapshot {
            needs_pct: 55.0,
            needs_count: 3,
            favorites_pct: 10.0,
            favorites_count: 2,
            combined_pct: 65.0,
        };
        let advisories = recommend(&snapshot, Some(1));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].code, "high-essentials");
        assert_eq!(advisories[0].severity, Severity::Warning);
    }

    #[test]
    fn test_max_limit_is_stable_within_tier() {
        // Fired in table order: healthy-saving (success), low-essentials
        // (success), budget-rule (info). Under a limit, info outranks
        // success; the surviving success entry is the earlier table row.
        let snapshot = SpendingSnapshot {
            combined_pct: 30.0,
            needs_pct: 10.0,
            needs_count: 2,
            favorites_pct: 5.0,
            favorites_count: 1,
        };
        let advisories = recommend(&snapshot, Some(2));
        assert_eq!(codes(&advisories), vec!["budget-rule", "healthy-saving"]);
    }

    #[test]
    fn test_limit_not_exceeded_keeps_table_order() {
        let snapshot = SpendingSnapshot {
            combined_pct: 30.0,
            needs_pct: 10.0,
            needs_count: 2,
            favorites_pct: 5.0,
            favorites_count: 1,
        };
        // Three fired, limit of three: no re-sorting happens
        let advisories = recommend(&snapshot, Some(3));
        assert_eq!(
            codes(&advisories),
            vec!["healthy-saving", "low-essentials", "budget-rule"]
        );
    }

    #[test]
    fn test_no_limit_keeps_table_order() {
        let snapshot = SpendingSnapshot {
            combined_pct: 30.0,
            needs_pct: 10.0,
            needs_count: 2,
            favorites_pct: 5.0,
            favorites_count: 1,
        };
        assert_eq!(
            codes(&recommend(&snapshot, None)),
            vec!["healthy-saving", "low-essentials", "budget-rule"]
        );
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let snapshot = SpendingSnapshot {
            combined_pct: 60.0,
            needs_pct: 30.0,
            needs_count: 1,
            favorites_pct: 10.0,
            favorites_count: 0,
        };
        assert!(recommend(&snapshot, None).is_empty());
    }

    #[test]
    fn test_severity_priority_order() {
        assert!(Severity::Danger.priority() < Severity::Warning.priority());
        assert!(Severity::Warning.priority() < Severity::Info.priority());
        assert!(Severity::Info.priority() < Severity::Success.priority());
    }
}
