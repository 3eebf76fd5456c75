//! Terminal formatting for projections, summaries, and advisories
//!
//! The calculation core never formats anything; all rounding and string
//! shaping for the terminal lives here.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::advice::{Advisory, Severity};
use crate::analysis::CostAnalysis;
use crate::models::Expense;
use crate::reports::FinancialSummary;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// ANSI color wrapper for an advisory severity
pub fn format_severity_colored(severity: Severity) -> String {
    let code = match severity {
        Severity::Danger => "\x1b[31m",  // red
        Severity::Warning => "\x1b[33m", // yellow
        Severity::Info => "\x1b[34m",    // blue
        Severity::Success => "\x1b[32m", // green
    };
    format!("{}{}\x1b[0m", code, severity)
}

#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Cadence")]
    cadence: &'static str,
    #[tabled(rename = "Yearly cost")]
    amount: String,
    #[tabled(rename = "Share of income")]
    share: String,
    #[tabled(rename = "Chart")]
    bar: String,
}

/// Render a cost projection as a table
pub fn projection_table(analysis: &CostAnalysis) -> String {
    let max_pct = analysis
        .buckets()
        .iter()
        .map(|(_, b)| b.percentage)
        .fold(0.0f64, f64::max);

    let rows: Vec<ProjectionRow> = analysis
        .buckets()
        .into_iter()
        .map(|(cadence, bucket)| ProjectionRow {
            cadence,
            amount: bucket.amount.to_string(),
            share: format_percentage(bucket.percentage),
            bar: format_bar(bucket.percentage, max_pct, 20),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Yearly")]
    yearly: String,
}

/// Render an expense list as a table
pub fn expense_table(expenses: &[Expense]) -> String {
    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            description: e.description.clone(),
            amount: e.amount.to_string(),
            frequency: e.frequency.to_string(),
            tags: expense_tags(e),
            yearly: e.yearly_cost().to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

fn expense_tags(expense: &Expense) -> String {
    match (expense.need, expense.favorite) {
        (true, true) => "need, want".to_string(),
        (true, false) => "need".to_string(),
        (false, true) => "want".to_string(),
        (false, false) => "-".to_string(),
    }
}

/// Render the financial summary as plain text
pub fn render_summary(summary: &FinancialSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Gross yearly income:  {}\n",
        summary.income.gross_yearly
    ));
    out.push_str(&format!(
        "Gross monthly income: {}\n",
        summary.income.gross_monthly
    ));
    if let Some(after_tax) = summary.income.after_tax_yearly {
        out.push_str(&format!("After-tax estimate:   {} per year\n", after_tax));
    }
    out.push_str(&format!(
        "Percentages below are of {} income.\n",
        summary.basis
    ));
    out.push_str(&separator(52));
    out.push('\n');

    for (label, breakdown) in [
        ("Needs", summary.needs),
        ("Wants", summary.favorites),
        ("Combined", summary.combined),
    ] {
        out.push_str(&format!(
            "{:<9} {:>12}/yr  {:>10}/mo  {:>7}  {}\n",
            label,
            breakdown.yearly_total.to_string(),
            breakdown.monthly_average.to_string(),
            format_percentage(breakdown.percentage),
            format_bar(breakdown.percentage, 100.0, 20),
        ));
    }

    out
}

/// Render advisories as plain text
pub fn render_advisories(advisories: &[Advisory]) -> String {
    if advisories.is_empty() {
        return "No advisories.\n".to_string();
    }

    let mut out = String::new();
    for advisory in advisories {
        out.push_str(&format!(
            "[{}] {}\n",
            format_severity_colored(advisory.severity),
            advisory.title
        ));
        out.push_str(&format!("  {}\n", advisory.description));
        if let Some(action) = advisory.action {
            out.push_str(&format!("  Suggestion: {}\n", action));
        }
    }
    out
}
