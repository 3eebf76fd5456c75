//! Reports module for costwise
//!
//! Derived views over expense data: the financial summary that aggregates
//! per-category yearly totals and feeds the advisory rules.

pub mod summary;

pub use summary::{CategoryBreakdown, FinancialSummary, IncomeBasis, IncomeFigures};
