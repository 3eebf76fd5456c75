//! Calculation core: cost projection and tax estimation
//!
//! Everything in this module is a pure function over its arguments: no I/O,
//! no shared mutable state, no coordination needed across callers.

pub mod cost;
pub mod tax;

pub use cost::{project, BucketProjection, CostAnalysis};
pub use tax::{estimate_after_tax, state_names, state_rate, state_rates, FEDERAL_RATE, FICA_RATE};
