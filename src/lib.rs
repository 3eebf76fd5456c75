//! costwise - what do your wants and needs really cost?
//!
//! This library provides the core functionality for the costwise expense
//! tracker: record recurring costs, tag them as wants ("favorites") or
//! essential needs, and see their yearly-equivalent cost as a share of your
//! income, gross or after a flat-rate state tax estimate.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, frequencies, expenses, income profiles)
//! - `analysis`: Pure calculation core (cost projection, tax estimation)
//! - `reports`: Derived views (the financial summary aggregation)
//! - `advice`: Qualitative spending advisories from a fixed rule table
//! - `store`: Collaborator traits plus the snapshot-backed implementation
//! - `config`: Path management
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use costwise::analysis::{estimate_after_tax, project};
//! use costwise::models::Money;
//!
//! let gross = Money::from_cents(10_000_000); // $100,000
//! let income = estimate_after_tax("Texas", gross).unwrap();
//! let analysis = project(Money::from_cents(1_500), income).unwrap();
//! assert_eq!(analysis.yearly.amount, Money::from_cents(18_000));
//! ```

pub mod advice;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{CostwiseError, CostwiseResult};
