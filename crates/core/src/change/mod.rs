//! Greedy change-making.
//!
//! This module implements the till's change calculation:
//! - Denomination sets and the split of an amount into whole and minor units
//! - Greedy decomposition over notes and coins
//! - Payment validation and breakdown assembly
//! - Text rendering of a breakdown
//! - Error types for change calculation

pub mod error;
pub mod greedy;
pub mod presentation;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::ChangeError;
pub use greedy::{decompose_fraction, decompose_whole, sort_descending};
pub use presentation::{BreakdownView, render_breakdown};
pub use service::ChangeService;
pub use types::{ChangeAmount, ChangeBreakdown, DenominationCounts, DenominationKind, DenominationSet};
