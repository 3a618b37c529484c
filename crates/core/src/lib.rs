//! Core business logic for Changemaker.
//!
//! This crate contains pure computation with ZERO I/O dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `change` - Greedy decomposition of change into notes and coins

pub mod change;

pub use change::{ChangeBreakdown, ChangeError, ChangeService, DenominationSet};
