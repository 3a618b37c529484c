//! Common types used across the application.

pub mod money;


pub use money::{MINOR_UNIT_SCALE, MINOR_UNITS_PER_UNIT, Money};
