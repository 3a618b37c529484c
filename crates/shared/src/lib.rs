//! Shared types, errors, and configuration for Changemaker.
//!
//! This crate provides common types used across all other crates:
//! - Money type with fixed two-decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, DenominationConfig, DisplayConfig, OutputFormat};
pub use error::{AppError, AppResult};
pub use types::Money;
