//! Change calculation error types.

use changemaker_shared::{AppError, Money};
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::DenominationKind;

/// Errors that can occur while calculating change.
///
/// None of these are transient; the same inputs always fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// The amount paid does not cover the bill.
    #[error("Insufficient payment, {shortfall} missing")]
    InsufficientPayment {
        /// Bill minus amount paid.
        shortfall: Money,
    },

    /// The greedy walk ran out of denominations before reaching zero.
    #[error("No {kind} denomination can make up the remaining {remaining} unit(s)")]
    DenominationExhausted {
        /// Which set was exhausted.
        kind: DenominationKind,
        /// Amount left over, in the set's own units.
        remaining: u64,
    },

    /// A denomination set has no values.
    #[error("The {0} denomination set is empty")]
    EmptyDenominationSet(DenominationKind),

    /// A denomination set contains a zero face value.
    #[error("The {0} denomination set contains a zero face value")]
    ZeroDenomination(DenominationKind),

    /// Bill or payment is below zero.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Amount is too large to express in integer minor units.
    #[error("Amount is out of range: {0}")]
    AmountOutOfRange(Decimal),
}

impl ChangeError {
    /// Returns the stable error code for logs and machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPayment { .. } => "INSUFFICIENT_PAYMENT",
            Self::DenominationExhausted { .. } => "DENOMINATION_EXHAUSTED",
            Self::EmptyDenominationSet(_) => "EMPTY_DENOMINATION_SET",
            Self::ZeroDenomination(_) => "ZERO_DENOMINATION",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
        }
    }
}

impl From<ChangeError> for AppError {
    fn from(err: ChangeError) -> Self {
        match err {
            ChangeError::InsufficientPayment { .. } | ChangeError::DenominationExhausted { .. } => {
                Self::BusinessRule(err.to_string())
            }
            ChangeError::EmptyDenominationSet(_)
            | ChangeError::ZeroDenomination(_)
            | ChangeError::NegativeAmount(_)
            | ChangeError::AmountOutOfRange(_) => Self::Validation(err.to_string()),
        }
    }
}
