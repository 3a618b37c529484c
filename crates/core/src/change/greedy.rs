//! Greedy denomination decomposition.
//!
//! Each decomposer walks the denominations from largest to smallest, taking
//! as many pieces of each as fit into what is left. The walk is bounded by
//! the set length: if the remainder is still positive after the smallest
//! denomination, the call fails instead of reading past the end.
//!
//! Greedy selection is not optimal for every set. With notes `[4, 3, 1]`,
//! an amount of 6 becomes `4 + 1 + 1` rather than `3 + 3`.

use super::error::ChangeError;
use super::types::{ChangeAmount, DenominationCounts, DenominationSet};

/// Returns the values in non-increasing order.
///
/// Works on a private copy; the caller's slice is left untouched.
#[must_use]
pub fn sort_descending(values: &[u32]) -> Vec<u32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.reverse();
    sorted
}

/// Decomposes the whole-unit part of `amount` into notes.
///
/// # Errors
///
/// Returns `DenominationExhausted` if the set cannot reach exactly zero.
pub fn decompose_whole(
    denominations: &DenominationSet,
    amount: ChangeAmount,
) -> Result<DenominationCounts, ChangeError> {
    greedy_walk(denominations, amount.whole())
}

/// Decomposes the minor-unit part of `amount` into coins.
///
/// # Errors
///
/// Returns `DenominationExhausted` if the set cannot reach exactly zero.
pub fn decompose_fraction(
    denominations: &DenominationSet,
    amount: ChangeAmount,
) -> Result<DenominationCounts, ChangeError> {
    greedy_walk(denominations, u64::from(amount.minor()))
}

fn greedy_walk(
    denominations: &DenominationSet,
    amount: u64,
) -> Result<DenominationCounts, ChangeError> {
    let mut counts = DenominationCounts::new();
    let mut remaining = amount;
    let mut sorted = sort_descending(denominations.values()).into_iter();

    while remaining != 0 {
        let Some(face) = sorted.next() else {
            return Err(ChangeError::DenominationExhausted {
                kind: denominations.kind(),
                remaining,
            });
        };

        // Face values are validated non-zero by DenominationSet
        let value = u64::from(face);
        let count = remaining / value;
        if count > 0 {
            counts.insert(face, count);
            remaining %= value;
        }
    }

    Ok(counts)
}
