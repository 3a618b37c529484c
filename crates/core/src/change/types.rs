//! Change-making domain types.
//!
//! Amounts enter as [`Money`] and are split into whole units and minor
//! units before the greedy walk, so the decomposers only ever see integers.

use std::collections::BTreeMap;
use std::fmt;

use changemaker_shared::Money;
use changemaker_shared::types::MINOR_UNITS_PER_UNIT;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ChangeError;

/// Face value → number of pieces to hand back.
///
/// Only denominations actually used appear; every count is positive.
pub type DenominationCounts = BTreeMap<u32, u64>;

/// Unit category of a denomination set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominationKind {
    /// Notes, valued in whole currency units.
    Note,
    /// Coins, valued in minor units (1 = 0.01).
    Coin,
}

impl fmt::Display for DenominationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::Coin => write!(f, "coin"),
        }
    }
}

/// The face values available for one unit category.
///
/// Always non-empty and free of zero values. Order and duplicates are kept
/// as given; the greedy walk sorts its own copy, and a duplicate face value
/// is never picked twice because the remainder is already below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationSet {
    kind: DenominationKind,
    values: Vec<u32>,
}

impl DenominationSet {
    /// Creates a validated denomination set.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDenominationSet` if `values` is empty and
    /// `ZeroDenomination` if any face value is zero.
    pub fn new(kind: DenominationKind, values: impl Into<Vec<u32>>) -> Result<Self, ChangeError> {
        let values = values.into();
        if values.is_empty() {
            return Err(ChangeError::EmptyDenominationSet(kind));
        }
        if values.contains(&0) {
            return Err(ChangeError::ZeroDenomination(kind));
        }
        Ok(Self { kind, values })
    }

    /// Creates a note set (face values in whole units).
    pub fn notes(values: impl Into<Vec<u32>>) -> Result<Self, ChangeError> {
        Self::new(DenominationKind::Note, values)
    }

    /// Creates a coin set (face values in minor units).
    pub fn coins(values: impl Into<Vec<u32>>) -> Result<Self, ChangeError> {
        Self::new(DenominationKind::Coin, values)
    }

    /// Returns the unit category.
    #[must_use]
    pub const fn kind(&self) -> DenominationKind {
        self.kind
    }

    /// Returns the face values in the order they were supplied.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Returns true if a face value of 1 is present.
    ///
    /// Without it some amounts cannot be reached by the greedy walk.
    #[must_use]
    pub fn contains_unit(&self) -> bool {
        self.values.contains(&1)
    }
}

/// A non-negative amount split into whole units and minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeAmount {
    whole: u64,
    minor: u32,
}

impl ChangeAmount {
    /// Splits a money amount into its whole and minor-unit parts.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` for amounts below zero and
    /// `AmountOutOfRange` if the amount does not fit in integer minor units.
    pub fn from_money(money: Money) -> Result<Self, ChangeError> {
        if money.is_negative() {
            return Err(ChangeError::NegativeAmount(money.amount()));
        }

        let out_of_range = || ChangeError::AmountOutOfRange(money.amount());
        let units = money
            .to_minor_units()
            .and_then(|units| u64::try_from(units).ok())
            .ok_or_else(out_of_range)?;
        let per_unit = MINOR_UNITS_PER_UNIT.unsigned_abs();
        let minor = u32::try_from(units % per_unit).map_err(|_| out_of_range())?;

        Ok(Self {
            whole: units / per_unit,
            minor,
        })
    }

    /// Whole units (truncated toward zero).
    #[must_use]
    pub const fn whole(&self) -> u64 {
        self.whole
    }

    /// Minor units, in `0..100`.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Recombines both parts into a money amount.
    #[must_use]
    pub fn to_money(&self) -> Money {
        Money::new(Decimal::from(self.whole) + Decimal::new(i64::from(self.minor), 2))
    }
}

/// The change to hand back and how to make it up.
///
/// Built once per calculation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeBreakdown {
    change: Money,
    notes: DenominationCounts,
    coins: DenominationCounts,
}

impl ChangeBreakdown {
    pub(crate) fn new(change: Money, notes: DenominationCounts, coins: DenominationCounts) -> Self {
        Self {
            change,
            notes,
            coins,
        }
    }

    /// Total change owed.
    #[must_use]
    pub const fn change(&self) -> Money {
        self.change
    }

    /// Notes to hand back, keyed by face value in whole units.
    #[must_use]
    pub const fn notes(&self) -> &DenominationCounts {
        &self.notes
    }

    /// Coins to hand back, keyed by face value in minor units.
    #[must_use]
    pub const fn coins(&self) -> &DenominationCounts {
        &self.coins
    }

    /// Sum of the notes, in whole units.
    #[must_use]
    pub fn notes_total(&self) -> u64 {
        weighted_sum(&self.notes)
    }

    /// Sum of the coins, in minor units.
    #[must_use]
    pub fn coins_total(&self) -> u64 {
        weighted_sum(&self.coins)
    }

    /// Value of every piece in the breakdown.
    #[must_use]
    pub fn pieces_value(&self) -> Money {
        Money::new(
            Decimal::from(self.notes_total()) + Decimal::from(self.coins_total()) / Decimal::ONE_HUNDRED,
        )
    }

    /// Number of individual notes and coins.
    #[must_use]
    pub fn piece_count(&self) -> u64 {
        self.notes.values().chain(self.coins.values()).sum()
    }

    /// Returns true when no change is due.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.coins.is_empty()
    }
}

fn weighted_sum(counts: &DenominationCounts) -> u64 {
    counts
        .iter()
        .map(|(face, count)| u64::from(*face) * count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_denomination_set_rejects_empty() {
        assert_eq!(
            DenominationSet::notes(Vec::<u32>::new()),
            Err(ChangeError::EmptyDenominationSet(DenominationKind::Note))
        );
    }

    #[test]
    fn test_denomination_set_rejects_zero() {
        assert_eq!(
            DenominationSet::coins(vec![50, 0, 1]),
            Err(ChangeError::ZeroDenomination(DenominationKind::Coin))
        );
    }

    #[test]
    fn test_denomination_set_keeps_order_and_duplicates() {
        let set = DenominationSet::notes(vec![5, 20, 5, 1]).unwrap();
        assert_eq!(set.values(), &[5, 20, 5, 1]);
        assert_eq!(set.kind(), DenominationKind::Note);
        assert!(set.contains_unit());
    }

    #[test]
    fn test_contains_unit() {
        let set = DenominationSet::notes([100, 50, 20, 10, 5, 2]).unwrap();
        assert!(!set.contains_unit());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DenominationKind::Note.to_string(), "note");
        assert_eq!(DenominationKind::Coin.to_string(), "coin");
    }

    #[test]
    fn test_change_amount_split() {
        let amount = ChangeAmount::from_money(Money::new(dec!(30.01))).unwrap();
        assert_eq!(amount.whole(), 30);
        assert_eq!(amount.minor(), 1);
        assert_eq!(amount.to_money(), Money::new(dec!(30.01)));
    }

    #[test]
    fn test_change_amount_zero() {
        let amount = ChangeAmount::from_money(Money::zero()).unwrap();
        assert_eq!(amount.whole(), 0);
        assert_eq!(amount.minor(), 0);
    }

    #[test]
    fn test_change_amount_sub_unit() {
        let amount = ChangeAmount::from_money(Money::new(dec!(0.99))).unwrap();
        assert_eq!(amount.whole(), 0);
        assert_eq!(amount.minor(), 99);
    }

    #[test]
    fn test_change_amount_negative() {
        assert_eq!(
            ChangeAmount::from_money(Money::new(dec!(-1.50))),
            Err(ChangeError::NegativeAmount(dec!(-1.50)))
        );
    }

    #[test]
    fn test_change_amount_out_of_range() {
        let result = ChangeAmount::from_money(Money::new(Decimal::MAX));
        assert!(matches!(result, Err(ChangeError::AmountOutOfRange(_))));
    }

    #[test]
    fn test_breakdown_totals() {
        let notes = DenominationCounts::from([(20, 1), (10, 2), (1, 3)]);
        let coins = DenominationCounts::from([(25, 2), (1, 4)]);
        let breakdown = ChangeBreakdown::new(Money::new(dec!(43.54)), notes, coins);

        assert_eq!(breakdown.notes_total(), 43);
        assert_eq!(breakdown.coins_total(), 54);
        assert_eq!(breakdown.pieces_value(), breakdown.change());
        assert_eq!(breakdown.piece_count(), 12);
        assert!(!breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_serializes() {
        let breakdown = ChangeBreakdown::new(
            Money::new(dec!(30.01)),
            DenominationCounts::from([(20, 1), (10, 1)]),
            DenominationCounts::from([(1, 1)]),
        );
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "change": "30.01",
                "notes": { "10": 1, "20": 1 },
                "coins": { "1": 1 }
            })
        );
    }
}
