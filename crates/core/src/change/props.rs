//! Property-based tests for change calculation.
//!
//! - Property 1: Change equals payment minus bill
//! - Property 2: Pieces add back up to the change
//! - Property 3: Denomination order does not matter
//! - Property 4: Insufficient payment always fails with the shortfall

use proptest::prelude::*;
use rust_decimal::Decimal;

use changemaker_shared::Money;

use super::error::ChangeError;
use super::greedy::sort_descending;
use super::service::ChangeService;
use super::types::{DenominationKind, DenominationSet};

const NOTES: [u32; 7] = [100, 50, 20, 10, 5, 2, 1];
const COINS: [u32; 6] = [100, 50, 25, 10, 5, 1];

/// Strategy to generate amounts from 0.00 to 100,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a bill and a payment that covers it.
fn covered_payment() -> impl Strategy<Value = (Decimal, Decimal)> {
    (amount(), amount()).prop_map(|(bill, extra)| (bill, bill + extra))
}

/// Strategy to generate an arbitrary face-value set that includes 1.
fn set_with_unit() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..500, 0..8).prop_map(|mut values| {
        values.push(1);
        values
    })
}

fn notes() -> DenominationSet {
    DenominationSet::notes(NOTES).unwrap()
}

fn coins() -> DenominationSet {
    DenominationSet::coins(COINS).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Change equals payment minus bill
    // =========================================================================

    #[test]
    fn prop_change_is_paid_minus_bill((bill, paid) in covered_payment()) {
        let breakdown = ChangeService::calculate_change(&notes(), &coins(), bill, paid).unwrap();
        prop_assert_eq!(breakdown.change().amount(), paid - bill);
    }

    // =========================================================================
    // Property 2: Pieces add back up to the change
    // =========================================================================

    #[test]
    fn prop_pieces_sum_to_change((bill, paid) in covered_payment()) {
        let breakdown = ChangeService::calculate_change(&notes(), &coins(), bill, paid).unwrap();
        prop_assert_eq!(breakdown.pieces_value(), breakdown.change());
        prop_assert!(breakdown.coins_total() < 100);
    }

    #[test]
    fn prop_counts_are_positive((bill, paid) in covered_payment()) {
        let breakdown = ChangeService::calculate_change(&notes(), &coins(), bill, paid).unwrap();
        prop_assert!(breakdown.notes().values().all(|count| *count > 0));
        prop_assert!(breakdown.coins().values().all(|count| *count > 0));
    }

    #[test]
    fn prop_any_set_with_unit_reaches_zero(
        note_values in set_with_unit(),
        coin_values in set_with_unit(),
        (bill, paid) in covered_payment(),
    ) {
        let notes = DenominationSet::notes(note_values).unwrap();
        let coins = DenominationSet::coins(coin_values).unwrap();
        let breakdown = ChangeService::calculate_change(&notes, &coins, bill, paid).unwrap();
        prop_assert_eq!(breakdown.pieces_value(), breakdown.change());
    }

    #[test]
    fn prop_sets_without_unit_sum_or_exhaust(
        note_values in prop::collection::vec(2u32..200, 1..6),
        (bill, paid) in covered_payment(),
    ) {
        let notes = DenominationSet::notes(note_values).unwrap();
        match ChangeService::calculate_change(&notes, &coins(), bill, paid) {
            Ok(breakdown) => prop_assert_eq!(breakdown.pieces_value(), breakdown.change()),
            Err(ChangeError::DenominationExhausted { kind, remaining }) => {
                prop_assert_eq!(kind, DenominationKind::Note);
                prop_assert!(remaining > 0);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    // =========================================================================
    // Property 3: Denomination order does not matter
    // =========================================================================

    #[test]
    fn prop_order_independent(
        shuffled_notes in Just(NOTES.to_vec()).prop_shuffle(),
        shuffled_coins in Just(COINS.to_vec()).prop_shuffle(),
        (bill, paid) in covered_payment(),
    ) {
        let sorted = ChangeService::calculate_change(&notes(), &coins(), bill, paid).unwrap();
        let shuffled = ChangeService::calculate_change(
            &DenominationSet::notes(shuffled_notes).unwrap(),
            &DenominationSet::coins(shuffled_coins).unwrap(),
            bill,
            paid,
        )
        .unwrap();
        prop_assert_eq!(sorted, shuffled);
    }

    #[test]
    fn prop_calculation_is_idempotent((bill, paid) in covered_payment()) {
        let (notes, coins) = (notes(), coins());
        let first = ChangeService::calculate_change(&notes, &coins, bill, paid);
        let second = ChangeService::calculate_change(&notes, &coins, bill, paid);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sort_descending_is_non_increasing_permutation(
        values in prop::collection::vec(any::<u32>(), 0..32),
    ) {
        let sorted = sort_descending(&values);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));

        let mut expected = values.clone();
        expected.sort_unstable();
        let mut actual = sorted.clone();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    // =========================================================================
    // Property 4: Insufficient payment always fails with the shortfall
    // =========================================================================

    #[test]
    fn prop_underpayment_fails_with_shortfall(
        paid in amount(),
        short_cents in 1i64..1_000_000i64,
    ) {
        let shortfall = Decimal::new(short_cents, 2);
        let bill = paid + shortfall;
        let result = ChangeService::calculate_change(&notes(), &coins(), bill, paid);
        prop_assert_eq!(
            result,
            Err(ChangeError::InsufficientPayment { shortfall: Money::new(shortfall) })
        );
    }
}
