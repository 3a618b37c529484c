//! Change service: validates a payment and builds the full breakdown.

use changemaker_shared::Money;
use rust_decimal::Decimal;

use super::error::ChangeError;
use super::greedy::{decompose_fraction, decompose_whole};
use super::types::{ChangeAmount, ChangeBreakdown, DenominationSet};

/// Change service for till operations.
///
/// Stateless; every call builds and returns a fresh [`ChangeBreakdown`].
pub struct ChangeService;

impl ChangeService {
    /// Calculate the change for `paid - bill`, split into notes and coins.
    ///
    /// Both amounts are rounded to two decimal places (half away from zero)
    /// before anything else happens.
    ///
    /// # Arguments
    ///
    /// * `notes` - Note face values in whole units
    /// * `coins` - Coin face values in minor units
    /// * `bill` - The amount owed
    /// * `paid` - The amount handed over by the customer
    ///
    /// # Errors
    ///
    /// - `NegativeAmount` if either amount is below zero
    /// - `InsufficientPayment` if `paid < bill`, carrying the shortfall
    /// - `DenominationExhausted` if either set cannot make its part exactly
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use changemaker_core::change::{ChangeService, DenominationSet};
    ///
    /// let notes = DenominationSet::notes([50, 20, 10, 5, 2, 1]).unwrap();
    /// let coins = DenominationSet::coins([100, 50, 25, 10, 5, 1]).unwrap();
    ///
    /// let breakdown = ChangeService::calculate_change(&notes, &coins, dec!(19.99), dec!(50)).unwrap();
    /// assert_eq!(breakdown.change().amount(), dec!(30.01));
    /// assert_eq!(breakdown.notes().get(&20), Some(&1));
    /// assert_eq!(breakdown.coins().get(&1), Some(&1));
    /// ```
    pub fn calculate_change(
        notes: &DenominationSet,
        coins: &DenominationSet,
        bill: Decimal,
        paid: Decimal,
    ) -> Result<ChangeBreakdown, ChangeError> {
        let bill = non_negative(bill)?;
        let paid = non_negative(paid)?;

        if paid < bill {
            let shortfall = bill
                .checked_sub(paid)
                .ok_or(ChangeError::AmountOutOfRange(bill.amount()))?;
            return Err(ChangeError::InsufficientPayment { shortfall });
        }

        let change = paid
            .checked_sub(bill)
            .ok_or(ChangeError::AmountOutOfRange(paid.amount()))?;
        let amount = ChangeAmount::from_money(change)?;

        let note_counts = decompose_whole(notes, amount)?;
        let coin_counts = decompose_fraction(coins, amount)?;

        Ok(ChangeBreakdown::new(change, note_counts, coin_counts))
    }
}

fn non_negative(amount: Decimal) -> Result<Money, ChangeError> {
    let money = Money::new(amount);
    if money.is_negative() {
        return Err(ChangeError::NegativeAmount(money.amount()));
    }
    Ok(money)
}
