//! Human-readable rendering of a change breakdown.

use std::fmt;

use changemaker_shared::Money;
use rust_decimal::Decimal;

use super::types::{ChangeBreakdown, DenominationKind};

/// A breakdown paired with the currency symbol to print before amounts.
///
/// Renders the total first, then notes and coins, largest face value first:
///
/// ```text
/// Change: $30.01
///
/// 1 note of $20.00
/// 1 note of $10.00
/// 1 coin of $0.01
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BreakdownView<'a> {
    breakdown: &'a ChangeBreakdown,
    symbol: &'a str,
}

impl<'a> BreakdownView<'a> {
    /// Creates a view over `breakdown` using `symbol` as the amount prefix.
    #[must_use]
    pub const fn new(breakdown: &'a ChangeBreakdown, symbol: &'a str) -> Self {
        Self { breakdown, symbol }
    }

    fn write_line(
        &self,
        f: &mut fmt::Formatter<'_>,
        kind: DenominationKind,
        count: u64,
        face: Money,
    ) -> fmt::Result {
        let plural = if count == 1 { "" } else { "s" };
        writeln!(f, "{count} {kind}{plural} of {}{face}", self.symbol)
    }
}

impl fmt::Display for BreakdownView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Change: {}{}", self.symbol, self.breakdown.change())?;
        writeln!(f)?;

        for (face, count) in self.breakdown.notes().iter().rev() {
            self.write_line(f, DenominationKind::Note, *count, Money::new(Decimal::from(*face)))?;
        }
        for (face, count) in self.breakdown.coins().iter().rev() {
            self.write_line(
                f,
                DenominationKind::Coin,
                *count,
                Money::from_minor_units(i64::from(*face)),
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ChangeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BreakdownView::new(self, ""), f)
    }
}

/// Renders `breakdown` as text with `symbol` before every amount.
#[must_use]
pub fn render_breakdown(breakdown: &ChangeBreakdown, symbol: &str) -> String {
    BreakdownView::new(breakdown, symbol).to_string()
}
