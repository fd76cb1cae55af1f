//! Arbitrage evaluation: spread, ratio, profit, and escalation flags.

use rust_decimal::Decimal;

use crate::config::Thresholds;
use crate::error::DomainError;

/// Result of evaluating one buy/sell price pair against an invested amount.
///
/// Recomputed on every evaluation, never persisted. All fields carry full
/// precision; any truncation happens at the display layer only.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Absolute price difference, sell minus buy.
    pub spread: Decimal,
    /// Spread normalized by the buy price; fractional gain per unit invested.
    pub arbitrage: Decimal,
    /// `arbitrage * invest`.
    pub profit: Decimal,
    pub is_excited_arbitrage: bool,
    pub is_excited_spread: bool,
}

impl Evaluation {
    /// Whether this evaluation clears the minimum thresholds. The scheduled
    /// notify job suppresses the notification entirely when this is false;
    /// the on-demand /arbitrage command ignores it.
    pub fn clears_minimums(&self, thresholds: &Thresholds) -> bool {
        self.arbitrage >= thresholds.min_arbitrage && self.spread >= thresholds.min_spread
    }
}

/// Evaluate a quote pair.
///
/// Fails with [`DomainError::ZeroBuyPrice`] when `buy_price` is zero, since
/// the arbitrage ratio would be undefined.
pub fn evaluate(
    invest: Decimal,
    buy_price: Decimal,
    sell_price: Decimal,
    thresholds: &Thresholds,
) -> Result<Evaluation, DomainError> {
    let spread = sell_price - buy_price;
    let arbitrage = spread
        .checked_div(buy_price)
        .ok_or(DomainError::ZeroBuyPrice)?;
    let profit = arbitrage * invest;

    Ok(Evaluation {
        spread,
        arbitrage,
        profit,
        is_excited_arbitrage: arbitrage >= thresholds.excited_arbitrage,
        is_excited_spread: spread >= thresholds.excited_spread,
    })
}
