//! Pension projection input and result models.
//!
//! This module contains the [`PensionProjectionInput`] value object consumed by the
//! projector and the [`PensionProjectionResult`] it produces. Projection figures are
//! carried as `f64` so a 600-month simulation accumulates in double precision.

use serde::{Deserialize, Serialize};

/// A pair of management fees charged by a pension provider.
///
/// # Example
///
/// ```
/// use pension_engine::models::FeeRegime;
///
/// let fees = FeeRegime {
///     fee_on_deposit_percent: 1.5,
///     fee_on_balance_percent: 0.5,
/// };
/// assert_eq!(fees.fee_on_deposit_percent, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRegime {
    /// Percentage levied on every monthly deposit.
    pub fee_on_deposit_percent: f64,
    /// Annual percentage levied monthly (pro rata) on the running balance.
    pub fee_on_balance_percent: f64,
}

/// The inputs to a pension projection.
///
/// Two fee regimes are projected side by side from the same opening balance,
/// deposit and expected return: the member's current provider and an
/// alternative offer.
///
/// # Example
///
/// ```
/// use pension_engine::models::{FeeRegime, PensionProjectionInput};
///
/// let input = PensionProjectionInput {
///     current_age: 35,
///     retirement_age: 67,
///     current_balance: 150_000.0,
///     monthly_deposit: 4_100.0,
///     annual_return_percent: 4.38,
///     current_fees: FeeRegime { fee_on_deposit_percent: 1.5, fee_on_balance_percent: 0.5 },
///     alternative_fees: FeeRegime { fee_on_deposit_percent: 0.9, fee_on_balance_percent: 0.2 },
/// };
/// assert_eq!(input.months_to_retirement(), 384);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionProjectionInput {
    /// The member's age today.
    pub current_age: u32,
    /// The age at which the projection stops.
    pub retirement_age: u32,
    /// The opening fund balance.
    pub current_balance: f64,
    /// The amount contributed every month.
    pub monthly_deposit: f64,
    /// Expected annual nominal return (4.38 means 4.38%).
    pub annual_return_percent: f64,
    /// Fees charged by the current provider.
    pub current_fees: FeeRegime,
    /// Fees charged by the alternative provider.
    pub alternative_fees: FeeRegime,
}

impl PensionProjectionInput {
    /// Number of monthly iterations between today and retirement.
    ///
    /// Returns zero when the retirement age is not after the current age.
    pub fn months_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age) * 12
    }
}

/// Balances of both regimes at the end of a projection year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySnapshot {
    /// Projection year, starting at 1.
    pub year: u32,
    /// The member's age at the end of this year.
    pub age: u32,
    /// Balance under the current provider's fees.
    pub balance_current: f64,
    /// Balance under the alternative provider's fees.
    pub balance_alternative: f64,
}

/// The result of a pension projection.
///
/// All monetary figures are rounded to the nearest currency unit.
///
/// # Example
///
/// ```
/// use pension_engine::models::PensionProjectionResult;
///
/// let result = PensionProjectionResult {
///     future_value_current: 1_000.0,
///     future_value_alternative: 1_200.0,
///     fee_cost_current: 50.0,
///     fee_cost_alternative: 20.0,
///     savings: 200.0,
///     months_to_retirement: 12,
///     total_deposits: 960.0,
///     yearly_projection: vec![],
/// };
/// assert!(result.alternative_wins());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionProjectionResult {
    /// Projected balance at retirement under the current fees.
    pub future_value_current: f64,
    /// Projected balance at retirement under the alternative fees.
    pub future_value_alternative: f64,
    /// Cumulative fees paid under the current fees.
    pub fee_cost_current: f64,
    /// Cumulative fees paid under the alternative fees.
    pub fee_cost_alternative: f64,
    /// `future_value_alternative - future_value_current`.
    pub savings: f64,
    /// Number of simulated months.
    pub months_to_retirement: u32,
    /// Sum of all deposits over the horizon.
    pub total_deposits: f64,
    /// Year-end balances for both regimes.
    pub yearly_projection: Vec<YearlySnapshot>,
}

impl PensionProjectionResult {
    /// Returns true if switching to the alternative provider yields a larger balance.
    pub fn alternative_wins(&self) -> bool {
        self.savings > 0.0
    }
}
