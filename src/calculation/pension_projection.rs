//! Pension fund projection under two management fee regimes.
//!
//! The projector simulates a fund month by month from today until retirement,
//! once for the member's current provider and once for an alternative offer,
//! and reports the balance each regime reaches together with the fees it costs.
//!
//! ## Monthly step
//!
//! Every month, in this order:
//! 1. return on the balance before the deposit (`balance × monthly_rate`)
//! 2. balance fee (`balance × fee_on_balance% / 12`)
//! 3. deposit fee (`deposit × fee_on_deposit%`)
//! 4. both fees added to the regime's fee total
//! 5. `balance += deposit + return − balance fee − deposit fee`
//!
//! The annual return compounds monthly: `monthly_rate = (1 + r)^(1/12) − 1`.
//! Nothing is rounded until the figures are reported.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{FeeRegime, PensionProjectionInput, PensionProjectionResult, YearlySnapshot};

use super::common::round_to_unit;
use super::validation::validate_projection_input;

/// The outcome of simulating a single fee regime.
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeProjection {
    /// Balance after the final month.
    pub final_balance: f64,
    /// Sum of balance and deposit fees over all months.
    pub total_fees: f64,
    /// Balance after every twelfth month.
    pub year_end_balances: Vec<f64>,
}

/// Converts an annual percentage return into the equivalent monthly compounding rate.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::monthly_rate_from_annual;
///
/// let monthly = monthly_rate_from_annual(12.0);
/// assert!(((1.0 + monthly).powi(12) - 1.12).abs() < 1e-12);
/// ```
pub fn monthly_rate_from_annual(annual_return_percent: f64) -> f64 {
    (1.0 + annual_return_percent / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Simulates one fee regime for `months` months.
///
/// Inputs are assumed to be validated.
pub fn simulate_regime(
    opening_balance: f64,
    monthly_deposit: f64,
    monthly_rate: f64,
    fees: &FeeRegime,
    months: u32,
) -> RegimeProjection {
    let monthly_balance_fee = fees.fee_on_balance_percent / 100.0 / 12.0;
    let deposit_fee_rate = fees.fee_on_deposit_percent / 100.0;

    let mut balance = opening_balance;
    let mut total_fees = 0.0;
    let mut year_end_balances = Vec::with_capacity((months / 12) as usize);

    for month in 1..=months {
        let monthly_return = balance * monthly_rate;
        let balance_fee = balance * monthly_balance_fee;
        let deposit_fee = monthly_deposit * deposit_fee_rate;

        total_fees += balance_fee + deposit_fee;
        balance = balance + monthly_deposit + monthly_return - balance_fee - deposit_fee;

        if month % 12 == 0 {
            year_end_balances.push(balance);
        }
    }

    RegimeProjection {
        final_balance: balance,
        total_fees,
        year_end_balances,
    }
}

/// Projects a pension fund to retirement under the current and the alternative fees.
///
/// # Errors
///
/// - [`EngineError::InvalidParameters`] if the input fails validation (see
///   [`validate_projection_input`](super::validate_projection_input)).
/// - [`EngineError::CalculationError`] if the simulation overflows to a
///   non-finite balance.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::project;
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
///
/// let result = project(&input).unwrap();
/// assert_eq!(result.months_to_retirement, 384);
/// assert!(result.savings > 0.0);
/// ```
pub fn project(input: &PensionProjectionInput) -> EngineResult<PensionProjectionResult> {
    validate_projection_input(input)?;

    let months = input.months_to_retirement();
    let monthly_rate = monthly_rate_from_annual(input.annual_return_percent);

    let current = simulate_regime(
        input.current_balance,
        input.monthly_deposit,
        monthly_rate,
        &input.current_fees,
        months,
    );
    let alternative = simulate_regime(
        input.current_balance,
        input.monthly_deposit,
        monthly_rate,
        &input.alternative_fees,
        months,
    );

    if !current.final_balance.is_finite() || !alternative.final_balance.is_finite() {
        return Err(EngineError::CalculationError {
            message: format!(
                "projected balance is not finite after {} months",
                months
            ),
        });
    }

    let future_value_current = round_to_unit(current.final_balance);
    let future_value_alternative = round_to_unit(alternative.final_balance);

    let yearly_projection = current
        .year_end_balances
        .iter()
        .zip(&alternative.year_end_balances)
        .enumerate()
        .map(|(index, (cur, alt))| {
            let year = index as u32 + 1;
            YearlySnapshot {
                year,
                age: input.current_age + year,
                balance_current: round_to_unit(*cur),
                balance_alternative: round_to_unit(*alt),
            }
        })
        .collect();

    debug!(
        months,
        monthly_rate,
        future_value_current,
        future_value_alternative,
        "Pension projection completed"
    );

    Ok(PensionProjectionResult {
        future_value_current,
        future_value_alternative,
        fee_cost_current: round_to_unit(current.total_fees),
        fee_cost_alternative: round_to_unit(alternative.total_fees),
        savings: round_to_unit(future_value_alternative - future_value_current),
        months_to_retirement: months,
        total_deposits: round_to_unit(input.monthly_deposit * f64::from(months)),
        yearly_projection,
    })
}
