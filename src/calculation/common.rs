//! Rounding helpers shared by both calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::round_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_money(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_money(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a ratio to four decimal places, half away from zero.
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a projected figure to the nearest currency unit.
///
/// `-0.0` is normalised to `0.0` so identical projections serialize identically.
pub fn round_to_unit(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 { 0.0 } else { rounded }
}
