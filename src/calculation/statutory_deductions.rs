//! Statutory and contribution deductions.
//!
//! National insurance and health tax are levied on the gross up to their
//! ceilings, so neither can exceed `ceiling × rate`. Pension and study fund
//! deductions are a plain percentage of the whole gross.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Monthly income ceiling for national insurance.
pub const NATIONAL_INSURANCE_CEILING: Decimal = dec!(49030);

/// Employee national insurance rate.
pub const NATIONAL_INSURANCE_RATE: Decimal = dec!(0.07);

/// Monthly income ceiling for health tax.
pub const HEALTH_TAX_CEILING: Decimal = dec!(49030);

/// Employee health tax rate.
pub const HEALTH_TAX_RATE: Decimal = dec!(0.05);

/// Computes the national insurance contribution on a monthly gross.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::{
///     national_insurance, NATIONAL_INSURANCE_CEILING, NATIONAL_INSURANCE_RATE,
/// };
/// use rust_decimal_macros::dec;
///
/// assert_eq!(national_insurance(dec!(10000)), dec!(700));
/// assert_eq!(
///     national_insurance(dec!(1000000)),
///     NATIONAL_INSURANCE_CEILING * NATIONAL_INSURANCE_RATE
/// );
/// ```
pub fn national_insurance(total_gross: Decimal) -> Decimal {
    total_gross.min(NATIONAL_INSURANCE_CEILING) * NATIONAL_INSURANCE_RATE
}

/// Computes the health tax on a monthly gross.
pub fn health_tax(total_gross: Decimal) -> Decimal {
    total_gross.min(HEALTH_TAX_CEILING) * HEALTH_TAX_RATE
}

/// Computes a percentage-of-gross contribution; zero when the percentage is zero.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::contribution_deduction;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(contribution_deduction(dec!(12000), dec!(6)), dec!(720));
/// assert_eq!(contribution_deduction(dec!(12000), dec!(0)), dec!(0));
/// ```
pub fn contribution_deduction(total_gross: Decimal, percent: Decimal) -> Decimal {
    if percent <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_gross * percent / Decimal::ONE_HUNDRED
}
