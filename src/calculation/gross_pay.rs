//! Gross pay assembly.
//!
//! Converts a monthly compensation structure into gross pay:
//!
//! - **Overtime:** 125% of the hourly rate
//! - **Weekend:** 150% of the hourly rate
//! - **Holiday:** 200% of the hourly rate
//! - **Standby:** a fixed daily rate, or a percentage of `base / 30` per day
//! - **Allowances:** every category summed; optional allowances only when enabled
//!
//! The hourly rate is `base_salary / work_hours`. Callers must pass an input
//! accepted by [`validate_payroll_input`](super::validate_payroll_input): its
//! bounds on hours and amounts are what keep these products inside `Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{OptionalAllowances, PayrollInput, Standby};

/// Overtime pay multiplier.
pub const OVERTIME_MULTIPLIER: Decimal = dec!(1.25);

/// Weekend pay multiplier.
pub const WEEKEND_MULTIPLIER: Decimal = dec!(1.5);

/// Holiday pay multiplier.
pub const HOLIDAY_MULTIPLIER: Decimal = dec!(2.0);

/// Days used to derive a daily salary for percentage standby.
pub const DAYS_PER_MONTH: Decimal = dec!(30);

/// The unrounded components of gross pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrossPay {
    /// Base salary divided by contracted hours.
    pub hourly_rate: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Weekend pay.
    pub weekend_pay: Decimal,
    /// Holiday pay.
    pub holiday_pay: Decimal,
    /// Sum of all allowance categories.
    pub allowances_total: Decimal,
    /// Standby pay.
    pub standby_pay: Decimal,
    /// Sum of the enabled optional allowances.
    pub optional_allowances_total: Decimal,
    /// Base plus every component above.
    pub total_gross: Decimal,
}

/// Computes standby pay for the month.
///
/// # Examples
///
/// ```
/// use pension_engine::calculation::calculate_standby_pay;
/// use pension_engine::models::Standby;
/// use rust_decimal_macros::dec;
///
/// let fixed = Standby::Fixed { days: dec!(4), rate: dec!(150) };
/// assert_eq!(calculate_standby_pay(dec!(12000), &fixed), dec!(600));
///
/// // (12000 / 30) × 25% × 3 days
/// let percentage = Standby::Percentage { days: dec!(3), percentage: dec!(25) };
/// assert_eq!(calculate_standby_pay(dec!(12000), &percentage), dec!(300));
/// ```
pub fn calculate_standby_pay(base_salary: Decimal, standby: &Standby) -> Decimal {
    match standby {
        Standby::Fixed { days, rate } => *days * *rate,
        Standby::Percentage { days, percentage } => {
            base_salary / DAYS_PER_MONTH * (*percentage / Decimal::ONE_HUNDRED) * *days
        }
    }
}

/// Sums the optional allowances whose flag is set.
pub fn optional_allowances_total(allowances: &OptionalAllowances) -> Decimal {
    let flat: Decimal = [allowances.car, allowances.phone, allowances.travel]
        .iter()
        .filter(|a| a.enabled)
        .map(|a| a.amount)
        .sum();

    let per_child = if allowances.per_child.enabled {
        allowances.per_child.amount_per_child * Decimal::from(allowances.per_child.children)
    } else {
        Decimal::ZERO
    };

    flat + per_child
}

/// Assembles gross pay from a validated payroll input.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::calculate_gross_pay;
/// use pension_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let input = PayrollInput {
///     base_salary: dec!(9300),
///     work_hours: dec!(186),
///     overtime_hours: dec!(10),
///     ..PayrollInput::default()
/// };
/// let gross = calculate_gross_pay(&input);
///
/// // 9300 / 186 = 50 per hour; 10 hours × 50 × 1.25
/// assert_eq!(gross.hourly_rate, dec!(50));
/// assert_eq!(gross.overtime_pay, dec!(625));
/// assert_eq!(gross.total_gross, dec!(9925));
/// ```
pub fn calculate_gross_pay(input: &PayrollInput) -> GrossPay {
    let hourly_rate = input.base_salary / input.work_hours;

    let overtime_pay = input.overtime_hours * hourly_rate * OVERTIME_MULTIPLIER;
    let weekend_pay = input.weekend_hours * hourly_rate * WEEKEND_MULTIPLIER;
    let holiday_pay = input.holiday_hours * hourly_rate * HOLIDAY_MULTIPLIER;

    let allowances_total: Decimal = input.allowances.values().copied().sum();

    let standby_pay = input
        .standby
        .as_ref()
        .map(|s| calculate_standby_pay(input.base_salary, s))
        .unwrap_or(Decimal::ZERO);

    let optional_allowances_total = optional_allowances_total(&input.optional_allowances);

    let total_gross = input.base_salary
        + overtime_pay
        + weekend_pay
        + holiday_pay
        + allowances_total
        + standby_pay
        + optional_allowances_total;

    GrossPay {
        hourly_rate,
        overtime_pay,
        weekend_pay,
        holiday_pay,
        allowances_total,
        standby_pay,
        optional_allowances_total,
        total_gross,
    }
}
