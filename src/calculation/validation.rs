//! Input validation for both calculators.
//!
//! Validation runs once, before any arithmetic, and stops at the first violated
//! rule. Values are never clamped: an out-of-range input is always an
//! [`EngineError::InvalidParameters`] naming the offending field.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{EngineError, EngineResult};
use crate::models::{FeeRegime, PayrollInput, PensionProjectionInput, Standby};

/// Youngest age accepted by the projector.
pub const MIN_AGE: u32 = 18;

/// Oldest age accepted by the projector (statutory retirement age).
pub const MAX_AGE: u32 = 67;

/// Longest projection horizon in years.
pub const MAX_HORIZON_YEARS: u32 = 50;

/// Smallest contracted monthly hours accepted by the payroll calculator.
pub const MIN_WORK_HOURS: Decimal = dec!(0.01);

/// Largest hour count of any kind in a month (31 days × 24 hours).
pub const MAX_MONTHLY_HOURS: Decimal = dec!(744);

/// Largest number of standby days in a month.
pub const MAX_STANDBY_DAYS: Decimal = dec!(31);

/// Largest monetary amount or credit point count accepted on a payroll input.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

const HUNDRED: Decimal = dec!(100);

/// Validates a pension projection input.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameters`] when an age is outside
/// `[MIN_AGE, MAX_AGE]`, the retirement age precedes the current age, the
/// horizon exceeds [`MAX_HORIZON_YEARS`], an amount is negative or not finite,
/// a fee is outside `[0, 100]`, or the annual return is at or below -100%.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::validate_projection_input;
/// use pension_engine::models::{FeeRegime, PensionProjectionInput};
///
/// let fees = FeeRegime { fee_on_deposit_percent: 1.0, fee_on_balance_percent: 0.3 };
/// let input = PensionProjectionInput {
///     current_age: 50,
///     retirement_age: 45,
///     current_balance: 0.0,
///     monthly_deposit: 1_000.0,
///     annual_return_percent: 4.0,
///     current_fees: fees,
///     alternative_fees: fees,
/// };
/// assert!(validate_projection_input(&input).is_err());
/// ```
pub fn validate_projection_input(input: &PensionProjectionInput) -> EngineResult<()> {
    check_age("currentAge", input.current_age)?;
    check_age("retirementAge", input.retirement_age)?;

    if input.retirement_age < input.current_age {
        return Err(EngineError::invalid(
            "currentAge, retirementAge",
            "retirementAge below currentAge",
        ));
    }
    if input.retirement_age - input.current_age > MAX_HORIZON_YEARS {
        return Err(EngineError::invalid(
            "currentAge, retirementAge",
            format!("projection horizon exceeds {} years", MAX_HORIZON_YEARS),
        ));
    }

    check_non_negative_f64("currentBalance", input.current_balance)?;
    check_non_negative_f64("monthlyDeposit", input.monthly_deposit)?;

    if !input.annual_return_percent.is_finite() {
        return Err(EngineError::invalid(
            "annualReturnPercent",
            "must be a finite number",
        ));
    }
    if input.annual_return_percent <= -100.0 {
        return Err(EngineError::invalid(
            "annualReturnPercent",
            "must be greater than -100",
        ));
    }

    check_fees("currentFees", &input.current_fees)?;
    check_fees("alternativeFees", &input.alternative_fees)?;

    Ok(())
}

fn check_age(field: &str, age: u32) -> EngineResult<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(EngineError::invalid(
            field,
            format!("must be between {} and {}, got {}", MIN_AGE, MAX_AGE, age),
        ));
    }
    Ok(())
}

fn check_non_negative_f64(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(EngineError::invalid(field, "must not be negative"));
    }
    Ok(())
}

fn check_fee_percent(field: &str, value: f64) -> EngineResult<()> {
    check_non_negative_f64(field, value)?;
    if value > 100.0 {
        return Err(EngineError::invalid(field, "must not exceed 100"));
    }
    Ok(())
}

fn check_fees(regime: &str, fees: &FeeRegime) -> EngineResult<()> {
    check_fee_percent(
        &format!("{}.feeOnDepositPercent", regime),
        fees.fee_on_deposit_percent,
    )?;
    check_fee_percent(
        &format!("{}.feeOnBalancePercent", regime),
        fees.fee_on_balance_percent,
    )
}

/// Validates a payroll input.
///
/// Besides the sign rules, every hour count, day count and amount has an
/// upper bound. Within these bounds no intermediate product of the payroll
/// calculation comes near the `Decimal` range.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameters`] when:
/// - `work_hours` is below [`MIN_WORK_HOURS`]
/// - any hour count is negative or above [`MAX_MONTHLY_HOURS`]
/// - standby days are negative or above [`MAX_STANDBY_DAYS`]
/// - any amount or credit point count is negative or above [`MAX_AMOUNT`]
/// - a percentage is outside `[0, 100]`
///
/// # Example
///
/// ```
/// use pension_engine::calculation::validate_payroll_input;
/// use pension_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let input = PayrollInput {
///     base_salary: dec!(10000),
///     work_hours: dec!(0),
///     ..PayrollInput::default()
/// };
/// assert!(validate_payroll_input(&input).is_err());
/// ```
pub fn validate_payroll_input(input: &PayrollInput) -> EngineResult<()> {
    check_amount("baseSalary", input.base_salary)?;

    if input.work_hours <= Decimal::ZERO {
        return Err(EngineError::invalid("workHours", "must be greater than 0"));
    }
    if input.work_hours < MIN_WORK_HOURS {
        return Err(EngineError::invalid(
            "workHours",
            format!("must be at least {}", MIN_WORK_HOURS),
        ));
    }
    check_hours("workHours", input.work_hours)?;

    check_hours("overtimeHours", input.overtime_hours)?;
    check_hours("weekendHours", input.weekend_hours)?;
    check_hours("holidayHours", input.holiday_hours)?;

    for (category, amount) in &input.allowances {
        check_amount(&format!("allowances.{}", category), *amount)?;
    }

    if let Some(standby) = &input.standby {
        check_bounded("standby.days", standby.days(), MAX_STANDBY_DAYS)?;
        match standby {
            Standby::Fixed { rate, .. } => check_amount("standby.rate", *rate)?,
            Standby::Percentage { percentage, .. } => {
                check_percent("standby.percentage", *percentage)?
            }
        }
    }

    let optional = &input.optional_allowances;
    check_amount("optionalAllowances.car.amount", optional.car.amount)?;
    check_amount("optionalAllowances.phone.amount", optional.phone.amount)?;
    check_amount("optionalAllowances.travel.amount", optional.travel.amount)?;
    check_amount(
        "optionalAllowances.perChild.amountPerChild",
        optional.per_child.amount_per_child,
    )?;

    check_percent(
        "pensionContributionPercent",
        input.pension_contribution_percent,
    )?;
    check_percent(
        "studyFundContributionPercent",
        input.study_fund_contribution_percent,
    )?;
    check_amount("taxCreditPoints", input.tax_credit_points)?;

    let deductions = &input.optional_deductions;
    check_amount(
        "optionalDeductions.disabilityInsurance",
        deductions.disability_insurance,
    )?;
    check_amount("optionalDeductions.unionDues", deductions.union_dues)?;
    check_amount(
        "optionalDeductions.professionalTax",
        deductions.professional_tax,
    )?;

    Ok(())
}

fn check_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid(field, "must not be negative"));
    }
    Ok(())
}

fn check_bounded(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    check_non_negative(field, value)?;
    if value > max {
        return Err(EngineError::invalid(field, format!("must not exceed {}", max)));
    }
    Ok(())
}

fn check_hours(field: &str, value: Decimal) -> EngineResult<()> {
    check_bounded(field, value, MAX_MONTHLY_HOURS)
}

fn check_amount(field: &str, value: Decimal) -> EngineResult<()> {
    check_bounded(field, value, MAX_AMOUNT)
}

fn check_percent(field: &str, value: Decimal) -> EngineResult<()> {
    check_bounded(field, value, HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionalAllowance;

    fn projection_input() -> PensionProjectionInput {
        PensionProjectionInput {
            current_age: 35,
            retirement_age: 67,
            current_balance: 150_000.0,
            monthly_deposit: 4_100.0,
            annual_return_percent: 4.38,
            current_fees: FeeRegime {
                fee_on_deposit_percent: 1.5,
                fee_on_balance_percent: 0.5,
            },
            alternative_fees: FeeRegime {
                fee_on_deposit_percent: 0.9,
                fee_on_balance_percent: 0.2,
            },
        }
    }

    fn payroll_input() -> PayrollInput {
        PayrollInput {
            base_salary: dec!(12000),
            work_hours: dec!(186),
            pension_contribution_percent: dec!(6),
            ..PayrollInput::default()
        }
    }

    fn invalid_field(result: EngineResult<()>) -> String {
        match result {
            Err(EngineError::InvalidParameters { field, .. }) => field,
            other => panic!("expected InvalidParameters, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_projection_input_passes() {
        assert!(validate_projection_input(&projection_input()).is_ok());
    }

    #[test]
    fn test_current_age_below_minimum_rejected() {
        let mut input = projection_input();
        input.current_age = 17;
        assert_eq!(invalid_field(validate_projection_input(&input)), "currentAge");
    }

    #[test]
    fn test_retirement_age_above_maximum_rejected() {
        let mut input = projection_input();
        input.retirement_age = 68;
        assert_eq!(
            invalid_field(validate_projection_input(&input)),
            "retirementAge"
        );
    }

    #[test]
    fn test_retirement_before_current_age_rejected() {
        let mut input = projection_input();
        input.current_age = 60;
        input.retirement_age = 55;
        let err = validate_projection_input(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'currentAge, retirementAge': retirementAge below currentAge"
        );
    }

    #[test]
    fn test_boundary_ages_accepted() {
        let mut input = projection_input();
        input.current_age = 18;
        input.retirement_age = 67;
        assert!(validate_projection_input(&input).is_ok());

        input.current_age = 67;
        assert!(validate_projection_input(&input).is_ok());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let mut input = projection_input();
        input.current_balance = -1.0;
        assert_eq!(
            invalid_field(validate_projection_input(&input)),
            "currentBalance"
        );
    }

    #[test]
    fn test_non_finite_deposit_rejected() {
        let mut input = projection_input();
        input.monthly_deposit = f64::NAN;
        assert_eq!(
            invalid_field(validate_projection_input(&input)),
            "monthlyDeposit"
        );
    }

    #[test]
    fn test_return_at_minus_hundred_rejected() {
        let mut input = projection_input();
        input.annual_return_percent = -100.0;
        assert_eq!(
            invalid_field(validate_projection_input(&input)),
            "annualReturnPercent"
        );
    }

    #[test]
    fn test_negative_return_accepted() {
        let mut input = projection_input();
        input.annual_return_percent = -3.5;
        assert!(validate_projection_input(&input).is_ok());
    }

    #[test]
    fn test_fee_above_hundred_rejected() {
        let mut input = projection_input();
        input.alternative_fees.fee_on_balance_percent = 101.0;
        assert_eq!(
            invalid_field(validate_projection_input(&input)),
            "alternativeFees.feeOnBalancePercent"
        );
    }

    #[test]
    fn test_valid_payroll_input_passes() {
        assert!(validate_payroll_input(&payroll_input()).is_ok());
    }

    #[test]
    fn test_zero_work_hours_rejected() {
        let mut input = payroll_input();
        input.work_hours = Decimal::ZERO;
        let err = validate_payroll_input(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'workHours': must be greater than 0"
        );
    }

    #[test]
    fn test_negative_overtime_rejected() {
        let mut input = payroll_input();
        input.overtime_hours = dec!(-1);
        assert_eq!(invalid_field(validate_payroll_input(&input)), "overtimeHours");
    }

    #[test]
    fn test_negative_allowance_names_category() {
        let mut input = payroll_input();
        input.allowances.insert("transport".to_string(), dec!(-50));
        assert_eq!(
            invalid_field(validate_payroll_input(&input)),
            "allowances.transport"
        );
    }

    #[test]
    fn test_negative_standby_rate_rejected() {
        let mut input = payroll_input();
        input.standby = Some(Standby::Fixed {
            days: dec!(2),
            rate: dec!(-10),
        });
        assert_eq!(invalid_field(validate_payroll_input(&input)), "standby.rate");
    }

    #[test]
    fn test_negative_disabled_optional_allowance_still_rejected() {
        let mut input = payroll_input();
        input.optional_allowances.phone = OptionalAllowance {
            enabled: false,
            amount: dec!(-100),
        };
        assert_eq!(
            invalid_field(validate_payroll_input(&input)),
            "optionalAllowances.phone.amount"
        );
    }

    #[test]
    fn test_pension_percent_above_hundred_rejected() {
        let mut input = payroll_input();
        input.pension_contribution_percent = dec!(100.5);
        assert_eq!(
            invalid_field(validate_payroll_input(&input)),
            "pensionContributionPercent"
        );
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let mut input = payroll_input();
        input.overtime_hours = -Decimal::ZERO;
        assert!(validate_payroll_input(&input).is_ok());
    }

    #[test]
    fn test_tiny_work_hours_rejected() {
        let mut input = payroll_input();
        input.work_hours = Decimal::new(1, 28);
        let err = validate_payroll_input(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'workHours': must be at least 0.01"
        );

        input.work_hours = MIN_WORK_HOURS;
        assert!(validate_payroll_input(&input).is_ok());
    }

    #[test]
    fn test_huge_base_salary_rejected() {
        let mut input = payroll_input();
        input.base_salary = Decimal::from_i128_with_scale(10_i128.pow(28), 0);
        assert_eq!(invalid_field(validate_payroll_input(&input)), "baseSalary");

        input.base_salary = MAX_AMOUNT;
        assert!(validate_payroll_input(&input).is_ok());
    }

    #[test]
    fn test_hours_above_month_rejected() {
        let mut input = payroll_input();
        input.holiday_hours = dec!(744.5);
        assert_eq!(invalid_field(validate_payroll_input(&input)), "holidayHours");
    }

    #[test]
    fn test_standby_bounds() {
        let mut input = payroll_input();
        input.standby = Some(Standby::Fixed {
            days: dec!(32),
            rate: dec!(100),
        });
        assert_eq!(invalid_field(validate_payroll_input(&input)), "standby.days");

        input.standby = Some(Standby::Percentage {
            days: dec!(3),
            percentage: dec!(150),
        });
        assert_eq!(
            invalid_field(validate_payroll_input(&input)),
            "standby.percentage"
        );
    }

    #[test]
    fn test_huge_allowance_rejected() {
        let mut input = payroll_input();
        input.allowances.insert("food".to_string(), MAX_AMOUNT + Decimal::ONE);
        assert_eq!(invalid_field(validate_payroll_input(&input)), "allowances.food");
    }
}
