//! Gross-to-net payroll calculation.
//!
//! Combines [`calculate_gross_pay`](super::calculate_gross_pay), the progressive
//! income tax and the statutory deductions into a single [`PayrollResult`].
//! Every component is rounded to two decimal places before it is summed, so the
//! reported totals always add up.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{PayrollInput, PayrollResult};

use super::common::{round_money, round_ratio};
use super::gross_pay::calculate_gross_pay;
use super::income_tax::calculate_income_tax;
use super::statutory_deductions::{contribution_deduction, health_tax, national_insurance};
use super::validation::validate_payroll_input;

/// Calculates gross pay, deductions and net pay for a month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameters`](crate::error::EngineError::InvalidParameters)
/// if the input fails validation (see
/// [`validate_payroll_input`](super::validate_payroll_input)); no partial result is produced.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::calculate;
/// use pension_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let input = PayrollInput {
///     base_salary: dec!(12000),
///     work_hours: dec!(186),
///     pension_contribution_percent: dec!(6),
///     ..PayrollInput::default()
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.total_gross, dec!(12000));
/// assert!(result.net_salary < dec!(12000));
/// assert!(result.net_salary > dec!(6000));
/// ```
pub fn calculate(input: &PayrollInput) -> EngineResult<PayrollResult> {
    validate_payroll_input(input)?;

    let gross = calculate_gross_pay(input);

    let overtime_pay = round_money(gross.overtime_pay);
    let weekend_pay = round_money(gross.weekend_pay);
    let holiday_pay = round_money(gross.holiday_pay);
    let allowances_total = round_money(gross.allowances_total);
    let standby_pay = round_money(gross.standby_pay);
    let optional_allowances_total = round_money(gross.optional_allowances_total);
    let total_gross = round_money(input.base_salary)
        + overtime_pay
        + weekend_pay
        + holiday_pay
        + allowances_total
        + standby_pay
        + optional_allowances_total;

    let income_tax = calculate_income_tax(total_gross, input.tax_credit_points);
    let income_tax_before_credits = round_money(income_tax.before_credits);
    let tax_credit = round_money(income_tax.credit);
    let income_tax_due = income_tax_before_credits - tax_credit;

    let national_insurance = round_money(national_insurance(total_gross));
    let health_tax = round_money(health_tax(total_gross));
    let pension_deduction = round_money(contribution_deduction(
        total_gross,
        input.pension_contribution_percent,
    ));
    let study_fund_deduction = round_money(contribution_deduction(
        total_gross,
        input.study_fund_contribution_percent,
    ));

    let optional = &input.optional_deductions;
    let disability_insurance = round_money(optional.disability_insurance);
    let union_dues = round_money(optional.union_dues);
    let professional_tax = round_money(optional.professional_tax);

    let total_deductions = income_tax_due
        + national_insurance
        + health_tax
        + pension_deduction
        + study_fund_deduction
        + disability_insurance
        + union_dues
        + professional_tax;

    let net_salary = total_gross - total_deductions;
    let effective_tax_rate = if total_gross.is_zero() {
        Decimal::ZERO
    } else {
        round_ratio(total_deductions / total_gross)
    };

    let tax_bands = income_tax
        .bands
        .into_iter()
        .map(|mut band| {
            band.tax = round_money(band.tax);
            band
        })
        .collect();

    debug!(
        total_gross = %total_gross,
        total_deductions = %total_deductions,
        net_salary = %net_salary,
        "Payroll calculation completed"
    );

    Ok(PayrollResult {
        base_salary: round_money(input.base_salary),
        hourly_rate: round_money(gross.hourly_rate),
        overtime_pay,
        weekend_pay,
        holiday_pay,
        allowances_total,
        standby_pay,
        optional_allowances_total,
        total_gross,
        income_tax_before_credits,
        tax_credit,
        income_tax: income_tax_due,
        national_insurance,
        health_tax,
        pension_deduction,
        study_fund_deduction,
        disability_insurance,
        union_dues,
        professional_tax,
        total_deductions,
        net_salary,
        effective_tax_rate,
        tax_bands,
    })
}
