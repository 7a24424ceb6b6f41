//! Calculation logic for the pension and payroll engine.
//!
//! This module holds the single authoritative implementation of both calculators:
//! the monthly-compounding pension projection under two fee regimes, and the
//! gross-to-net payroll calculation with time-based multipliers, allowances,
//! standby pay, progressive income tax and statutory deductions. Every entry
//! point (HTTP handlers, CLI batch mode) calls [`project`] and [`calculate`].

mod common;
mod contributions;
mod gross_pay;
mod income_tax;
mod payroll;
mod pension_projection;
mod statutory_deductions;
mod validation;

pub use common::{round_money, round_ratio, round_to_unit};
pub use contributions::{
    ContributionRates, DEFAULT_EMPLOYEE_PERCENT, DEFAULT_EMPLOYER_PERCENT,
    DEFAULT_SEVERANCE_PERCENT, derive_monthly_deposit,
};
pub use gross_pay::{
    DAYS_PER_MONTH, GrossPay, HOLIDAY_MULTIPLIER, OVERTIME_MULTIPLIER, WEEKEND_MULTIPLIER,
    calculate_gross_pay, calculate_standby_pay, optional_allowances_total,
};
pub use income_tax::{
    CREDIT_POINT_VALUE, INCOME_TAX_BRACKETS, IncomeTax, TaxBracket, annual_tax_by_band,
    calculate_income_tax,
};
pub use payroll::calculate;
pub use pension_projection::{RegimeProjection, monthly_rate_from_annual, project, simulate_regime};
pub use statutory_deductions::{
    HEALTH_TAX_CEILING, HEALTH_TAX_RATE, NATIONAL_INSURANCE_CEILING, NATIONAL_INSURANCE_RATE,
    contribution_deduction, health_tax, national_insurance,
};
pub use validation::{
    MAX_AGE, MAX_AMOUNT, MAX_HORIZON_YEARS, MAX_MONTHLY_HOURS, MAX_STANDBY_DAYS, MIN_AGE,
    MIN_WORK_HOURS, validate_payroll_input, validate_projection_input,
};
