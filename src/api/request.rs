//! Request types for the calculation API.
//!
//! This module defines the JSON request bodies of `/api/calculate` and
//! `/api/calculate-salary` and their conversion into the calculators' input
//! records. Requests are lenient about omitted optional fields; the
//! calculators themselves receive fully populated inputs.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculation::{ContributionRates, derive_monthly_deposit};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    FeeRegime, OptionalAllowances, OptionalDeductions, PayrollInput, PensionProjectionInput,
    Standby,
};

/// Credit points granted to every resident when the request does not specify any.
pub const DEFAULT_TAX_CREDIT_POINTS: Decimal = dec!(2.25);

/// Request body for the `/api/calculate` endpoint.
///
/// The monthly deposit is either given directly or derived from
/// `monthlySalary` and `contributionRates`; an explicit deposit wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// The member's age today.
    pub current_age: u32,
    /// The age at which the projection stops.
    pub retirement_age: u32,
    /// The opening fund balance.
    #[serde(default)]
    pub current_balance: f64,
    /// The amount contributed every month.
    #[serde(default)]
    pub monthly_deposit: Option<f64>,
    /// Insured salary used to derive the deposit when none is given.
    #[serde(default)]
    pub monthly_salary: Option<f64>,
    /// Contribution percentages applied to `monthly_salary`.
    #[serde(default)]
    pub contribution_rates: Option<ContributionRates>,
    /// Expected annual nominal return in percent.
    pub annual_return_percent: f64,
    /// Fees charged by the current provider.
    pub current_fees: FeeRegime,
    /// Fees charged by the alternative provider.
    pub alternative_fees: FeeRegime,
}

impl ProjectionRequest {
    /// Converts the request into a projection input, deriving the deposit if needed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameters`] if neither a deposit nor a
    /// salary is provided, or if the salary or contribution rates are invalid.
    pub fn into_input(self) -> EngineResult<PensionProjectionInput> {
        let monthly_deposit = match (self.monthly_deposit, self.monthly_salary) {
            (Some(deposit), _) => deposit,
            (None, Some(salary)) => {
                derive_monthly_deposit(salary, &self.contribution_rates.unwrap_or_default())?
            }
            (None, None) => {
                return Err(EngineError::invalid(
                    "monthlyDeposit, monthlySalary",
                    "either monthlyDeposit or monthlySalary is required",
                ));
            }
        };

        Ok(PensionProjectionInput {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            current_balance: self.current_balance,
            monthly_deposit,
            annual_return_percent: self.annual_return_percent,
            current_fees: self.current_fees,
            alternative_fees: self.alternative_fees,
        })
    }
}

/// Request body for the `/api/calculate-salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRequest {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Contracted monthly hours.
    pub work_hours: Decimal,
    /// Overtime hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Weekend hours.
    #[serde(default)]
    pub weekend_hours: Decimal,
    /// Holiday hours.
    #[serde(default)]
    pub holiday_hours: Decimal,
    /// Allowance category to monthly amount.
    #[serde(default)]
    pub allowances: BTreeMap<String, Decimal>,
    /// Standby pay arrangement.
    #[serde(default)]
    pub standby: Option<Standby>,
    /// Flag-gated optional allowances.
    #[serde(default)]
    pub optional_allowances: OptionalAllowances,
    /// Employee pension contribution percentage.
    #[serde(default)]
    pub pension_contribution_percent: Decimal,
    /// Employee study fund contribution percentage.
    #[serde(default)]
    pub study_fund_contribution_percent: Decimal,
    /// Income tax credit points.
    #[serde(default = "default_tax_credit_points")]
    pub tax_credit_points: Decimal,
    /// Flat optional deductions.
    #[serde(default)]
    pub optional_deductions: OptionalDeductions,
}

fn default_tax_credit_points() -> Decimal {
    DEFAULT_TAX_CREDIT_POINTS
}

impl From<SalaryRequest> for PayrollInput {
    fn from(req: SalaryRequest) -> Self {
        PayrollInput {
            base_salary: req.base_salary,
            work_hours: req.work_hours,
            overtime_hours: req.overtime_hours,
            weekend_hours: req.weekend_hours,
            holiday_hours: req.holiday_hours,
            allowances: req.allowances,
            standby: req.standby,
            optional_allowances: req.optional_allowances,
            pension_contribution_percent: req.pension_contribution_percent,
            study_fund_contribution_percent: req.study_fund_contribution_percent,
            tax_credit_points: req.tax_credit_points,
            optional_deductions: req.optional_deductions,
        }
    }
}
