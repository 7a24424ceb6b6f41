//! Monthly pension deposit derived from salary and contribution rates.
//!
//! The projector treats the monthly deposit as a given scalar. Callers that only
//! know the member's salary use [`derive_monthly_deposit`] to obtain it from the
//! employee, employer and severance contribution percentages.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default employee contribution percentage.
pub const DEFAULT_EMPLOYEE_PERCENT: f64 = 6.0;

/// Default employer contribution percentage.
pub const DEFAULT_EMPLOYER_PERCENT: f64 = 6.5;

/// Default employer severance contribution percentage.
pub const DEFAULT_SEVERANCE_PERCENT: f64 = 6.0;

/// Contribution percentages applied to the insured salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRates {
    /// Employee contribution percentage.
    #[serde(default = "default_employee_percent")]
    pub employee_percent: f64,
    /// Employer contribution percentage.
    #[serde(default = "default_employer_percent")]
    pub employer_percent: f64,
    /// Employer severance contribution percentage.
    #[serde(default = "default_severance_percent")]
    pub severance_percent: f64,
}

fn default_employee_percent() -> f64 {
    DEFAULT_EMPLOYEE_PERCENT
}

fn default_employer_percent() -> f64 {
    DEFAULT_EMPLOYER_PERCENT
}

fn default_severance_percent() -> f64 {
    DEFAULT_SEVERANCE_PERCENT
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self {
            employee_percent: DEFAULT_EMPLOYEE_PERCENT,
            employer_percent: DEFAULT_EMPLOYER_PERCENT,
            severance_percent: DEFAULT_SEVERANCE_PERCENT,
        }
    }
}

impl ContributionRates {
    /// Sum of all contribution percentages.
    pub fn total_percent(&self) -> f64 {
        self.employee_percent + self.employer_percent + self.severance_percent
    }
}

/// Computes the monthly fund deposit for a salary.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameters`] if the salary or any rate is
/// negative or not finite.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::{derive_monthly_deposit, ContributionRates};
///
/// let deposit = derive_monthly_deposit(20_000.0, &ContributionRates::default()).unwrap();
/// assert!((deposit - 3_700.0).abs() < 1e-9);
/// ```
pub fn derive_monthly_deposit(monthly_salary: f64, rates: &ContributionRates) -> EngineResult<f64> {
    let checks = [
        ("monthlySalary", monthly_salary),
        ("contributionRates.employeePercent", rates.employee_percent),
        ("contributionRates.employerPercent", rates.employer_percent),
        ("contributionRates.severancePercent", rates.severance_percent),
    ];
    for (field, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::invalid(
                field,
                "must be a finite, non-negative number",
            ));
        }
    }

    Ok(monthly_salary * rates.total_percent() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_total() {
        assert!((ContributionRates::default().total_percent() - 18.5).abs() < 1e-12);
    }

    #[test]
    fn test_custom_rates() {
        let rates = ContributionRates {
            employee_percent: 7.0,
            employer_percent: 7.5,
            severance_percent: 8.33,
        };
        let deposit = derive_monthly_deposit(10_000.0, &rates).unwrap();
        assert!((deposit - 2_283.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_salary_gives_zero_deposit() {
        assert_eq!(
            derive_monthly_deposit(0.0, &ContributionRates::default()).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err = derive_monthly_deposit(-1.0, &ContributionRates::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidParameters { ref field, .. } if field == "monthlySalary"
        ));
    }

    #[test]
    fn test_missing_rates_take_defaults() {
        let rates: ContributionRates =
            serde_json::from_str(r#"{"employeePercent": 7}"#).unwrap();
        assert_eq!(rates.employee_percent, 7.0);
        assert_eq!(rates.employer_percent, DEFAULT_EMPLOYER_PERCENT);
        assert_eq!(rates.severance_percent, DEFAULT_SEVERANCE_PERCENT);
    }
}
