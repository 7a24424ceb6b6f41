//! Payroll input and result models.
//!
//! This module defines the monthly compensation structure consumed by the payroll
//! calculator ([`PayrollInput`]) and the gross-to-net breakdown it produces
//! ([`PayrollResult`]). All money is carried as [`Decimal`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// On-call ("כוננות") pay arrangement.
///
/// # Example
///
/// ```
/// use pension_engine::models::Standby;
/// use rust_decimal_macros::dec;
///
/// let json = r#"{"mode": "fixed", "days": 4, "rate": 150}"#;
/// let standby: Standby = serde_json::from_str(json).unwrap();
/// assert_eq!(standby, Standby::Fixed { days: dec!(4), rate: dec!(150) });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Standby {
    /// A fixed amount for every standby day.
    Fixed {
        /// Number of standby days in the month.
        days: Decimal,
        /// Amount paid per standby day.
        rate: Decimal,
    },
    /// A percentage of the daily-equivalent salary (base / 30) for every standby day.
    Percentage {
        /// Number of standby days in the month.
        days: Decimal,
        /// Percentage of the daily salary paid per standby day.
        percentage: Decimal,
    },
}

impl Standby {
    /// Number of standby days, regardless of mode.
    pub fn days(&self) -> Decimal {
        match self {
            Standby::Fixed { days, .. } | Standby::Percentage { days, .. } => *days,
        }
    }
}

/// A flat monthly allowance that only counts when enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalAllowance {
    /// Whether the allowance is paid this month.
    #[serde(default)]
    pub enabled: bool,
    /// Monthly amount.
    #[serde(default)]
    pub amount: Decimal,
}

/// A per-child allowance that only counts when enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAllowance {
    /// Whether the allowance is paid this month.
    #[serde(default)]
    pub enabled: bool,
    /// Monthly amount per child.
    #[serde(default)]
    pub amount_per_child: Decimal,
    /// Number of eligible children.
    #[serde(default)]
    pub children: u32,
}

/// Optional allowances, each gated by its own flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalAllowances {
    /// Company car value.
    #[serde(default)]
    pub car: OptionalAllowance,
    /// Phone allowance.
    #[serde(default)]
    pub phone: OptionalAllowance,
    /// Travel allowance.
    #[serde(default)]
    pub travel: OptionalAllowance,
    /// Per-child allowance.
    #[serde(default)]
    pub per_child: ChildAllowance,
}

/// Flat monthly deductions copied verbatim into the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalDeductions {
    /// Disability insurance premium.
    #[serde(default)]
    pub disability_insurance: Decimal,
    /// Union dues.
    #[serde(default)]
    pub union_dues: Decimal,
    /// Professional tax.
    #[serde(default)]
    pub professional_tax: Decimal,
}

/// A monthly compensation structure to be converted from gross to net.
///
/// # Example
///
/// ```
/// use pension_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let input = PayrollInput {
///     base_salary: dec!(12000),
///     work_hours: dec!(186),
///     pension_contribution_percent: dec!(6),
///     ..PayrollInput::default()
/// };
/// assert!(input.standby.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollInput {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Contracted monthly hours.
    pub work_hours: Decimal,
    /// Overtime hours (paid at 125%).
    pub overtime_hours: Decimal,
    /// Weekend hours (paid at 150%).
    pub weekend_hours: Decimal,
    /// Holiday hours (paid at 200%).
    pub holiday_hours: Decimal,
    /// Allowance category to monthly amount (health, transport, food, ...).
    pub allowances: BTreeMap<String, Decimal>,
    /// Standby pay arrangement, if any.
    pub standby: Option<Standby>,
    /// Flag-gated optional allowances.
    pub optional_allowances: OptionalAllowances,
    /// Employee pension contribution percentage.
    pub pension_contribution_percent: Decimal,
    /// Employee study fund contribution percentage.
    pub study_fund_contribution_percent: Decimal,
    /// Income tax credit points.
    pub tax_credit_points: Decimal,
    /// Flat optional deductions.
    pub optional_deductions: OptionalDeductions,
}

/// Income tax attributable to one band of the progressive schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandTax {
    /// Band number, starting at 1.
    pub band: u32,
    /// Annual lower bound of the band.
    pub lower: Decimal,
    /// Annual upper bound of the band; `None` for the top band.
    pub upper: Option<Decimal>,
    /// Marginal rate of the band as a fraction.
    pub rate: Decimal,
    /// Annual income falling within this band.
    pub taxable_amount: Decimal,
    /// Annual tax levied on that income.
    pub tax: Decimal,
}

/// The gross-to-net breakdown of a monthly salary.
///
/// Money figures are rounded to two decimal places, the effective rate to four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    /// Monthly base salary.
    pub base_salary: Decimal,
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
    /// Total monthly gross.
    pub total_gross: Decimal,
    /// Monthly income tax before credit points.
    pub income_tax_before_credits: Decimal,
    /// Value of the credit points actually used (never more than the tax).
    pub tax_credit: Decimal,
    /// Monthly income tax after credit points.
    pub income_tax: Decimal,
    /// National insurance contribution.
    pub national_insurance: Decimal,
    /// Health tax.
    pub health_tax: Decimal,
    /// Employee pension contribution.
    pub pension_deduction: Decimal,
    /// Employee study fund contribution.
    pub study_fund_deduction: Decimal,
    /// Disability insurance premium.
    pub disability_insurance: Decimal,
    /// Union dues.
    pub union_dues: Decimal,
    /// Professional tax.
    pub professional_tax: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// `total_gross - total_deductions`.
    pub net_salary: Decimal,
    /// `total_deductions / total_gross`, zero when gross is zero.
    pub effective_tax_rate: Decimal,
    /// Annual income tax broken down per band.
    pub tax_bands: Vec<BandTax>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standby_percentage_deserializes() {
        let standby: Standby =
            serde_json::from_str(r#"{"mode": "percentage", "days": 3, "percentage": 25}"#)
                .unwrap();
        assert_eq!(
            standby,
            Standby::Percentage {
                days: dec!(3),
                percentage: dec!(25)
            }
        );
        assert_eq!(standby.days(), dec!(3));
    }

    #[test]
    fn test_standby_rejects_unknown_mode() {
        let result: Result<Standby, _> =
            serde_json::from_str(r#"{"mode": "hourly", "days": 3, "rate": 25}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_allowances_default_to_disabled() {
        let allowances: OptionalAllowances = serde_json::from_str("{}").unwrap();
        assert!(!allowances.car.enabled);
        assert!(!allowances.per_child.enabled);
        assert_eq!(allowances.per_child.children, 0);
    }

    #[test]
    fn test_child_allowance_deserializes_from_camel_case() {
        let allowance: ChildAllowance =
            serde_json::from_str(r#"{"enabled": true, "amountPerChild": 180, "children": 2}"#)
                .unwrap();
        assert!(allowance.enabled);
        assert_eq!(allowance.amount_per_child, dec!(180));
        assert_eq!(allowance.children, 2);
    }

    #[test]
    fn test_payroll_input_default_is_empty() {
        let input = PayrollInput::default();
        assert_eq!(input.base_salary, Decimal::ZERO);
        assert!(input.allowances.is_empty());
        assert!(input.standby.is_none());
    }
}
