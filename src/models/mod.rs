//! Core data models for the pension and payroll engine.
//!
//! This module contains the input and result records of both calculators.

mod payroll;
mod pension;

pub use payroll::{
    BandTax, ChildAllowance, OptionalAllowance, OptionalAllowances, OptionalDeductions,
    PayrollInput, PayrollResult, Standby,
};
pub use pension::{FeeRegime, PensionProjectionInput, PensionProjectionResult, YearlySnapshot};
