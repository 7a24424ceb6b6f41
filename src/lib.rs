//! Pension projection and payroll calculation engine.
//!
//! This crate provides the two calculators behind a pension/insurance CRM:
//! a month-by-month projection of a retirement fund under two management fee
//! regimes, and a gross-to-net salary calculation under the Israeli progressive
//! income tax and social insurance schedule. Both are pure functions in
//! [`calculation`]; [`api`] exposes them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
