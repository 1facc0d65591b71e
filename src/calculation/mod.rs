//! Calculation logic for the Gratuity Engine.
//!
//! This module contains the gratuity calculator and the individual rules it
//! is built from: salary basis, service period and eligibility, tiered
//! accrual, and the statutory cap.

mod decimal_ops;
mod gratuity;
mod salary_basis;
mod service_period;
mod statutory_cap;
mod tier_accrual;

pub use decimal_ops::to_fixed_2;
pub use gratuity::{compute, compute_with_rules, validate_input};
pub use salary_basis::{SalaryBasis, calculate_salary_basis, daily_salary};
pub use service_period::{MONTHS_PER_YEAR, ServicePeriodResult, calculate_service_period};
pub use statutory_cap::{StatutoryCapResult, apply_statutory_cap};
pub use tier_accrual::{TierAccrualResult, calculate_tier_accrual};
