//! Service period calculation.
//!
//! Converts the years and months of service into a single decimal duration
//! and decides whether the employee has reached the minimum eligibility
//! period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GratuityRules;
use crate::error::EngineResult;

use super::decimal_ops::{add, div};

/// Months per year used when folding months into the service duration.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of a service period calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePeriodResult {
    /// Years of service, including months as a fraction of a year.
    pub service_years: Decimal,
    /// Whether the duration reaches the minimum service period.
    pub eligible: bool,
}

/// Calculates the service duration as `years + months / 12`.
///
/// Months are used as given; values above 11 simply add more than a year.
/// Eligibility is `service_years >= minimum_service_years`, so exactly one
/// year qualifies and anything shorter does not.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::calculate_service_period;
/// use gratuity_engine::config::GratuityRules;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::uae();
///
/// let period = calculate_service_period(Decimal::from(3), 6, &rules).unwrap();
/// assert_eq!(period.service_years, Decimal::new(35, 1));
/// assert!(period.eligible);
///
/// let short = calculate_service_period(Decimal::ZERO, 11, &rules).unwrap();
/// assert!(!short.eligible);
/// ```
pub fn calculate_service_period(
    years_worked: Decimal,
    months_worked: i32,
    rules: &GratuityRules,
) -> EngineResult<ServicePeriodResult> {
    let month_fraction = div(Decimal::from(months_worked), MONTHS_PER_YEAR)?;
    let service_years = add(years_worked, month_fraction)?;

    Ok(ServicePeriodResult {
        service_years,
        eligible: service_years >= rules.minimum_service_years,
    })
}
