//! Tiered gratuity accrual.
//!
//! ## Rate Structure
//!
//! **Gratuity accrues in two tiers:**
//! - Up to and including 5 years of service: 21 days' salary per year
//! - Every year beyond 5: 30 days' salary per year
//!
//! Service shorter than one year accrues nothing. A service period of
//! exactly 5 years is paid entirely at the first-tier rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GratuityRules;
use crate::error::EngineResult;
use crate::models::{BreakdownLine, LineKind};

use super::decimal_ops::{add, div, mul, sub, to_fixed_2};
use super::salary_basis::SalaryBasis;
use super::service_period::ServicePeriodResult;

/// The result of tiered accrual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAccrualResult {
    /// One line when ineligible or within the first tier, two otherwise.
    pub lines: Vec<BreakdownLine>,
    /// The accrued amount before any cap, equal to the sum of `lines`.
    pub raw_gratuity: Decimal,
}

/// Calculates the uncapped gratuity and its breakdown lines.
///
/// - **Ineligible** (`service_years < 1`): a single zero-amount line.
/// - **Single tier** (`1 <= service_years <= 5`):
///   `service_years × 21 × daily_salary`.
/// - **Two tiers** (`service_years > 5`): `5 × 21 × daily_salary` plus
///   `(service_years - 5) × 30 × daily_salary`.
///
/// Amounts are evaluated as `years × days × monthly / 30` so whole-number
/// inputs produce exact results; this equals the formulas above.
///
/// # Examples
///
/// ## 10 years on 10,000 per month (two tiers)
///
/// ```
/// use gratuity_engine::calculation::{
///     calculate_salary_basis, calculate_service_period, calculate_tier_accrual,
/// };
/// use gratuity_engine::config::GratuityRules;
/// use gratuity_engine::models::GratuityInput;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::uae();
/// let input = GratuityInput::new(Decimal::from(10000), Decimal::from(10), 0);
/// let period = calculate_service_period(input.years_worked, input.months_worked, &rules).unwrap();
/// let basis = calculate_salary_basis(&input, &rules).unwrap();
///
/// let result = calculate_tier_accrual(&period, &basis, &rules).unwrap();
///
/// assert_eq!(result.lines.len(), 2);
/// assert_eq!(result.lines[0].amount, Decimal::from(35000));
/// assert_eq!(result.lines[1].amount, Decimal::from(50000));
/// assert_eq!(result.raw_gratuity, Decimal::from(85000));
/// ```
pub fn calculate_tier_accrual(
    period: &ServicePeriodResult,
    basis: &SalaryBasis,
    rules: &GratuityRules,
) -> EngineResult<TierAccrualResult> {
    let daily_text = format!("{} {}", rules.currency, to_fixed_2(basis.daily));

    if !period.eligible {
        let minimum = rules.minimum_service_years.normalize();
        let unit = if minimum == Decimal::ONE { "year" } else { "years" };
        let line = BreakdownLine {
            description: format!("Service period less than {} {}", minimum, unit),
            calculation_text: "No gratuity eligible".to_string(),
            amount: Decimal::ZERO,
            kind: LineKind::Ineligible,
        };
        return Ok(TierAccrualResult {
            lines: vec![line],
            raw_gratuity: Decimal::ZERO,
        });
    }

    let first_tier_days = rules.first_tier_days_per_year;

    if period.service_years <= rules.first_tier_years {
        let years_text = to_fixed_2(period.service_years);
        let amount = accrue(period.service_years, first_tier_days, basis.monthly, rules)?;
        let line = BreakdownLine {
            description: format!(
                "Service period: {} years (≤{} years)",
                years_text,
                rules.first_tier_years.normalize()
            ),
            calculation_text: format!(
                "{} years × {} days × {} (daily salary)",
                years_text,
                first_tier_days.normalize(),
                daily_text
            ),
            amount,
            kind: LineKind::Tier,
        };
        return Ok(TierAccrualResult {
            lines: vec![line],
            raw_gratuity: amount,
        });
    }

    let first_tier_years = rules.first_tier_years.normalize();
    let first_amount = accrue(first_tier_years, first_tier_days, basis.monthly, rules)?;
    let first_line = BreakdownLine {
        description: format!("First {} years of service", first_tier_years),
        calculation_text: format!(
            "{} years × {} days × {} (daily salary)",
            first_tier_years,
            first_tier_days.normalize(),
            daily_text
        ),
        amount: first_amount,
        kind: LineKind::Tier,
    };

    let additional_years = sub(period.service_years, rules.first_tier_years)?;
    let additional_text = to_fixed_2(additional_years);
    let subsequent_days = rules.subsequent_days_per_year;
    let additional_amount = accrue(additional_years, subsequent_days, basis.monthly, rules)?;
    let additional_line = BreakdownLine {
        description: format!("Additional {} years of service", additional_text),
        calculation_text: format!(
            "{} years × {} days × {} (daily salary)",
            additional_text,
            subsequent_days.normalize(),
            daily_text
        ),
        amount: additional_amount,
        kind: LineKind::Tier,
    };

    Ok(TierAccrualResult {
        lines: vec![first_line, additional_line],
        raw_gratuity: add(first_amount, additional_amount)?,
    })
}

/// `years × days_per_year × monthly / days_per_month`
fn accrue(
    years: Decimal,
    days_per_year: Decimal,
    monthly: Decimal,
    rules: &GratuityRules,
) -> EngineResult<Decimal> {
    let salary_days = mul(years, days_per_year)?;
    let scaled = mul(salary_days, monthly)?;
    div(scaled, rules.days_per_month)
}
