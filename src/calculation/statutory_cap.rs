//! Statutory cap on the total gratuity.
//!
//! The gratuity payable cannot exceed two years' compensation, where a
//! year's compensation is the monthly salary basis × 12.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GratuityRules;
use crate::error::EngineResult;
use crate::models::{BreakdownLine, LineKind};

use super::decimal_ops::{div, mul, sub, to_fixed_2};
use super::service_period::MONTHS_PER_YEAR;

/// The result of applying the statutory cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryCapResult {
    /// `monthly_salary_basis × cap_months`.
    pub cap_amount: Decimal,
    /// The smaller of the raw gratuity and the cap.
    pub total_gratuity: Decimal,
    /// Whether the raw gratuity exceeded the cap.
    pub was_capped: bool,
    /// Negative adjustment line bringing the raw amount down to the cap.
    pub adjustment: Option<BreakdownLine>,
}

/// Limits a raw gratuity to the statutory cap.
///
/// The cap only applies when the raw amount is strictly greater than the
/// cap; a raw amount equal to the cap is paid as is.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::apply_statutory_cap;
/// use gratuity_engine::config::GratuityRules;
/// use rust_decimal::Decimal;
///
/// let result = apply_statutory_cap(
///     Decimal::from(142500),
///     Decimal::from(5000),
///     &GratuityRules::uae(),
/// )
/// .unwrap();
///
/// assert!(result.was_capped);
/// assert_eq!(result.total_gratuity, Decimal::from(120000));
/// assert_eq!(result.adjustment.unwrap().amount, Decimal::from(-22500));
/// ```
pub fn apply_statutory_cap(
    raw_gratuity: Decimal,
    monthly_salary_basis: Decimal,
    rules: &GratuityRules,
) -> EngineResult<StatutoryCapResult> {
    let cap_amount = mul(monthly_salary_basis, rules.cap_months)?;

    if raw_gratuity <= cap_amount {
        return Ok(StatutoryCapResult {
            cap_amount,
            total_gratuity: raw_gratuity,
            was_capped: false,
            adjustment: None,
        });
    }

    let cap_years = div(rules.cap_months, MONTHS_PER_YEAR)?.normalize();
    let unit = if cap_years == Decimal::ONE { "year's" } else { "years'" };
    let adjustment = BreakdownLine {
        description: "Maximum limit applied".to_string(),
        calculation_text: format!(
            "Limited to {} {} salary ({} {})",
            cap_years,
            unit,
            rules.currency,
            to_fixed_2(cap_amount)
        ),
        amount: sub(cap_amount, raw_gratuity)?,
        kind: LineKind::CapAdjustment,
    };

    Ok(StatutoryCapResult {
        cap_amount,
        total_gratuity: cap_amount,
        was_capped: true,
        adjustment: Some(adjustment),
    })
}
