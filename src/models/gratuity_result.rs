//! Gratuity result models.
//!
//! This module contains the [`GratuityResult`] type and the [`BreakdownLine`]
//! items that explain how the total was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a breakdown line represents.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::LineKind;
///
/// let kind = LineKind::CapAdjustment;
/// assert_eq!(format!("{:?}", kind), "CapAdjustment");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Service is below the minimum eligibility period; the amount is zero.
    Ineligible,
    /// Accrual for a band of service years.
    Tier,
    /// Reduction applied when the accrued amount exceeds the statutory cap.
    CapAdjustment,
}

/// A single line item in a gratuity breakdown.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::{BreakdownLine, LineKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = BreakdownLine {
///     description: "First 5 years of service".to_string(),
///     calculation_text: "5 years × 21 days × AED 333.33 (daily salary)".to_string(),
///     amount: Decimal::from_str("35000").unwrap(),
///     kind: LineKind::Tier,
/// };
/// assert!(!line.is_cap_adjustment());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Short description of the line.
    pub description: String,
    /// Human-readable formula trace.
    pub calculation_text: String,
    /// The signed amount. Negative only for the cap adjustment.
    pub amount: Decimal,
    /// What the line represents.
    pub kind: LineKind,
}

impl BreakdownLine {
    /// Returns true if this line reduces the total down to the cap.
    pub fn is_cap_adjustment(&self) -> bool {
        self.kind == LineKind::CapAdjustment
    }
}

/// The complete result of a gratuity calculation.
///
/// `total_gratuity` is the smaller of the accrued amount and `cap_amount`.
/// The breakdown lists the accrual lines in order, followed by the cap
/// adjustment when one was needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityResult {
    /// The gratuity payable.
    pub total_gratuity: Decimal,
    /// Service duration in years (years + months / 12).
    pub service_years: Decimal,
    /// Basic salary plus any included allowances.
    pub monthly_salary_basis: Decimal,
    /// Ordered calculation breakdown.
    pub breakdown: Vec<BreakdownLine>,
    /// Whether the statutory cap reduced the accrued amount.
    pub was_capped: bool,
    /// The statutory ceiling for this salary basis.
    pub cap_amount: Decimal,
}

impl GratuityResult {
    /// The accrued amount before the cap, i.e. the sum of every line except
    /// the cap adjustment.
    pub fn raw_gratuity(&self) -> Decimal {
        self.breakdown
            .iter()
            .filter(|line| !line.is_cap_adjustment())
            .map(|line| line.amount)
            .sum()
    }

    /// The cap adjustment line, if the cap was applied.
    pub fn cap_adjustment(&self) -> Option<&BreakdownLine> {
        self.breakdown.iter().find(|line| line.is_cap_adjustment())
    }
}
