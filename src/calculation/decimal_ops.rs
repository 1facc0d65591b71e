//! Checked decimal arithmetic shared by the gratuity rules.
//!
//! `Decimal`'s operator impls panic on overflow; these helpers surface the
//! overflow as an [`EngineError::CalculationError`] instead.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

fn overflow(operation: &str, lhs: Decimal, rhs: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!("decimal overflow computing {} {} {}", lhs, operation, rhs),
    }
}

pub(crate) fn add(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| overflow("+", lhs, rhs))
}

pub(crate) fn sub(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| overflow("-", lhs, rhs))
}

pub(crate) fn mul(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow("×", lhs, rhs))
}

/// Divides `lhs` by `rhs`. Callers guarantee `rhs` is non-zero.
pub(crate) fn div(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_div(rhs).ok_or_else(|| overflow("÷", lhs, rhs))
}

/// Rounds half away from zero to two places and renders with exactly two
/// decimals, e.g. `333.333…` → `"333.33"` and `5` → `"5.00"`.
pub fn to_fixed_2(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
