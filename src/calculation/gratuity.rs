//! End-of-service gratuity calculation.
//!
//! [`compute`] validates a [`GratuityInput`] and runs the rules in order:
//! salary basis, service period, tiered accrual, then the statutory cap.
//! It is a pure function of its input; nothing is logged or stored.

use rust_decimal::Decimal;

use crate::config::GratuityRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{GratuityInput, GratuityResult};

use super::salary_basis::calculate_salary_basis;
use super::service_period::calculate_service_period;
use super::statutory_cap::apply_statutory_cap;
use super::tier_accrual::calculate_tier_accrual;

/// Computes a gratuity under the built-in UAE rules.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `basic_salary <= 0`,
/// `years_worked < 0`, `months_worked < 0`, or included allowances are
/// negative. Months above 11 are accepted and used as given.
///
/// # Examples
///
/// ## 30 years on 5,000 per month (capped)
///
/// ```
/// use gratuity_engine::calculation::compute;
/// use gratuity_engine::models::GratuityInput;
/// use rust_decimal::Decimal;
///
/// let input = GratuityInput::new(Decimal::from(5000), Decimal::from(30), 0);
/// let result = compute(&input).unwrap();
///
/// assert!(result.was_capped);
/// assert_eq!(result.total_gratuity, Decimal::from(120000));
/// assert_eq!(result.breakdown.len(), 3);
/// ```
///
/// ## Zero salary is rejected
///
/// ```
/// use gratuity_engine::calculation::compute;
/// use gratuity_engine::error::EngineError;
/// use gratuity_engine::models::GratuityInput;
/// use rust_decimal::Decimal;
///
/// let input = GratuityInput::new(Decimal::ZERO, Decimal::from(3), 0);
/// assert!(matches!(compute(&input), Err(EngineError::InvalidInput { .. })));
/// ```
pub fn compute(input: &GratuityInput) -> EngineResult<GratuityResult> {
    compute_with_rules(input, &GratuityRules::uae())
}

/// Computes a gratuity under an explicit rule set.
pub fn compute_with_rules(
    input: &GratuityInput,
    rules: &GratuityRules,
) -> EngineResult<GratuityResult> {
    validate_input(input)?;

    let basis = calculate_salary_basis(input, rules)?;
    let period = calculate_service_period(input.years_worked, input.months_worked, rules)?;
    let accrual = calculate_tier_accrual(&period, &basis, rules)?;
    let cap = apply_statutory_cap(accrual.raw_gratuity, basis.monthly, rules)?;

    let mut breakdown = accrual.lines;
    breakdown.extend(cap.adjustment);

    Ok(GratuityResult {
        total_gratuity: cap.total_gratuity,
        service_years: period.service_years,
        monthly_salary_basis: basis.monthly,
        breakdown,
        was_capped: cap.was_capped,
        cap_amount: cap.cap_amount,
    })
}

/// Rejects inputs the calculator cannot produce a meaningful result for.
pub fn validate_input(input: &GratuityInput) -> EngineResult<()> {
    if input.basic_salary <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "basic_salary",
            format!("must be greater than zero, got {}", input.basic_salary),
        ));
    }

    if input.years_worked < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "years_worked",
            format!("cannot be negative, got {}", input.years_worked),
        ));
    }

    if input.months_worked < 0 {
        return Err(EngineError::invalid_input(
            "months_worked",
            format!("cannot be negative, got {}", input.months_worked),
        ));
    }

    if input.include_allowances && input.allowances < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "allowances",
            format!("cannot be negative, got {}", input.allowances),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(basic: &str, years: &str, months: i32) -> GratuityInput {
        GratuityInput::new(dec(basic), dec(years), months)
    }

    fn assert_invalid_field(result: EngineResult<GratuityResult>, expected: &str) {
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidInput for {expected}, got {other:?}"),
        }
    }

    // ==========================================================================
    // GR-001: 10,000 basic, 3 years, no allowances
    // ==========================================================================
    #[test]
    fn test_gr_001_three_years_uncapped() {
        let result = compute(&input("10000", "3", 0)).unwrap();

        assert_eq!(result.service_years, dec("3"));
        assert_eq!(result.monthly_salary_basis, dec("10000"));
        assert_eq!(result.total_gratuity, dec("21000"));
        assert_eq!(result.cap_amount, dec("240000"));
        assert!(!result.was_capped);
        assert_eq!(result.breakdown.len(), 1);
    }

    // ==========================================================================
    // GR-002: 10,000 basic, 10 years
    // ==========================================================================
    #[test]
    fn test_gr_002_ten_years_two_tiers_uncapped() {
        let result = compute(&input("10000", "10", 0)).unwrap();

        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[0].amount, dec("35000"));
        assert_eq!(result.breakdown[1].amount, dec("50000"));
        assert_eq!(result.total_gratuity, dec("85000"));
        assert_eq!(result.cap_amount, dec("240000"));
        assert!(!result.was_capped);
    }

    // ==========================================================================
    // GR-003: 5,000 basic, 30 years hits the cap
    // ==========================================================================
    #[test]
    fn test_gr_003_thirty_years_capped() {
        let result = compute(&input("5000", "30", 0)).unwrap();

        // Tier 1: 5 × 21 × 5000 / 30 = 17500
        // Tier 2: 25 × 30 × 5000 / 30 = 125000
        // Raw: 142500, cap: 120000
        assert!(result.was_capped);
        assert_eq!(result.cap_amount, dec("120000"));
        assert_eq!(result.total_gratuity, dec("120000"));
        assert_eq!(result.raw_gratuity(), dec("142500"));

        let last = result.breakdown.last().unwrap();
        assert_eq!(last.kind, LineKind::CapAdjustment);
        assert_eq!(last.amount, dec("120000") - result.raw_gratuity());
    }

    // ==========================================================================
    // GR-004: boundary durations
    // ==========================================================================
    #[test]
    fn test_gr_004_eleven_months_pays_nothing() {
        let result = compute(&input("10000", "0", 11)).unwrap();
        assert_eq!(result.total_gratuity, Decimal::ZERO);
        assert_eq!(result.breakdown[0].kind, LineKind::Ineligible);
        assert!(!result.was_capped);
    }

    #[test]
    fn test_gr_004_exactly_one_year_pays_single_tier() {
        let result = compute(&input("10000", "1", 0)).unwrap();
        assert_eq!(result.total_gratuity, dec("7000"));
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].kind, LineKind::Tier);
    }

    #[test]
    fn test_gr_004_exactly_five_years_single_tier() {
        let result = compute(&input("10000", "5", 0)).unwrap();
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.total_gratuity, dec("35000"));
    }

    #[test]
    fn test_gr_004_just_over_five_years_two_tiers() {
        let result = compute(&input("10000", "5.0000001", 0)).unwrap();
        assert_eq!(result.breakdown.len(), 2);
    }

    // ==========================================================================
    // GR-005: allowances
    // ==========================================================================
    #[test]
    fn test_gr_005_allowances_raise_basis_and_cap() {
        let with = input("10000", "3", 0).with_allowances(dec("5000"));
        let result = compute(&with).unwrap();

        assert_eq!(result.monthly_salary_basis, dec("15000"));
        assert_eq!(result.cap_amount, dec("360000"));
        // 3 × 21 × 15000 / 30 = 31500
        assert_eq!(result.total_gratuity, dec("31500"));
    }

    #[test]
    fn test_gr_005_unchecked_allowances_ignored() {
        let mut unchecked = input("10000", "3", 0);
        unchecked.allowances = dec("5000");

        let result = compute(&unchecked).unwrap();
        assert_eq!(result.monthly_salary_basis, dec("10000"));
    }

    // ==========================================================================
    // GR-006: out-of-range months are used raw
    // ==========================================================================
    #[test]
    fn test_gr_006_months_above_eleven() {
        let result = compute(&input("10000", "2", 24)).unwrap();
        assert_eq!(result.service_years, dec("4"));
        assert_eq!(result.total_gratuity, dec("28000"));
    }

    // ==========================================================================
    // GR-007: invalid input
    // ==========================================================================
    #[test]
    fn test_gr_007_zero_salary_rejected() {
        assert_invalid_field(compute(&input("0", "3", 0)), "basic_salary");
    }

    #[test]
    fn test_gr_007_negative_salary_rejected() {
        assert_invalid_field(compute(&input("-1", "3", 0)), "basic_salary");
    }

    #[test]
    fn test_gr_007_negative_years_rejected() {
        assert_invalid_field(compute(&input("10000", "-0.5", 0)), "years_worked");
    }

    #[test]
    fn test_gr_007_negative_months_rejected() {
        assert_invalid_field(compute(&input("10000", "3", -1)), "months_worked");
    }

    #[test]
    fn test_gr_007_negative_included_allowances_rejected() {
        let bad = input("10000", "3", 0).with_allowances(dec("-100"));
        assert_invalid_field(compute(&bad), "allowances");
    }

    #[test]
    fn test_huge_salary_overflow_is_error_not_panic() {
        let result = compute(&GratuityInput::new(Decimal::MAX, dec("40"), 0));
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_custom_rules_are_honoured() {
        let mut rules = GratuityRules::uae();
        rules.first_tier_days_per_year = dec("15");

        let result = compute_with_rules(&input("3000", "2", 0), &rules).unwrap();
        // 2 × 15 × 3000 / 30 = 3000
        assert_eq!(result.total_gratuity, dec("3000"));
    }
}
