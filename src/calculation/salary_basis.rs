//! Salary basis calculation.
//!
//! The monthly salary basis is the basic salary plus any allowances the
//! employee opted to include. The daily salary divides that basis by a
//! fixed 30-day month, not by calendar days.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GratuityRules;
use crate::error::EngineResult;
use crate::models::GratuityInput;

use super::decimal_ops::{add, div};

/// The salary figures a gratuity accrues on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBasis {
    /// Basic salary plus included allowances.
    pub monthly: Decimal,
    /// `monthly / days_per_month`.
    pub daily: Decimal,
}

/// Calculates the monthly and daily salary basis for an input.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::calculate_salary_basis;
/// use gratuity_engine::config::GratuityRules;
/// use gratuity_engine::models::GratuityInput;
/// use rust_decimal::Decimal;
///
/// let input = GratuityInput::new(Decimal::from(9000), Decimal::from(2), 0)
///     .with_allowances(Decimal::from(3000));
/// let basis = calculate_salary_basis(&input, &GratuityRules::uae()).unwrap();
///
/// assert_eq!(basis.monthly, Decimal::from(12000));
/// assert_eq!(basis.daily, Decimal::from(400));
/// ```
pub fn calculate_salary_basis(
    input: &GratuityInput,
    rules: &GratuityRules,
) -> EngineResult<SalaryBasis> {
    let monthly = add(input.basic_salary, input.effective_allowances())?;
    let daily = daily_salary(monthly, rules)?;
    Ok(SalaryBasis { monthly, daily })
}

/// Divides a monthly salary by the rule set's days per month.
pub fn daily_salary(monthly: Decimal, rules: &GratuityRules) -> EngineResult<Decimal> {
    div(monthly, rules.days_per_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_basic_salary_only() {
        let input = GratuityInput::new(dec("10000"), dec("3"), 0);
        let basis = calculate_salary_basis(&input, &GratuityRules::uae()).unwrap();
        assert_eq!(basis.monthly, dec("10000"));
        // 10000 / 30 = 333.33…
        assert_eq!(basis.daily.round_dp(2), dec("333.33"));
    }

    #[test]
    fn test_included_allowances_raise_the_basis() {
        let input = GratuityInput::new(dec("10000"), dec("3"), 0).with_allowances(dec("5000"));
        let basis = calculate_salary_basis(&input, &GratuityRules::uae()).unwrap();
        assert_eq!(basis.monthly, dec("15000"));
        assert_eq!(basis.daily, dec("500"));
    }

    #[test]
    fn test_excluded_allowances_are_ignored() {
        let input = GratuityInput {
            basic_salary: dec("10000"),
            years_worked: dec("3"),
            months_worked: 0,
            include_allowances: false,
            allowances: dec("5000"),
        };
        let basis = calculate_salary_basis(&input, &GratuityRules::uae()).unwrap();
        assert_eq!(basis.monthly, dec("10000"));
    }

    #[test]
    fn test_daily_salary_uses_thirty_day_month() {
        let daily = daily_salary(dec("6000"), &GratuityRules::uae()).unwrap();
        assert_eq!(daily, dec("200"));
    }
}
