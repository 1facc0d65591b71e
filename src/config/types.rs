//! Configuration types for gratuity rules.
//!
//! [`GratuityRules`] holds the statutory constants the calculator works
//! from. The built-in [`GratuityRules::uae`] set matches the current UAE
//! end-of-service scheme; the same shape can be deserialized from YAML.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Salary days per month used to derive the daily salary.
pub const UAE_DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Minimum service, in years, before any gratuity accrues.
pub const UAE_MINIMUM_SERVICE_YEARS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Length of the first accrual tier in years.
pub const UAE_FIRST_TIER_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Days of salary accrued per year within the first tier.
pub const UAE_FIRST_TIER_DAYS_PER_YEAR: Decimal = Decimal::from_parts(21, 0, 0, false, 0);

/// Days of salary accrued per year beyond the first tier.
pub const UAE_SUBSEQUENT_DAYS_PER_YEAR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Cap on the total gratuity, in months of salary (two years).
pub const UAE_CAP_MONTHS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Identifying information about a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesMetadata {
    /// Short code for the rule set (e.g. "uae").
    pub code: String,
    /// Human-readable name of the rule set.
    pub name: String,
}

/// Statutory constants for a gratuity calculation.
///
/// # Example
///
/// ```
/// use gratuity_engine::config::GratuityRules;
/// use rust_decimal::Decimal;
///
/// let rules = GratuityRules::uae();
/// assert_eq!(rules.first_tier_days_per_year, Decimal::from(21));
/// assert_eq!(rules.currency, "AED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityRules {
    /// Rule set metadata.
    pub metadata: RulesMetadata,
    /// Currency code used in formula text and display.
    pub currency: String,
    /// Divisor turning a monthly salary into a daily salary.
    pub days_per_month: Decimal,
    /// Service below this many years earns nothing.
    pub minimum_service_years: Decimal,
    /// Years covered by the first tier (inclusive upper bound).
    pub first_tier_years: Decimal,
    /// Salary days per year in the first tier.
    pub first_tier_days_per_year: Decimal,
    /// Salary days per year after the first tier.
    pub subsequent_days_per_year: Decimal,
    /// Ceiling on the total, in months of salary basis.
    pub cap_months: Decimal,
}

impl GratuityRules {
    /// The current UAE scheme: 21 days per year for the first five years,
    /// 30 days per year after that, capped at two years' salary.
    pub fn uae() -> Self {
        Self {
            metadata: RulesMetadata {
                code: "uae".to_string(),
                name: "UAE end-of-service gratuity".to_string(),
            },
            currency: "AED".to_string(),
            days_per_month: UAE_DAYS_PER_MONTH,
            minimum_service_years: UAE_MINIMUM_SERVICE_YEARS,
            first_tier_years: UAE_FIRST_TIER_YEARS,
            first_tier_days_per_year: UAE_FIRST_TIER_DAYS_PER_YEAR,
            subsequent_days_per_year: UAE_SUBSEQUENT_DAYS_PER_YEAR,
            cap_months: UAE_CAP_MONTHS,
        }
    }

    /// Checks that the constants describe a usable scheme.
    ///
    /// `source` names where the rules came from and is used in the error.
    pub fn validate(&self, source: &str) -> EngineResult<()> {
        let positive = [
            ("days_per_month", self.days_per_month),
            ("first_tier_years", self.first_tier_years),
            ("first_tier_days_per_year", self.first_tier_days_per_year),
            ("subsequent_days_per_year", self.subsequent_days_per_year),
            ("cap_months", self.cap_months),
        ];

        for (name, value) in positive {
            if value <= Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("{} must be greater than zero, got {}", name, value),
                });
            }
        }

        if self.minimum_service_years < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: source.to_string(),
                message: "minimum_service_years cannot be negative".to_string(),
            });
        }

        if self.minimum_service_years > self.first_tier_years {
            return Err(EngineError::ConfigParseError {
                path: source.to_string(),
                message: "minimum_service_years cannot exceed first_tier_years".to_string(),
            });
        }

        if self.currency.trim().is_empty() {
            return Err(EngineError::ConfigParseError {
                path: source.to_string(),
                message: "currency cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for GratuityRules {
    fn default() -> Self {
        Self::uae()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uae_rules_are_valid() {
        assert!(GratuityRules::uae().validate("built-in").is_ok());
    }

    #[test]
    fn test_default_is_uae() {
        assert_eq!(GratuityRules::default(), GratuityRules::uae());
    }

    #[test]
    fn test_zero_days_per_month_rejected() {
        let mut rules = GratuityRules::uae();
        rules.days_per_month = Decimal::ZERO;

        let err = rules.validate("rules.yaml").unwrap_err();
        match err {
            EngineError::ConfigParseError { path, message } => {
                assert_eq!(path, "rules.yaml");
                assert!(message.contains("days_per_month"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_minimum_service_above_first_tier_rejected() {
        let mut rules = GratuityRules::uae();
        rules.minimum_service_years = Decimal::from(6);
        assert!(rules.validate("rules.yaml").is_err());
    }

    #[test]
    fn test_blank_currency_rejected() {
        let mut rules = GratuityRules::uae();
        rules.currency = "  ".to_string();
        assert!(rules.validate("rules.yaml").is_err());
    }
}
