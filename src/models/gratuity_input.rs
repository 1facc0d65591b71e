//! Gratuity input model.
//!
//! The [`GratuityInput`] is the validated numeric record handed to the
//! calculator by whichever front end collected the values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The values a gratuity calculation is performed on.
///
/// Construction does not validate anything; the calculator rejects
/// non-positive salaries and negative service components when it runs.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::GratuityInput;
/// use rust_decimal::Decimal;
///
/// let input = GratuityInput::new(Decimal::from(10000), Decimal::from(3), 6)
///     .with_allowances(Decimal::from(2500));
///
/// assert!(input.include_allowances);
/// assert_eq!(input.months_worked, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityInput {
    /// Basic monthly salary, excluding allowances.
    pub basic_salary: Decimal,
    /// Whole or fractional years of service.
    pub years_worked: Decimal,
    /// Additional months of service. Nominally 0 to 11, but larger values
    /// are used as given.
    pub months_worked: i32,
    /// Whether regular monthly allowances count towards the salary basis.
    #[serde(default)]
    pub include_allowances: bool,
    /// Monthly allowances. Ignored unless `include_allowances` is set.
    #[serde(default)]
    pub allowances: Decimal,
}

impl GratuityInput {
    /// Creates an input with no allowances.
    pub fn new(basic_salary: Decimal, years_worked: Decimal, months_worked: i32) -> Self {
        Self {
            basic_salary,
            years_worked,
            months_worked,
            include_allowances: false,
            allowances: Decimal::ZERO,
        }
    }

    /// Returns a copy of this input that counts `allowances` towards the
    /// monthly salary basis.
    pub fn with_allowances(mut self, allowances: Decimal) -> Self {
        self.include_allowances = true;
        self.allowances = allowances;
        self
    }

    /// The allowances that actually contribute to the salary basis.
    pub fn effective_allowances(&self) -> Decimal {
        if self.include_allowances {
            self.allowances
        } else {
            Decimal::ZERO
        }
    }
}
