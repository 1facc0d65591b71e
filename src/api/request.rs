//! Request types for the Gratuity Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. Raw form submissions use
//! [`GratuityForm`](crate::presentation::GratuityForm) directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::GratuityInput;

/// Request body for the `/calculate` endpoint.
///
/// Decimal fields accept either JSON strings or numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Basic monthly salary.
    pub basic_salary: Decimal,
    /// Years of service.
    pub years_worked: Decimal,
    /// Additional months of service.
    #[serde(default)]
    pub months_worked: i32,
    /// Whether allowances count towards the salary basis.
    #[serde(default)]
    pub include_allowances: bool,
    /// Monthly allowances.
    #[serde(default)]
    pub allowances: Decimal,
}

impl From<CalculationRequest> for GratuityInput {
    fn from(req: CalculationRequest) -> Self {
        GratuityInput {
            basic_salary: req.basic_salary,
            years_worked: req.years_worked,
            months_worked: req.months_worked,
            include_allowances: req.include_allowances,
            allowances: req.allowances,
        }
    }
}
