//! Input collection.
//!
//! [`GratuityForm`] carries the raw text a user typed. Sanitizing it reads
//! the leading number of each field (blanks and non-numeric text become
//! zero), clamps negatives to zero and clamps months into `0..=11`, then
//! hands a [`GratuityInput`] to the calculator. Rejecting a zero salary is
//! left to the calculator.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::GratuityInput;

/// Highest month value the form accepts.
pub const MAX_FORM_MONTHS: i32 = 11;

/// Raw, unvalidated form fields.
///
/// # Example
///
/// ```
/// use gratuity_engine::presentation::GratuityForm;
/// use rust_decimal::Decimal;
///
/// let form = GratuityForm {
///     basic_salary: "12000".to_string(),
///     years_worked: "4".to_string(),
///     months_worked: "15".to_string(),
///     include_allowances: false,
///     allowances: "3000".to_string(),
/// };
///
/// let input = form.sanitize();
/// assert_eq!(input.months_worked, 11);
/// assert_eq!(input.allowances, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityForm {
    /// Basic monthly salary text.
    #[serde(default)]
    pub basic_salary: String,
    /// Years of service text.
    #[serde(default)]
    pub years_worked: String,
    /// Additional months text.
    #[serde(default)]
    pub months_worked: String,
    /// State of the "include allowances" checkbox.
    #[serde(default)]
    pub include_allowances: bool,
    /// Allowances text, only read when the checkbox is set.
    #[serde(default)]
    pub allowances: String,
}

impl GratuityForm {
    /// Converts the raw fields into calculator input.
    pub fn sanitize(&self) -> GratuityInput {
        let allowances = if self.include_allowances {
            parse_amount(&self.allowances)
        } else {
            Decimal::ZERO
        };

        GratuityInput {
            basic_salary: parse_amount(&self.basic_salary),
            years_worked: parse_amount(&self.years_worked),
            months_worked: parse_months(&self.months_worked),
            include_allowances: self.include_allowances,
            allowances,
        }
    }
}

/// Parses a non-negative decimal from the leading number in `raw`.
///
/// Trailing text is ignored (`"12000 AED"` reads as 12000) and exponents are
/// honoured (`"1e4"` reads as 10000). Blanks and text without a leading
/// number read as zero.
pub fn parse_amount(raw: &str) -> Decimal {
    leading_number(raw, false)
        .map(|value| value.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a month count from the leading integer in `raw`, clamped into
/// `0..=11`. Anything after the digits is ignored, so `"7.9"` reads as 7.
pub fn parse_months(raw: &str) -> i32 {
    let months = leading_number(raw, true).unwrap_or(Decimal::ZERO);
    if months <= Decimal::ZERO {
        return 0;
    }
    months
        .to_i32()
        .map_or(MAX_FORM_MONTHS, |value| value.min(MAX_FORM_MONTHS))
}

/// Reads an optionally signed number off the front of `raw`.
///
/// With `integer_only` the number stops at the first non-digit; otherwise a
/// fractional part and an exponent are accepted.
fn leading_number(raw: &str, integer_only: bool) -> Option<Decimal> {
    let text = raw.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let whole = take_digits(rest);
    let mut rest = &rest[whole.len()..];
    let mut fraction = "";
    if !integer_only {
        if let Some(after_point) = rest.strip_prefix('.') {
            fraction = take_digits(after_point);
            rest = &after_point[fraction.len()..];
        }
    }
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut mantissa = String::with_capacity(whole.len() + fraction.len() + 3);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if whole.is_empty() { "0" } else { whole });
    if !fraction.is_empty() {
        mantissa.push('.');
        mantissa.push_str(fraction);
    }

    let exponent = if integer_only {
        None
    } else {
        rest.strip_prefix(['e', 'E']).and_then(|after| {
            let (sign, unsigned) = match after.strip_prefix('-') {
                Some(unsigned) => ("-", unsigned),
                None => ("", after.strip_prefix('+').unwrap_or(after)),
            };
            let digits = take_digits(unsigned);
            (!digits.is_empty()).then(|| format!("{sign}{digits}"))
        })
    };

    match exponent {
        Some(exponent) => Decimal::from_scientific(&format!("{mantissa}e{exponent}")).ok(),
        None => Decimal::from_str(&mantissa).ok(),
    }
}

fn take_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}
