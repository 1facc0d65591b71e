//! Display formatting for amounts and durations.

use rust_decimal::Decimal;

use crate::calculation::to_fixed_2;

/// Formats an amount with two decimals and comma thousands separators,
/// e.g. `-22500` → `"-22,500.00"`.
pub fn format_amount(amount: Decimal) -> String {
    let fixed = to_fixed_2(amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

/// Formats an amount prefixed by a currency code, e.g. `"AED 1,234.56"`.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{} {}", currency, format_amount(amount))
}

/// Formats a service duration, e.g. `"3.50 years"`.
pub fn format_years(years: Decimal) -> String {
    format!("{} years", to_fixed_2(years))
}
