//! Display view of a gratuity result.
//!
//! A [`ResultView`] is everything a front end needs to show a result:
//! formatted headline figures, one row per breakdown line and a total row.
//! It is built from a [`GratuityResult`] value and the currency code; it
//! never looks anything up on its own.

use serde::{Deserialize, Serialize};

use crate::models::{GratuityResult, LineKind};

use super::format::{format_currency, format_years};

/// Visual treatment for a breakdown row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStyle {
    /// Regular accrual or eligibility line.
    Normal,
    /// The cap adjustment, shown as a warning.
    Warning,
    /// The closing total row.
    Total,
}

/// A formatted breakdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Bold heading of the row.
    pub description: String,
    /// Formula trace shown beneath the heading. Empty for the total row.
    pub calculation_text: String,
    /// Formatted signed amount.
    pub amount: String,
    /// How the row should be styled.
    pub style: RowStyle,
}

/// The formatted result, ready to render.
///
/// # Example
///
/// ```
/// use gratuity_engine::calculation::compute;
/// use gratuity_engine::models::GratuityInput;
/// use gratuity_engine::presentation::ResultView;
/// use rust_decimal::Decimal;
///
/// let result = compute(&GratuityInput::new(Decimal::from(10000), Decimal::from(3), 0)).unwrap();
/// let view = ResultView::from_result(&result, "AED");
///
/// assert_eq!(view.total_gratuity, "AED 21,000.00");
/// assert_eq!(view.service_period, "3.00 years");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    /// Formatted gratuity payable.
    pub total_gratuity: String,
    /// Formatted service duration.
    pub service_period: String,
    /// Formatted monthly salary basis.
    pub monthly_salary: String,
    /// One row per breakdown line, in order.
    pub rows: Vec<BreakdownRow>,
    /// The closing total row.
    pub total_row: BreakdownRow,
}

impl ResultView {
    /// Formats `result` for display in `currency`.
    pub fn from_result(result: &GratuityResult, currency: &str) -> Self {
        let rows = result
            .breakdown
            .iter()
            .map(|line| BreakdownRow {
                description: line.description.clone(),
                calculation_text: line.calculation_text.clone(),
                amount: format_currency(line.amount, currency),
                style: match line.kind {
                    LineKind::CapAdjustment => RowStyle::Warning,
                    LineKind::Ineligible | LineKind::Tier => RowStyle::Normal,
                },
            })
            .collect();

        let total_gratuity = format_currency(result.total_gratuity, currency);

        Self {
            total_row: BreakdownRow {
                description: "Total Gratuity Amount:".to_string(),
                calculation_text: String::new(),
                amount: total_gratuity.clone(),
                style: RowStyle::Total,
            },
            total_gratuity,
            service_period: format_years(result.service_years),
            monthly_salary: format_currency(result.monthly_salary_basis, currency),
            rows,
        }
    }

    /// Renders the multi-line text report.
    pub fn to_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Total Gratuity: {}\n", self.total_gratuity));
        out.push_str(&format!("Service Period: {}\n", self.service_period));
        out.push_str(&format!("Monthly Salary: {}\n", self.monthly_salary));
        out.push_str("\nCalculation Breakdown:\n");

        for row in &self.rows {
            let marker = if row.style == RowStyle::Warning { "!" } else { "-" };
            out.push_str(&format!("{} {}\n", marker, row.description));
            out.push_str(&format!("    {}\n", row.calculation_text));
            out.push_str(&format!("    {}\n", row.amount));
        }

        out.push_str(&format!(
            "{} {}\n",
            self.total_row.description, self.total_row.amount
        ));
        out
    }

    /// Renders the plain-text summary offered for copying.
    pub fn to_copy_summary(&self) -> String {
        format!(
            "UAE Gratuity Calculation Results:\n\
             Total Gratuity: {}\n\
             Service Period: {}\n\
             Monthly Salary: {}\n\
             \n\
             Calculated using UAE Labor Law regulations\n\
             Source: UAE Gratuity Calculator",
            self.total_gratuity, self.service_period, self.monthly_salary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;
    use crate::models::GratuityInput;
    use rust_decimal::Decimal;

    fn view_for(basic: i64, years: i64) -> ResultView {
        let input = GratuityInput::new(Decimal::from(basic), Decimal::from(years), 0);
        ResultView::from_result(&compute(&input).unwrap(), "AED")
    }

    #[test]
    fn test_uncapped_rows_are_normal() {
        let view = view_for(10000, 10);

        assert_eq!(view.rows.len(), 2);
        assert!(view.rows.iter().all(|row| row.style == RowStyle::Normal));
        assert_eq!(view.rows[0].amount, "AED 35,000.00");
        assert_eq!(view.rows[1].amount, "AED 50,000.00");
        assert_eq!(view.total_row.amount, "AED 85,000.00");
        assert_eq!(view.total_row.style, RowStyle::Total);
    }

    #[test]
    fn test_cap_row_is_warning() {
        let view = view_for(5000, 30);

        let last = view.rows.last().unwrap();
        assert_eq!(last.style, RowStyle::Warning);
        assert_eq!(last.amount, "AED -22,500.00");
        assert_eq!(view.total_gratuity, "AED 120,000.00");
    }

    #[test]
    fn test_report_lists_every_row_and_total() {
        let report = view_for(5000, 30).to_report();

        assert!(report.starts_with("Total Gratuity: AED 120,000.00\n"));
        assert!(report.contains("- First 5 years of service\n"));
        assert!(report.contains("! Maximum limit applied\n"));
        assert!(report.contains("    Limited to 2 years' salary (AED 120000.00)\n"));
        assert!(report.ends_with("Total Gratuity Amount: AED 120,000.00\n"));
    }

    #[test]
    fn test_copy_summary_text() {
        let summary = view_for(10000, 3).to_copy_summary();
        assert_eq!(
            summary,
            "UAE Gratuity Calculation Results:\n\
             Total Gratuity: AED 21,000.00\n\
             Service Period: 3.00 years\n\
             Monthly Salary: AED 10,000.00\n\
             \n\
             Calculated using UAE Labor Law regulations\n\
             Source: UAE Gratuity Calculator"
        );
    }
}
