//! Aggregated output models: monthly summaries and settlement records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::classified_day::HourBuckets;
use super::period::YearMonth;

/// One employee's hour totals for one month.
///
/// Correction rows entered by hand may carry negative totals.
///
/// # Example
///
/// ```
/// use shift_ledger::models::{MonthlySummary, YearMonth};
/// use rust_decimal::Decimal;
///
/// let summary = MonthlySummary {
///     employee_name: "Ana Silva".to_string(),
///     role: "CT".to_string(),
///     year_month: YearMonth::new(2025, 1).unwrap(),
///     total_hours_worked: Decimal::from(180),
///     total_hours_normal: Decimal::from(156),
///     total_hours_overtime: Decimal::from(12),
///     total_hours_obligatory_rest: Decimal::from(12),
/// };
/// assert_eq!(summary.buckets().total(), Some(summary.total_hours_worked));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The employee's name.
    pub employee_name: String,
    /// The employee's role.
    pub role: String,
    /// The month summarized.
    pub year_month: YearMonth,
    /// Sum of hours worked.
    pub total_hours_worked: Decimal,
    /// Sum of normal hours.
    pub total_hours_normal: Decimal,
    /// Sum of overtime hours.
    pub total_hours_overtime: Decimal,
    /// Sum of obligatory-rest-day hours.
    pub total_hours_obligatory_rest: Decimal,
}

impl MonthlySummary {
    /// Returns the bucket totals as a [`HourBuckets`].
    pub fn buckets(&self) -> HourBuckets {
        HourBuckets {
            normal: self.total_hours_normal,
            overtime: self.total_hours_overtime,
            obligatory_rest: self.total_hours_obligatory_rest,
        }
    }
}

/// One employee's compensatory time-off settlement over a window.
///
/// The per-bucket day and residual figures are informational. The combined
/// `total_comp_days` / `total_residual_hours` pair is computed from the pooled
/// hours and need not equal the sum of the per-bucket figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// The employee's name.
    pub employee_name: String,
    /// The employee's role.
    pub role: String,
    /// Overtime hours summed over the window.
    pub total_overtime_half_year: Decimal,
    /// `total_overtime_half_year / 12`.
    pub comp_days_from_overtime: Decimal,
    /// `total_overtime_half_year rem 12`.
    pub residual_overtime_hours: Decimal,
    /// Obligatory-rest-day hours summed over the window.
    pub total_obligatory_rest_half_year: Decimal,
    /// `total_obligatory_rest_half_year / 12`.
    pub comp_days_from_obligatory_rest: Decimal,
    /// `total_obligatory_rest_half_year rem 12`.
    pub residual_obligatory_rest_hours: Decimal,
    /// Pooled hours divided by 12, unrounded.
    pub total_comp_days: Decimal,
    /// Pooled hours rem 12; carries the sign of the pooled hours.
    pub total_residual_hours: Decimal,
}

impl SettlementRecord {
    /// Returns the pooled overtime and obligatory-rest hours, or `None` if the
    /// sum overflows.
    pub fn combined_hours(&self) -> Option<Decimal> {
        self.total_overtime_half_year
            .checked_add(self.total_obligatory_rest_half_year)
    }

    /// Returns the whole compensatory days, truncated toward zero.
    ///
    /// `whole_comp_days() * 12 + total_residual_hours` equals the pooled hours.
    pub fn whole_comp_days(&self) -> Decimal {
        self.total_comp_days.trunc()
    }

    /// Returns `total_comp_days` rounded to two decimal places for display.
    pub fn total_comp_days_display(&self) -> Decimal {
        self.total_comp_days.round_dp(2)
    }
}
