//! Compensatory time-off settlement.
//!
//! Pools each employee's overtime and obligatory-rest-day hours over a
//! settlement window and converts them into compensatory days at
//! [`HOURS_PER_DAY_OFF`] hours per day.
//!
//! Two sets of figures are reported. The per-bucket figures divide overtime
//! and obligatory-rest hours separately. The combined figures divide the pooled
//! total, so hours left over in one bucket can complete a day with hours from
//! the other. The two sets are not reconciled.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    MonthlySummary, ProcessingWarning, SettlementRecord, SettlementWindow, WarningKind,
};

/// Hours that earn one compensatory day off.
pub const HOURS_PER_DAY_OFF: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Hours expressed as compensatory days plus a residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensatoryTime {
    /// Exact quotient `hours / 12`.
    pub days: Decimal,
    /// Truncated remainder `hours rem 12`; same sign as `hours`.
    pub residual_hours: Decimal,
}

/// Settlement records with the employees that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementOutcome {
    /// One record per (employee, role), sorted by that key.
    pub records: Vec<SettlementRecord>,
    /// Employees whose pooled hours overflowed and were left out.
    pub warnings: Vec<ProcessingWarning>,
}

/// Converts hours into compensatory days and residual hours.
///
/// The remainder follows the sign of `hours`, so a deficit yields a negative
/// or zero residual.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::compensatory_time;
/// use rust_decimal::Decimal;
///
/// let time = compensatory_time(Decimal::from(48));
/// assert_eq!(time.days, Decimal::from(4));
/// assert_eq!(time.residual_hours, Decimal::ZERO);
///
/// let time = compensatory_time(Decimal::from(-6));
/// assert_eq!(time.days, Decimal::new(-5, 1));
/// assert_eq!(time.residual_hours, Decimal::from(-6));
/// ```
pub fn compensatory_time(hours: Decimal) -> CompensatoryTime {
    CompensatoryTime {
        days: hours / HOURS_PER_DAY_OFF,
        residual_hours: hours % HOURS_PER_DAY_OFF,
    }
}

/// Settles every employee over all supplied monthly rows.
///
/// Rows are grouped by (employee, role); output is sorted by that key. An
/// employee whose pooled hours overflow is skipped with a
/// [`WarningKind::HourOverflow`] warning.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::calculate_settlement;
/// use shift_ledger::models::{MonthlySummary, YearMonth};
/// use rust_decimal::Decimal;
///
/// let month = |m, overtime: i64, rest: i64| MonthlySummary {
///     employee_name: "Ana Silva".to_string(),
///     role: "CT".to_string(),
///     year_month: YearMonth::new(2025, m).unwrap(),
///     total_hours_worked: Decimal::from(overtime + rest),
///     total_hours_normal: Decimal::ZERO,
///     total_hours_overtime: Decimal::from(overtime),
///     total_hours_obligatory_rest: Decimal::from(rest),
/// };
///
/// let outcome = calculate_settlement(&[month(1, 20, 6), month(2, 10, 12)]);
/// assert_eq!(outcome.records.len(), 1);
/// assert_eq!(outcome.records[0].total_comp_days, Decimal::from(4));
/// assert_eq!(outcome.records[0].total_residual_hours, Decimal::ZERO);
/// ```
pub fn calculate_settlement(monthly: &[MonthlySummary]) -> SettlementOutcome {
    settle(monthly.iter())
}

/// Settles every employee over the monthly rows that fall inside `window`.
///
/// Rows outside the window are ignored.
pub fn calculate_settlement_in_window(
    monthly: &[MonthlySummary],
    window: &SettlementWindow,
) -> SettlementOutcome {
    settle(monthly.iter().filter(|m| window.contains(m.year_month)))
}

fn settle<'a>(rows: impl Iterator<Item = &'a MonthlySummary>) -> SettlementOutcome {
    let mut pools: BTreeMap<(&'a str, &'a str), Option<(Decimal, Decimal)>> = BTreeMap::new();

    for row in rows {
        let pool = pools
            .entry((row.employee_name.as_str(), row.role.as_str()))
            .or_insert(Some((Decimal::ZERO, Decimal::ZERO)));
        *pool = pool.and_then(|(overtime, rest)| {
            Some((
                overtime.checked_add(row.total_hours_overtime)?,
                rest.checked_add(row.total_hours_obligatory_rest)?,
            ))
        });
    }

    let mut outcome = SettlementOutcome::default();
    for ((employee_name, role), pool) in pools {
        let record = pool.and_then(|(overtime, obligatory_rest)| {
            settlement_record(employee_name, role, overtime, obligatory_rest)
        });
        match record {
            Some(record) => outcome.records.push(record),
            None => outcome.warnings.push(
                ProcessingWarning::new(
                    WarningKind::HourOverflow,
                    "pooled overtime and obligatory-rest hours overflow; employee not settled",
                )
                .for_employee(employee_name, role),
            ),
        }
    }
    outcome
}

/// Builds one settlement record from window totals.
///
/// Returns `None` when the two totals cannot be pooled without overflow.
pub fn settlement_record(
    employee_name: &str,
    role: &str,
    total_overtime: Decimal,
    total_obligatory_rest: Decimal,
) -> Option<SettlementRecord> {
    let from_overtime = compensatory_time(total_overtime);
    let from_obligatory_rest = compensatory_time(total_obligatory_rest);
    let combined = compensatory_time(total_overtime.checked_add(total_obligatory_rest)?);

    Some(SettlementRecord {
        employee_name: employee_name.to_string(),
        role: role.to_string(),
        total_overtime_half_year: total_overtime,
        comp_days_from_overtime: from_overtime.days,
        residual_overtime_hours: from_overtime.residual_hours,
        total_obligatory_rest_half_year: total_obligatory_rest,
        comp_days_from_obligatory_rest: from_obligatory_rest.days,
        residual_obligatory_rest_hours: from_obligatory_rest.residual_hours,
        total_comp_days: combined.days,
        total_residual_hours: combined.residual_hours,
    })
}
