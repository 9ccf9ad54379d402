//! Monthly aggregation of classified days.
//!
//! Groups records by (employee, role, month) and sums each hour field. The
//! result does not depend on input order and is sorted by its grouping key.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{ClassifiedDay, MonthlySummary, ProcessingWarning, WarningKind, YearMonth};

type GroupKey = (String, String, YearMonth);

/// Monthly summaries with the groups that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyAggregation {
    /// One summary per (employee, role, month), sorted by that key.
    pub monthly: Vec<MonthlySummary>,
    /// Groups whose totals overflowed and were left out.
    pub warnings: Vec<ProcessingWarning>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    worked: Decimal,
    normal: Decimal,
    overtime: Decimal,
    obligatory_rest: Decimal,
}

impl Totals {
    /// Adds one record's hours, or returns `None` if any field overflows.
    fn checked_add(
        self,
        worked: Decimal,
        normal: Decimal,
        overtime: Decimal,
        rest: Decimal,
    ) -> Option<Self> {
        Some(Self {
            worked: self.worked.checked_add(worked)?,
            normal: self.normal.checked_add(normal)?,
            overtime: self.overtime.checked_add(overtime)?,
            obligatory_rest: self.obligatory_rest.checked_add(rest)?,
        })
    }
}

/// Running totals per group; `None` marks a group that overflowed.
#[derive(Default)]
struct Groups(BTreeMap<GroupKey, Option<Totals>>);

impl Groups {
    fn add(&mut self, key: GroupKey, hours: [Decimal; 4]) {
        let [worked, normal, overtime, rest] = hours;
        let entry = self.0.entry(key).or_insert(Some(Totals::default()));
        *entry = entry.and_then(|totals| totals.checked_add(worked, normal, overtime, rest));
    }

    fn finish(self) -> MonthlyAggregation {
        let mut aggregation = MonthlyAggregation::default();

        for ((employee_name, role, year_month), totals) in self.0 {
            let Some(totals) = totals else {
                aggregation.warnings.push(
                    ProcessingWarning::new(
                        WarningKind::HourOverflow,
                        format!("hour totals for {} overflow; month skipped", year_month),
                    )
                    .for_employee(&employee_name, &role),
                );
                continue;
            };
            aggregation.monthly.push(MonthlySummary {
                employee_name,
                role,
                year_month,
                total_hours_worked: totals.worked,
                total_hours_normal: totals.normal,
                total_hours_overtime: totals.overtime,
                total_hours_obligatory_rest: totals.obligatory_rest,
            });
        }

        aggregation
    }
}

/// Sums classified days into one summary per (employee, role, month).
///
/// A group whose totals overflow is left out and reported as a
/// [`WarningKind::HourOverflow`] warning.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::{aggregate_monthly, expand_row};
/// use shift_ledger::config::ConfigLoader;
/// use shift_ledger::models::{ScheduleRow, YearMonth};
/// use rust_decimal::Decimal;
///
/// let yaml = "turn_durations_hours:\n  D: 12\n  DTS: 12\n";
/// let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();
/// let row = ScheduleRow::new("Ana Silva", "CT").with_codes(&["D", "D", "DTS"]);
/// let days = expand_row(&row, YearMonth::new(2025, 1).unwrap(), loader.rules()).days;
///
/// let aggregation = aggregate_monthly(&days);
/// assert_eq!(aggregation.monthly.len(), 1);
/// assert_eq!(aggregation.monthly[0].total_hours_normal, Decimal::from(24));
/// assert_eq!(aggregation.monthly[0].total_hours_overtime, Decimal::from(12));
/// assert!(aggregation.warnings.is_empty());
/// ```
pub fn aggregate_monthly(days: &[ClassifiedDay]) -> MonthlyAggregation {
    let mut groups = Groups::default();

    for day in days {
        let key = (day.employee_name.clone(), day.role.clone(), day.year_month());
        groups.add(
            key,
            [
                day.hours_worked,
                day.hours_normal,
                day.hours_overtime,
                day.hours_obligatory_rest,
            ],
        );
    }

    groups.finish()
}

/// Merges summaries that share an (employee, role, month) key.
///
/// Used to fold hand-entered correction rows into computed totals. Applied to
/// an already-aggregated set it returns the same rows. Overflowing groups are
/// skipped with a warning as in [`aggregate_monthly`].
pub fn merge_monthly(summaries: &[MonthlySummary]) -> MonthlyAggregation {
    let mut groups = Groups::default();

    for summary in summaries {
        let key = (
            summary.employee_name.clone(),
            summary.role.clone(),
            summary.year_month,
        );
        groups.add(
            key,
            [
                summary.total_hours_worked,
                summary.total_hours_normal,
                summary.total_hours_overtime,
                summary.total_hours_obligatory_rest,
            ],
        );
    }

    groups.finish()
}
