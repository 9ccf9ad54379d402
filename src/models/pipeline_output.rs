//! Pipeline output models.
//!
//! This module contains the [`PipelineOutput`] type that carries every
//! collection a run produces, and the per-employee [`EmployeeReport`] view.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classified_day::ClassifiedDay;
use super::period::SettlementWindow;
use super::summary::{MonthlySummary, SettlementRecord};
use super::warning::{ProcessingWarning, WarningKind};

/// The complete result of one pipeline run.
///
/// # Example
///
/// ```
/// use shift_ledger::models::PipelineOutput;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let output = PipelineOutput {
///     run_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     window: None,
///     daily: vec![],
///     monthly: vec![],
///     settlement: vec![],
///     warnings: vec![],
///     duration_us: 0,
/// };
/// assert!(output.employees().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The settlement window applied, if any.
    #[serde(default)]
    pub window: Option<SettlementWindow>,
    /// Every classified day.
    pub daily: Vec<ClassifiedDay>,
    /// Monthly totals per employee.
    pub monthly: Vec<MonthlySummary>,
    /// Settlement per employee.
    pub settlement: Vec<SettlementRecord>,
    /// Problems met along the way.
    pub warnings: Vec<ProcessingWarning>,
    /// Run duration in microseconds.
    pub duration_us: u64,
}

impl PipelineOutput {
    /// Lists the distinct employee names, sorted.
    pub fn employees(&self) -> Vec<String> {
        self.daily
            .iter()
            .map(|d| d.employee_name.as_str())
            .chain(self.monthly.iter().map(|m| m.employee_name.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Counts warnings of the given kind.
    pub fn warning_count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    /// Collects everything recorded for one employee.
    ///
    /// Returns `None` if the employee does not appear in the run.
    pub fn employee_report(&self, employee_name: &str) -> Option<EmployeeReport> {
        let daily: Vec<ClassifiedDay> = self
            .daily
            .iter()
            .filter(|d| d.employee_name == employee_name)
            .cloned()
            .collect();
        let monthly: Vec<MonthlySummary> = self
            .monthly
            .iter()
            .filter(|m| m.employee_name == employee_name)
            .cloned()
            .collect();
        let settlement: Vec<SettlementRecord> = self
            .settlement
            .iter()
            .filter(|s| s.employee_name == employee_name)
            .cloned()
            .collect();

        if daily.is_empty() && monthly.is_empty() && settlement.is_empty() {
            return None;
        }

        Some(EmployeeReport {
            employee_name: employee_name.to_string(),
            daily,
            monthly,
            settlement,
        })
    }
}

/// Everything one run recorded for a single employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// The employee's name.
    pub employee_name: String,
    /// The employee's classified days.
    pub daily: Vec<ClassifiedDay>,
    /// The employee's monthly totals.
    pub monthly: Vec<MonthlySummary>,
    /// The employee's settlement rows (one per role held).
    pub settlement: Vec<SettlementRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftCategory, YearMonth};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn day(name: &str, date: (i32, u32, u32)) -> ClassifiedDay {
        ClassifiedDay {
            employee_name: name.to_string(),
            role: "CT".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            shift_code: "D".to_string(),
            category: ShiftCategory::Day,
            hours_worked: Decimal::from(12),
            hours_normal: Decimal::from(12),
            hours_overtime: Decimal::ZERO,
            hours_obligatory_rest: Decimal::ZERO,
        }
    }

    fn summary(name: &str) -> MonthlySummary {
        MonthlySummary {
            employee_name: name.to_string(),
            role: "CT".to_string(),
            year_month: YearMonth::new(2025, 1).unwrap(),
            total_hours_worked: Decimal::from(12),
            total_hours_normal: Decimal::from(12),
            total_hours_overtime: Decimal::ZERO,
            total_hours_obligatory_rest: Decimal::ZERO,
        }
    }

    fn sample_output() -> PipelineOutput {
        PipelineOutput {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            window: None,
            daily: vec![day("Rui", (2025, 1, 1)), day("Ana", (2025, 1, 1))],
            monthly: vec![summary("Ana"), summary("Rui")],
            settlement: vec![],
            warnings: vec![
                ProcessingWarning::new(WarningKind::UnclassifiedCode, "XX"),
                ProcessingWarning::new(WarningKind::UnclassifiedCode, "YY"),
                ProcessingWarning::new(WarningKind::InvalidRow, "blank name"),
            ],
            duration_us: 10,
        }
    }

    #[test]
    fn test_employees_sorted_and_distinct() {
        assert_eq!(sample_output().employees(), vec!["Ana", "Rui"]);
    }

    #[test]
    fn test_warning_count() {
        let output = sample_output();
        assert_eq!(output.warning_count(WarningKind::UnclassifiedCode), 2);
        assert_eq!(output.warning_count(WarningKind::InvalidPeriod), 0);
    }

    #[test]
    fn test_employee_report_filters_rows() {
        let report = sample_output().employee_report("Ana").unwrap();
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.monthly.len(), 1);
        assert!(report.daily.iter().all(|d| d.employee_name == "Ana"));
    }

    #[test]
    fn test_employee_report_unknown_employee() {
        assert!(sample_output().employee_report("Nobody").is_none());
    }
}
