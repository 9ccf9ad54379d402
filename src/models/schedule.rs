//! Schedule input models.
//!
//! These types describe schedules after the spreadsheet has been read: the
//! identification columns are resolved and each day column is a raw string.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::YearMonth;

/// Highest day-of-month column a schedule sheet can carry.
pub const MAX_DAY_COLUMNS: u32 = 31;

/// One cell of a schedule: an employee's raw code on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDayEntry {
    /// The employee's name.
    pub employee_name: String,
    /// The employee's role on the schedule.
    pub role: String,
    /// The calendar date of the cell.
    pub date: NaiveDate,
    /// The raw cell text, not yet normalized.
    pub shift_code: String,
}

/// One employee's row of a month sheet.
///
/// `days` is keyed by day of month. Missing keys are blank cells.
///
/// # Example
///
/// ```
/// use shift_ledger::models::{ScheduleRow, YearMonth};
///
/// let row = ScheduleRow::new("Ana Silva", "CT")
///     .with_day(1, "D")
///     .with_day(30, "N");
///
/// // February has no day 30.
/// let entries = row.entries(YearMonth::new(2025, 2).unwrap());
/// assert_eq!(entries.len(), 28);
/// assert_eq!(entries[0].shift_code, "D");
/// assert_eq!(entries[1].shift_code, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// The employee's name.
    pub employee_name: String,
    /// The employee's role on the schedule.
    pub role: String,
    /// Raw cell text by day of month.
    #[serde(default)]
    pub days: BTreeMap<u32, String>,
}

impl ScheduleRow {
    /// Creates a row with no day cells filled in.
    pub fn new(employee_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            employee_name: employee_name.into(),
            role: role.into(),
            days: BTreeMap::new(),
        }
    }

    /// Sets the raw code for one day.
    pub fn with_day(mut self, day: u32, code: impl Into<String>) -> Self {
        self.days.insert(day, code.into());
        self
    }

    /// Sets consecutive days starting at day 1 from a slice of codes.
    pub fn with_codes<S: AsRef<str>>(mut self, codes: &[S]) -> Self {
        for (day, code) in (1..).zip(codes) {
            self.days.insert(day, code.as_ref().to_string());
        }
        self
    }

    /// Returns true if both identification fields carry text.
    pub fn is_identified(&self) -> bool {
        !self.employee_name.trim().is_empty() && !self.role.trim().is_empty()
    }

    /// Flattens the row into one entry per calendar day of `month`.
    ///
    /// Day columns that do not exist in the month are dropped; days with no
    /// cell become blank entries.
    pub fn entries(&self, month: YearMonth) -> Vec<RawDayEntry> {
        (1..=month.days_in_month())
            .filter_map(|day| month.day(day).map(|date| (day, date)))
            .map(|(day, date)| RawDayEntry {
                employee_name: self.employee_name.trim().to_string(),
                role: self.role.trim().to_string(),
                date,
                shift_code: self.days.get(&day).cloned().unwrap_or_default(),
            })
            .collect()
    }

    /// Lists day columns that have no matching date in `month`.
    pub fn out_of_range_days(&self, month: YearMonth) -> Vec<u32> {
        self.days
            .keys()
            .copied()
            .filter(|day| month.day(*day).is_none())
            .collect()
    }
}

/// One month sheet of a schedule workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySchedule {
    /// The calendar year of the sheet.
    pub year: i32,
    /// The month of the sheet (1-12).
    pub month: u32,
    /// The employee rows on the sheet.
    #[serde(default)]
    pub rows: Vec<ScheduleRow>,
}

impl MonthlySchedule {
    /// Creates an empty sheet for the given month.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            rows: Vec::new(),
        }
    }

    /// Adds a row to the sheet.
    pub fn with_row(mut self, row: ScheduleRow) -> Self {
        self.rows.push(row);
        self
    }
}
