//! Non-fatal processing warnings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of problem a warning reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A shift code outside the vocabulary was classified as unclassified.
    UnclassifiedCode,
    /// A working shift code has no configured duration and counted zero hours.
    MissingDuration,
    /// A schedule row was skipped because its name or role was blank.
    InvalidRow,
    /// A schedule sheet was skipped because its year or month is not a calendar month.
    InvalidPeriod,
    /// A group was skipped because its hour totals exceed the decimal range.
    HourOverflow,
}

/// A problem met while processing that did not stop the pipeline.
///
/// # Example
///
/// ```
/// use shift_ledger::models::{ProcessingWarning, WarningKind};
///
/// let warning = ProcessingWarning::new(WarningKind::InvalidRow, "row 3 has no name");
/// assert_eq!(warning.kind, WarningKind::InvalidRow);
/// assert!(warning.employee_name.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingWarning {
    /// What went wrong.
    pub kind: WarningKind,
    /// A human-readable description.
    pub message: String,
    /// The employee involved, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// The employee's role, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The schedule date involved, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ProcessingWarning {
    /// Creates a warning with no employee or date attached.
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            employee_name: None,
            role: None,
            date: None,
        }
    }

    /// Attaches the employee the warning concerns.
    pub fn for_employee(mut self, employee_name: &str, role: &str) -> Self {
        self.employee_name = Some(employee_name.to_string());
        self.role = Some(role.to_string());
        self
    }

    /// Attaches the date the warning concerns.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
