//! Core data models for the shift ledger engine.
//!
//! This module contains the schedule inputs, the shift vocabulary, and every
//! record type the pipeline produces.

mod classified_day;
mod period;
mod pipeline_output;
mod schedule;
mod shift;
mod summary;
mod warning;

pub use classified_day::{ClassifiedDay, HourBuckets};
pub use period::{HalfYear, SettlementWindow, YearMonth};
pub use pipeline_output::{EmployeeReport, PipelineOutput};
pub use schedule::{MAX_DAY_COLUMNS, MonthlySchedule, RawDayEntry, ScheduleRow};
pub use shift::{HourPolicy, NOT_WORKED_CODE, SHIFT_VOCABULARY, ShiftCategory, normalize_code};
pub use summary::{MonthlySummary, SettlementRecord};
pub use warning::{ProcessingWarning, WarningKind};
