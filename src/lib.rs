//! Shift classification and compensatory time-off settlement.
//!
//! This crate reads monthly duty schedules (one code per employee per day),
//! classifies each code into a shift category, splits its configured duration
//! into normal, overtime and obligatory-rest hours, totals those hours per
//! month, and converts the pooled overtime and obligatory-rest hours of a
//! settlement window into compensatory days off.
//!
//! ```
//! use shift_ledger::calculation::process_schedules;
//! use shift_ledger::config::ConfigLoader;
//! use shift_ledger::models::{MonthlySchedule, ScheduleRow};
//!
//! let loader = ConfigLoader::load("./config/shift_rules.yaml").unwrap();
//! let sheet = MonthlySchedule::new(2025, 3)
//!     .with_row(ScheduleRow::new("Ana Silva", "CT").with_codes(&["D", "N", "F", "DTS"]));
//!
//! let output = process_schedules(&[sheet], loader.rules(), None);
//! assert_eq!(output.daily.len(), 31);
//! assert_eq!(output.settlement.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
