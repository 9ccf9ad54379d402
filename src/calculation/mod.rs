//! Calculation logic for the shift ledger engine.
//!
//! This module contains the shift classifier, daily expansion of schedule
//! rows, monthly aggregation, compensatory-time settlement, and the pipeline
//! that chains them.

mod classifier;
mod daily_expansion;
mod monthly_aggregation;
mod pipeline;
mod settlement;

pub use classifier::{ShiftClassification, classify_shift, split_hours};
pub use daily_expansion::{DailyExpansion, classify_entry, expand_entries, expand_row};
pub use monthly_aggregation::{MonthlyAggregation, aggregate_monthly, merge_monthly};
pub use pipeline::{process_schedules, settle_monthly};
pub use settlement::{
    CompensatoryTime, HOURS_PER_DAY_OFF, SettlementOutcome, calculate_settlement,
    calculate_settlement_in_window, compensatory_time, settlement_record,
};
