//! End-to-end processing of schedule sheets.
//!
//! Runs daily expansion over every sheet, aggregates the classified days per
//! month, and settles the monthly rows. Invalid sheets and rows are skipped
//! with a warning; a run never fails on schedule content.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ShiftRules;
use crate::models::{
    MonthlySchedule, MonthlySummary, PipelineOutput, ProcessingWarning, SettlementWindow,
    WarningKind, YearMonth,
};

use super::daily_expansion::{DailyExpansion, expand_row};
use super::monthly_aggregation::aggregate_monthly;
use super::settlement::{SettlementOutcome, calculate_settlement, calculate_settlement_in_window};

/// Settles monthly rows, restricted to `window` when one is given.
pub fn settle_monthly(
    monthly: &[MonthlySummary],
    window: Option<&SettlementWindow>,
) -> SettlementOutcome {
    match window {
        Some(window) => {
            let months = window.months();
            let rows_in_window = monthly
                .iter()
                .filter(|m| months.contains(&m.year_month))
                .count();
            debug!(
                start = %window.start,
                end = %window.end,
                months = months.len(),
                rows_in_window,
                "Settling window"
            );
            calculate_settlement_in_window(monthly, window)
        }
        None => calculate_settlement(monthly),
    }
}

fn expand_sheet(sheet: &MonthlySchedule, rules: &ShiftRules) -> DailyExpansion {
    let mut expansion = DailyExpansion::default();

    let month = match YearMonth::new(sheet.year, sheet.month) {
        Ok(month) => month,
        Err(e) => {
            expansion.warnings.push(ProcessingWarning::new(
                WarningKind::InvalidPeriod,
                format!("{}; sheet with {} rows skipped", e, sheet.rows.len()),
            ));
            return expansion;
        }
    };

    for (index, row) in sheet.rows.iter().enumerate() {
        if !row.is_identified() {
            expansion.warnings.push(ProcessingWarning::new(
                WarningKind::InvalidRow,
                format!(
                    "row {} of {} has a blank employee name or role; skipped",
                    index + 1,
                    month
                ),
            ));
            continue;
        }
        expansion.extend(expand_row(row, month, rules));
    }

    debug!(
        month = %month,
        rows = sheet.rows.len(),
        days = expansion.days.len(),
        "Sheet classified"
    );
    expansion
}

/// Processes a set of month sheets into daily, monthly and settlement records.
///
/// Without a window every month present is settled together.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::process_schedules;
/// use shift_ledger::config::ConfigLoader;
/// use shift_ledger::models::{MonthlySchedule, ScheduleRow};
/// use rust_decimal::Decimal;
///
/// let yaml = "turn_durations_hours:\n  D: 12\n  DTS: 12\n  FOTS: 12\n";
/// let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();
///
/// let sheet = MonthlySchedule::new(2025, 1).with_row(
///     ScheduleRow::new("Ana Silva", "CT").with_codes(&["D", "DTS", "DTS", "FOTS", "FOTS"]),
/// );
///
/// let output = process_schedules(&[sheet], loader.rules(), None);
///
/// assert_eq!(output.daily.len(), 31);
/// assert_eq!(output.monthly.len(), 1);
/// assert_eq!(output.settlement[0].total_comp_days, Decimal::from(4));
/// assert!(output.warnings.is_empty());
/// ```
pub fn process_schedules(
    sheets: &[MonthlySchedule],
    rules: &ShiftRules,
    window: Option<&SettlementWindow>,
) -> PipelineOutput {
    let start = Instant::now();
    let run_id = Uuid::new_v4();

    let mut expansion = DailyExpansion::default();
    for sheet in sheets {
        expansion.extend(expand_sheet(sheet, rules));
    }

    let aggregation = aggregate_monthly(&expansion.days);
    let settlement = settle_monthly(&aggregation.monthly, window);

    let mut warnings = expansion.warnings;
    warnings.extend(aggregation.warnings);
    warnings.extend(settlement.warnings);

    for warning in &warnings {
        warn!(
            run_id = %run_id,
            kind = ?warning.kind,
            employee = warning.employee_name.as_deref().unwrap_or("-"),
            "{}",
            warning.message
        );
    }

    let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

    info!(
        run_id = %run_id,
        sheets = sheets.len(),
        days = expansion.days.len(),
        monthly_rows = aggregation.monthly.len(),
        employees_settled = settlement.records.len(),
        warnings = warnings.len(),
        duration_us = duration_us,
        "Schedules processed"
    );

    PipelineOutput {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        window: window.copied(),
        daily: expansion.days,
        monthly: aggregation.monthly,
        settlement: settlement.records,
        warnings,
        duration_us,
    }
}
