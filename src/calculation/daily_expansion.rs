//! Daily expansion of schedule rows.
//!
//! Turns an employee's row of raw codes into one [`ClassifiedDay`] per
//! calendar day of the target month.

use tracing::debug;

use crate::config::ShiftRules;
use crate::models::{
    ClassifiedDay, ProcessingWarning, RawDayEntry, ScheduleRow, YearMonth, normalize_code,
};

use super::classifier::classify_shift;

/// Classified days produced from schedule input, with any warnings raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyExpansion {
    /// One record per valid calendar day.
    pub days: Vec<ClassifiedDay>,
    /// Unknown codes and missing durations met while classifying.
    pub warnings: Vec<ProcessingWarning>,
}

impl DailyExpansion {
    /// Appends another expansion's days and warnings.
    pub fn extend(&mut self, other: DailyExpansion) {
        self.days.extend(other.days);
        self.warnings.extend(other.warnings);
    }
}

/// Classifies one schedule cell.
///
/// The raw code is normalized first: trimmed, upper-cased, blank becomes `"0"`.
pub fn classify_entry(
    entry: &RawDayEntry,
    rules: &ShiftRules,
) -> (ClassifiedDay, Option<ProcessingWarning>) {
    let code = normalize_code(&entry.shift_code);
    let classification = classify_shift(&code, rules);

    let warning = classification.issue().map(|(kind, message)| {
        ProcessingWarning::new(kind, message)
            .for_employee(&entry.employee_name, &entry.role)
            .on(entry.date)
    });

    let day = ClassifiedDay {
        employee_name: entry.employee_name.clone(),
        role: entry.role.clone(),
        date: entry.date,
        shift_code: classification.shift_code,
        category: classification.category,
        hours_worked: classification.hours_worked,
        hours_normal: classification.buckets.normal,
        hours_overtime: classification.buckets.overtime,
        hours_obligatory_rest: classification.buckets.obligatory_rest,
    };

    (day, warning)
}

/// Classifies a batch of already-flattened schedule cells, keeping input order.
pub fn expand_entries(entries: &[RawDayEntry], rules: &ShiftRules) -> DailyExpansion {
    let mut expansion = DailyExpansion::default();
    for entry in entries {
        let (day, warning) = classify_entry(entry, rules);
        expansion.days.push(day);
        expansion.warnings.extend(warning);
    }
    expansion
}

/// Expands one employee row into classified days for `month`.
///
/// Day columns that do not exist in the month (day 30 in February, day 0,
/// day 32) are dropped without a warning. Days the row does not mention are
/// classified as not worked. Output is ordered by day.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::expand_row;
/// use shift_ledger::config::ConfigLoader;
/// use shift_ledger::models::{ScheduleRow, ShiftCategory, YearMonth};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::from_yaml_str("turn_durations_hours:\n  D: 12\n", "inline").unwrap();
/// let row = ScheduleRow::new("Ana Silva", "CT").with_day(1, "d").with_day(31, "D");
///
/// let expansion = expand_row(&row, YearMonth::new(2025, 2).unwrap(), loader.rules());
///
/// assert_eq!(expansion.days.len(), 28);
/// assert_eq!(expansion.days[0].category, ShiftCategory::Day);
/// assert_eq!(expansion.days[0].hours_normal, Decimal::from(12));
/// assert_eq!(expansion.days[1].category, ShiftCategory::NotWorked);
/// assert!(expansion.warnings.is_empty());
/// ```
pub fn expand_row(row: &ScheduleRow, month: YearMonth, rules: &ShiftRules) -> DailyExpansion {
    let skipped = row.out_of_range_days(month);
    if !skipped.is_empty() {
        debug!(
            employee = %row.employee_name,
            month = %month,
            days = ?skipped,
            "Skipping day columns outside the month"
        );
    }

    expand_entries(&row.entries(month), rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftCategory, WarningKind};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_rules() -> ShiftRules {
        ShiftRules::new(
            vec![
                ("D".to_string(), dec("12")),
                ("N".to_string(), dec("12")),
                ("DTS".to_string(), dec("12")),
                ("FOTS".to_string(), dec("12")),
                ("A".to_string(), dec("14")),
            ],
            dec("12"),
        )
        .unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_full_row_in_31_day_month() {
        let codes: Vec<&str> = ["D", "N", "0", "DTS", "FOTS"]
            .iter()
            .cycle()
            .take(31)
            .copied()
            .collect();
        let row = ScheduleRow::new("Ana Silva", "CT").with_codes(&codes);

        let expansion = expand_row(&row, ym(2025, 1), &test_rules());

        assert_eq!(expansion.days.len(), 31);
        assert!(expansion.warnings.is_empty());
        assert_eq!(expansion.days[3].category, ShiftCategory::DaySupplementary);
        assert_eq!(expansion.days[4].hours_obligatory_rest, dec("12"));
        assert!(expansion.days.iter().all(|d| d.is_balanced()));
    }

    #[test]
    fn test_day_columns_past_month_end_are_dropped() {
        let codes = vec!["D"; 31];
        let row = ScheduleRow::new("Ana Silva", "CT").with_codes(&codes);

        assert_eq!(expand_row(&row, ym(2025, 2), &test_rules()).days.len(), 28);
        assert_eq!(expand_row(&row, ym(2024, 2), &test_rules()).days.len(), 29);
        assert_eq!(expand_row(&row, ym(2025, 4), &test_rules()).days.len(), 30);
    }

    #[test]
    fn test_short_row_still_covers_month() {
        let row = ScheduleRow::new("Ana Silva", "CT").with_codes(&["D", "N"]);
        let expansion = expand_row(&row, ym(2025, 6), &test_rules());

        assert_eq!(expansion.days.len(), 30);
        assert_eq!(
            expansion
                .days
                .iter()
                .filter(|d| d.category == ShiftCategory::NotWorked)
                .count(),
            28
        );
    }

    #[test]
    fn test_codes_are_normalized() {
        let row = ScheduleRow::new("Ana Silva", "CT")
            .with_day(1, " fots ")
            .with_day(2, "   ");
        let expansion = expand_row(&row, ym(2025, 3), &test_rules());

        assert_eq!(expansion.days[0].shift_code, "FOTS");
        assert_eq!(expansion.days[0].category, ShiftCategory::ObligatoryRestDay);
        assert_eq!(expansion.days[1].shift_code, "0");
        assert_eq!(expansion.days[1].category, ShiftCategory::NotWorked);
    }

    #[test]
    fn test_dates_follow_day_index() {
        let row = ScheduleRow::new("Ana Silva", "CT").with_day(15, "N");
        let expansion = expand_row(&row, ym(2025, 5), &test_rules());

        let day = &expansion.days[14];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());
        assert_eq!(day.category, ShiftCategory::Night);
    }

    #[test]
    fn test_ordinary_shift_above_cap() {
        let row = ScheduleRow::new("Ana Silva", "CT").with_day(1, "A");
        let day = &expand_row(&row, ym(2025, 1), &test_rules()).days[0];

        assert_eq!(day.hours_worked, dec("14"));
        assert_eq!(day.hours_normal, dec("12"));
        assert_eq!(day.hours_overtime, dec("2"));
    }

    #[test]
    fn test_unknown_code_warns_and_continues() {
        let row = ScheduleRow::new("Ana Silva", "CT")
            .with_day(1, "ZZ")
            .with_day(2, "D");
        let expansion = expand_row(&row, ym(2025, 1), &test_rules());

        assert_eq!(expansion.days.len(), 31);
        assert_eq!(expansion.days[0].category, ShiftCategory::UnclassifiedOther);
        assert_eq!(expansion.days[0].hours_worked, Decimal::ZERO);
        assert_eq!(expansion.days[1].hours_normal, dec("12"));

        assert_eq!(expansion.warnings.len(), 1);
        let warning = &expansion.warnings[0];
        assert_eq!(warning.kind, WarningKind::UnclassifiedCode);
        assert_eq!(warning.employee_name.as_deref(), Some("Ana Silva"));
        assert_eq!(warning.date, NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn test_missing_duration_warns() {
        let row = ScheduleRow::new("Ana Silva", "CT").with_day(1, "TN");
        let expansion = expand_row(&row, ym(2025, 1), &test_rules());

        assert_eq!(expansion.days[0].category, ShiftCategory::NightSwap);
        assert_eq!(expansion.warnings[0].kind, WarningKind::MissingDuration);
    }

    #[test]
    fn test_expand_entries_keeps_order() {
        let entries = vec![
            RawDayEntry {
                employee_name: "Rui".to_string(),
                role: "OPS".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                shift_code: "n".to_string(),
            },
            RawDayEntry {
                employee_name: "Ana".to_string(),
                role: "CT".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                shift_code: "D".to_string(),
            },
        ];

        let expansion = expand_entries(&entries, &test_rules());
        assert_eq!(expansion.days[0].employee_name, "Rui");
        assert_eq!(expansion.days[0].category, ShiftCategory::Night);
        assert_eq!(expansion.days[1].employee_name, "Ana");
    }

    #[test]
    fn test_extend_merges_expansions() {
        let rules = test_rules();
        let mut total = expand_row(
            &ScheduleRow::new("Ana", "CT").with_day(1, "??"),
            ym(2025, 1),
            &rules,
        );
        total.extend(expand_row(
            &ScheduleRow::new("Rui", "OPS"),
            ym(2025, 2),
            &rules,
        ));

        assert_eq!(total.days.len(), 31 + 28);
        assert_eq!(total.warnings.len(), 1);
    }
}
