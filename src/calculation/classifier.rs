//! Shift classification.
//!
//! Resolves a normalized shift code to its [`ShiftCategory`] and splits the
//! configured duration into normal, overtime and obligatory-rest hours
//! according to the category's [`HourPolicy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ShiftRules;
use crate::models::{HourBuckets, HourPolicy, ShiftCategory, WarningKind};

/// The result of classifying one shift code.
///
/// # Example
///
/// ```
/// use shift_ledger::calculation::classify_shift;
/// use shift_ledger::config::ConfigLoader;
/// use shift_ledger::models::ShiftCategory;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::from_yaml_str("turn_durations_hours:\n  D: 14\n", "inline").unwrap();
/// let result = classify_shift("D", loader.rules());
///
/// assert_eq!(result.category, ShiftCategory::Day);
/// assert_eq!(result.buckets.normal, Decimal::from(12));
/// assert_eq!(result.buckets.overtime, Decimal::from(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftClassification {
    /// The code that was classified.
    pub shift_code: String,
    /// The resolved category.
    pub category: ShiftCategory,
    /// Hours counted for the day; always the sum of `buckets`.
    pub hours_worked: Decimal,
    /// The hours split by bucket.
    pub buckets: HourBuckets,
    /// Whether the code is part of the vocabulary.
    pub recognized: bool,
    /// Whether the rule table lists a duration for the code.
    pub duration_configured: bool,
}

impl ShiftClassification {
    /// Describes the audit problem with this classification, if any.
    ///
    /// Unknown codes and working codes with no configured duration are
    /// reported; both still classify without failing.
    pub fn issue(&self) -> Option<(WarningKind, String)> {
        if !self.recognized {
            return Some((
                WarningKind::UnclassifiedCode,
                format!(
                    "shift code '{}' is not in the vocabulary, classified as {}",
                    self.shift_code, self.category
                ),
            ));
        }
        if self.category.is_working() && !self.duration_configured {
            return Some((
                WarningKind::MissingDuration,
                format!(
                    "shift code '{}' has no configured duration, counted as 0 hours",
                    self.shift_code
                ),
            ));
        }
        None
    }
}

/// Splits a duration into hour buckets under the given policy.
///
/// # Arguments
///
/// * `policy` - How the category's hours are counted
/// * `hours` - The configured duration of the shift
/// * `daily_cap` - The normal-hours cap per worked day; a negative cap counts as zero
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::split_hours;
/// use shift_ledger::models::HourPolicy;
/// use rust_decimal::Decimal;
///
/// let buckets = split_hours(HourPolicy::Ordinary, Decimal::from(8), Decimal::from(12));
/// assert_eq!(buckets.normal, Decimal::from(8));
/// assert_eq!(buckets.overtime, Decimal::ZERO);
///
/// let buckets = split_hours(HourPolicy::NoHours, Decimal::from(8), Decimal::from(12));
/// assert!(buckets.is_zero());
/// ```
pub fn split_hours(policy: HourPolicy, hours: Decimal, daily_cap: Decimal) -> HourBuckets {
    match policy {
        HourPolicy::NoHours => HourBuckets::ZERO,
        HourPolicy::ObligatoryRest => HourBuckets {
            obligatory_rest: hours,
            ..HourBuckets::ZERO
        },
        HourPolicy::Overtime => HourBuckets {
            overtime: hours,
            ..HourBuckets::ZERO
        },
        HourPolicy::Ordinary if hours <= daily_cap => HourBuckets {
            normal: hours,
            ..HourBuckets::ZERO
        },
        HourPolicy::Ordinary if daily_cap.is_sign_negative() => {
            split_hours(policy, hours, Decimal::ZERO)
        }
        HourPolicy::Ordinary => HourBuckets {
            normal: daily_cap,
            overtime: hours - daily_cap,
            obligatory_rest: Decimal::ZERO,
        },
    }
}

/// Classifies a normalized shift code against the rule table.
///
/// The code must already be trimmed and upper-cased (see
/// [`normalize_code`](crate::models::normalize_code)). Codes missing from the
/// rule table count zero hours; codes missing from the vocabulary become
/// [`ShiftCategory::UnclassifiedOther`] and are split as ordinary hours.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::classify_shift;
/// use shift_ledger::config::ConfigLoader;
/// use shift_ledger::models::ShiftCategory;
/// use rust_decimal::Decimal;
///
/// let yaml = "turn_durations_hours:\n  FOTS: 12\n";
/// let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();
///
/// let result = classify_shift("FOTS", loader.rules());
/// assert_eq!(result.category, ShiftCategory::ObligatoryRestDay);
/// assert_eq!(result.buckets.obligatory_rest, Decimal::from(12));
///
/// let result = classify_shift("0", loader.rules());
/// assert_eq!(result.category, ShiftCategory::NotWorked);
/// assert_eq!(result.hours_worked, Decimal::ZERO);
/// ```
pub fn classify_shift(code: &str, rules: &ShiftRules) -> ShiftClassification {
    let known = ShiftCategory::from_code(code);
    let category = known.unwrap_or(ShiftCategory::UnclassifiedOther);
    let configured = rules.duration(code);

    let hours = match category.policy() {
        HourPolicy::NoHours => Decimal::ZERO,
        _ => configured.unwrap_or(Decimal::ZERO),
    };
    let buckets = split_hours(category.policy(), hours, rules.default_daily_hours());

    ShiftClassification {
        shift_code: code.to_string(),
        category,
        hours_worked: hours,
        buckets,
        recognized: known.is_some(),
        duration_configured: configured.is_some(),
    }
}
