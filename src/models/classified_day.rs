//! Classified daily records.
//!
//! A [`ClassifiedDay`] is one schedule cell after classification, with its
//! duration split into [`HourBuckets`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::YearMonth;
use super::shift::ShiftCategory;

/// Hours split into the three tracked buckets.
///
/// # Example
///
/// ```
/// use shift_ledger::models::HourBuckets;
/// use rust_decimal::Decimal;
///
/// let buckets = HourBuckets {
///     normal: Decimal::from(12),
///     overtime: Decimal::from(2),
///     obligatory_rest: Decimal::ZERO,
/// };
/// assert_eq!(buckets.total(), Some(Decimal::from(14)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBuckets {
    /// Normal hours, capped per day.
    pub normal: Decimal,
    /// Overtime hours.
    pub overtime: Decimal,
    /// Hours worked on obligatory rest days.
    pub obligatory_rest: Decimal,
}

impl HourBuckets {
    /// All buckets at zero.
    pub const ZERO: HourBuckets = HourBuckets {
        normal: Decimal::ZERO,
        overtime: Decimal::ZERO,
        obligatory_rest: Decimal::ZERO,
    };

    /// Returns the sum of all buckets, or `None` if it overflows.
    pub fn total(&self) -> Option<Decimal> {
        self.normal
            .checked_add(self.overtime)?
            .checked_add(self.obligatory_rest)
    }

    /// Returns true if every bucket is zero.
    pub fn is_zero(&self) -> bool {
        self.normal.is_zero() && self.overtime.is_zero() && self.obligatory_rest.is_zero()
    }
}

/// One employee's classified shift on one date.
///
/// `hours_worked` always equals the sum of the three bucket fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDay {
    /// The employee's name.
    pub employee_name: String,
    /// The employee's role.
    pub role: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// The normalized shift code.
    pub shift_code: String,
    /// The category the code resolved to.
    pub category: ShiftCategory,
    /// Hours counted for the day.
    pub hours_worked: Decimal,
    /// Normal hours.
    pub hours_normal: Decimal,
    /// Overtime hours.
    pub hours_overtime: Decimal,
    /// Obligatory-rest-day hours.
    pub hours_obligatory_rest: Decimal,
}

impl ClassifiedDay {
    /// Returns the month this day belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Returns the bucket fields as a [`HourBuckets`].
    pub fn buckets(&self) -> HourBuckets {
        HourBuckets {
            normal: self.hours_normal,
            overtime: self.hours_overtime,
            obligatory_rest: self.hours_obligatory_rest,
        }
    }

    /// Checks the worked-hours invariant.
    pub fn is_balanced(&self) -> bool {
        self.buckets().total() == Some(self.hours_worked)
    }
}
