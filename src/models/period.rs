//! Calendar periods: schedule months and settlement windows.
//!
//! This module contains the [`YearMonth`] and [`SettlementWindow`] types used to
//! key monthly summaries and to bound a settlement run.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A calendar month, serialized as `"YYYY-MM"`.
///
/// Ordering is chronological.
///
/// # Example
///
/// ```
/// use shift_ledger::models::YearMonth;
///
/// let february = YearMonth::new(2024, 2).unwrap();
/// assert_eq!(february.days_in_month(), 29);
/// assert_eq!(february.to_string(), "2024-02");
/// assert!(YearMonth::new(2025, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, rejecting months outside 1-12 and unrepresentable years.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or(EngineError::InvalidPeriod { year, month })
    }

    /// Truncates a date to its month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the date of the given day in this month, if that day exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Returns the number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|day| self.day(*day).is_some())
            .unwrap_or(28)
    }

    /// Returns the month that follows this one.
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got '{}'", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in '{}'", s))?;
        YearMonth::new(year, month).map_err(|e| e.to_string())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Which half of a year a settlement covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfYear {
    /// January to June.
    First,
    /// July to December.
    Second,
}

/// An inclusive range of months pooled by one settlement run.
///
/// # Example
///
/// ```
/// use shift_ledger::models::{HalfYear, SettlementWindow, YearMonth};
///
/// let window = SettlementWindow::half_year(2025, HalfYear::First).unwrap();
/// assert!(window.contains(YearMonth::new(2025, 6).unwrap()));
/// assert!(!window.contains(YearMonth::new(2025, 7).unwrap()));
/// assert_eq!(window.months().len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementWindow {
    /// First month of the window (inclusive).
    pub start: YearMonth,
    /// Last month of the window (inclusive).
    pub end: YearMonth,
}

impl SettlementWindow {
    /// Creates a window, rejecting one that ends before it starts.
    pub fn new(start: YearMonth, end: YearMonth) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the window covering one half of `year`.
    pub fn half_year(year: i32, half: HalfYear) -> EngineResult<Self> {
        let (first, last) = match half {
            HalfYear::First => (1, 6),
            HalfYear::Second => (7, 12),
        };
        Self::new(YearMonth::new(year, first)?, YearMonth::new(year, last)?)
    }

    /// Checks if a month falls within this window.
    pub fn contains(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }

    /// Lists every month in the window, oldest first.
    pub fn months(&self) -> Vec<YearMonth> {
        let mut months = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            months.push(current);
            current = current.succ();
        }
        months
    }
}
