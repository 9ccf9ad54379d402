//! Request types for the shift ledger API.
//!
//! This module defines the JSON request bodies for the `/classify`,
//! `/process`, `/report` and `/settlement` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{MonthlySchedule, MonthlySummary, SettlementWindow, YearMonth};

/// Request body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The raw shift code; normalized before classification.
    pub code: String,
}

/// A settlement window as sent by clients, not yet validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowRequest {
    /// First month of the window, as `"YYYY-MM"`.
    pub start: YearMonth,
    /// Last month of the window, as `"YYYY-MM"`.
    pub end: YearMonth,
}

impl WindowRequest {
    /// Validates the window bounds.
    pub fn validate(self) -> EngineResult<SettlementWindow> {
        SettlementWindow::new(self.start, self.end)
    }
}

/// Request body for the `/process` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The month sheets to process.
    pub schedules: Vec<MonthlySchedule>,
    /// Restricts settlement to these months.
    #[serde(default)]
    pub window: Option<WindowRequest>,
}

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The employee to report on.
    pub employee_name: String,
    /// The month sheets to process.
    pub schedules: Vec<MonthlySchedule>,
    /// Restricts settlement to these months.
    #[serde(default)]
    pub window: Option<WindowRequest>,
}

/// Request body for the `/settlement` endpoint.
///
/// `monthly` may contain several rows for the same employee and month, such
/// as hand-entered corrections with negative hours. They are summed before
/// settling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// Monthly totals to settle.
    pub monthly: Vec<MonthlySummary>,
    /// Restricts settlement to these months.
    #[serde(default)]
    pub window: Option<WindowRequest>,
}
