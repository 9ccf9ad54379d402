//! HTTP API module for the shift ledger engine.
//!
//! This module exposes shift classification, schedule processing, employee
//! reports and settlement as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ClassifyRequest, ProcessRequest, ReportRequest, SettlementRequest, WindowRequest,
};
pub use response::{ApiError, ApiErrorResponse, ClassifyResponse, SettlementResponse};
pub use state::AppState;
