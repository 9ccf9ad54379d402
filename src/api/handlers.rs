//! HTTP request handlers for the shift ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify_shift, merge_monthly, process_schedules, settle_monthly};
use crate::models::{SettlementWindow, normalize_code};

use super::request::{
    ClassifyRequest, ProcessRequest, ReportRequest, SettlementRequest, WindowRequest,
};
use super::response::{ApiError, ApiErrorResponse, ClassifyResponse, SettlementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rules", get(rules_handler))
        .route("/classify", post(classify_handler))
        .route("/process", post(process_handler))
        .route("/report", post(report_handler))
        .route("/settlement", post(settlement_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

fn parse_window(
    correlation_id: Uuid,
    window: Option<WindowRequest>,
) -> Result<Option<SettlementWindow>, ApiErrorResponse> {
    window.map(WindowRequest::validate).transpose().map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected settlement window");
        err.into()
    })
}

/// Handler for GET /rules.
///
/// Returns the rule table the server was started with.
async fn rules_handler(State(state): State<AppState>) -> Response {
    json_ok(state.rules())
}

/// Handler for POST /classify.
///
/// Classifies a single shift code against the loaded rule table.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_payload(correlation_id, payload)?;

    let classification = classify_shift(&normalize_code(&request.code), state.rules());
    let warning = classification.issue().map(|(_, message)| message);

    info!(
        correlation_id = %correlation_id,
        code = %classification.shift_code,
        category = %classification.category,
        hours_worked = %classification.hours_worked,
        "Shift classified"
    );

    Ok(json_ok(ClassifyResponse {
        policy: classification.category.policy(),
        classification,
        warning,
    }))
}

/// Handler for POST /process.
///
/// Runs the full pipeline over the submitted month sheets.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedules request");

    let request = parse_payload(correlation_id, payload)?;
    let window = parse_window(correlation_id, request.window)?;

    let output = process_schedules(&request.schedules, state.rules(), window.as_ref());

    info!(
        correlation_id = %correlation_id,
        run_id = %output.run_id,
        employees = output.settlement.len(),
        warnings = output.warnings.len(),
        duration_us = output.duration_us,
        "Schedules processed successfully"
    );

    Ok(json_ok(output))
}

/// Handler for POST /report.
///
/// Runs the pipeline and returns the records of one employee.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee report request");

    let request = parse_payload(correlation_id, payload)?;
    let window = parse_window(correlation_id, request.window)?;

    let output = process_schedules(&request.schedules, state.rules(), window.as_ref());
    let employee_name = request.employee_name.trim();

    match output.employee_report(employee_name) {
        Some(report) => {
            info!(
                correlation_id = %correlation_id,
                employee = %employee_name,
                days = report.daily.len(),
                "Employee report built"
            );
            Ok(json_ok(report))
        }
        None => {
            warn!(
                correlation_id = %correlation_id,
                employee = %employee_name,
                "Employee not found in schedules"
            );
            Err(ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::employee_not_found(employee_name),
            ))
        }
    }
}

/// Handler for POST /settlement.
///
/// Merges the submitted monthly rows, corrections included, and settles them.
async fn settlement_handler(
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let request = parse_payload(correlation_id, payload)?;
    let window = parse_window(correlation_id, request.window)?;

    let merged = merge_monthly(&request.monthly);
    let settlement = settle_monthly(&merged.monthly, window.as_ref());

    let mut warnings = merged.warnings;
    warnings.extend(settlement.warnings);
    for warning in &warnings {
        warn!(
            correlation_id = %correlation_id,
            kind = ?warning.kind,
            employee = warning.employee_name.as_deref().unwrap_or("-"),
            "{}",
            warning.message
        );
    }

    info!(
        correlation_id = %correlation_id,
        monthly_rows = merged.monthly.len(),
        employees = settlement.records.len(),
        warnings = warnings.len(),
        "Settlement completed successfully"
    );

    Ok(json_ok(SettlementResponse {
        monthly: merged.monthly,
        settlement: settlement.records,
        warnings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{EmployeeReport, PipelineOutput, ShiftCategory};
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config =
            ConfigLoader::load("./config/shift_rules.yaml").expect("Failed to load config");
        AppState::from_loader(config)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = create_router(create_test_state())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn sample_schedules() -> Value {
        json!([
            {
                "year": 2025,
                "month": 1,
                "rows": [
                    { "employee_name": "Ana Silva", "role": "CT",
                      "days": { "1": "D", "2": "DTS", "3": "DTS", "4": "FOTS", "5": "FOTS" } },
                    { "employee_name": "Rui Costa", "role": "OPS",
                      "days": { "1": "N", "2": "ZZ" } }
                ]
            }
        ])
    }

    #[tokio::test]
    async fn test_classify_known_code() {
        let body = json!({ "code": " dts " }).to_string();
        let (status, body) = send(post_json("/classify", body)).await;

        assert_eq!(status, StatusCode::OK);
        let result: ClassifyResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.classification.shift_code, "DTS");
        assert_eq!(result.classification.category, ShiftCategory::DaySupplementary);
        assert_eq!(result.classification.buckets.overtime, Decimal::from(12));
        assert!(result.warning.is_none());
    }

    #[tokio::test]
    async fn test_classify_unknown_code_carries_warning() {
        let body = json!({ "code": "ZZ" }).to_string();
        let (status, body) = send(post_json("/classify", body)).await;

        assert_eq!(status, StatusCode::OK);
        let result: ClassifyResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.classification.category, ShiftCategory::UnclassifiedOther);
        assert!(result.warning.unwrap().contains("ZZ"));
    }

    #[tokio::test]
    async fn test_process_returns_pipeline_output() {
        let body = json!({ "schedules": sample_schedules() }).to_string();
        let (status, body) = send(post_json("/process", body)).await;

        assert_eq!(status, StatusCode::OK);
        let output: PipelineOutput = serde_json::from_slice(&body).unwrap();
        assert_eq!(output.daily.len(), 62);
        assert_eq!(output.employees(), vec!["Ana Silva", "Rui Costa"]);
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.settlement[0].total_comp_days, Decimal::from(4));
    }

    #[tokio::test]
    async fn test_process_rejects_inverted_window() {
        let body = json!({
            "schedules": sample_schedules(),
            "window": { "start": "2025-06", "end": "2025-01" }
        })
        .to_string();
        let (status, body) = send(post_json("/process", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_WINDOW");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = send(post_json("/process", "{invalid json".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let (status, body) = send(post_json("/process", "{}".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("schedules"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/classify")
            .body(Body::from(r#"{"code":"D"}"#))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_report_for_known_employee() {
        let body =
            json!({ "employee_name": "Rui Costa", "schedules": sample_schedules() }).to_string();
        let (status, body) = send(post_json("/report", body)).await;

        assert_eq!(status, StatusCode::OK);
        let report: EmployeeReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.daily.len(), 31);
        assert_eq!(report.monthly.len(), 1);
        assert_eq!(report.settlement.len(), 1);
    }

    #[tokio::test]
    async fn test_report_for_unknown_employee_returns_404() {
        let body =
            json!({ "employee_name": "Nobody", "schedules": sample_schedules() }).to_string();
        let (status, body) = send(post_json("/report", body)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_settlement_merges_corrections() {
        let row = |month: &str, overtime: &str| {
            json!({
                "employee_name": "Ana Silva",
                "role": "CT",
                "year_month": month,
                "total_hours_worked": overtime,
                "total_hours_normal": "0",
                "total_hours_overtime": overtime,
                "total_hours_obligatory_rest": "0"
            })
        };
        let body = json!({
            "monthly": [row("2025-01", "24"), row("2025-01", "-30"), row("2025-08", "12")],
            "window": { "start": "2025-01", "end": "2025-06" }
        })
        .to_string();
        let (status, body) = send(post_json("/settlement", body)).await;

        assert_eq!(status, StatusCode::OK);
        let result: SettlementResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.monthly.len(), 2);
        assert_eq!(result.settlement.len(), 1);
        assert_eq!(result.settlement[0].total_comp_days, Decimal::new(-5, 1));
        assert_eq!(result.settlement[0].total_residual_hours, Decimal::from(-6));
        assert!(result.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_rules_endpoint_lists_durations() {
        let request = Request::builder()
            .method("GET")
            .uri("/rules")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        let rules: Value = serde_json::from_slice(&body).unwrap();
        assert!(rules["durations"]["FOTS"].is_string());
    }
}
