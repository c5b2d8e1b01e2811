//! HTTP request handlers for the Payroll Schedule Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{audit_period, generate_schedule, malformed_holiday_warnings, parse_holiday};
use crate::config::CalendarLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, Holiday, RawHoliday, ScheduleResult};

use super::request::{BatchScheduleRequest, ScheduleRequest};
use super::response::{ApiError, ApiErrorResponse, BatchOutcome, BatchScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .route("/schedules/batch", post(batch_handler))
        .with_state(state)
}

/// Handler for POST /schedule endpoint.
///
/// Accepts a schedule request and returns the generated pay dates.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let payroll_id = request.payroll_id.clone();
    let periods = request.periods;
    let today = Utc::now().date_naive();

    match perform_generation(request, state.calendar(), today) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                payroll_id = %payroll_id,
                periods = periods,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Schedule generated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                payroll_id = %payroll_id,
                error = %err,
                "Schedule generation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /schedules/batch endpoint.
///
/// Generates a schedule per payroll. A failing payroll is reported in its
/// own entry and does not stop the rest of the batch.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let today = Utc::now().date_naive();
    let mut results = Vec::with_capacity(request.payrolls.len());

    for payroll in request.payrolls {
        let payroll_id = payroll.payroll_id.clone();
        match perform_generation(payroll, state.calendar(), today) {
            Ok(schedule) => results.push(BatchOutcome::Ok { schedule }),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    payroll_id = %payroll_id,
                    error = %err,
                    "Payroll failed in batch"
                );
                let api_error: ApiErrorResponse = err.into();
                results.push(BatchOutcome::Error {
                    payroll_id,
                    error: api_error.error,
                });
            }
        }
    }

    let failed = results
        .iter()
        .filter(|r| matches!(r, BatchOutcome::Error { .. }))
        .count();
    let succeeded = results.len() - failed;

    info!(
        correlation_id = %correlation_id,
        succeeded = succeeded,
        failed = failed,
        duration_us = start_time.elapsed().as_micros(),
        "Batch completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(BatchScheduleResponse {
            results,
            succeeded,
            failed,
        }),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Parses the caller's holiday entries, keeping the failures.
fn request_holidays(raw: Vec<serde_json::Value>) -> (Vec<Holiday>, Vec<EngineError>) {
    let mut holidays = Vec::new();
    let mut skipped = Vec::new();

    for value in raw {
        let parsed = serde_json::from_value::<RawHoliday>(value.clone())
            .map_err(|e| EngineError::MalformedHoliday {
                entry: value.to_string(),
                message: e.to_string(),
            })
            .and_then(|entry| parse_holiday(&entry));

        match parsed {
            Ok(holiday) => holidays.push(holiday),
            Err(err) => {
                warn!(error = %err, "Skipping malformed request holiday");
                skipped.push(err);
            }
        }
    }

    (holidays, skipped)
}

/// Generates the schedule for one payroll request.
///
/// `today` is used when the request has no start date.
fn perform_generation(
    request: ScheduleRequest,
    calendar: &CalendarLoader,
    today: NaiveDate,
) -> EngineResult<ScheduleResult> {
    let start_time = Instant::now();

    let start_date = request.start_date.unwrap_or(today);
    let region = request
        .region
        .unwrap_or_else(|| calendar.metadata().default_region.clone());

    let mut holidays = calendar.holidays_for_region(&region);
    let (extra, skipped) = request_holidays(request.holidays);
    holidays.extend(extra);

    let config = request.schedule.into_config(holidays);
    let dates = generate_schedule(start_date, &config, request.periods)?;

    let mut steps = Vec::with_capacity(dates.len() * 2);
    let mut step_number: u32 = 1;
    for (index, result) in dates.iter().enumerate() {
        let period_steps = audit_period(index as u32 + 1, result, &config, step_number);
        step_number += period_steps.len() as u32;
        steps.extend(period_steps);
    }

    let mut warnings = malformed_holiday_warnings(calendar.skipped_holidays());
    warnings.extend(malformed_holiday_warnings(&skipped));

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(ScheduleResult {
        schedule_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        payroll_id: request.payroll_id,
        start_date,
        dates,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ScheduleConfigRequest;
    use crate::models::{AdjustmentRule, CycleType, DateType};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let calendar = CalendarLoader::load("./config/au").expect("Failed to load calendar");
        AppState::new(calendar)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_valid_request() -> ScheduleRequest {
        ScheduleRequest {
            payroll_id: "payroll_001".to_string(),
            start_date: Some(make_date("2025-01-06")),
            periods: 4,
            region: None,
            schedule: ScheduleConfigRequest {
                cycle_type: CycleType::Weekly,
                date_type: DateType::DayOfWeek,
                date_value: Some(5),
                processing_days_before_eft: 2,
                adjustment_rule: AdjustmentRule::Previous,
            },
            holidays: vec![],
        }
    }

    async fn send(router: Router, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/schedule")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ScheduleResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.payroll_id, "payroll_001");
        assert_eq!(result.dates.len(), 4);
        assert_eq!(result.dates[0].original_eft_date, make_date("2025-01-10"));
        assert_eq!(result.dates[0].processing_date, make_date("2025-01-08"));
        assert_eq!(result.audit_trace.steps.len(), 8);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "/schedule", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_payroll_id_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{
            "schedule": {
                "cycle_type": "monthly",
                "date_type": "end_of_month",
                "adjustment_rule": "previous"
            }
        }"#;
        let (status, body) = send(router, "/schedule", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("payroll_id"));
    }

    #[tokio::test]
    async fn test_invalid_configuration_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.schedule.date_type = DateType::FixedDate;
        request.schedule.date_value = None;
        let body = serde_json::to_string(&request).unwrap();

        let (status, body) = send(router, "/schedule", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CONFIGURATION");
        assert!(error.message.contains("date_value"));
    }

    #[test]
    fn test_missing_start_date_uses_today() {
        let calendar = CalendarLoader::load("./config/au").unwrap();
        let mut request = create_valid_request();
        request.start_date = None;
        request.periods = 1;

        let today = make_date("2025-03-03");
        let result = perform_generation(request, &calendar, today).unwrap();

        assert_eq!(result.start_date, today);
        assert_eq!(result.dates[0].original_eft_date, make_date("2025-03-07"));
    }

    #[test]
    fn test_region_holidays_applied() {
        // Melbourne Cup Day, Tue 2025-11-04, only applies in VIC
        let calendar = CalendarLoader::load("./config/au").unwrap();
        let mut request = create_valid_request();
        request.start_date = Some(make_date("2025-11-03"));
        request.periods = 1;
        request.schedule.date_value = Some(2);

        let national =
            perform_generation(request.clone(), &calendar, make_date("2025-01-01")).unwrap();
        assert_eq!(national.dates[0].adjusted_eft_date, make_date("2025-11-04"));

        request.region = Some("VIC".to_string());
        let vic = perform_generation(request, &calendar, make_date("2025-01-01")).unwrap();
        assert_eq!(vic.dates[0].adjusted_eft_date, make_date("2025-11-03"));
        assert!(vic.audit_trace.steps[0].reasoning.contains("Melbourne Cup Day"));
    }

    #[test]
    fn test_request_holidays_skip_malformed_entries() {
        let raw = vec![
            serde_json::json!({ "date": "2025-03-07", "name": "Company Day" }),
            serde_json::json!({ "date": "07/03/2025", "name": "Wrong Format" }),
            serde_json::json!({ "name": "No Date" }),
        ];
        let (holidays, skipped) = request_holidays(raw);

        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "Company Day");
        assert_eq!(skipped.len(), 2);
    }

    #[tokio::test]
    async fn test_batch_continues_past_failure() {
        let router = create_router(create_test_state());
        let mut failing = create_valid_request();
        failing.payroll_id = "payroll_bad".to_string();
        failing.periods = 0;

        let batch = BatchScheduleRequest {
            payrolls: vec![create_valid_request(), failing],
        };
        let body = serde_json::to_string(&batch).unwrap();

        let (status, body) = send(router, "/schedules/batch", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: BatchScheduleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.succeeded, 1);
        assert_eq!(response.failed, 1);
        match &response.results[1] {
            BatchOutcome::Error { payroll_id, error } => {
                assert_eq!(payroll_id, "payroll_bad");
                assert_eq!(error.code, "INVALID_CONFIGURATION");
            }
            other => panic!("Expected error outcome, got {:?}", other),
        }
    }
}
