//! HTTP request handlers for the gradebook engine API.
//!
//! Every endpoint is stateless: the caller posts records it already fetched
//! and gets fresh aggregates back.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ClassRecords, aggregate_attendance, aggregate_grades, class_report};

use super::request::{AttendanceSummaryRequest, ClassReportRequest, GradeSummaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/grades/summary", post(grade_summary_handler))
        .route("/attendance/summary", post(attendance_summary_handler))
        .route("/classes/report", post(class_report_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
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
    }
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn json_error(response: ApiErrorResponse) -> Response {
    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response.error),
    )
        .into_response()
}

/// Handler for POST /grades/summary.
async fn grade_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<GradeSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grade summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_error(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                correlation_id,
            )));
        }
    };

    if let Err(error) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %error.message,
            "Grade summary request failed validation"
        );
        return json_error(ApiErrorResponse::bad_request(error));
    }

    let policy = request.policy_or(state.default_options());
    let summary = aggregate_grades(&request.grades, policy);

    info!(
        correlation_id = %correlation_id,
        grades = request.grades.len(),
        percentage = %summary.percentage,
        letter_grade = %summary.letter_grade,
        "Grade summary computed"
    );
    json_ok(summary)
}

/// Handler for POST /attendance/summary.
async fn attendance_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_error(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                correlation_id,
            )));
        }
    };

    let unknown = request.unknown_status_or(state.default_options());
    let summary = aggregate_attendance(&request.records, unknown);

    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        percentage = %summary.percentage,
        "Attendance summary computed"
    );
    json_ok(summary)
}

/// Handler for POST /classes/report.
async fn class_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing class report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_error(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                correlation_id,
            )));
        }
    };

    if let Err(error) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %error.message,
            "Class report request failed validation"
        );
        return json_error(ApiErrorResponse::bad_request(error));
    }

    let start_time = Instant::now();
    let set = request.into_records(state.default_options(), Utc::now());
    let records = ClassRecords {
        class_code: &set.class_code,
        enrollments: &set.enrollments,
        assignments: &set.assignments,
        grades: &set.grades,
        attendance: &set.attendance,
    };
    let report = class_report(&records, set.options);

    info!(
        correlation_id = %correlation_id,
        class_code = %report.class_code,
        students = report.students.len(),
        average = %report.average.percentage,
        duration_us = start_time.elapsed().as_micros(),
        "Class report computed"
    );
    json_ok(report)
}
