//! HTTP API module for the gradebook engine.
//!
//! Exposes the aggregation functions as JSON endpoints for callers that
//! fetch records themselves.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AssignmentRequest, AttendanceRequest, AttendanceSummaryRequest, ClassRecordSet,
    ClassReportRequest, EnrollmentRequest, GradeRequest, GradeSummaryRequest, MAX_SCORE_LIMIT,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
