//! Request types for the gradebook engine API.
//!
//! Requests carry record lists that the caller already fetched. Record ids
//! and timestamps are optional here since the engine does not use them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::AggregationOptions;
use crate::models::{
    Assignment, AttendanceRecord, AttendanceStatus, Enrollment, Grade, GradeCategory,
    GradingPolicy, ScoredGrade, UnknownStatusPolicy,
};

use super::response::ApiError;

/// Largest score or max score accepted in a request body.
pub const MAX_SCORE_LIMIT: i64 = 1_000_000;

fn check_max_score(label: &str, max_score: Decimal) -> Result<(), ApiError> {
    if max_score <= Decimal::ZERO {
        return Err(ApiError::with_details(
            "VALIDATION_ERROR",
            format!("{} has a non-positive max_score", label),
            format!("max_score was {}", max_score),
        ));
    }
    if max_score > Decimal::from(MAX_SCORE_LIMIT) {
        return Err(ApiError::with_details(
            "VALIDATION_ERROR",
            format!("{} has a max_score above {}", label, MAX_SCORE_LIMIT),
            format!("max_score was {}", max_score),
        ));
    }
    Ok(())
}

fn check_score(label: &str, score: Decimal) -> Result<(), ApiError> {
    if score < Decimal::ZERO || score > Decimal::from(MAX_SCORE_LIMIT) {
        return Err(ApiError::with_details(
            "VALIDATION_ERROR",
            format!("{} has a score outside 0 to {}", label, MAX_SCORE_LIMIT),
            format!("score was {}", score),
        ));
    }
    Ok(())
}

/// Request body for `POST /grades/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSummaryRequest {
    /// Grading policy; the configured default when absent.
    #[serde(default)]
    pub policy: Option<GradingPolicy>,
    /// Scores paired with their max scores.
    pub grades: Vec<ScoredGrade>,
}

/// Request body for `POST /attendance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryRequest {
    /// Unknown-status handling; the configured default when absent.
    #[serde(default)]
    pub unknown_status: Option<UnknownStatusPolicy>,
    /// One status per attendance record.
    pub records: Vec<AttendanceStatus>,
}

/// Request body for `POST /classes/report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReportRequest {
    /// The class code.
    pub class_code: String,
    /// Grading policy; the configured default when absent.
    #[serde(default)]
    pub policy: Option<GradingPolicy>,
    /// Unknown-status handling; the configured default when absent.
    #[serde(default)]
    pub unknown_status: Option<UnknownStatusPolicy>,
    /// The class roster.
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRequest>,
    /// The class's assignments.
    #[serde(default)]
    pub assignments: Vec<AssignmentRequest>,
    /// Grades on the class's assignments.
    #[serde(default)]
    pub grades: Vec<GradeRequest>,
    /// Attendance records for the class.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
}

/// Roster entry in a class report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    /// The enrolled student.
    pub student_id: String,
    /// When the enrollment was created.
    #[serde(default)]
    pub enrolled_at: Option<DateTime<Utc>>,
}

/// Assignment in a class report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Assignment id.
    pub id: String,
    /// Assignment title.
    #[serde(default)]
    pub title: String,
    /// Maximum score; must be positive.
    pub max_score: Decimal,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Optional category.
    #[serde(default)]
    pub category: Option<GradeCategory>,
}

/// Grade in a class report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    /// Record id, if the caller has one.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// The graded student.
    pub student_id: String,
    /// The graded assignment.
    pub assignment_id: String,
    /// The recorded score.
    pub score: Decimal,
    /// When the score was written.
    #[serde(default)]
    pub graded_at: Option<DateTime<Utc>>,
}

/// Attendance record in a class report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Record id, if the caller has one.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// The student.
    pub student_id: String,
    /// The class session date.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}

/// Domain records built from a [`ClassReportRequest`].
#[derive(Debug, Clone)]
pub struct ClassRecordSet {
    /// The class code.
    pub class_code: String,
    /// Options resolved against the configured defaults.
    pub options: AggregationOptions,
    /// Roster.
    pub enrollments: Vec<Enrollment>,
    /// Assignments.
    pub assignments: Vec<Assignment>,
    /// Grades.
    pub grades: Vec<Grade>,
    /// Attendance records.
    pub attendance: Vec<AttendanceRecord>,
}

impl GradeSummaryRequest {
    /// Checks every grade for a negative or oversized score and a
    /// non-positive or oversized max score.
    pub fn validate(&self) -> Result<(), ApiError> {
        for (index, grade) in self.grades.iter().enumerate() {
            let label = format!("Grade {}", index);
            check_max_score(&label, grade.max_score)?;
            check_score(&label, grade.score)?;
        }
        Ok(())
    }

    /// Resolves the grading policy against the configured default.
    pub fn policy_or(&self, defaults: AggregationOptions) -> GradingPolicy {
        self.policy.unwrap_or(defaults.grading)
    }
}

impl AttendanceSummaryRequest {
    /// Resolves the unknown-status policy against the configured default.
    pub fn unknown_status_or(&self, defaults: AggregationOptions) -> UnknownStatusPolicy {
        self.unknown_status.unwrap_or(defaults.unknown_status)
    }
}

impl ClassReportRequest {
    /// Checks the request for values the engine cannot aggregate.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.class_code.trim().is_empty() {
            return Err(ApiError::validation_error("class_code must not be empty"));
        }
        for assignment in &self.assignments {
            check_max_score(&format!("Assignment '{}'", assignment.id), assignment.max_score)?;
        }
        for grade in &self.grades {
            check_score(
                &format!(
                    "Grade for '{}' on '{}'",
                    grade.student_id, grade.assignment_id
                ),
                grade.score,
            )?;
        }
        Ok(())
    }

    /// Converts the request into domain records stamped with `now` where the
    /// caller left timestamps out.
    pub fn into_records(self, defaults: AggregationOptions, now: DateTime<Utc>) -> ClassRecordSet {
        let options = AggregationOptions {
            grading: self.policy.unwrap_or(defaults.grading),
            unknown_status: self.unknown_status.unwrap_or(defaults.unknown_status),
        };
        let class_code = self.class_code;

        let enrollments = self
            .enrollments
            .into_iter()
            .map(|e| Enrollment {
                student_id: e.student_id,
                class_code: class_code.clone(),
                enrolled_at: e.enrolled_at.unwrap_or(now),
            })
            .collect();

        let assignments = self
            .assignments
            .into_iter()
            .map(|a| Assignment {
                id: a.id,
                class_code: class_code.clone(),
                title: a.title,
                max_score: a.max_score,
                due_date: a.due_date,
                category: a.category,
            })
            .collect();

        let grades = self
            .grades
            .into_iter()
            .map(|g| Grade {
                id: g.id.unwrap_or_else(Uuid::new_v4),
                student_id: g.student_id,
                assignment_id: g.assignment_id,
                score: g.score,
                graded_at: g.graded_at.unwrap_or(now),
            })
            .collect();

        let attendance = self
            .attendance
            .into_iter()
            .map(|r| AttendanceRecord {
                id: r.id.unwrap_or_else(Uuid::new_v4),
                student_id: r.student_id,
                class_code: class_code.clone(),
                date: r.date,
                status: r.status,
            })
            .collect();

        ClassRecordSet {
            class_code,
            options,
            enrollments,
            assignments,
            grades,
            attendance,
        }
    }
}
