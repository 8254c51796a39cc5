//! Per-student and class-level rollups.
//!
//! Class figures are pooled over the raw record lists. They are never
//! derived from the per-student reports, so a class average is
//! `sum(scores) / sum(max_scores)` across every student, not the mean of
//! student percentages.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{
    Assignment, AttendanceRecord, ClassReport, Enrollment, Grade, GradingPolicy, StudentReport,
    UnknownStatusPolicy,
};

use super::attendance_aggregation::aggregate_attendance;
use super::grade_aggregation::{aggregate_grades, join_scored_grades};
use super::missing::{completion, missing_assignments};

/// Caller-selected policies applied to every rollup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationOptions {
    /// Letter grade table.
    #[serde(default)]
    pub grading: GradingPolicy,
    /// Handling of unrecognized attendance statuses.
    #[serde(default)]
    pub unknown_status: UnknownStatusPolicy,
}

impl AggregationOptions {
    /// Returns a copy using the given grading policy.
    pub fn with_grading(mut self, grading: GradingPolicy) -> Self {
        self.grading = grading;
        self
    }
}

/// The flat record lists for one class, as fetched from the record store.
///
/// `assignments` must be the class's assignments; grades are matched to the
/// class through them. Enrollments and attendance for other classes are
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct ClassRecords<'a> {
    /// The class code.
    pub class_code: &'a str,
    /// The class roster.
    pub enrollments: &'a [Enrollment],
    /// The class's assignments.
    pub assignments: &'a [Assignment],
    /// Grades, possibly for several students.
    pub grades: &'a [Grade],
    /// Attendance records, possibly for several students.
    pub attendance: &'a [AttendanceRecord],
}

/// Builds one student's report for one class.
///
/// A student with no grades and no attendance gets zero percentages and
/// every assignment listed as missing; that is not an error.
pub fn student_report(
    student_id: &str,
    records: &ClassRecords<'_>,
    options: AggregationOptions,
) -> StudentReport {
    let student_grades: Vec<Grade> = records
        .grades
        .iter()
        .filter(|g| g.student_id == student_id)
        .cloned()
        .collect();

    let scored = join_scored_grades(&student_grades, records.assignments);
    let attendance = aggregate_attendance(
        records
            .attendance
            .iter()
            .filter(|r| r.student_id == student_id && r.class_code == records.class_code)
            .map(|r| &r.status),
        options.unknown_status,
    );

    StudentReport {
        student_id: student_id.to_string(),
        class_code: records.class_code.to_string(),
        grades: aggregate_grades(&scored, options.grading),
        attendance,
        missing_assignments: missing_assignments(records.assignments, &student_grades)
            .into_iter()
            .map(|a| a.id.clone())
            .collect(),
        completion: completion(records.assignments, &student_grades),
    }
}

/// Builds the class report: pooled figures plus one report per enrolled
/// student, in roster order.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::{AggregationOptions, ClassRecords, class_report};
///
/// let records = ClassRecords {
///     class_code: "MATH7",
///     enrollments: &[],
///     assignments: &[],
///     grades: &[],
///     attendance: &[],
/// };
/// let report = class_report(&records, AggregationOptions::default());
/// assert!(report.students.is_empty());
/// assert_eq!(report.average.graded_count, 0);
/// ```
pub fn class_report(records: &ClassRecords<'_>, options: AggregationOptions) -> ClassReport {
    let pooled = join_scored_grades(records.grades, records.assignments);
    let attendance = aggregate_attendance(
        records
            .attendance
            .iter()
            .filter(|r| r.class_code == records.class_code)
            .map(|r| &r.status),
        options.unknown_status,
    );

    let mut seen = HashSet::new();
    let students = records
        .enrollments
        .iter()
        .filter(|e| e.class_code == records.class_code)
        .filter(|e| seen.insert(e.student_id.as_str()))
        .map(|e| student_report(&e.student_id, records, options))
        .collect();

    ClassReport {
        class_code: records.class_code.to_string(),
        policy: options.grading,
        average: aggregate_grades(&pooled, options.grading),
        attendance,
        students,
    }
}

/// Builds one report per class the student is enrolled in.
///
/// Used for the student dashboard and the parent report card. `assignments`
/// may span classes; each class only sees its own.
pub fn student_overview(
    student_id: &str,
    enrollments: &[Enrollment],
    assignments: &[Assignment],
    grades: &[Grade],
    attendance: &[AttendanceRecord],
    options: AggregationOptions,
) -> Vec<StudentReport> {
    let mut seen = HashSet::new();
    enrollments
        .iter()
        .filter(|e| e.student_id == student_id)
        .filter(|e| seen.insert(e.class_code.as_str()))
        .map(|e| {
            let class_assignments: Vec<Assignment> = assignments
                .iter()
                .filter(|a| a.class_code == e.class_code)
                .cloned()
                .collect();
            let records = ClassRecords {
                class_code: &e.class_code,
                enrollments,
                assignments: &class_assignments,
                grades,
                attendance,
            };
            student_report(student_id, &records, options)
        })
        .collect()
}
