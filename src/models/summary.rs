//! Aggregation outputs.
//!
//! These are the values rendered by the gradebook grid, the student
//! dashboard, the teacher summary and the parent report card.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{GradingPolicy, LetterGrade, Student};

/// Totals and letter grade over a set of grades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSummary {
    /// Sum of recorded scores.
    pub total_score: Decimal,
    /// Sum of the max scores of the graded assignments.
    pub max_possible: Decimal,
    /// Rounded whole percentage, zero when nothing is graded.
    pub percentage: Decimal,
    /// Letter under the policy the summary was computed with.
    pub letter_grade: LetterGrade,
    /// Number of grades included.
    pub graded_count: usize,
}

/// Per-status attendance counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    /// Records marked present.
    pub present: usize,
    /// Records marked absent.
    pub absent: usize,
    /// Records marked late.
    pub late: usize,
    /// Records marked excused.
    pub excused: usize,
    /// Records with an unrecognized status.
    pub other: usize,
}

/// Weighted attendance over a set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Per-status counts.
    pub counts: AttendanceCounts,
    /// Denominator used for the percentage.
    pub total: usize,
    /// `present + excused + 0.5 * late`.
    pub weighted: Decimal,
    /// Rounded whole percentage, zero when there are no records.
    pub percentage: Decimal,
}

/// Graded versus total assignment counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Assignments with a grade.
    pub graded: usize,
    /// All assignments in the class.
    pub total: usize,
}

/// One student's results in one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentReport {
    /// The student.
    pub student_id: String,
    /// The class.
    pub class_code: String,
    /// Grade rollup over the student's grades in this class.
    pub grades: GradeSummary,
    /// Attendance rollup over the student's records in this class.
    pub attendance: AttendanceSummary,
    /// Ids of assignments with no grade, in assignment order.
    pub missing_assignments: Vec<String>,
    /// Graded / total counts.
    pub completion: Completion,
}

/// Class-wide pooled results plus every enrolled student's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassReport {
    /// The class.
    pub class_code: String,
    /// Policy used for every letter grade in this report.
    pub policy: GradingPolicy,
    /// Pooled grade average over all students.
    pub average: GradeSummary,
    /// Pooled attendance over all students.
    pub attendance: AttendanceSummary,
    /// Per-student reports in roster order.
    pub students: Vec<StudentReport>,
}

/// A student's results across every class they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCard {
    /// The student.
    pub student_id: String,
    /// Profile, when the store has one.
    pub student: Option<Student>,
    /// Policy used for every letter grade on the card.
    pub policy: GradingPolicy,
    /// One report per enrolled class.
    pub classes: Vec<StudentReport>,
}
