//! Core data models for the gradebook engine.
//!
//! Record types mirror what the record store hands back as flat lists;
//! summary types are the engine's outputs.

mod assignment;
mod attendance;
mod grade;
mod grading;
mod student;
mod summary;

pub use assignment::{Assignment, GradeCategory};
pub use attendance::{AttendanceRecord, AttendanceStatus, UnknownStatusPolicy};
pub use grade::{Grade, ScoredGrade};
pub use grading::{AssignmentMark, GradingPolicy, LetterGrade};
pub use student::{Enrollment, Student};
pub use summary::{
    AttendanceCounts, AttendanceSummary, ClassReport, Completion, GradeSummary, ReportCard,
    StudentReport,
};
