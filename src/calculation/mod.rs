//! Aggregation logic for the gradebook engine.
//!
//! Every function here is pure and synchronous: it takes record lists that
//! were already fetched and returns fresh summaries. Callers re-fetch and
//! call again after every write.

mod attendance_aggregation;
mod grade_aggregation;
mod letter_grade;
mod missing;
mod percentage;
mod rollup;

pub use attendance_aggregation::{aggregate_attendance, attendance_credit};
pub use grade_aggregation::{aggregate_grades, join_scored_grades};
pub use letter_grade::{FULL_THRESHOLDS, SIMPLE_THRESHOLDS, assignment_mark, letter_grade};
pub use missing::{completion, missing_assignments};
pub use percentage::{percentage_of, round_percentage};
pub use rollup::{AggregationOptions, ClassRecords, class_report, student_overview, student_report};
