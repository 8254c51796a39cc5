//! Record store boundary.
//!
//! The engine never owns persistence. It reads flat record lists through
//! [`RecordStore`] and writes single records or attendance batches back.
//! Concurrent writers are last-write-wins at the store; the engine does no
//! conflict detection of its own.

mod memory;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceStatus, Assignment, Enrollment, Grade, Student};

pub use memory::InMemoryStore;

/// Narrows a grade listing. Empty filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeFilter {
    /// Only grades on assignments belonging to this class.
    pub class_code: Option<String>,
    /// Only grades for this student.
    pub student_id: Option<String>,
}

impl GradeFilter {
    /// Grades on the class's assignments.
    pub fn for_class(class_code: impl Into<String>) -> Self {
        Self {
            class_code: Some(class_code.into()),
            ..Self::default()
        }
    }

    /// Grades for one student across all classes.
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            ..Self::default()
        }
    }

    /// Restricts to one student.
    pub fn student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }
}

/// Narrows an attendance listing. Empty filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    /// Only records for this class.
    pub class_code: Option<String>,
    /// Only records for this student.
    pub student_id: Option<String>,
    /// Only records on this date.
    pub date: Option<NaiveDate>,
}

impl AttendanceFilter {
    /// Records for the class.
    pub fn for_class(class_code: impl Into<String>) -> Self {
        Self {
            class_code: Some(class_code.into()),
            ..Self::default()
        }
    }

    /// Records for one student across all classes.
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            ..Self::default()
        }
    }

    /// Restricts to one student.
    pub fn student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Restricts to one date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns true if the record passes every set field.
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.class_code
            .as_deref()
            .is_none_or(|c| record.class_code == c)
            && self
                .student_id
                .as_deref()
                .is_none_or(|s| record.student_id == s)
            && self.date.is_none_or(|d| record.date == d)
    }
}

/// Read and write operations the engine needs from persistence.
///
/// Any failure is reported as [`EngineError::StoreFailure`](crate::error::EngineError::StoreFailure)
/// unless a more specific variant applies.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Looks up a student profile.
    async fn get_student(&self, student_id: &str) -> EngineResult<Option<Student>>;

    /// Lists the roster of a class.
    async fn list_enrollments(&self, class_code: &str) -> EngineResult<Vec<Enrollment>>;

    /// Lists the classes a student is enrolled in.
    async fn list_enrollments_for_student(&self, student_id: &str)
    -> EngineResult<Vec<Enrollment>>;

    /// Lists the assignments of a class.
    async fn list_assignments(&self, class_code: &str) -> EngineResult<Vec<Assignment>>;

    /// Looks up one assignment.
    async fn get_assignment(&self, assignment_id: &str) -> EngineResult<Option<Assignment>>;

    /// Lists grades matching the filter.
    async fn list_grades(&self, filter: &GradeFilter) -> EngineResult<Vec<Grade>>;

    /// Lists attendance records matching the filter.
    async fn list_attendance(&self, filter: &AttendanceFilter)
    -> EngineResult<Vec<AttendanceRecord>>;

    /// Writes the score for `(student_id, assignment_id)`, updating the
    /// existing grade and its graded time if there is one.
    async fn upsert_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
        score: Decimal,
        graded_at: DateTime<Utc>,
    ) -> EngineResult<Grade>;

    /// Seeds one record per student for a fresh `(class_code, date)`.
    ///
    /// Fails with `DuplicateAttendanceBatch` if any record already exists
    /// for that class and date.
    async fn insert_attendance_batch(
        &self,
        class_code: &str,
        date: NaiveDate,
        student_ids: &[String],
        default_status: AttendanceStatus,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Changes the status of one existing record.
    async fn update_attendance(
        &self,
        record_id: Uuid,
        status: AttendanceStatus,
    ) -> EngineResult<AttendanceRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class: &str, student: &str, day: u32) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4(),
            student_id: student.to_string(),
            class_code: class.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            status: AttendanceStatus::Present,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(AttendanceFilter::default().matches(&record("MATH7", "alice", 1)));
    }

    #[test]
    fn test_filter_fields_combine() {
        let filter = AttendanceFilter::for_class("MATH7")
            .student("alice")
            .on(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());

        assert!(filter.matches(&record("MATH7", "alice", 1)));
        assert!(!filter.matches(&record("MATH7", "alice", 2)));
        assert!(!filter.matches(&record("MATH7", "bob", 1)));
        assert!(!filter.matches(&record("SCI7", "alice", 1)));
    }

    #[test]
    fn test_grade_filter_builders() {
        let filter = GradeFilter::for_class("MATH7").student("alice");
        assert_eq!(filter.class_code.as_deref(), Some("MATH7"));
        assert_eq!(filter.student_id.as_deref(), Some("alice"));
        assert_eq!(GradeFilter::for_student("bob").class_code, None);
    }
}
