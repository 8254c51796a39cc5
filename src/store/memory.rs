//! In-memory record store.
//!
//! Backs tests and single-process use. All state sits behind one
//! `tokio::sync::RwLock`, so the attendance freshness check and the batch
//! insert happen under the same write lock.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, Assignment, Enrollment, Grade, Student};

use super::{AttendanceFilter, GradeFilter, RecordStore};

#[derive(Debug, Default)]
struct Tables {
    students: Vec<Student>,
    enrollments: Vec<Enrollment>,
    assignments: Vec<Assignment>,
    grades: Vec<Grade>,
    attendance: Vec<AttendanceRecord>,
}

/// A [`RecordStore`] held entirely in memory.
///
/// # Example
///
/// ```
/// use gradebook_engine::store::{GradeFilter, InMemoryStore, RecordStore};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::new();
/// store.upsert_grade("alice", "hw1", Decimal::from(7), Utc::now()).await.unwrap();
/// store.upsert_grade("alice", "hw1", Decimal::from(9), Utc::now()).await.unwrap();
///
/// let grades = store.list_grades(&GradeFilter::for_student("alice")).await.unwrap();
/// assert_eq!(grades.len(), 1);
/// assert_eq!(grades[0].score, Decimal::from(9));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student profile.
    pub async fn insert_student(&self, student: Student) {
        self.tables.write().await.students.push(student);
    }

    /// Enrolls a student in a class. Enrolling twice is a no-op.
    pub async fn enroll(&self, student_id: &str, class_code: &str) -> Enrollment {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables
            .enrollments
            .iter()
            .find(|e| e.student_id == student_id && e.class_code == class_code)
        {
            return existing.clone();
        }

        let enrollment = Enrollment {
            student_id: student_id.to_string(),
            class_code: class_code.to_string(),
            enrolled_at: Utc::now(),
        };
        tables.enrollments.push(enrollment.clone());
        enrollment
    }

    /// Removes an enrollment. Returns false if it did not exist.
    pub async fn unenroll(&self, student_id: &str, class_code: &str) -> bool {
        let mut tables = self.tables.write().await;
        let before = tables.enrollments.len();
        tables
            .enrollments
            .retain(|e| !(e.student_id == student_id && e.class_code == class_code));
        tables.enrollments.len() != before
    }

    /// Adds an assignment.
    pub async fn insert_assignment(&self, assignment: Assignment) {
        self.tables.write().await.assignments.push(assignment);
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get_student(&self, student_id: &str) -> EngineResult<Option<Student>> {
        let tables = self.tables.read().await;
        Ok(tables.students.iter().find(|s| s.id == student_id).cloned())
    }

    async fn list_enrollments(&self, class_code: &str) -> EngineResult<Vec<Enrollment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| e.class_code == class_code)
            .cloned()
            .collect())
    }

    async fn list_enrollments_for_student(
        &self,
        student_id: &str,
    ) -> EngineResult<Vec<Enrollment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_assignments(&self, class_code: &str) -> EngineResult<Vec<Assignment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .assignments
            .iter()
            .filter(|a| a.class_code == class_code)
            .cloned()
            .collect())
    }

    async fn get_assignment(&self, assignment_id: &str) -> EngineResult<Option<Assignment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .assignments
            .iter()
            .find(|a| a.id == assignment_id)
            .cloned())
    }

    async fn list_grades(&self, filter: &GradeFilter) -> EngineResult<Vec<Grade>> {
        let tables = self.tables.read().await;

        let class_assignments: Option<HashSet<&str>> = filter.class_code.as_deref().map(|code| {
            tables
                .assignments
                .iter()
                .filter(|a| a.class_code == code)
                .map(|a| a.id.as_str())
                .collect()
        });

        Ok(tables
            .grades
            .iter()
            .filter(|g| {
                class_assignments
                    .as_ref()
                    .is_none_or(|ids| ids.contains(g.assignment_id.as_str()))
            })
            .filter(|g| {
                filter
                    .student_id
                    .as_deref()
                    .is_none_or(|s| g.student_id == s)
            })
            .cloned()
            .collect())
    }

    async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .attendance
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn upsert_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
        score: Decimal,
        graded_at: DateTime<Utc>,
    ) -> EngineResult<Grade> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables
            .grades
            .iter_mut()
            .find(|g| g.student_id == student_id && g.assignment_id == assignment_id)
        {
            existing.score = score;
            existing.graded_at = graded_at;
            debug!(student_id, assignment_id, %score, "Updated grade");
            return Ok(existing.clone());
        }

        let grade = Grade {
            id: Uuid::new_v4(),
            student_id: student_id.to_string(),
            assignment_id: assignment_id.to_string(),
            score,
            graded_at,
        };
        tables.grades.push(grade.clone());
        debug!(student_id, assignment_id, %score, "Inserted grade");
        Ok(grade)
    }

    async fn insert_attendance_batch(
        &self,
        class_code: &str,
        date: NaiveDate,
        student_ids: &[String],
        default_status: AttendanceStatus,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut tables = self.tables.write().await;

        if tables
            .attendance
            .iter()
            .any(|r| r.class_code == class_code && r.date == date)
        {
            return Err(EngineError::DuplicateAttendanceBatch {
                class_code: class_code.to_string(),
                date,
            });
        }

        let records: Vec<AttendanceRecord> = student_ids
            .iter()
            .map(|student_id| AttendanceRecord {
                id: Uuid::new_v4(),
                student_id: student_id.clone(),
                class_code: class_code.to_string(),
                date,
                status: default_status.clone(),
            })
            .collect();
        tables.attendance.extend(records.iter().cloned());
        Ok(records)
    }

    async fn update_attendance(
        &self,
        record_id: Uuid,
        status: AttendanceStatus,
    ) -> EngineResult<AttendanceRecord> {
        let mut tables = self.tables.write().await;
        let record = tables
            .attendance
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| EngineError::AttendanceRecordNotFound {
                record_id: record_id.to_string(),
            })?;
        record.status = status;
        Ok(record.clone())
    }
}
