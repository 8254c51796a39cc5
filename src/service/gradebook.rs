//! The gradebook service.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{self, AggregationOptions, ClassRecords};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Assignment, AttendanceRecord, AttendanceStatus, ClassReport, Grade, GradingPolicy, ReportCard,
    StudentReport,
};
use crate::session::Session;
use crate::store::{AttendanceFilter, GradeFilter, RecordStore};

/// Source of the current time.
pub type Clock = fn() -> DateTime<Utc>;

/// Parses a score typed into the grade grid and checks it against the
/// assignment's range.
///
/// # Examples
///
/// ```
/// use gradebook_engine::service::parse_score;
/// use gradebook_engine::models::Assignment;
/// use rust_decimal::Decimal;
///
/// let hw = Assignment {
///     id: "hw1".to_string(),
///     class_code: "MATH7".to_string(),
///     title: "Fractions".to_string(),
///     max_score: Decimal::from(10),
///     due_date: None,
///     category: None,
/// };
///
/// assert_eq!(parse_score(" 9.5 ", &hw).unwrap(), Decimal::new(95, 1));
/// assert!(parse_score("ten", &hw).is_err());
/// assert!(parse_score("11", &hw).is_err());
/// ```
pub fn parse_score(raw: &str, assignment: &Assignment) -> EngineResult<Decimal> {
    let trimmed = raw.trim();
    let score = Decimal::from_str(trimmed).map_err(|_| EngineError::InvalidScore {
        input: raw.to_string(),
    })?;

    if score < Decimal::ZERO || score > assignment.max_score {
        return Err(EngineError::ScoreOutOfRange {
            assignment_id: assignment.id.clone(),
            score,
            max_score: assignment.max_score,
        });
    }

    Ok(score)
}

/// Fetch-then-compute gradebook operations.
pub struct Gradebook<S> {
    store: Arc<S>,
    options: AggregationOptions,
    clock: Clock,
}

impl<S> Clone for Gradebook<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            options: self.options,
            clock: self.clock,
        }
    }
}

impl<S: RecordStore> Gradebook<S> {
    /// Creates a gradebook with the given default options.
    pub fn new(store: Arc<S>, options: AggregationOptions) -> Self {
        Self {
            store,
            options,
            clock: Utc::now,
        }
    }

    /// Creates a gradebook using the loaded configuration's defaults.
    pub fn from_config(store: Arc<S>, config: &ConfigLoader) -> Self {
        Self::new(store, config.aggregation_options())
    }

    /// Replaces the clock used for session checks and graded times.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the default aggregation options.
    pub fn options(&self) -> AggregationOptions {
        self.options
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn options_for(&self, policy: Option<GradingPolicy>) -> AggregationOptions {
        match policy {
            Some(policy) => self.options.with_grading(policy),
            None => self.options,
        }
    }

    /// Sets a student's score on an assignment.
    ///
    /// The raw input is parsed and range-checked before any write. The write
    /// itself is a single upsert keyed on `(student_id, assignment_id)`, so
    /// repeating it leaves exactly one grade.
    pub async fn set_grade(
        &self,
        session: &Session,
        student_id: &str,
        assignment_id: &str,
        raw_score: &str,
    ) -> EngineResult<Grade> {
        let now = (self.clock)();
        session.ensure_active(now)?;

        let assignment = self
            .store
            .get_assignment(assignment_id)
            .await?
            .ok_or_else(|| EngineError::AssignmentNotFound {
                assignment_id: assignment_id.to_string(),
            })?;

        let score = parse_score(raw_score, &assignment).inspect_err(|err| {
            warn!(
                user_id = %session.user_id,
                student_id,
                assignment_id,
                error = %err,
                "Rejected grade input"
            );
        })?;

        let grade = self
            .store
            .upsert_grade(student_id, assignment_id, score, now)
            .await?;

        info!(
            user_id = %session.user_id,
            class_code = %assignment.class_code,
            student_id,
            assignment_id,
            score = %grade.score,
            "Grade saved"
        );
        Ok(grade)
    }

    /// Seeds attendance for every enrolled student on a fresh date.
    ///
    /// Fails with `DuplicateAttendanceBatch` if the class already has any
    /// record on `date`; existing statuses are left as they were.
    pub async fn take_attendance(
        &self,
        session: &Session,
        class_code: &str,
        date: NaiveDate,
        default_status: AttendanceStatus,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        session.ensure_active((self.clock)())?;

        let existing = self
            .store
            .list_attendance(&AttendanceFilter::for_class(class_code).on(date))
            .await?;
        if !existing.is_empty() {
            warn!(class_code, %date, existing = existing.len(), "Attendance already taken");
            return Err(EngineError::DuplicateAttendanceBatch {
                class_code: class_code.to_string(),
                date,
            });
        }

        let enrollments = self.store.list_enrollments(class_code).await?;
        let mut seen = HashSet::new();
        let student_ids: Vec<String> = enrollments
            .into_iter()
            .map(|e| e.student_id)
            .filter(|id| seen.insert(id.clone()))
            .collect();

        let records = self
            .store
            .insert_attendance_batch(class_code, date, &student_ids, default_status)
            .await?;

        info!(
            user_id = %session.user_id,
            class_code,
            %date,
            records = records.len(),
            "Attendance taken"
        );
        Ok(records)
    }

    /// Changes one student's status on an already-taken date.
    pub async fn update_attendance_status(
        &self,
        session: &Session,
        record_id: Uuid,
        status: AttendanceStatus,
    ) -> EngineResult<AttendanceRecord> {
        session.ensure_active((self.clock)())?;

        let record = self.store.update_attendance(record_id, status).await?;
        info!(
            user_id = %session.user_id,
            class_code = %record.class_code,
            student_id = %record.student_id,
            status = %record.status,
            "Attendance updated"
        );
        Ok(record)
    }

    /// Fetches the class's records and builds the class report.
    pub async fn class_report(
        &self,
        class_code: &str,
        policy: Option<GradingPolicy>,
    ) -> EngineResult<ClassReport> {
        let start = Instant::now();
        let grade_filter = GradeFilter::for_class(class_code);
        let attendance_filter = AttendanceFilter::for_class(class_code);

        let (enrollments, assignments, grades, attendance) = tokio::try_join!(
            self.store.list_enrollments(class_code),
            self.store.list_assignments(class_code),
            self.store.list_grades(&grade_filter),
            self.store.list_attendance(&attendance_filter),
        )?;

        let records = ClassRecords {
            class_code,
            enrollments: &enrollments,
            assignments: &assignments,
            grades: &grades,
            attendance: &attendance,
        };
        let report = calculation::class_report(&records, self.options_for(policy));

        debug!(
            class_code,
            students = report.students.len(),
            average = %report.average.percentage,
            duration_us = start.elapsed().as_micros(),
            "Class report computed"
        );
        Ok(report)
    }

    /// Fetches one student's records in one class and builds their report.
    pub async fn student_report(
        &self,
        student_id: &str,
        class_code: &str,
        policy: Option<GradingPolicy>,
    ) -> EngineResult<StudentReport> {
        let grade_filter = GradeFilter::for_class(class_code).student(student_id);
        let attendance_filter = AttendanceFilter::for_class(class_code).student(student_id);

        let (assignments, grades, attendance) = tokio::try_join!(
            self.store.list_assignments(class_code),
            self.store.list_grades(&grade_filter),
            self.store.list_attendance(&attendance_filter),
        )?;

        let records = ClassRecords {
            class_code,
            enrollments: &[],
            assignments: &assignments,
            grades: &grades,
            attendance: &attendance,
        };
        Ok(calculation::student_report(
            student_id,
            &records,
            self.options_for(policy),
        ))
    }

    /// Builds a student's report card across all their classes.
    pub async fn report_card(
        &self,
        student_id: &str,
        policy: Option<GradingPolicy>,
    ) -> EngineResult<ReportCard> {
        let grade_filter = GradeFilter::for_student(student_id);
        let attendance_filter = AttendanceFilter::for_student(student_id);

        let (student, enrollments, grades, attendance) = tokio::try_join!(
            self.store.get_student(student_id),
            self.store.list_enrollments_for_student(student_id),
            self.store.list_grades(&grade_filter),
            self.store.list_attendance(&attendance_filter),
        )?;

        let mut assignments = Vec::new();
        let mut classes_seen = HashSet::new();
        for enrollment in &enrollments {
            if classes_seen.insert(enrollment.class_code.as_str()) {
                assignments.extend(self.store.list_assignments(&enrollment.class_code).await?);
            }
        }

        let options = self.options_for(policy);
        let classes = calculation::student_overview(
            student_id,
            &enrollments,
            &assignments,
            &grades,
            &attendance,
            options,
        );

        debug!(student_id, classes = classes.len(), "Report card computed");
        Ok(ReportCard {
            student_id: student_id.to_string(),
            student,
            policy: options.grading,
            classes,
        })
    }
}
