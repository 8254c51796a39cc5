//! Class dashboard with a fail-closed snapshot.

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AttendanceStatus, ClassReport, GradingPolicy};
use crate::session::Session;
use crate::store::RecordStore;

use super::Gradebook;

/// A class view that holds the last successfully computed report.
///
/// Every edit goes to the store first, then the whole class is re-fetched
/// and recomputed. The snapshot is only replaced when both steps succeed;
/// on any error the previous report stays in place and the error is
/// returned.
pub struct ClassDashboard<S> {
    gradebook: Gradebook<S>,
    class_code: String,
    policy: Option<GradingPolicy>,
    snapshot: ClassReport,
}

impl<S: RecordStore> ClassDashboard<S> {
    /// Loads the class and computes the first snapshot.
    pub async fn open(
        gradebook: Gradebook<S>,
        class_code: impl Into<String>,
        policy: Option<GradingPolicy>,
    ) -> EngineResult<Self> {
        let class_code = class_code.into();
        let snapshot = gradebook.class_report(&class_code, policy).await?;
        Ok(Self {
            gradebook,
            class_code,
            policy,
            snapshot,
        })
    }

    /// Returns the class code.
    pub fn class_code(&self) -> &str {
        &self.class_code
    }

    /// Returns the last good report.
    pub fn snapshot(&self) -> &ClassReport {
        &self.snapshot
    }

    /// Re-fetches and recomputes the report.
    pub async fn refresh(&mut self) -> EngineResult<&ClassReport> {
        match self
            .gradebook
            .class_report(&self.class_code, self.policy)
            .await
        {
            Ok(report) => {
                self.snapshot = report;
                Ok(&self.snapshot)
            }
            Err(err) => {
                warn!(class_code = %self.class_code, error = %err, "Refresh failed, keeping previous report");
                Err(err)
            }
        }
    }

    /// Sets one grade cell and refreshes.
    pub async fn set_grade(
        &mut self,
        session: &Session,
        student_id: &str,
        assignment_id: &str,
        raw_score: &str,
    ) -> EngineResult<&ClassReport> {
        self.gradebook
            .set_grade(session, student_id, assignment_id, raw_score)
            .await?;
        self.refresh().await
    }

    /// Takes attendance for a fresh date and refreshes.
    pub async fn take_attendance(
        &mut self,
        session: &Session,
        date: NaiveDate,
        default_status: AttendanceStatus,
    ) -> EngineResult<&ClassReport> {
        self.gradebook
            .take_attendance(session, &self.class_code, date, default_status)
            .await?;
        self.refresh().await
    }

    /// Changes one attendance record and refreshes.
    pub async fn update_attendance_status(
        &mut self,
        session: &Session,
        record_id: Uuid,
        status: AttendanceStatus,
    ) -> EngineResult<&ClassReport> {
        self.gradebook
            .update_attendance_status(session, record_id, status)
            .await?;
        self.refresh().await
    }
}
