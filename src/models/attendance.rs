//! Attendance records and status handling.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a student on one class date.
///
/// Serialized as a lowercase string. Strings outside the four recognized
/// values are preserved as `Other`.
///
/// # Example
///
/// ```
/// use gradebook_engine::models::AttendanceStatus;
///
/// assert_eq!(AttendanceStatus::from("late"), AttendanceStatus::Late);
/// assert_eq!(
///     AttendanceStatus::from("tardy"),
///     AttendanceStatus::Other("tardy".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    /// In class.
    Present,
    /// Not in class.
    Absent,
    /// Arrived late.
    Late,
    /// Absence excused.
    Excused,
    /// Any unrecognized status string.
    Other(String),
}

impl AttendanceStatus {
    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true for the four recognized statuses.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for AttendanceStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Self::Present,
            "absent" => Self::Absent,
            "late" => Self::Late,
            "excused" => Self::Excused,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How unrecognized statuses affect the attendance denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStatusPolicy {
    /// Count toward `total` with zero credit.
    #[default]
    CountInTotal,
    /// Leave out of `total` entirely.
    Exclude,
}

/// One student's attendance mark for one class date.
///
/// At most one record exists per `(student_id, class_code, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Record identifier.
    pub id: Uuid,
    /// The student.
    pub student_id: String,
    /// The class.
    pub class_code: String,
    /// The class session date.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}
