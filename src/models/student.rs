//! Student and enrollment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student profile.
///
/// The `id` never changes; profile fields may be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier for the student.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Contact email, if on file.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number, if on file.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Binds a student to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// The enrolled student.
    pub student_id: String,
    /// The class code (e.g. "MATH7").
    pub class_code: String,
    /// When the enrollment was created.
    pub enrolled_at: DateTime<Utc>,
}
