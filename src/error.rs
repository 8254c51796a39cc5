//! Error types for the gradebook engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Absent grades and absent attendance records are never errors; they are
//! valid states handled by the aggregation functions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the gradebook engine.
///
/// # Example
///
/// ```
/// use gradebook_engine::error::EngineError;
///
/// let error = EngineError::InvalidScore {
///     input: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid score 'abc': not a number");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A score entered in the grid was not numeric.
    #[error("Invalid score '{input}': not a number")]
    InvalidScore {
        /// The raw text that was entered.
        input: String,
    },

    /// A score fell outside `[0, max_score]` for its assignment.
    #[error("Score {score} is out of range for assignment '{assignment_id}' (0 to {max_score})")]
    ScoreOutOfRange {
        /// The assignment being graded.
        assignment_id: String,
        /// The rejected score.
        score: Decimal,
        /// The assignment's maximum score.
        max_score: Decimal,
    },

    /// The assignment referenced by a write does not exist.
    #[error("Assignment not found: {assignment_id}")]
    AssignmentNotFound {
        /// The missing assignment id.
        assignment_id: String,
    },

    /// The attendance record referenced by an update does not exist.
    #[error("Attendance record not found: {record_id}")]
    AttendanceRecordNotFound {
        /// The missing record id.
        record_id: String,
    },

    /// Attendance was already taken for this class and date.
    #[error("Attendance already taken for class '{class_code}' on {date}")]
    DuplicateAttendanceBatch {
        /// The class code.
        class_code: String,
        /// The session date.
        date: NaiveDate,
    },

    /// A read or write against the record store failed.
    #[error("Record store {operation} failed: {message}")]
    StoreFailure {
        /// The store operation that failed (e.g. "upsert_grade").
        operation: String,
        /// A description of the failure.
        message: String,
    },

    /// The caller's session has expired.
    #[error("Session for user '{user_id}' has expired")]
    SessionExpired {
        /// The user the session belonged to.
        user_id: String,
    },
}

impl EngineError {
    /// Creates a store failure for the given operation.
    pub fn store(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StoreFailure {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Returns true if re-issuing the same action may succeed.
    ///
    /// Only store failures are transient; everything else needs different
    /// input from the user.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreFailure { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
