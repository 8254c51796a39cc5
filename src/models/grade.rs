//! Grade records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student's recorded score on one assignment.
///
/// At most one grade exists per `(student_id, assignment_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Record identifier.
    pub id: Uuid,
    /// The graded student.
    pub student_id: String,
    /// The graded assignment.
    pub assignment_id: String,
    /// The recorded score.
    pub score: Decimal,
    /// When the score was last written.
    pub graded_at: DateTime<Utc>,
}

/// A score paired with its assignment's maximum, ready for aggregation.
///
/// # Example
///
/// ```
/// use gradebook_engine::models::ScoredGrade;
/// use rust_decimal::Decimal;
///
/// let scored = ScoredGrade::new(Decimal::new(9, 0), Decimal::new(10, 0));
/// assert_eq!(scored.max_score, Decimal::new(10, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredGrade {
    /// The recorded score.
    pub score: Decimal,
    /// The assignment's maximum score.
    pub max_score: Decimal,
}

impl ScoredGrade {
    /// Creates a scored grade.
    pub fn new(score: Decimal, max_score: Decimal) -> Self {
        Self { score, max_score }
    }
}
