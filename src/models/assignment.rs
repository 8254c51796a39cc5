//! Assignment records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A grouping of assignments shown in the gradebook.
///
/// `weight` is carried for display only. Aggregation always pools raw
/// score over max score regardless of category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCategory {
    /// Category name (e.g. "Homework").
    pub name: String,
    /// Displayed weight.
    pub weight: Decimal,
}

/// A gradable unit of work belonging to exactly one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The class this assignment belongs to.
    pub class_code: String,
    /// Assignment title.
    pub title: String,
    /// Maximum achievable score. Expected to be positive.
    pub max_score: Decimal,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Optional category.
    #[serde(default)]
    pub category: Option<GradeCategory>,
}
