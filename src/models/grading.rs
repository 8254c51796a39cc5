//! Grading policies and letter grades.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named letter-grade threshold table, chosen by the caller.
///
/// # Example
///
/// ```
/// use gradebook_engine::models::GradingPolicy;
///
/// let policy: GradingPolicy = serde_json::from_str("\"simple\"").unwrap();
/// assert_eq!(policy, GradingPolicy::Simple);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingPolicy {
    /// Plus/minus table: A, A-, B+, B, B-, C+, C, C-, D+, D, D-, F.
    #[default]
    Full,
    /// Whole letters only: A, B, C, D, F at 90/80/70/60.
    Simple,
}

/// A letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Failing.
    #[serde(rename = "F")]
    F,
    /// D minus.
    #[serde(rename = "D-")]
    DMinus,
    /// D.
    #[serde(rename = "D")]
    D,
    /// D plus.
    #[serde(rename = "D+")]
    DPlus,
    /// C minus.
    #[serde(rename = "C-")]
    CMinus,
    /// C.
    #[serde(rename = "C")]
    C,
    /// C plus.
    #[serde(rename = "C+")]
    CPlus,
    /// B minus.
    #[serde(rename = "B-")]
    BMinus,
    /// B.
    #[serde(rename = "B")]
    B,
    /// B plus.
    #[serde(rename = "B+")]
    BPlus,
    /// A minus.
    #[serde(rename = "A-")]
    AMinus,
    /// A.
    #[serde(rename = "A")]
    A,
}

impl LetterGrade {
    /// Returns the display form (e.g. "B+").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mark shown for a single assignment cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AssignmentMark {
    /// No score, or no usable max score. Distinct from an F.
    Ungraded,
    /// A scored assignment.
    Graded {
        /// Rounded whole percentage.
        percentage: Decimal,
        /// Letter under the requested policy.
        letter_grade: LetterGrade,
    },
}

impl AssignmentMark {
    /// Returns the letter grade, if graded.
    pub fn letter_grade(&self) -> Option<LetterGrade> {
        match self {
            Self::Ungraded => None,
            Self::Graded { letter_grade, .. } => Some(*letter_grade),
        }
    }
}
