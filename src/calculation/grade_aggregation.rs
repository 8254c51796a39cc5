//! Grade percentage and letter grade over a list of grades.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Assignment, Grade, GradeSummary, GradingPolicy, ScoredGrade};

use super::letter_grade::letter_grade;
use super::percentage::percentage_of;

/// Pairs each grade with its assignment's max score.
///
/// Grades whose assignment is not in `assignments` are dropped, which is how
/// cross-class grades are kept out of a single class's rollup.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::join_scored_grades;
/// use gradebook_engine::models::{Assignment, Grade};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let assignments = vec![Assignment {
///     id: "hw1".to_string(),
///     class_code: "MATH7".to_string(),
///     title: "Fractions".to_string(),
///     max_score: Decimal::from(10),
///     due_date: None,
///     category: None,
/// }];
/// let grades = vec![Grade {
///     id: Uuid::new_v4(),
///     student_id: "stu_001".to_string(),
///     assignment_id: "hw1".to_string(),
///     score: Decimal::from(9),
///     graded_at: Utc::now(),
/// }];
///
/// let scored = join_scored_grades(&grades, &assignments);
/// assert_eq!(scored.len(), 1);
/// assert_eq!(scored[0].max_score, Decimal::from(10));
/// ```
pub fn join_scored_grades(grades: &[Grade], assignments: &[Assignment]) -> Vec<ScoredGrade> {
    let max_scores: HashMap<&str, Decimal> = assignments
        .iter()
        .map(|a| (a.id.as_str(), a.max_score))
        .collect();

    grades
        .iter()
        .filter_map(|grade| {
            max_scores
                .get(grade.assignment_id.as_str())
                .map(|max_score| ScoredGrade::new(grade.score, *max_score))
        })
        .collect()
}

/// Aggregates grades into totals, a rounded percentage and a letter grade.
///
/// Missing grades are simply absent from `grades`, so they add nothing to
/// either the score or the denominator. Sums saturate at `Decimal::MAX`.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::aggregate_grades;
/// use gradebook_engine::models::{GradingPolicy, LetterGrade, ScoredGrade};
/// use rust_decimal::Decimal;
///
/// let grades = [ScoredGrade::new(Decimal::from(85), Decimal::from(100))];
/// let summary = aggregate_grades(&grades, GradingPolicy::Full);
/// assert_eq!(summary.percentage, Decimal::from(85));
/// assert_eq!(summary.letter_grade, LetterGrade::B);
/// ```
pub fn aggregate_grades(grades: &[ScoredGrade], policy: GradingPolicy) -> GradeSummary {
    let (total_score, max_possible) = grades
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(total, max), g| {
            (
                total.saturating_add(g.score),
                max.saturating_add(g.max_score),
            )
        });

    let percentage = percentage_of(total_score, max_possible);

    GradeSummary {
        total_score,
        max_possible,
        percentage,
        letter_grade: letter_grade(percentage, policy),
        graded_count: grades.len(),
    }
}
