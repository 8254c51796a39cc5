//! Missing-assignment detection and completion counts.

use std::collections::HashSet;

use crate::models::{Assignment, Completion, Grade};

/// Returns the assignments that have no matching grade, in assignment order.
///
/// Recompute whenever either list changes; the result is never cached.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::missing_assignments;
/// use gradebook_engine::models::Assignment;
/// use rust_decimal::Decimal;
///
/// let assignments = vec![Assignment {
///     id: "hw1".to_string(),
///     class_code: "MATH7".to_string(),
///     title: "Fractions".to_string(),
///     max_score: Decimal::from(10),
///     due_date: None,
///     category: None,
/// }];
///
/// let missing = missing_assignments(&assignments, &[]);
/// assert_eq!(missing.len(), 1);
/// ```
pub fn missing_assignments<'a>(assignments: &'a [Assignment], grades: &[Grade]) -> Vec<&'a Assignment> {
    let graded = graded_assignment_ids(grades);
    assignments
        .iter()
        .filter(|a| !graded.contains(a.id.as_str()))
        .collect()
}

/// Counts graded versus total assignments.
///
/// Grades for assignments outside `assignments` are not counted.
pub fn completion(assignments: &[Assignment], grades: &[Grade]) -> Completion {
    let graded = graded_assignment_ids(grades);
    Completion {
        graded: assignments
            .iter()
            .filter(|a| graded.contains(a.id.as_str()))
            .count(),
        total: assignments.len(),
    }
}

fn graded_assignment_ids(grades: &[Grade]) -> HashSet<&str> {
    grades.iter().map(|g| g.assignment_id.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn assignment(id: &str) -> Assignment {
        Assignment {
            id: id.to_string(),
            class_code: "MATH7".to_string(),
            title: id.to_string(),
            max_score: Decimal::from(10),
            due_date: None,
            category: None,
        }
    }

    fn grade(assignment_id: &str) -> Grade {
        Grade {
            id: Uuid::new_v4(),
            student_id: "stu_001".to_string(),
            assignment_id: assignment_id.to_string(),
            score: Decimal::from(7),
            graded_at: Utc::now(),
        }
    }

    fn ids(assignments: &[&Assignment]) -> Vec<String> {
        assignments.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_ungraded_assignments_are_missing() {
        let assignments = vec![assignment("hw1"), assignment("hw2"), assignment("hw3")];
        let grades = vec![grade("hw2")];

        let missing = missing_assignments(&assignments, &grades);

        assert_eq!(ids(&missing), vec!["hw1", "hw3"]);
    }

    #[test]
    fn test_everything_graded_means_nothing_missing() {
        let assignments = vec![assignment("hw1"), assignment("hw2")];
        let grades = vec![grade("hw2"), grade("hw1")];

        assert!(missing_assignments(&assignments, &grades).is_empty());
    }

    #[test]
    fn test_no_assignments_means_nothing_missing() {
        assert!(missing_assignments(&[], &[grade("hw1")]).is_empty());
    }

    #[test]
    fn test_completion_counts_only_class_assignments() {
        let assignments = vec![assignment("hw1"), assignment("hw2")];
        let grades = vec![grade("hw1"), grade("other_class_hw")];

        assert_eq!(
            completion(&assignments, &grades),
            Completion { graded: 1, total: 2 }
        );
    }

    #[test]
    fn test_duplicate_grades_count_once() {
        let assignments = vec![assignment("hw1")];
        let grades = vec![grade("hw1"), grade("hw1")];

        assert_eq!(
            completion(&assignments, &grades),
            Completion { graded: 1, total: 1 }
        );
    }
}
