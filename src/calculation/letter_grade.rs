//! Letter grade lookup.
//!
//! Both policies look up the *rounded* whole percentage, so a raw 92.999%
//! is an A under the full table.

use rust_decimal::Decimal;

use crate::models::{AssignmentMark, GradingPolicy, LetterGrade};

use super::percentage::{percentage_of, round_percentage};

/// Lower bounds for the full plus/minus table, highest first.
pub const FULL_THRESHOLDS: [(u32, LetterGrade); 11] = [
    (93, LetterGrade::A),
    (90, LetterGrade::AMinus),
    (87, LetterGrade::BPlus),
    (83, LetterGrade::B),
    (80, LetterGrade::BMinus),
    (77, LetterGrade::CPlus),
    (73, LetterGrade::C),
    (70, LetterGrade::CMinus),
    (67, LetterGrade::DPlus),
    (63, LetterGrade::D),
    (60, LetterGrade::DMinus),
];

/// Lower bounds for the simple whole-letter table, highest first.
pub const SIMPLE_THRESHOLDS: [(u32, LetterGrade); 4] = [
    (90, LetterGrade::A),
    (80, LetterGrade::B),
    (70, LetterGrade::C),
    (60, LetterGrade::D),
];

impl GradingPolicy {
    /// Returns the policy's thresholds, highest first. Anything below the
    /// last threshold is an F.
    pub fn thresholds(&self) -> &'static [(u32, LetterGrade)] {
        match self {
            GradingPolicy::Full => &FULL_THRESHOLDS,
            GradingPolicy::Simple => &SIMPLE_THRESHOLDS,
        }
    }
}

/// Looks up the letter grade for a percentage under the given policy.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::letter_grade;
/// use gradebook_engine::models::{GradingPolicy, LetterGrade};
/// use rust_decimal::Decimal;
///
/// assert_eq!(letter_grade(Decimal::from(90), GradingPolicy::Full), LetterGrade::AMinus);
/// assert_eq!(letter_grade(Decimal::from(90), GradingPolicy::Simple), LetterGrade::A);
/// assert_eq!(letter_grade(Decimal::from(59), GradingPolicy::Simple), LetterGrade::F);
/// ```
pub fn letter_grade(percentage: Decimal, policy: GradingPolicy) -> LetterGrade {
    let rounded = round_percentage(percentage);
    policy
        .thresholds()
        .iter()
        .find(|(min, _)| rounded >= Decimal::from(*min))
        .map(|(_, letter)| *letter)
        .unwrap_or(LetterGrade::F)
}

/// Computes the mark for one assignment cell.
///
/// Returns [`AssignmentMark::Ungraded`] when there is no score, no max
/// score, or a max score that is not positive.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::assignment_mark;
/// use gradebook_engine::models::{AssignmentMark, GradingPolicy, LetterGrade};
/// use rust_decimal::Decimal;
///
/// let mark = assignment_mark(Some(Decimal::from(9)), Some(Decimal::from(10)), GradingPolicy::Full);
/// assert_eq!(mark.letter_grade(), Some(LetterGrade::AMinus));
///
/// let blank = assignment_mark(None, Some(Decimal::from(10)), GradingPolicy::Full);
/// assert_eq!(blank, AssignmentMark::Ungraded);
/// ```
pub fn assignment_mark(
    score: Option<Decimal>,
    max_score: Option<Decimal>,
    policy: GradingPolicy,
) -> AssignmentMark {
    match (score, max_score) {
        (Some(score), Some(max_score)) if max_score > Decimal::ZERO => {
            let percentage = percentage_of(score, max_score);
            AssignmentMark::Graded {
                percentage,
                letter_grade: letter_grade(percentage, policy),
            }
        }
        _ => AssignmentMark::Ungraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn full(p: &str) -> LetterGrade {
        letter_grade(dec(p), GradingPolicy::Full)
    }

    fn simple(p: &str) -> LetterGrade {
        letter_grade(dec(p), GradingPolicy::Simple)
    }

    #[test]
    fn test_full_table_lower_bounds() {
        assert_eq!(full("93"), LetterGrade::A);
        assert_eq!(full("90"), LetterGrade::AMinus);
        assert_eq!(full("87"), LetterGrade::BPlus);
        assert_eq!(full("83"), LetterGrade::B);
        assert_eq!(full("80"), LetterGrade::BMinus);
        assert_eq!(full("77"), LetterGrade::CPlus);
        assert_eq!(full("73"), LetterGrade::C);
        assert_eq!(full("70"), LetterGrade::CMinus);
        assert_eq!(full("67"), LetterGrade::DPlus);
        assert_eq!(full("63"), LetterGrade::D);
        assert_eq!(full("60"), LetterGrade::DMinus);
        assert_eq!(full("59"), LetterGrade::F);
    }

    #[test]
    fn test_full_table_just_below_bounds() {
        assert_eq!(full("92"), LetterGrade::AMinus);
        assert_eq!(full("89"), LetterGrade::BPlus);
        assert_eq!(full("62"), LetterGrade::DMinus);
        assert_eq!(full("0"), LetterGrade::F);
    }

    #[test]
    fn test_raw_percentage_is_rounded_before_lookup() {
        assert_eq!(full("92.999"), LetterGrade::A);
        assert_eq!(full("92.5"), LetterGrade::A);
        assert_eq!(full("92.49"), LetterGrade::AMinus);
        assert_eq!(full("89.5"), LetterGrade::AMinus);
    }

    #[test]
    fn test_simple_table_bounds() {
        assert_eq!(simple("100"), LetterGrade::A);
        assert_eq!(simple("90"), LetterGrade::A);
        assert_eq!(simple("89"), LetterGrade::B);
        assert_eq!(simple("80"), LetterGrade::B);
        assert_eq!(simple("79"), LetterGrade::C);
        assert_eq!(simple("70"), LetterGrade::C);
        assert_eq!(simple("69"), LetterGrade::D);
        assert_eq!(simple("60"), LetterGrade::D);
        assert_eq!(simple("59"), LetterGrade::F);
    }

    #[test]
    fn test_simple_table_never_emits_plus_or_minus() {
        for p in 0..=100 {
            let letter = letter_grade(Decimal::from(p), GradingPolicy::Simple);
            assert!(!letter.as_str().contains(['+', '-']), "{p} -> {letter}");
        }
    }

    #[test]
    fn test_over_100_percent_is_an_a() {
        assert_eq!(full("110"), LetterGrade::A);
        assert_eq!(simple("110"), LetterGrade::A);
    }

    #[test]
    fn test_assignment_mark_percentage() {
        let mark = assignment_mark(Some(dec("85")), Some(dec("100")), GradingPolicy::Full);
        assert_eq!(
            mark,
            AssignmentMark::Graded {
                percentage: dec("85"),
                letter_grade: LetterGrade::B,
            }
        );
    }

    #[test]
    fn test_assignment_without_max_score_is_ungraded() {
        assert_eq!(
            assignment_mark(Some(dec("5")), None, GradingPolicy::Full),
            AssignmentMark::Ungraded
        );
        assert_eq!(
            assignment_mark(Some(dec("5")), Some(dec("0")), GradingPolicy::Full),
            AssignmentMark::Ungraded
        );
    }

    #[test]
    fn test_zero_score_is_graded_f_not_ungraded() {
        let mark = assignment_mark(Some(dec("0")), Some(dec("10")), GradingPolicy::Simple);
        assert_eq!(mark.letter_grade(), Some(LetterGrade::F));
    }
}
