//! Weighted attendance percentage.
//!
//! Present and excused earn full credit, late earns half, absent earns none.

use rust_decimal::Decimal;

use crate::models::{AttendanceCounts, AttendanceStatus, AttendanceSummary, UnknownStatusPolicy};

use super::percentage::percentage_of;

/// Returns the credit a status earns, or `None` for unrecognized statuses.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::attendance_credit;
/// use gradebook_engine::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(attendance_credit(&AttendanceStatus::Late), Some(Decimal::new(5, 1)));
/// assert_eq!(attendance_credit(&AttendanceStatus::Other("x".into())), None);
/// ```
pub fn attendance_credit(status: &AttendanceStatus) -> Option<Decimal> {
    match status {
        AttendanceStatus::Present | AttendanceStatus::Excused => Some(Decimal::ONE),
        AttendanceStatus::Late => Some(Decimal::new(5, 1)),
        AttendanceStatus::Absent => Some(Decimal::ZERO),
        AttendanceStatus::Other(_) => None,
    }
}

/// Aggregates attendance statuses into counts and a weighted percentage.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::aggregate_attendance;
/// use gradebook_engine::models::{AttendanceStatus, UnknownStatusPolicy};
/// use rust_decimal::Decimal;
///
/// let mut statuses = vec![AttendanceStatus::Present; 8];
/// statuses.push(AttendanceStatus::Excused);
/// statuses.push(AttendanceStatus::Late);
///
/// let summary = aggregate_attendance(&statuses, UnknownStatusPolicy::CountInTotal);
/// assert_eq!(summary.total, 10);
/// assert_eq!(summary.percentage, Decimal::from(95));
/// ```
pub fn aggregate_attendance<'a, I>(statuses: I, unknown: UnknownStatusPolicy) -> AttendanceSummary
where
    I: IntoIterator<Item = &'a AttendanceStatus>,
{
    let mut counts = AttendanceCounts::default();
    let mut weighted = Decimal::ZERO;

    for status in statuses {
        match status {
            AttendanceStatus::Present => counts.present += 1,
            AttendanceStatus::Absent => counts.absent += 1,
            AttendanceStatus::Late => counts.late += 1,
            AttendanceStatus::Excused => counts.excused += 1,
            AttendanceStatus::Other(_) => counts.other += 1,
        }
        weighted += attendance_credit(status).unwrap_or(Decimal::ZERO);
    }

    let recognized = counts.present + counts.absent + counts.late + counts.excused;
    let total = match unknown {
        UnknownStatusPolicy::CountInTotal => recognized + counts.other,
        UnknownStatusPolicy::Exclude => recognized,
    };

    AttendanceSummary {
        counts,
        total,
        weighted,
        percentage: percentage_of(weighted, Decimal::from(total)),
    }
}
