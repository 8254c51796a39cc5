//! Whole-percent rounding shared by every rollup.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a raw percentage to the nearest whole percent, halves away from zero.
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::round_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_percentage(Decimal::from_str("92.5").unwrap()), Decimal::from(93));
/// assert_eq!(round_percentage(Decimal::from_str("92.49").unwrap()), Decimal::from(92));
/// ```
pub fn round_percentage(raw: Decimal) -> Decimal {
    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `round(part / whole * 100)`, or zero when `whole` is not positive.
///
/// The ratio is taken before scaling so any in-range `part` and `whole`
/// give a result. A ratio too large to represent saturates at
/// `Decimal::MAX` (or `Decimal::MIN` for a negative `part`).
///
/// # Examples
///
/// ```
/// use gradebook_engine::calculation::percentage_of;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percentage_of(Decimal::from(10), Decimal::from(30)), Decimal::from(33));
/// assert_eq!(percentage_of(Decimal::from(5), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match part.checked_div(whole) {
        Some(ratio) => round_percentage(ratio.saturating_mul(Decimal::ONE_HUNDRED)),
        None if part.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}
