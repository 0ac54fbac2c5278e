//! Shift interval arithmetic.

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// Minutes in a day, for the overnight wraparound.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Computes the duration between two times of day in hours.
///
/// A negative raw difference means the shift crosses midnight, so a full
/// day is added. Equal start and end yield zero, not 24 hours. The result
/// is always within `[0, 24)`.
///
/// # Examples
///
/// ```
/// use roster_engine::compliance::shift_duration;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// // Regular shift.
/// assert_eq!(shift_duration(t(17, 0), t(23, 0)), Decimal::new(60, 1)); // 6.0
///
/// // Overnight shift.
/// assert_eq!(shift_duration(t(22, 0), t(2, 0)), Decimal::new(40, 1)); // 4.0
/// ```
pub fn shift_duration(start: NaiveTime, end: NaiveTime) -> Decimal {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
