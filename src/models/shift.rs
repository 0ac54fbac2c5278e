//! Shift model and related types.
//!
//! A shift is a single employee's scheduled time block on one date. Times
//! are times of day without a date component; an end at or before the start
//! means the shift crosses midnight.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Activity, Department};
use crate::compliance::shift_duration;

/// Unique identifier for a shift record.
///
/// Ids are minted as random UUIDs, so concurrent schedulers can never
/// collide on the same id. A shift is still always addressed by the full
/// `(location, week, employee, date, shift id)` tuple.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShiftId(Uuid);

impl ShiftId {
    /// Mints a fresh identifier.
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A scheduled time block for one employee on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Start time of day.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// End time of day. An end before the start crosses midnight.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// The department this shift was assigned under.
    pub department: Department,
    /// The role performed within the shift.
    pub activity: Activity,
    /// Whether the employee has confirmed the shift.
    #[serde(default)]
    pub confirmed: bool,
}

impl Shift {
    /// The duration of this shift in hours, with overnight wraparound.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{Activity, Department, Shift};
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
    ///     department: Department::Bar,
    ///     activity: Activity::named("Bartender"),
    ///     confirmed: false,
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(40, 1)); // 4.0
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        shift_duration(self.start, self.end)
    }
}

/// Serde adapter for `HH:MM` time-of-day strings.
///
/// The document tree stores shift times as `"17:00"`; seconds are accepted
/// on input for tolerance but never written.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(|_| de::Error::custom(format!("not a HH:MM time of day: {s}")))
    }
}
