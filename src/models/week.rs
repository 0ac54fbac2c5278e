//! ISO year-week keys for roster bucketing.
//!
//! Rosters are keyed per location by a `{year}-W{week}` string following
//! ISO-8601 week numbering (Thursday-anchored, Monday week start).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use crate::error::RosterError;

/// An ISO-8601 year-week identifying one roster bucket.
///
/// The canonical representation is the Monday of the week, so a key derived
/// from any date within a week compares equal to a key derived from any
/// other date of the same week. Deriving a key from an offset date (for
/// paging through weeks) therefore stays correct across year boundaries,
/// where the week number resets but the ISO year may differ from the
/// calendar year.
///
/// # Examples
///
/// ```
/// use roster_engine::models::IsoYearWeek;
/// use chrono::NaiveDate;
///
/// let week = IsoYearWeek::from_date(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
/// assert_eq!(week.to_string(), "2024-W24");
///
/// // 2024-12-30 is a Monday belonging to ISO week 1 of 2025.
/// let boundary = IsoYearWeek::from_date(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
/// assert_eq!(boundary.to_string(), "2025-W01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoYearWeek {
    monday: NaiveDate,
}

impl IsoYearWeek {
    /// Derives the year-week key containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        let back = date.weekday().num_days_from_monday();
        Self {
            monday: date - Duration::days(i64::from(back)),
        }
    }

    /// Derives the key for the week `offset` weeks away from the given date.
    ///
    /// The offset is applied to the date before the key is derived, so
    /// paging across a year boundary yields the correct ISO year.
    pub fn from_date_with_offset(date: NaiveDate, offset: i64) -> Self {
        Self::from_date(date + Duration::weeks(offset))
    }

    /// The ISO year of this week.
    pub fn year(&self) -> i32 {
        self.monday.iso_week().year()
    }

    /// The ISO week number (1..=53).
    pub fn week(&self) -> u32 {
        self.monday.iso_week().week()
    }

    /// The Monday this week starts on.
    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    /// The seven dates of this week, Monday first.
    pub fn days(&self) -> [NaiveDate; 7] {
        let mut days = [self.monday; 7];
        for (i, day) in days.iter_mut().enumerate() {
            *day = self.monday + Duration::days(i as i64);
        }
        days
    }

    /// Whether the given date falls inside this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }
}

impl fmt::Display for IsoYearWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year(), self.week())
    }
}

impl FromStr for IsoYearWeek {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RosterError::InvalidRequest {
            message: format!("not an ISO year-week key: {s}"),
        };

        let (year, week) = s.split_once("-W").ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let week: u32 = week.parse().map_err(|_| invalid())?;
        let monday =
            NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)?;
        Ok(Self { monday })
    }
}

impl Serialize for IsoYearWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoYearWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeekVisitor;

        impl Visitor<'_> for WeekVisitor {
            type Value = IsoYearWeek;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO year-week string like \"2024-W24\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(|e: RosterError| E::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(WeekVisitor)
    }
}
