//! The roster aggregate.
//!
//! A roster holds the full shift collection and the revenue figures for one
//! location and one ISO week. Its wire shape mirrors the document tree:
//! `shifts/{employee}/{date}/{shift_id}` and `revenue/{date}`.
//!
//! Nothing enforces that shift dates actually fall within the week a roster
//! is filed under; placing them correctly is the caller's responsibility.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{IsoYearWeek, Shift, ShiftId};

/// Shifts of one employee, bucketed by date.
pub type EmployeeShifts = HashMap<NaiveDate, BTreeMap<ShiftId, Shift>>;

/// Identifies one roster: a location and an ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterKey {
    /// The location the roster belongs to.
    pub location: String,
    /// The ISO week the roster covers.
    pub week: IsoYearWeek,
}

impl RosterKey {
    /// Creates a key from a location id and week.
    pub fn new(location: impl Into<String>, week: IsoYearWeek) -> Self {
        Self {
            location: location.into(),
            week,
        }
    }
}

/// The full shift schedule and revenue figures for one location-week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Assigned shifts: employee id, then date, then shift id.
    #[serde(default)]
    pub shifts: HashMap<String, EmployeeShifts>,
    /// Manually entered revenue per date.
    #[serde(default)]
    pub revenue: HashMap<NaiveDate, Decimal>,
}

impl Roster {
    /// Whether the roster has no shifts and no revenue entries.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty() && self.revenue.is_empty()
    }

    /// Total number of shift records across all employees and dates.
    pub fn shift_count(&self) -> usize {
        self.shifts
            .values()
            .flat_map(HashMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    /// Looks up one shift by its full in-roster address.
    pub fn get_shift(
        &self,
        employee_id: &str,
        date: NaiveDate,
        shift_id: ShiftId,
    ) -> Option<&Shift> {
        self.shifts
            .get(employee_id)?
            .get(&date)?
            .get(&shift_id)
    }

    /// Iterates all shifts on the given date, with their employee and id.
    pub fn shifts_on(
        &self,
        date: NaiveDate,
    ) -> impl Iterator<Item = (&str, ShiftId, &Shift)> {
        self.shifts.iter().flat_map(move |(employee_id, by_date)| {
            by_date
                .get(&date)
                .into_iter()
                .flat_map(move |by_id| {
                    by_id
                        .iter()
                        .map(move |(id, shift)| (employee_id.as_str(), *id, shift))
                })
        })
    }

    /// All dated shifts of one employee, sorted by date then id.
    pub fn employee_shifts(
        &self,
        employee_id: &str,
    ) -> Vec<(NaiveDate, ShiftId, &Shift)> {
        let mut out: Vec<_> = self
            .shifts
            .get(employee_id)
            .into_iter()
            .flat_map(|by_date| {
                by_date.iter().flat_map(|(date, by_id)| {
                    by_id.iter().map(move |(id, shift)| (*date, *id, shift))
                })
            })
            .collect();
        out.sort_by_key(|(date, id, _)| (*date, *id));
        out
    }

    /// The revenue entered for the given date, defaulting to zero.
    pub fn revenue_on(&self, date: NaiveDate) -> Decimal {
        self.revenue.get(&date).copied().unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Department};
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn shift(start: &str, end: &str) -> Shift {
        Shift {
            start: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            department: Department::Service,
            activity: Activity::named("Waiter"),
            confirmed: false,
        }
    }

    fn roster_with_two_shifts() -> (Roster, ShiftId, ShiftId) {
        let mut roster = Roster::default();
        let a = ShiftId::mint();
        let b = ShiftId::mint();
        roster
            .shifts
            .entry("emp_1".to_string())
            .or_default()
            .entry(date("2024-06-10"))
            .or_default()
            .insert(a, shift("17:00", "23:00"));
        roster
            .shifts
            .entry("emp_2".to_string())
            .or_default()
            .entry(date("2024-06-10"))
            .or_default()
            .insert(b, shift("09:00", "14:00"));
        (roster, a, b)
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert_eq!(roster.shift_count(), 0);
        assert_eq!(roster.shifts_on(date("2024-06-10")).count(), 0);
        assert_eq!(roster.revenue_on(date("2024-06-10")), Decimal::ZERO);
    }

    #[test]
    fn test_shift_count_and_lookup() {
        let (roster, a, _) = roster_with_two_shifts();
        assert_eq!(roster.shift_count(), 2);
        assert!(roster.get_shift("emp_1", date("2024-06-10"), a).is_some());
        assert!(roster.get_shift("emp_1", date("2024-06-11"), a).is_none());
        assert!(roster.get_shift("emp_9", date("2024-06-10"), a).is_none());
    }

    #[test]
    fn test_shifts_on_filters_by_date() {
        let (roster, _, _) = roster_with_two_shifts();
        assert_eq!(roster.shifts_on(date("2024-06-10")).count(), 2);
        assert_eq!(roster.shifts_on(date("2024-06-11")).count(), 0);
    }

    #[test]
    fn test_employee_shifts_sorted_by_date() {
        let mut roster = Roster::default();
        for day in ["2024-06-12", "2024-06-10", "2024-06-11"] {
            roster
                .shifts
                .entry("emp_1".to_string())
                .or_default()
                .entry(date(day))
                .or_default()
                .insert(ShiftId::mint(), shift("17:00", "23:00"));
        }
        let shifts = roster.employee_shifts("emp_1");
        assert_eq!(shifts.len(), 3);
        assert_eq!(shifts[0].0, date("2024-06-10"));
        assert_eq!(shifts[2].0, date("2024-06-12"));
    }

    #[test]
    fn test_wire_shape_matches_document_tree() {
        let (roster, a, _) = roster_with_two_shifts();
        let json = serde_json::to_value(&roster).unwrap();
        assert!(json["shifts"]["emp_1"]["2024-06-10"][a.to_string()].is_object());

        let back: Roster = serde_json::from_value(json).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn test_revenue_defaults_to_zero() {
        let mut roster = Roster::default();
        roster
            .revenue
            .insert(date("2024-06-10"), Decimal::new(200, 0));
        assert_eq!(roster.revenue_on(date("2024-06-10")), Decimal::new(200, 0));
        assert_eq!(roster.revenue_on(date("2024-06-11")), Decimal::ZERO);
    }
}
