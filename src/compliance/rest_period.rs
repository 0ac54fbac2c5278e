//! Rest-period checks between consecutive shifts.
//!
//! The rule set configures a minimum rest period between two shifts of the
//! same employee. The check is advisory: findings are reported for the
//! scheduler to review but never block a save.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ComplianceRuleSet;
use crate::models::{Roster, ShiftId};

/// A gap between two consecutive shifts shorter than the configured rest period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestViolation {
    /// The shift the too-short rest precedes.
    pub shift_id: ShiftId,
    /// The date of that shift.
    pub date: NaiveDate,
    /// The actual rest between the two shifts, in hours.
    pub rest_hours: Decimal,
    /// The configured minimum rest period, in hours.
    pub required_hours: Decimal,
}

/// Checks one employee's week for rest periods shorter than the minimum.
///
/// Shifts are anchored on their date (overnight shifts end on the following
/// day) and walked in chronological order; each gap between an end and the
/// next start is compared against `min_rest_period`. Overlapping shifts
/// count as zero rest. Findings are always advisory, independent of the
/// strict-enforcement flag.
pub fn check_rest_periods(
    roster: &Roster,
    employee_id: &str,
    rules: &ComplianceRuleSet,
) -> Vec<RestViolation> {
    let mut timeline: Vec<(NaiveDateTime, NaiveDateTime, ShiftId, NaiveDate)> = roster
        .employee_shifts(employee_id)
        .into_iter()
        .map(|(date, id, shift)| {
            let start = date.and_time(shift.start);
            let mut minutes = (shift.end - shift.start).num_minutes();
            if minutes < 0 {
                // Overnight shift: ends on the following day.
                minutes += 24 * 60;
            }
            (start, start + Duration::minutes(minutes), id, date)
        })
        .collect();
    timeline.sort_by_key(|(start, _, id, _)| (*start, *id));

    let mut violations = Vec::new();
    for pair in timeline.windows(2) {
        let (_, prev_end, _, _) = pair[0];
        let (next_start, _, next_id, next_date) = pair[1];

        let rest_minutes = (next_start - prev_end).num_minutes().max(0);
        let rest_hours = Decimal::new(rest_minutes, 0) / Decimal::new(60, 0);
        if rest_hours < rules.min_rest_period {
            violations.push(RestViolation {
                shift_id: next_id,
                date: next_date,
                rest_hours,
                required_hours: rules.min_rest_period,
            });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Department, Shift};
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn add_shift(roster: &mut Roster, day: &str, start: &str, end: &str) -> ShiftId {
        let id = ShiftId::mint();
        roster
            .shifts
            .entry("emp_1".to_string())
            .or_default()
            .entry(date(day))
            .or_default()
            .insert(
                id,
                Shift {
                    start: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
                    end: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
                    department: Department::Service,
                    activity: Activity::named("Waiter"),
                    confirmed: false,
                },
            );
        id
    }

    fn rules() -> ComplianceRuleSet {
        // Default minimum rest period is 11 hours.
        ComplianceRuleSet::default()
    }

    #[test]
    fn test_no_shifts_no_violations() {
        let roster = Roster::default();
        assert!(check_rest_periods(&roster, "emp_1", &rules()).is_empty());
    }

    #[test]
    fn test_sufficient_rest_passes() {
        let mut roster = Roster::default();
        add_shift(&mut roster, "2024-06-10", "09:00", "17:00");
        add_shift(&mut roster, "2024-06-11", "09:00", "17:00"); // 16h rest
        assert!(check_rest_periods(&roster, "emp_1", &rules()).is_empty());
    }

    #[test]
    fn test_short_rest_is_reported() {
        let mut roster = Roster::default();
        add_shift(&mut roster, "2024-06-10", "15:00", "23:00");
        let late = add_shift(&mut roster, "2024-06-11", "08:00", "16:00"); // 9h rest

        let violations = check_rest_periods(&roster, "emp_1", &rules());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].shift_id, late);
        assert_eq!(violations[0].date, date("2024-06-11"));
        assert_eq!(violations[0].rest_hours, Decimal::new(9, 0));
        assert_eq!(violations[0].required_hours, Decimal::new(11, 0));
    }

    #[test]
    fn test_overnight_shift_end_anchors_on_next_day() {
        let mut roster = Roster::default();
        // Ends 02:00 on the 11th; next start 10:00 the same day = 8h rest.
        add_shift(&mut roster, "2024-06-10", "18:00", "02:00");
        add_shift(&mut roster, "2024-06-11", "10:00", "15:00");

        let violations = check_rest_periods(&roster, "emp_1", &rules());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rest_hours, Decimal::new(8, 0));
    }

    #[test]
    fn test_overlapping_shifts_count_as_zero_rest() {
        let mut roster = Roster::default();
        add_shift(&mut roster, "2024-06-10", "09:00", "17:00");
        add_shift(&mut roster, "2024-06-10", "16:00", "22:00");

        let violations = check_rest_periods(&roster, "emp_1", &rules());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rest_hours, Decimal::ZERO);
    }

    #[test]
    fn test_other_employees_are_not_considered() {
        let mut roster = Roster::default();
        add_shift(&mut roster, "2024-06-10", "15:00", "23:00");
        // Tight rest, but on a different employee's timeline.
        assert!(check_rest_periods(&roster, "emp_2", &rules()).is_empty());
    }

    #[test]
    fn test_custom_rest_period() {
        let mut roster = Roster::default();
        add_shift(&mut roster, "2024-06-10", "15:00", "23:00");
        add_shift(&mut roster, "2024-06-11", "08:00", "16:00"); // 9h rest

        let relaxed = ComplianceRuleSet {
            min_rest_period: Decimal::from_str("8").unwrap(),
            ..ComplianceRuleSet::default()
        };
        assert!(check_rest_periods(&roster, "emp_1", &relaxed).is_empty());
    }
}
