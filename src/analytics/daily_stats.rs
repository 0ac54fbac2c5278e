//! Daily labor-cost statistics.
//!
//! Nothing here is persisted; the figures are recomputed on read from the
//! shift set and the employee rates. No rounding is applied internally,
//! presentation layers round for display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ComplianceRuleSet;
use crate::models::{Employee, IsoYearWeek, Roster};

/// Hourly wage applied when an employee record is missing or has no rate.
///
/// Scheduling must stay usable with incomplete master data, so a fallback
/// rate is used instead of failing the calculation.
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 0);

/// Derived cost figures for one date of a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    /// The date the figures cover.
    pub date: NaiveDate,
    /// Sum of shift duration times hourly rate over all shifts.
    pub labor_cost: Decimal,
    /// Manually entered revenue, zero if none was entered.
    pub revenue: Decimal,
    /// Labor cost as a percentage of revenue; zero when revenue is zero.
    pub ratio: Decimal,
    /// Number of shifts on the date. An employee working two shifts counts
    /// twice, reflecting double-shift labor load.
    pub staff_count: u32,
    /// Whether the ratio exceeds the configured maximum cost ratio.
    pub over_threshold: bool,
}

/// Computes the labor-cost figures for one date.
///
/// For every shift on `date` the duration is multiplied by the employee's
/// hourly rate, falling back to [`DEFAULT_HOURLY_RATE`] when the employee
/// is unknown or has no rate on record.
///
/// # Examples
///
/// ```
/// use roster_engine::analytics::daily_stats;
/// use roster_engine::config::ComplianceRuleSet;
/// use roster_engine::models::Roster;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let roster = Roster::default();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let stats = daily_stats(&roster, &[], date, &ComplianceRuleSet::default());
/// assert_eq!(stats.labor_cost, Decimal::ZERO);
/// assert_eq!(stats.staff_count, 0);
/// ```
pub fn daily_stats(
    roster: &Roster,
    employees: &[Employee],
    date: NaiveDate,
    rules: &ComplianceRuleSet,
) -> DayStats {
    let mut labor_cost = Decimal::ZERO;
    let mut staff_count: u32 = 0;

    for (employee_id, _, shift) in roster.shifts_on(date) {
        let rate = employees
            .iter()
            .find(|e| e.id == employee_id)
            .and_then(|e| e.hourly_rate)
            .unwrap_or(DEFAULT_HOURLY_RATE);
        labor_cost += shift.duration_hours() * rate;
        staff_count += 1;
    }

    let revenue = roster.revenue_on(date);
    let ratio = if revenue > Decimal::ZERO {
        labor_cost / revenue * Decimal::new(100, 0)
    } else {
        Decimal::ZERO
    };

    DayStats {
        date,
        labor_cost,
        revenue,
        ratio,
        staff_count,
        over_threshold: ratio > rules.max_cost_ratio,
    }
}

/// Computes the seven per-day figures for one week, Monday first.
pub fn week_stats(
    roster: &Roster,
    employees: &[Employee],
    week: &IsoYearWeek,
    rules: &ComplianceRuleSet,
) -> Vec<DayStats> {
    week.days()
        .into_iter()
        .map(|date| daily_stats(roster, employees, date, rules))
        .collect()
}
