//! The compliance rule set.
//!
//! One versioned rule record exists per organization. It is loaded once at
//! the start of a scheduling session and treated as an immutable snapshot
//! for that session's validations; changes by another actor take effect on
//! reload.
//!
//! Only the daily-hours cap and the rest period are evaluated
//! programmatically. The surcharge and bonus fields are carried for manual
//! reference and payroll export; no evaluator consumes them yet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Cumulative monthly overtime hour after which tier 2 surcharge applies.
pub const OVERTIME_TIER_2_FROM: u32 = 13;

/// Cumulative monthly overtime hour after which tier 3 surcharge applies.
pub const OVERTIME_TIER_3_FROM: u32 = 29;

/// How the annual christmas bonus is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChristmasBonusMode {
    /// No bonus.
    #[default]
    None,
    /// A fixed amount per the collective agreement.
    Fixed,
    /// A full thirteenth monthly salary.
    #[serde(rename = "13th_salary")]
    ThirteenthSalary,
    /// Scaled by tenure per the MTV tables.
    MtvScaled,
}

/// The configurable labor-law parameters, one record per organization.
///
/// Field names on the wire keep the camelCase shape of the
/// `settings/compliance` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceRuleSet {
    /// Maximum daily working time in hours.
    pub max_daily_hours: Decimal,
    /// Minimum rest period between two shifts, in hours.
    pub min_rest_period: Decimal,
    /// Minimum break for shifts over six hours, in minutes.
    pub min_break_6h: u32,
    /// Minimum break for shifts over nine hours, in minutes.
    pub min_break_9h: u32,
    /// Maximum Sundays an employee may work per year.
    pub max_sundays_per_year: u32,
    /// Night-work surcharge (23:00-06:00), percent.
    pub night_surcharge: Decimal,
    /// Public-holiday surcharge, percent.
    pub holiday_surcharge: Decimal,
    /// Overtime surcharge for monthly overtime hours 1 through 13, percent.
    pub overtime_tier1: Decimal,
    /// Overtime surcharge for monthly overtime hours 14 through 29, percent.
    pub overtime_tier2: Decimal,
    /// Overtime surcharge from the 30th monthly overtime hour on, percent.
    pub overtime_tier3: Decimal,
    /// Standard vacation days per year.
    pub std_vacation_days: u32,
    /// Vacation pay per day, in currency units.
    pub holiday_pay: Decimal,
    /// How the annual christmas bonus is granted.
    pub christmas_bonus_mode: ChristmasBonusMode,
    /// Labor-cost-to-revenue ratio above which a day is flagged, percent.
    pub max_cost_ratio: Decimal,
    /// Whether violations block persistence instead of merely warning.
    pub enforce_strict_compliance: bool,
}

impl Default for ComplianceRuleSet {
    fn default() -> Self {
        Self {
            max_daily_hours: Decimal::new(10, 0),
            min_rest_period: Decimal::new(11, 0),
            min_break_6h: 30,
            min_break_9h: 45,
            max_sundays_per_year: 15,
            night_surcharge: Decimal::ZERO,
            holiday_surcharge: Decimal::ZERO,
            overtime_tier1: Decimal::ZERO,
            overtime_tier2: Decimal::ZERO,
            overtime_tier3: Decimal::ZERO,
            std_vacation_days: 0,
            holiday_pay: Decimal::ZERO,
            christmas_bonus_mode: ChristmasBonusMode::None,
            max_cost_ratio: Decimal::new(30, 0),
            enforce_strict_compliance: false,
        }
    }
}

impl ComplianceRuleSet {
    /// The full "Manteltarifvertrag Baden-Württemberg" preset.
    pub fn mtv_bw() -> Self {
        Self {
            max_daily_hours: Decimal::new(10, 0),
            min_rest_period: Decimal::new(11, 0),
            min_break_6h: 30,
            min_break_9h: 45,
            max_sundays_per_year: 15,
            night_surcharge: Decimal::new(25, 0),
            holiday_surcharge: Decimal::new(125, 0),
            overtime_tier1: Decimal::new(25, 0),
            overtime_tier2: Decimal::new(35, 0),
            overtime_tier3: Decimal::new(50, 0),
            std_vacation_days: 25,
            holiday_pay: Decimal::new(15, 0),
            christmas_bonus_mode: ChristmasBonusMode::Fixed,
            max_cost_ratio: Decimal::new(30, 0),
            enforce_strict_compliance: true,
        }
    }

    /// Validates that all numeric fields are non-negative.
    pub fn validate(&self) -> RosterResult<()> {
        let fields: [(&str, Decimal); 9] = [
            ("maxDailyHours", self.max_daily_hours),
            ("minRestPeriod", self.min_rest_period),
            ("nightSurcharge", self.night_surcharge),
            ("holidaySurcharge", self.holiday_surcharge),
            ("overtimeTier1", self.overtime_tier1),
            ("overtimeTier2", self.overtime_tier2),
            ("overtimeTier3", self.overtime_tier3),
            ("holidayPay", self.holiday_pay),
            ("maxCostRatio", self.max_cost_ratio),
        ];
        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(RosterError::InvalidRule {
                    field: field.to_string(),
                    message: format!("must not be negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}
