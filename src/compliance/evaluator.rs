//! Evaluation of a candidate shift against the compliance rule set.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shift_duration;
use crate::config::ComplianceRuleSet;

/// How a compliance finding is to be treated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The shift is compliant; persist without further interaction.
    None,
    /// A rule is violated but enforcement is lenient; the caller should
    /// obtain explicit acknowledgement before persisting.
    Warning,
    /// A rule is violated under strict enforcement; the caller must refuse
    /// to persist and surface the overage and the configured maximum.
    Blocking,
}

/// The outcome of evaluating one candidate shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceOutcome {
    /// The computed shift duration in hours.
    pub duration_hours: Decimal,
    /// Whether the duration exceeds the configured daily maximum.
    pub violates_max_hours: bool,
    /// The enforcement severity that applies.
    pub severity: Severity,
}

impl ComplianceOutcome {
    /// Whether the caller may persist without any acknowledgement.
    pub fn is_clean(&self) -> bool {
        self.severity == Severity::None
    }
}

/// Evaluates a candidate shift's times against the rule set.
///
/// A violation exists only when the duration strictly exceeds
/// `max_daily_hours`; a shift of exactly the maximum is compliant. Under
/// strict enforcement a violation is [`Severity::Blocking`], otherwise
/// [`Severity::Warning`]. The rule set is an immutable snapshot passed in
/// explicitly; this function has no side effects.
///
/// # Examples
///
/// ```
/// use roster_engine::compliance::{evaluate_shift, Severity};
/// use roster_engine::config::ComplianceRuleSet;
/// use chrono::NaiveTime;
///
/// let rules = ComplianceRuleSet::default(); // 10h maximum, lenient
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
///
/// let outcome = evaluate_shift(t(9), t(21), &rules); // 12 hours
/// assert!(outcome.violates_max_hours);
/// assert_eq!(outcome.severity, Severity::Warning);
/// ```
pub fn evaluate_shift(
    start: NaiveTime,
    end: NaiveTime,
    rules: &ComplianceRuleSet,
) -> ComplianceOutcome {
    let duration_hours = shift_duration(start, end);
    let violates_max_hours = duration_hours > rules.max_daily_hours;

    let severity = if !violates_max_hours {
        Severity::None
    } else if rules.enforce_strict_compliance {
        Severity::Blocking
    } else {
        Severity::Warning
    };

    ComplianceOutcome {
        duration_hours,
        violates_max_hours,
        severity,
    }
}
