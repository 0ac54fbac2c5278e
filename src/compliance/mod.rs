//! Labor-law compliance logic.
//!
//! This module contains the pure calculation side of scheduling: shift
//! duration with overnight wraparound, evaluation of the daily-hours cap
//! under the configured enforcement policy, and advisory rest-period
//! checks across a week.

mod duration;
mod evaluator;
mod rest_period;

pub use duration::shift_duration;
pub use evaluator::{evaluate_shift, ComplianceOutcome, Severity};
pub use rest_period::{check_rest_periods, RestViolation};
