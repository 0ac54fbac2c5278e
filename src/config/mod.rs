//! Compliance rule configuration.
//!
//! This module contains the strongly-typed compliance rule set and the
//! loader that reads it from YAML files.

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{ChristmasBonusMode, ComplianceRuleSet, OVERTIME_TIER_2_FROM, OVERTIME_TIER_3_FROM};
