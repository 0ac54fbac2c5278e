//! Rule-set loading functionality.
//!
//! This module provides the [`RulesLoader`] type for reading the
//! compliance rule set from a YAML file.

use std::fs;
use std::path::Path;

use tracing::warn;

use super::ComplianceRuleSet;
use crate::error::{RosterError, RosterResult};

/// Loads the compliance rule set from YAML.
///
/// A missing file is not an error: scheduling must stay usable before an
/// administrator has ever saved rules, so the defaults are returned
/// instead. A file that exists but cannot be parsed or fails validation is
/// a real error.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::RulesLoader;
///
/// let rules = RulesLoader::load("./config/compliance/default.yaml")?;
/// # Ok::<(), roster_engine::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader;

impl RulesLoader {
    /// Loads a rule set from the given YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<ComplianceRuleSet> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                warn!(path = %path_str, "compliance rules file missing, using defaults");
                return Ok(ComplianceRuleSet::default());
            }
        };

        let rules: ComplianceRuleSet =
            serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;
        rules.validate()?;
        Ok(rules)
    }
}
