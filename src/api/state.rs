//! Application state for the roster engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ComplianceRuleSet;
use crate::store::{EmployeeDirectory, RosterStore};

/// Shared application state.
///
/// Holds the roster store, the employee directory and the organization's
/// compliance rule set. Handlers take a snapshot of the rules per request;
/// a concurrent rule update affects later requests only.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RosterStore>,
    directory: Arc<EmployeeDirectory>,
    rules: Arc<RwLock<ComplianceRuleSet>>,
}

impl AppState {
    /// Creates fresh state with the given rule set.
    pub fn new(rules: ComplianceRuleSet) -> Self {
        Self {
            store: Arc::new(RosterStore::new()),
            directory: Arc::new(EmployeeDirectory::new()),
            rules: Arc::new(RwLock::new(rules)),
        }
    }

    /// The roster store.
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// The employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// An immutable snapshot of the current rule set.
    pub async fn rules_snapshot(&self) -> ComplianceRuleSet {
        self.rules.read().await.clone()
    }

    /// Replaces the rule set. Callers validate before replacing.
    pub async fn set_rules(&self, rules: ComplianceRuleSet) {
        *self.rules.write().await = rules;
    }
}
