//! Employee master-data directory.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::Employee;

/// In-memory mirror of the external user directory.
///
/// The scheduling core only reads employee records; writes exist to seed
/// the mirror from the upstream directory. Lookups that find nothing are
/// not errors, downstream calculations fall back to defaults.
pub struct EmployeeDirectory {
    inner: RwLock<HashMap<String, Employee>>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or replaces an employee record, keyed by its id.
    pub async fn upsert(&self, employee: Employee) {
        let mut inner = self.inner.write().await;
        inner.insert(employee.id.clone(), employee);
    }

    /// Looks up one employee by id.
    pub async fn get(&self, id: &str) -> Option<Employee> {
        let inner = self.inner.read().await;
        inner.get(id).cloned()
    }

    /// All employees, sorted by display name for stable listings.
    pub async fn all(&self) -> Vec<Employee> {
        let inner = self.inner.read().await;
        let mut employees: Vec<Employee> = inner.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        employees
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new()
    }
}
