//! Employee model.
//!
//! Employees are master data owned by the external user directory; the
//! scheduling core only reads them. Incomplete records are tolerated: a
//! missing wage rate falls back to a fixed default at calculation time
//! rather than failing the schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Department;

/// An employee that can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier from the user directory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text role tag used for department classification.
    #[serde(default)]
    pub role: String,
    /// Hourly wage rate. `None` falls back to the engine default.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Target working hours per month, if agreed.
    #[serde(default)]
    pub target_monthly_hours: Option<Decimal>,
}

impl Employee {
    /// The department this employee belongs to, resolved from the role tag.
    pub fn department(&self) -> Department {
        Department::from_role(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "emp_001",
            "name": "Anna Schmidt",
            "role": "waiter",
            "hourly_rate": "13.50",
            "target_monthly_hours": "160"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Anna Schmidt");
        assert_eq!(
            employee.hourly_rate,
            Some(Decimal::from_str("13.50").unwrap())
        );
        assert_eq!(employee.department(), Department::Service);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // Master data is frequently incomplete; only id and name are required.
        let json = r#"{"id": "emp_002", "name": "Ben"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.hourly_rate, None);
        assert_eq!(employee.target_monthly_hours, None);
        assert_eq!(employee.department(), Department::Other);
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = Employee {
            id: "emp_003".to_string(),
            name: "Clara".to_string(),
            role: "cook".to_string(),
            hourly_rate: Some(Decimal::new(1475, 2)),
            target_monthly_hours: None,
        };
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, back);
    }
}
