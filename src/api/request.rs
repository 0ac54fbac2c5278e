//! Request types for the roster engine API.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Activity, Department, Shift, ShiftId};

/// Body of `POST /roster/{location}/{week}/shifts`.
///
/// Carries the full shift record: upserts overwrite the stored record in
/// its entirety, so a field omitted here is gone after the save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftUpsertRequest {
    /// The employee the shift is assigned to.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Existing shift id for edits; omitted to create a new shift.
    #[serde(default)]
    pub shift_id: Option<ShiftId>,
    /// Start time of day.
    #[serde(with = "crate::models::hhmm")]
    pub start: NaiveTime,
    /// End time of day. An end before the start crosses midnight.
    #[serde(with = "crate::models::hhmm")]
    pub end: NaiveTime,
    /// The department the shift is filed under.
    pub department: Department,
    /// The role performed within the shift.
    pub activity: Activity,
    /// Whether the employee has confirmed the shift.
    #[serde(default)]
    pub confirmed: bool,
    /// Acknowledges a lenient-mode compliance warning, allowing the save.
    #[serde(default)]
    pub acknowledge_warning: bool,
}

impl ShiftUpsertRequest {
    /// The shift record to be persisted.
    pub fn to_shift(&self) -> Shift {
        Shift {
            start: self.start,
            end: self.end,
            department: self.department,
            activity: self.activity.clone(),
            confirmed: self.confirmed,
        }
    }
}

/// Body of `PUT /roster/{location}/{week}/revenue/{date}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueRequest {
    /// The day's revenue figure; replaces any previous value.
    pub amount: Decimal,
}

/// Body of `PUT /employees/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpsertRequest {
    /// Display name.
    pub name: String,
    /// Free-text role tag used for department classification.
    #[serde(default)]
    pub role: String,
    /// Hourly wage rate; omitted records fall back to the engine default.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Target working hours per month.
    #[serde(default)]
    pub target_monthly_hours: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_shift_request() {
        let json = r#"{
            "employee_id": "emp_1",
            "date": "2024-06-10",
            "start": "17:00",
            "end": "23:00",
            "department": "service",
            "activity": {"kind": "named", "name": "Waiter"}
        }"#;

        let request: ShiftUpsertRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.shift_id, None);
        assert!(!request.confirmed);
        assert!(!request.acknowledge_warning);

        let shift = request.to_shift();
        assert_eq!(shift.duration_hours(), Decimal::new(6, 0));
    }

    #[test]
    fn test_revenue_request_accepts_decimal_string() {
        let request: RevenueRequest = serde_json::from_str(r#"{"amount": "199.50"}"#).unwrap();
        assert_eq!(request.amount, Decimal::new(19950, 2));
    }

    #[test]
    fn test_employee_request_defaults() {
        let request: EmployeeUpsertRequest =
            serde_json::from_str(r#"{"name": "Anna"}"#).unwrap();
        assert_eq!(request.role, "");
        assert_eq!(request.hourly_rate, None);
    }
}
