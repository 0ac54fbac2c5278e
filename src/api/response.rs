//! Response types for the roster engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compliance::ComplianceOutcome;
use crate::error::RosterError;
use crate::models::ShiftId;

/// Successful result of a shift upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftUpsertResponse {
    /// The effective shift id, minted or re-used.
    pub shift_id: ShiftId,
    /// The compliance evaluation performed before persisting.
    pub evaluation: ComplianceOutcome,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Blocking compliance failure: strict mode refuses the save.
    pub fn compliance_blocked(duration: Decimal, max: Decimal) -> Self {
        Self::with_details(
            "COMPLIANCE_BLOCKED",
            format!(
                "Shift duration of {}h exceeds the maximum of {}h",
                duration.normalize(),
                max.normalize()
            ),
            "Strict compliance is enforced; the shift was not saved",
        )
    }

    /// Advisory compliance warning that was not acknowledged.
    pub fn compliance_warning(duration: Decimal, max: Decimal) -> Self {
        Self::with_details(
            "COMPLIANCE_WARNING",
            format!(
                "Shift duration of {}h exceeds the maximum of {}h",
                duration.normalize(),
                max.normalize()
            ),
            "Repeat the request with acknowledge_warning set to true to save anyway",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        match error {
            RosterError::MaxHoursExceeded { duration, max } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::compliance_blocked(duration, max),
            },
            RosterError::InvalidRule { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RULE",
                    format!("Invalid compliance rule '{}'", field),
                    message,
                ),
            },
            RosterError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            RosterError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            RosterError::InvalidRequest { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_REQUEST", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_compliance_blocked_surfaces_both_numbers() {
        let error = ApiError::compliance_blocked(
            Decimal::from_str("11.0").unwrap(),
            Decimal::from_str("10").unwrap(),
        );
        assert_eq!(error.code, "COMPLIANCE_BLOCKED");
        assert!(error.message.contains("11"));
        assert!(error.message.contains("10"));
    }

    #[test]
    fn test_compliance_warning_mentions_acknowledgement() {
        let error = ApiError::compliance_warning(
            Decimal::from_str("10.5").unwrap(),
            Decimal::from_str("10").unwrap(),
        );
        assert_eq!(error.code, "COMPLIANCE_WARNING");
        assert!(error.details.unwrap().contains("acknowledge_warning"));
    }

    #[test]
    fn test_max_hours_maps_to_422() {
        let error = RosterError::MaxHoursExceeded {
            duration: Decimal::from_str("11").unwrap(),
            max: Decimal::from_str("10").unwrap(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "COMPLIANCE_BLOCKED");
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let error = RosterError::InvalidRequest {
            message: "not an ISO year-week key: nope".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_REQUEST");
    }
}
