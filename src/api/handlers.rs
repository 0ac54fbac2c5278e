//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::{daily_stats, week_stats};
use crate::compliance::{check_rest_periods, evaluate_shift, Severity};
use crate::config::ComplianceRuleSet;
use crate::models::{Employee, IsoYearWeek, ShiftId};

use super::request::{EmployeeUpsertRequest, RevenueRequest, ShiftUpsertRequest};
use super::response::{ApiError, ApiErrorResponse, ShiftUpsertResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster/:location/:week", get(get_roster))
        .route("/roster/:location/:week/shifts", post(upsert_shift))
        .route(
            "/roster/:location/:week/shifts/:employee/:date/:shift",
            delete(remove_shift),
        )
        .route("/roster/:location/:week/revenue/:date", put(set_revenue))
        .route("/roster/:location/:week/stats", get(get_week_stats))
        .route("/roster/:location/:week/stats/:date", get(get_day_stats))
        .route("/roster/:location/:week/rest/:employee", get(get_rest_violations))
        .route("/rules", get(get_rules).put(put_rules))
        .route("/employees", get(list_employees))
        .route("/employees/:id", put(upsert_employee))
        .with_state(state)
}

fn parse_week(raw: &str) -> Result<IsoYearWeek, ApiErrorResponse> {
    raw.parse::<IsoYearWeek>().map_err(ApiErrorResponse::from)
}

/// Handler for `GET /roster/{location}/{week}`.
async fn get_roster(
    State(state): State<AppState>,
    Path((location, week)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let week = parse_week(&week)?;
    let roster = state.store().get_roster(&location, week).await;
    Ok(Json(roster))
}

/// Handler for `POST /roster/{location}/{week}/shifts`.
///
/// Evaluates the candidate shift against the compliance rule set before
/// anything is persisted. Blocking violations refuse the save; warnings
/// require explicit acknowledgement in the request.
async fn upsert_shift(
    State(state): State<AppState>,
    Path((location, week)): Path<(String, String)>,
    payload: Result<Json<ShiftUpsertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let week = parse_week(&week)?;
    let request = unpack_json(payload, correlation_id)?;

    let rules = state.rules_snapshot().await;
    let evaluation = evaluate_shift(request.start, request.end, &rules);

    match evaluation.severity {
        Severity::Blocking => {
            warn!(
                correlation_id = %correlation_id,
                location = %location,
                week = %week,
                employee_id = %request.employee_id,
                duration = %evaluation.duration_hours,
                max = %rules.max_daily_hours,
                "shift blocked by strict compliance"
            );
            return Err(ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::compliance_blocked(
                    evaluation.duration_hours,
                    rules.max_daily_hours,
                ),
            });
        }
        Severity::Warning if !request.acknowledge_warning => {
            return Err(ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::compliance_warning(
                    evaluation.duration_hours,
                    rules.max_daily_hours,
                ),
            });
        }
        _ => {}
    }

    let shift_id = state
        .store()
        .upsert_shift(
            &location,
            week,
            &request.employee_id,
            request.date,
            request.shift_id,
            request.to_shift(),
        )
        .await;

    info!(
        correlation_id = %correlation_id,
        location = %location,
        week = %week,
        employee_id = %request.employee_id,
        shift_id = %shift_id,
        severity = ?evaluation.severity,
        "shift saved"
    );
    Ok(Json(ShiftUpsertResponse {
        shift_id,
        evaluation,
    }))
}

/// Handler for `DELETE /roster/{location}/{week}/shifts/{employee}/{date}/{shift}`.
///
/// Removing a shift that no longer exists is a no-op; the caller already
/// confirmed intent and a concurrent scheduler may have gotten there first.
async fn remove_shift(
    State(state): State<AppState>,
    Path((location, week, employee, date, shift)): Path<(
        String,
        String,
        String,
        NaiveDate,
        ShiftId,
    )>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let week = parse_week(&week)?;
    state
        .store()
        .remove_shift(&location, week, &employee, date, shift)
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `PUT /roster/{location}/{week}/revenue/{date}`.
async fn set_revenue(
    State(state): State<AppState>,
    Path((location, week, date)): Path<(String, String, NaiveDate)>,
    payload: Result<Json<RevenueRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let week = parse_week(&week)?;
    let request = unpack_json(payload, correlation_id)?;

    state
        .store()
        .set_revenue(&location, week, date, request.amount)
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `GET /roster/{location}/{week}/stats`.
async fn get_week_stats(
    State(state): State<AppState>,
    Path((location, week)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let week = parse_week(&week)?;
    let roster = state.store().get_roster(&location, week).await;
    let employees = state.directory().all().await;
    let rules = state.rules_snapshot().await;
    Ok(Json(week_stats(&roster, &employees, &week, &rules)))
}

/// Handler for `GET /roster/{location}/{week}/stats/{date}`.
async fn get_day_stats(
    State(state): State<AppState>,
    Path((location, week, date)): Path<(String, String, NaiveDate)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let week = parse_week(&week)?;
    let roster = state.store().get_roster(&location, week).await;
    let employees = state.directory().all().await;
    let rules = state.rules_snapshot().await;
    Ok(Json(daily_stats(&roster, &employees, date, &rules)))
}

/// Handler for `GET /roster/{location}/{week}/rest/{employee}`.
async fn get_rest_violations(
    State(state): State<AppState>,
    Path((location, week, employee)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let week = parse_week(&week)?;
    let roster = state.store().get_roster(&location, week).await;
    let rules = state.rules_snapshot().await;
    Ok(Json(check_rest_periods(&roster, &employee, &rules)))
}

/// Handler for `GET /rules`.
async fn get_rules(State(state): State<AppState>) -> Json<ComplianceRuleSet> {
    Json(state.rules_snapshot().await)
}

/// Handler for `PUT /rules`.
///
/// Rule changes are an explicit full replace, validated before they are
/// applied. In-flight scheduling requests keep the snapshot they started
/// with; the new rules apply from the next request on.
async fn put_rules(
    State(state): State<AppState>,
    payload: Result<Json<ComplianceRuleSet>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let rules = unpack_json(payload, correlation_id)?;
    rules.validate()?;

    info!(
        correlation_id = %correlation_id,
        strict = rules.enforce_strict_compliance,
        max_daily_hours = %rules.max_daily_hours,
        "compliance rules replaced"
    );
    state.set_rules(rules.clone()).await;
    Ok(Json(rules))
}

/// Handler for `GET /employees`.
async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.directory().all().await)
}

/// Handler for `PUT /employees/{id}`.
async fn upsert_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpsertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = unpack_json(payload, correlation_id)?;

    let employee = Employee {
        id,
        name: request.name,
        role: request.role,
        hourly_rate: request.hourly_rate,
        target_monthly_hours: request.target_monthly_hours,
    };
    state.directory().upsert(employee.clone()).await;
    Ok(Json(employee))
}

/// Maps JSON extraction failures to the API error shape.
fn unpack_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}
