//! HTTP API module for the roster engine.
//!
//! This module provides the REST endpoints the scheduling front end talks
//! to: roster reads, compliance-checked shift writes, revenue entry, daily
//! statistics, and rule-set administration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeUpsertRequest, RevenueRequest, ShiftUpsertRequest};
pub use response::{ApiError, ShiftUpsertResponse};
pub use state::AppState;
