//! HTTP API module for the Payroll Schedule Engine.
//!
//! This module provides the REST API endpoints for generating payroll
//! schedules against a loaded holiday calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchScheduleRequest, ScheduleConfigRequest, ScheduleRequest, DEFAULT_PERIODS};
pub use response::{ApiError, ApiErrorResponse, BatchOutcome, BatchScheduleResponse};
pub use state::AppState;
