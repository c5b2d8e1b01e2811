//! Core data models for the Payroll Schedule Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod schedule_config;
mod schedule_result;

pub use holiday::{Holiday, NATIONAL_REGION, RawHoliday};
pub use schedule_config::{AdjustmentRule, CycleType, DateType, ScheduleConfig};
pub use schedule_result::{
    AuditStep, AuditTrace, AuditWarning, PayrollDateResult, ScheduleResult,
};
