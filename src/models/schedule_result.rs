//! Schedule result models.
//!
//! This module contains [`PayrollDateResult`], the per-period output of the
//! calculator, and the [`ScheduleResult`] envelope returned to API callers
//! together with its audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The computed dates for one pay period.
///
/// `processing_date` never falls after `adjusted_eft_date`.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::models::PayrollDateResult;
/// use chrono::NaiveDate;
///
/// let result = PayrollDateResult {
///     original_eft_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
///     adjusted_eft_date: NaiveDate::from_ymd_opt(2025, 5, 30).unwrap(),
///     processing_date: NaiveDate::from_ymd_opt(2025, 5, 28).unwrap(),
/// };
/// assert!(result.was_adjusted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayrollDateResult {
    /// The anchor date before weekend/holiday adjustment.
    pub original_eft_date: NaiveDate,
    /// The date funds are transferred.
    pub adjusted_eft_date: NaiveDate,
    /// The date payroll processing must begin.
    pub processing_date: NaiveDate,
}

impl PayrollDateResult {
    /// Returns true if the EFT date was moved off its anchor.
    pub fn was_adjusted(&self) -> bool {
        self.original_eft_date != self.adjusted_eft_date
    }
}

/// A single step in the audit trace recording a scheduling decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during generation.
///
/// Warnings never stop a schedule from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of scheduling steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during generation.
    pub warnings: Vec<AuditWarning>,
    /// The total generation duration in microseconds.
    pub duration_us: u64,
}

/// A generated schedule for one payroll.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::models::{AuditTrace, ScheduleResult};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let result = ScheduleResult {
///     schedule_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     payroll_id: "payroll_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     dates: vec![],
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(result.dates.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Unique identifier for this generation run.
    pub schedule_id: Uuid,
    /// When the schedule was generated.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that generated the schedule.
    pub engine_version: String,
    /// The payroll the schedule belongs to.
    pub payroll_id: String,
    /// The date the first period was anchored on.
    pub start_date: NaiveDate,
    /// One entry per generated period, in order.
    pub dates: Vec<PayrollDateResult>,
    /// Audit trace of adjustment decisions.
    pub audit_trace: AuditTrace,
}
