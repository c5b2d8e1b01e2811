//! Audit steps for generated schedules.
//!
//! Turns the computed dates of each period into [`AuditStep`]s explaining
//! what the anchor was, why it moved, and how the processing date was
//! derived.

use chrono::{Days, NaiveDate};

use crate::error::EngineError;
use crate::models::{AuditStep, AuditWarning, Holiday, PayrollDateResult, ScheduleConfig};

use super::holiday_calendar::{holiday_on, is_weekend};

/// Warning code recorded for each skipped holiday entry.
pub const MALFORMED_HOLIDAY_WARNING: &str = "MALFORMED_HOLIDAY";

/// Describes why `date` is not a business day, or `None` if it is one.
pub fn non_business_reason(date: NaiveDate, holidays: &[Holiday]) -> Option<String> {
    if let Some(holiday) = holiday_on(date, holidays) {
        Some(format!("{} is a holiday ({})", date, holiday.name))
    } else if is_weekend(date) {
        Some(format!("{} falls on a {}", date, date.format("%A")))
    } else {
        None
    }
}

/// Builds the audit steps for one generated period.
///
/// Produces two steps: the EFT adjustment and the processing date
/// derivation. Step numbers start at `step_number`.
pub fn audit_period(
    period: u32,
    result: &PayrollDateResult,
    config: &ScheduleConfig,
    step_number: u32,
) -> Vec<AuditStep> {
    let eft_reasoning = match non_business_reason(result.original_eft_date, &config.holidays) {
        Some(reason) => format!(
            "{}; moved to {} using the {} rule",
            reason, result.adjusted_eft_date, config.adjustment_rule
        ),
        None => format!(
            "{} is a business day, no adjustment needed",
            result.original_eft_date
        ),
    };

    let eft_step = AuditStep {
        step_number,
        rule_id: "eft_date_adjustment".to_string(),
        rule_name: "EFT Date Adjustment".to_string(),
        input: serde_json::json!({
            "period": period,
            "cycle_type": config.cycle_type,
            "date_type": config.date_type,
            "date_value": config.date_value,
            "original_eft_date": result.original_eft_date,
        }),
        output: serde_json::json!({
            "adjusted_eft_date": result.adjusted_eft_date,
        }),
        reasoning: eft_reasoning,
    };

    let lead = config.processing_days_before_eft;
    let raw_processing = result
        .adjusted_eft_date
        .checked_sub_days(Days::new(lead.into()))
        .unwrap_or(result.processing_date);

    let processing_reasoning = match non_business_reason(raw_processing, &config.holidays) {
        Some(reason) => format!(
            "{} day(s) before {} is {}; {}; moved to {}",
            lead, result.adjusted_eft_date, raw_processing, reason, result.processing_date
        ),
        None => format!(
            "{} day(s) before {} is {}, a business day",
            lead, result.adjusted_eft_date, raw_processing
        ),
    };

    let processing_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "processing_date".to_string(),
        rule_name: "Processing Date".to_string(),
        input: serde_json::json!({
            "period": period,
            "adjusted_eft_date": result.adjusted_eft_date,
            "processing_days_before_eft": lead,
        }),
        output: serde_json::json!({
            "processing_date": result.processing_date,
        }),
        reasoning: processing_reasoning,
    };

    vec![eft_step, processing_step]
}

/// Converts skipped holiday entries into audit warnings.
pub fn malformed_holiday_warnings(skipped: &[EngineError]) -> Vec<AuditWarning> {
    skipped
        .iter()
        .map(|err| AuditWarning {
            code: MALFORMED_HOLIDAY_WARNING.to_string(),
            message: err.to_string(),
            severity: "low".to_string(),
        })
        .collect()
}
