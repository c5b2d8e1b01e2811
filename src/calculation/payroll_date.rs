//! Per-period payroll date calculation.
//!
//! Combines cycle advancement, date-type resolution and business-day
//! adjustment into the three dates of one pay period. Every function takes
//! its base date explicitly; nothing here reads the clock.

use chrono::{Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollDateResult, ScheduleConfig};

use super::business_day::adjust_business_day;
use super::cycle_advance::advance_cycle;
use super::date_type::resolve_date_type;

/// Calculates the pay period that follows `base_date`.
///
/// 1. `original_eft_date` = resolve(advance(`base_date`))
/// 2. `adjusted_eft_date` = adjust(`original_eft_date`)
/// 3. `processing_date` = adjust(`adjusted_eft_date` − lead time)
///
/// The same adjustment rule and holiday list apply to both adjustments.
///
/// # Errors
///
/// Propagates [`EngineError::InvalidConfiguration`] for a bad `date_value`,
/// [`EngineError::UnboundedScan`] from the scans, and
/// [`EngineError::DateOutOfRange`] at the calendar's edges.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::calculate_payroll_dates;
/// use pay_schedule_engine::models::{AdjustmentRule, CycleType, DateType, ScheduleConfig};
/// use chrono::NaiveDate;
///
/// let config = ScheduleConfig {
///     cycle_type: CycleType::Monthly,
///     date_type: DateType::FixedDate,
///     date_value: Some(31),
///     processing_days_before_eft: 0,
///     adjustment_rule: AdjustmentRule::Previous,
///     holidays: vec![],
/// };
///
/// let base = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let result = calculate_payroll_dates(base, &config).unwrap();
/// assert_eq!(result.original_eft_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
pub fn calculate_payroll_dates(
    base_date: NaiveDate,
    config: &ScheduleConfig,
) -> EngineResult<PayrollDateResult> {
    let candidate = advance_cycle(base_date, config.cycle_type)?;
    calculate_from_candidate(candidate, config)
}

/// Calculates the first pay period of a schedule.
///
/// The first period is anchored on `start_date` itself: the date type is
/// resolved against the start date without advancing a cycle first, so a
/// weekly Friday payroll starting on a Monday pays that same Friday.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::calculate_first_period;
/// use pay_schedule_engine::models::{AdjustmentRule, CycleType, DateType, ScheduleConfig};
/// use chrono::NaiveDate;
///
/// let config = ScheduleConfig {
///     cycle_type: CycleType::Weekly,
///     date_type: DateType::DayOfWeek,
///     date_value: Some(5),
///     processing_days_before_eft: 0,
///     adjustment_rule: AdjustmentRule::Previous,
///     holidays: vec![],
/// };
///
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let result = calculate_first_period(monday, &config).unwrap();
/// assert_eq!(result.original_eft_date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
/// assert_eq!(result.adjusted_eft_date, result.original_eft_date);
/// ```
pub fn calculate_first_period(
    start_date: NaiveDate,
    config: &ScheduleConfig,
) -> EngineResult<PayrollDateResult> {
    calculate_from_candidate(start_date, config)
}

/// Resolves, adjusts and derives the processing date from a raw candidate.
pub(crate) fn calculate_from_candidate(
    candidate: NaiveDate,
    config: &ScheduleConfig,
) -> EngineResult<PayrollDateResult> {
    let original_eft_date = resolve_date_type(candidate, config.date_type, config.date_value)?;

    let adjusted_eft_date =
        adjust_business_day(original_eft_date, config.adjustment_rule, &config.holidays)?;

    let raw_processing_date = adjusted_eft_date
        .checked_sub_days(Days::new(config.processing_days_before_eft.into()))
        .ok_or_else(|| EngineError::out_of_range(adjusted_eft_date, "processing lead time"))?;

    let processing_date =
        adjust_business_day(raw_processing_date, config.adjustment_rule, &config.holidays)?;

    Ok(PayrollDateResult {
        original_eft_date,
        adjusted_eft_date,
        processing_date,
    })
}
