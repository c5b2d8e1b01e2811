//! Schedule generation.
//!
//! Iterates the per-period calculator across a fixed number of periods.
//! Each period is chained from the previous period's *adjusted* EFT date.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollDateResult, ScheduleConfig};

use super::cycle_advance::advance_cycle;
use super::payroll_date::{calculate_first_period, calculate_from_candidate};

/// Largest number of periods a single schedule may contain.
pub const MAX_SCHEDULE_PERIODS: u32 = 60;

/// Maximum extra cycle advances when a candidate anchor repeats a paid date.
pub const MAX_ANCHOR_SKIPS: u32 = 31;

/// Checks that `periods` is between 1 and [`MAX_SCHEDULE_PERIODS`].
pub fn validate_periods(periods: u32) -> EngineResult<()> {
    if periods == 0 || periods > MAX_SCHEDULE_PERIODS {
        return Err(EngineError::invalid_config(
            "periods",
            format!(
                "must be between 1 and {}, got {}",
                MAX_SCHEDULE_PERIODS, periods
            ),
        ));
    }
    Ok(())
}

/// Returns the base date for the period after `previous`.
///
/// This is always the previous period's adjusted EFT date, never its
/// original anchor.
pub fn next_period_base(previous: &PayrollDateResult) -> NaiveDate {
    previous.adjusted_eft_date
}

/// Generates `periods` consecutive pay periods starting at `start_date`.
///
/// The first period is anchored on `start_date` (see
/// [`calculate_first_period`]). Every later period advances one cycle from
/// [`next_period_base`] of its predecessor. When that candidate resolves to
/// an anchor on or before a date already paid, the cycle cursor keeps
/// advancing until it does not, so every period's original EFT date falls
/// strictly after the previous period's original and adjusted EFT dates.
///
/// The result is fully materialized, in period order.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] for an out-of-range
/// `periods` or `date_value`, and propagates scan and range errors from the
/// calculator.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::generate_schedule;
/// use pay_schedule_engine::models::{AdjustmentRule, CycleType, DateType, ScheduleConfig};
/// use chrono::NaiveDate;
///
/// let config = ScheduleConfig {
///     cycle_type: CycleType::Quarterly,
///     date_type: DateType::FixedDate,
///     date_value: Some(31),
///     processing_days_before_eft: 0,
///     adjustment_rule: AdjustmentRule::Previous,
///     holidays: vec![],
/// };
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let schedule = generate_schedule(start, &config, 4).unwrap();
/// let eft: Vec<String> = schedule.iter().map(|p| p.original_eft_date.to_string()).collect();
/// assert_eq!(eft, ["2025-01-31", "2025-04-30", "2025-07-31", "2025-10-31"]);
/// ```
pub fn generate_schedule(
    start_date: NaiveDate,
    config: &ScheduleConfig,
    periods: u32,
) -> EngineResult<Vec<PayrollDateResult>> {
    validate_periods(periods)?;
    config.validate()?;

    let mut results = Vec::with_capacity(periods as usize);
    let mut previous = calculate_first_period(start_date, config)?;
    results.push(previous);

    for period in 1..periods {
        previous = calculate_next_period(&previous, config, period)?;
        results.push(previous);
    }

    Ok(results)
}

fn calculate_next_period(
    previous: &PayrollDateResult,
    config: &ScheduleConfig,
    period: u32,
) -> EngineResult<PayrollDateResult> {
    let base = next_period_base(previous);
    let floor = previous.original_eft_date.max(previous.adjusted_eft_date);
    let mut cursor = advance_cycle(base, config.cycle_type)?;

    for _ in 0..=MAX_ANCHOR_SKIPS {
        let result = calculate_from_candidate(cursor, config)?;
        if result.original_eft_date > floor {
            return Ok(result);
        }

        debug!(
            period,
            cursor = %cursor,
            anchor = %result.original_eft_date,
            floor = %floor,
            "Anchor already paid, advancing cycle cursor"
        );
        cursor = advance_cycle(cursor, config.cycle_type)?;
    }

    Err(EngineError::UnboundedScan {
        operation: "next pay period anchor".to_string(),
        start: base,
        limit: MAX_ANCHOR_SKIPS,
    })
}
