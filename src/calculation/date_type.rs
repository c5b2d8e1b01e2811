//! Date-type resolution.
//!
//! Refines a cycle-advanced candidate to the payroll's anchor semantics:
//! a fixed day of month, a month boundary, or a particular weekday.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::DateType;

use super::cycle_advance::{first_day_of_month, last_day_of_month};

/// Maximum number of days a weekday scan may move forward.
pub const MAX_WEEKDAY_SCAN_DAYS: u32 = 31;

/// Offset from the first of the month to the start of the `WeekB` window.
const WEEK_B_OFFSET_DAYS: u64 = 14;

/// Maps a `date_value` weekday number (0 = Sunday … 6 = Saturday) to a [`Weekday`].
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] for values outside 0–6.
pub fn weekday_from_value(value: i32) -> EngineResult<Weekday> {
    match value {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(EngineError::invalid_config(
            "date_value",
            format!("weekday must be between 0 and 6, got {}", value),
        )),
    }
}

/// Resolves `candidate` to the anchor described by `date_type` and `date_value`.
///
/// | Date type      | Result                                                  |
/// |----------------|---------------------------------------------------------|
/// | `FixedDate`    | day `date_value` of the candidate's month, clamped      |
/// | `EndOfMonth`   | last day of the candidate's month                       |
/// | `StartOfMonth` | first day of the candidate's month                      |
/// | `WeekA`        | first `date_value` weekday of the month                 |
/// | `WeekB`        | the `WeekA` date plus 14 days                           |
/// | `DayOfWeek`    | first `date_value` weekday on or after the candidate    |
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] when `date_value` is missing
/// or out of range for a type that needs it, and
/// [`EngineError::UnboundedScan`] if a weekday scan overruns.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::resolve_date_type;
/// use pay_schedule_engine::models::DateType;
/// use chrono::NaiveDate;
///
/// // January 2025 starts on a Wednesday; its first Monday is the 6th.
/// let candidate = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
/// let week_a = resolve_date_type(candidate, DateType::WeekA, Some(1)).unwrap();
/// let week_b = resolve_date_type(candidate, DateType::WeekB, Some(1)).unwrap();
///
/// assert_eq!(week_a, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
/// assert_eq!(week_b, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
/// ```
pub fn resolve_date_type(
    candidate: NaiveDate,
    date_type: DateType,
    date_value: Option<i32>,
) -> EngineResult<NaiveDate> {
    let value = date_type.check_value(date_value)?;

    match (date_type, value) {
        (DateType::FixedDate, Some(day)) => fixed_day_of_month(candidate, day),
        (DateType::EndOfMonth, _) => last_day_of_month(candidate),
        (DateType::StartOfMonth, _) => Ok(first_day_of_month(candidate)),
        (DateType::WeekA, Some(weekday)) => {
            scan_to_weekday(first_day_of_month(candidate), weekday_from_value(weekday)?)
        }
        (DateType::WeekB, Some(weekday)) => {
            let window_start = first_day_of_month(candidate)
                .checked_add_days(Days::new(WEEK_B_OFFSET_DAYS))
                .ok_or_else(|| EngineError::out_of_range(candidate, "week B window"))?;
            scan_to_weekday(window_start, weekday_from_value(weekday)?)
        }
        (DateType::DayOfWeek, Some(weekday)) => {
            scan_to_weekday(candidate, weekday_from_value(weekday)?)
        }
        (DateType::FixedDate | DateType::WeekA | DateType::WeekB | DateType::DayOfWeek, None) => {
            Err(EngineError::invalid_config(
                "date_value",
                format!("is required for {} date type", date_type),
            ))
        }
    }
}

fn fixed_day_of_month(candidate: NaiveDate, day: i32) -> EngineResult<NaiveDate> {
    let last = last_day_of_month(candidate)?;
    let day = u32::try_from(day)
        .map_err(|_| EngineError::invalid_config("date_value", "day of month must be positive"))?
        .min(last.day());

    candidate
        .with_day(day)
        .ok_or_else(|| EngineError::out_of_range(candidate, "fixed day of month"))
}

/// Scans forward from `start` (inclusive) to the first date on `weekday`.
fn scan_to_weekday(start: NaiveDate, weekday: Weekday) -> EngineResult<NaiveDate> {
    let mut current = start;

    for _ in 0..=MAX_WEEKDAY_SCAN_DAYS {
        if current.weekday() == weekday {
            return Ok(current);
        }
        current = current
            .succ_opt()
            .ok_or_else(|| EngineError::out_of_range(current, "weekday scan"))?;
    }

    Err(EngineError::UnboundedScan {
        operation: format!("weekday {}", weekday),
        start,
        limit: MAX_WEEKDAY_SCAN_DAYS,
    })
}
