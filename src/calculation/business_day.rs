//! Business-day adjustment.
//!
//! Moves a date that lands on a weekend or holiday to a business day
//! according to an [`AdjustmentRule`]. Every scan is capped so malformed
//! holiday data cannot spin forever.

use chrono::{Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustmentRule, Holiday};

use super::holiday_calendar::is_business_day;

/// Maximum number of days any adjustment scan may move a date.
pub const MAX_ADJUSTMENT_SCAN_DAYS: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn step(self, date: NaiveDate, days: u32) -> EngineResult<NaiveDate> {
        let shifted = match self {
            Direction::Backward => date.checked_sub_days(Days::new(days.into())),
            Direction::Forward => date.checked_add_days(Days::new(days.into())),
        };
        shifted.ok_or_else(|| EngineError::out_of_range(date, "business day adjustment"))
    }

    fn operation(self) -> &'static str {
        match self {
            Direction::Backward => "previous business day",
            Direction::Forward => "next business day",
        }
    }
}

/// Adjusts `date` to a business day using `rule`.
///
/// A date that is already a business day is returned unchanged, so the
/// function is idempotent: adjusting an adjusted date is a no-op.
///
/// - [`AdjustmentRule::Previous`] walks back one day at a time.
/// - [`AdjustmentRule::Next`] walks forward one day at a time.
/// - [`AdjustmentRule::Nearest`] walks outward in both directions at once and
///   takes the closer business day. On an exact tie the earlier date wins.
///
/// # Errors
///
/// Returns [`EngineError::UnboundedScan`] if no business day is found within
/// [`MAX_ADJUSTMENT_SCAN_DAYS`] days.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::adjust_business_day;
/// use pay_schedule_engine::models::AdjustmentRule;
/// use chrono::NaiveDate;
///
/// // 2025-05-31 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
///
/// let previous = adjust_business_day(saturday, AdjustmentRule::Previous, &[]).unwrap();
/// assert_eq!(previous, NaiveDate::from_ymd_opt(2025, 5, 30).unwrap());
///
/// let next = adjust_business_day(saturday, AdjustmentRule::Next, &[]).unwrap();
/// assert_eq!(next, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
/// ```
pub fn adjust_business_day(
    date: NaiveDate,
    rule: AdjustmentRule,
    holidays: &[Holiday],
) -> EngineResult<NaiveDate> {
    if is_business_day(date, holidays) {
        return Ok(date);
    }

    match rule {
        AdjustmentRule::Previous => scan(date, Direction::Backward, holidays),
        AdjustmentRule::Next => scan(date, Direction::Forward, holidays),
        AdjustmentRule::Nearest => nearest(date, holidays),
    }
}

fn scan(date: NaiveDate, direction: Direction, holidays: &[Holiday]) -> EngineResult<NaiveDate> {
    for offset in 1..=MAX_ADJUSTMENT_SCAN_DAYS {
        let candidate = direction.step(date, offset)?;
        if is_business_day(candidate, holidays) {
            return Ok(candidate);
        }
    }

    Err(EngineError::UnboundedScan {
        operation: direction.operation().to_string(),
        start: date,
        limit: MAX_ADJUSTMENT_SCAN_DAYS,
    })
}

fn nearest(date: NaiveDate, holidays: &[Holiday]) -> EngineResult<NaiveDate> {
    for offset in 1..=MAX_ADJUSTMENT_SCAN_DAYS {
        // Earlier side first: equal offsets resolve to the earlier date.
        for direction in [Direction::Backward, Direction::Forward] {
            let candidate = direction.step(date, offset)?;
            if is_business_day(candidate, holidays) {
                return Ok(candidate);
            }
        }
    }

    Err(EngineError::UnboundedScan {
        operation: "nearest business day".to_string(),
        start: date,
        limit: MAX_ADJUSTMENT_SCAN_DAYS,
    })
}
