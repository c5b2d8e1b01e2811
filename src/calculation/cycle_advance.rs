//! Cycle advancement.
//!
//! Raw calendar arithmetic that moves a base date forward by one payroll
//! cycle. No weekend or holiday awareness lives here.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::CycleType;

/// The mid-month anchor used by bi-monthly payrolls.
pub const BI_MONTHLY_MID_MONTH_DAY: u32 = 15;

/// Returns the first day of `date`'s month.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

/// Returns the last day of `date`'s month.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::last_day_of_month;
/// use chrono::NaiveDate;
///
/// let feb = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(last_day_of_month(feb).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn last_day_of_month(date: NaiveDate) -> EngineResult<NaiveDate> {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| EngineError::out_of_range(date, "end of month"))
}

/// Adds calendar months, clamping the day to the target month's length.
///
/// Jan 31 plus one month is Feb 28 (or 29 in a leap year).
pub fn add_months_clamped(date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::out_of_range(date, format!("adding {} month(s)", months)))
}

/// Advances `base_date` by one period of `cycle_type`.
///
/// - Weekly: +7 days. Fortnightly: +14 days.
/// - BiMonthly: before the 15th goes to the 15th, on the 15th goes to the end
///   of the month, after the 15th goes to the 15th of the next month.
/// - Monthly: +1 month. Quarterly: +3 months. Both clamp to the last valid day.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if the result is not representable.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::advance_cycle;
/// use pay_schedule_engine::models::CycleType;
/// use chrono::NaiveDate;
///
/// let base = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let next = advance_cycle(base, CycleType::BiMonthly).unwrap();
/// assert_eq!(next, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
/// ```
pub fn advance_cycle(base_date: NaiveDate, cycle_type: CycleType) -> EngineResult<NaiveDate> {
    match cycle_type {
        CycleType::Weekly => add_days(base_date, 7),
        CycleType::Fortnightly => add_days(base_date, 14),
        CycleType::BiMonthly => advance_bi_monthly(base_date),
        CycleType::Monthly => add_months_clamped(base_date, 1),
        CycleType::Quarterly => add_months_clamped(base_date, 3),
    }
}

fn add_days(date: NaiveDate, days: u64) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| EngineError::out_of_range(date, format!("adding {} day(s)", days)))
}

fn advance_bi_monthly(base_date: NaiveDate) -> EngineResult<NaiveDate> {
    let day = base_date.day();

    if day < BI_MONTHLY_MID_MONTH_DAY {
        mid_month(base_date)
    } else if day == BI_MONTHLY_MID_MONTH_DAY {
        last_day_of_month(base_date)
    } else {
        let next_month = add_months_clamped(first_day_of_month(base_date), 1)?;
        mid_month(next_month)
    }
}

fn mid_month(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.with_day(BI_MONTHLY_MID_MONTH_DAY)
        .ok_or_else(|| EngineError::out_of_range(date, "mid-month anchor"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_adds_seven_days() {
        assert_eq!(
            advance_cycle(date(2025, 1, 6), CycleType::Weekly).unwrap(),
            date(2025, 1, 13)
        );
    }

    #[test]
    fn test_fortnightly_crosses_month_boundary() {
        assert_eq!(
            advance_cycle(date(2025, 1, 24), CycleType::Fortnightly).unwrap(),
            date(2025, 2, 7)
        );
    }

    #[test]
    fn test_bi_monthly_before_fifteenth_goes_to_fifteenth() {
        assert_eq!(
            advance_cycle(date(2025, 3, 10), CycleType::BiMonthly).unwrap(),
            date(2025, 3, 15)
        );
    }

    #[test]
    fn test_bi_monthly_on_fifteenth_goes_to_end_of_month() {
        assert_eq!(
            advance_cycle(date(2025, 3, 15), CycleType::BiMonthly).unwrap(),
            date(2025, 3, 31)
        );
    }

    #[test]
    fn test_bi_monthly_after_fifteenth_goes_to_next_fifteenth() {
        assert_eq!(
            advance_cycle(date(2025, 3, 31), CycleType::BiMonthly).unwrap(),
            date(2025, 4, 15)
        );
        assert_eq!(
            advance_cycle(date(2025, 12, 20), CycleType::BiMonthly).unwrap(),
            date(2026, 1, 15)
        );
    }

    #[test]
    fn test_bi_monthly_alternates_on_successive_calls() {
        let mut current = date(2025, 1, 1);
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = advance_cycle(current, CycleType::BiMonthly).unwrap();
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                date(2025, 1, 15),
                date(2025, 1, 31),
                date(2025, 2, 15),
                date(2025, 2, 28),
            ]
        );
    }

    #[test]
    fn test_monthly_clamps_to_february() {
        assert_eq!(
            advance_cycle(date(2025, 1, 31), CycleType::Monthly).unwrap(),
            date(2025, 2, 28)
        );
        assert_eq!(
            advance_cycle(date(2024, 1, 31), CycleType::Monthly).unwrap(),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_monthly_keeps_day_when_valid() {
        assert_eq!(
            advance_cycle(date(2025, 12, 15), CycleType::Monthly).unwrap(),
            date(2026, 1, 15)
        );
    }

    #[test]
    fn test_quarterly_clamps_to_april_thirtieth() {
        assert_eq!(
            advance_cycle(date(2025, 1, 31), CycleType::Quarterly).unwrap(),
            date(2025, 4, 30)
        );
    }

    #[test]
    fn test_quarterly_crosses_year() {
        assert_eq!(
            advance_cycle(date(2025, 11, 30), CycleType::Quarterly).unwrap(),
            date(2026, 2, 28)
        );
    }

    #[test]
    fn test_last_day_of_month_december() {
        assert_eq!(last_day_of_month(date(2025, 12, 3)).unwrap(), date(2025, 12, 31));
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(first_day_of_month(date(2025, 7, 19)), date(2025, 7, 1));
    }

    #[test]
    fn test_advance_past_max_date_is_out_of_range() {
        let result = advance_cycle(NaiveDate::MAX, CycleType::Weekly);
        assert!(matches!(result, Err(EngineError::DateOutOfRange { .. })));
    }
}
