//! Holiday lookup and holiday-entry parsing.
//!
//! Lookups are pure functions over a caller-supplied holiday slice: no
//! caching and no global calendar, so every caller can inject its own set.
//! Parsing turns upstream [`RawHoliday`] entries into [`Holiday`] values and
//! skips the ones that cannot be understood.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, RawHoliday};

/// Date format accepted for holiday entries.
pub const HOLIDAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true if `date` is one of `holidays`.
///
/// Non-recurring holidays match on the exact date; recurring holidays match
/// on month and day in any year.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::calculation::is_holiday;
/// use pay_schedule_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holidays = vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2000, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
///     recurring: true,
///     region: "national".to_string(),
/// }];
///
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(), &holidays));
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(), &holidays));
/// ```
pub fn is_holiday(date: NaiveDate, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.matches(date))
}

/// Returns true if `date` is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if `date` is a weekday that is not a holiday.
pub fn is_business_day(date: NaiveDate, holidays: &[Holiday]) -> bool {
    !is_weekend(date) && !is_holiday(date, holidays)
}

/// Returns the first holiday that falls on `date`, if any.
pub fn holiday_on(date: NaiveDate, holidays: &[Holiday]) -> Option<&Holiday> {
    holidays.iter().find(|h| h.matches(date))
}

/// Returns the holidays that apply to `region`, national ones included.
pub fn holidays_for_region(holidays: &[Holiday], region: &str) -> Vec<Holiday> {
    holidays
        .iter()
        .filter(|h| h.applies_to(region))
        .cloned()
        .collect()
}

/// Parses a single upstream holiday entry.
///
/// # Errors
///
/// Returns [`EngineError::MalformedHoliday`] if the date is not a valid
/// `YYYY-MM-DD` calendar date or the name is blank.
pub fn parse_holiday(raw: &RawHoliday) -> EngineResult<Holiday> {
    let entry = format!("{} ({})", raw.name, raw.date);

    if raw.name.trim().is_empty() {
        return Err(EngineError::MalformedHoliday {
            entry,
            message: "name must not be empty".to_string(),
        });
    }

    let date = NaiveDate::parse_from_str(raw.date.trim(), HOLIDAY_DATE_FORMAT).map_err(|e| {
        EngineError::MalformedHoliday {
            entry,
            message: e.to_string(),
        }
    })?;

    Ok(Holiday {
        date,
        name: raw.name.trim().to_string(),
        recurring: raw.recurring,
        region: raw.region.trim().to_string(),
    })
}

/// Parses a list of upstream holiday entries, skipping malformed ones.
///
/// Holiday enrichment is best-effort: every entry that fails to parse is
/// logged with `warn!` and returned in the second element instead of
/// failing the whole list.
pub fn parse_holidays(raw: &[RawHoliday]) -> (Vec<Holiday>, Vec<EngineError>) {
    let mut holidays = Vec::with_capacity(raw.len());
    let mut skipped = Vec::new();

    for entry in raw {
        match parse_holiday(entry) {
            Ok(holiday) => holidays.push(holiday),
            Err(err) => {
                warn!(error = %err, "Skipping malformed holiday");
                skipped.push(err);
            }
        }
    }

    (holidays, skipped)
}
