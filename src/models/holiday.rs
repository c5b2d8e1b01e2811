//! Holiday models.
//!
//! This module contains the [`Holiday`] type consumed by the business-day
//! logic, and [`RawHoliday`], the unvalidated shape holidays arrive in from
//! calendar files and API requests.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The region that applies to every payroll regardless of location.
pub const NATIONAL_REGION: &str = "national";

/// A holiday that blocks a date from being a business day.
///
/// Non-recurring holidays match their exact date. Recurring holidays match on
/// month and day only, so a single entry covers every year.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let christmas = Holiday {
///     date: NaiveDate::from_ymd_opt(2020, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
///     recurring: true,
///     region: "national".to_string(),
/// };
/// assert!(christmas.matches(NaiveDate::from_ymd_opt(2031, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday. Only month and day matter when recurring.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Christmas Day").
    pub name: String,
    /// Whether the holiday recurs every year on the same month and day.
    #[serde(default)]
    pub recurring: bool,
    /// The region where this holiday applies (e.g., "national", "VIC").
    pub region: String,
}

impl Holiday {
    /// Returns true if this holiday falls on `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if self.recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }

    /// Returns true if this holiday applies to payrolls in `region`.
    ///
    /// National holidays apply everywhere; comparisons ignore ASCII case.
    pub fn applies_to(&self, region: &str) -> bool {
        self.region.eq_ignore_ascii_case(region)
            || self.region.eq_ignore_ascii_case(NATIONAL_REGION)
    }
}

/// An unvalidated holiday entry as supplied by an upstream collaborator.
///
/// The date is kept as text so a single bad entry can be rejected and
/// skipped without failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHoliday {
    /// The date in `YYYY-MM-DD` form.
    pub date: String,
    /// The name of the holiday.
    pub name: String,
    /// Whether the holiday recurs yearly.
    #[serde(default)]
    pub recurring: bool,
    /// The region where this holiday applies.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    NATIONAL_REGION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(y: i32, m: u32, d: u32, recurring: bool, region: &str) -> Holiday {
        Holiday {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            name: "Test Holiday".to_string(),
            recurring,
            region: region.to_string(),
        }
    }

    #[test]
    fn test_non_recurring_matches_exact_date_only() {
        let h = holiday(2025, 1, 27, false, "national");
        assert!(h.matches(NaiveDate::from_ymd_opt(2025, 1, 27).unwrap()));
        assert!(!h.matches(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap()));
    }

    #[test]
    fn test_recurring_ignores_year() {
        let h = holiday(2019, 12, 26, true, "national");
        assert!(h.matches(NaiveDate::from_ymd_opt(2025, 12, 26).unwrap()));
        assert!(h.matches(NaiveDate::from_ymd_opt(2040, 12, 26).unwrap()));
        assert!(!h.matches(NaiveDate::from_ymd_opt(2025, 12, 27).unwrap()));
    }

    #[test]
    fn test_recurring_leap_day_only_matches_leap_years() {
        let h = holiday(2024, 2, 29, true, "national");
        assert!(h.matches(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()));
        assert!(!h.matches(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
    }

    #[test]
    fn test_region_applies_case_insensitively() {
        let h = holiday(2025, 11, 4, false, "VIC");
        assert!(h.applies_to("vic"));
        assert!(!h.applies_to("NSW"));
    }

    #[test]
    fn test_national_holiday_applies_everywhere() {
        let h = holiday(2025, 1, 1, true, "national");
        assert!(h.applies_to("NSW"));
        assert!(h.applies_to("WA"));
    }

    #[test]
    fn test_deserialize_raw_holiday_defaults() {
        let json = r#"{ "date": "2025-12-25", "name": "Christmas Day" }"#;
        let raw: RawHoliday = serde_json::from_str(json).unwrap();
        assert!(!raw.recurring);
        assert_eq!(raw.region, "national");
    }

    #[test]
    fn test_serialize_holiday() {
        let h = holiday(2026, 1, 26, false, "national");
        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains("\"date\":\"2026-01-26\""));
        assert!(json.contains("\"recurring\":false"));
        assert!(json.contains("\"region\":\"national\""));
    }
}
