//! Calculation logic for the Payroll Schedule Engine.
//!
//! This module contains the date arithmetic behind every pay run: holiday
//! lookup, business-day adjustment, cycle advancement, date-type
//! resolution, per-period calculation, schedule generation, and the audit
//! steps that explain each period.

mod audit;
mod business_day;
mod cycle_advance;
mod date_type;
mod holiday_calendar;
mod payroll_date;
mod schedule;

pub use audit::{
    MALFORMED_HOLIDAY_WARNING, audit_period, malformed_holiday_warnings, non_business_reason,
};
pub use business_day::{MAX_ADJUSTMENT_SCAN_DAYS, adjust_business_day};
pub use cycle_advance::{
    BI_MONTHLY_MID_MONTH_DAY, add_months_clamped, advance_cycle, first_day_of_month,
    last_day_of_month,
};
pub use date_type::{MAX_WEEKDAY_SCAN_DAYS, resolve_date_type, weekday_from_value};
pub use holiday_calendar::{
    HOLIDAY_DATE_FORMAT, holiday_on, holidays_for_region, is_business_day, is_holiday,
    is_weekend, parse_holiday, parse_holidays,
};
pub use payroll_date::{calculate_first_period, calculate_payroll_dates};
pub use schedule::{
    MAX_ANCHOR_SKIPS, MAX_SCHEDULE_PERIODS, generate_schedule, next_period_base, validate_periods,
};
