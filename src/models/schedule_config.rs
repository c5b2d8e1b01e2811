//! Schedule configuration models.
//!
//! This module defines the closed enumerations that describe a payroll's
//! cadence ([`CycleType`]), its anchor semantics ([`DateType`]) and its
//! weekend/holiday handling ([`AdjustmentRule`]), plus the [`ScheduleConfig`]
//! that bundles them for one payroll.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Holiday;

/// How often a payroll runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleType {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Fortnightly,
    /// Twice a month, alternating the 15th and the last day.
    BiMonthly,
    /// Once a calendar month.
    Monthly,
    /// Every three calendar months.
    Quarterly,
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleType::Weekly => write!(f, "weekly"),
            CycleType::Fortnightly => write!(f, "fortnightly"),
            CycleType::BiMonthly => write!(f, "bi_monthly"),
            CycleType::Monthly => write!(f, "monthly"),
            CycleType::Quarterly => write!(f, "quarterly"),
        }
    }
}

/// How a cycle-advanced candidate is pinned to a concrete pay date.
///
/// The meaning of [`ScheduleConfig::date_value`] depends on the variant:
///
/// | Variant        | `date_value`                     |
/// |----------------|----------------------------------|
/// | `FixedDate`    | day of month, 1–31               |
/// | `EndOfMonth`   | ignored                          |
/// | `StartOfMonth` | ignored                          |
/// | `WeekA`        | weekday, 0 = Sunday … 6 = Saturday |
/// | `WeekB`        | weekday, 0 = Sunday … 6 = Saturday |
/// | `DayOfWeek`    | weekday, 0 = Sunday … 6 = Saturday |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    /// A fixed day of the month, clamped to the month's length.
    FixedDate,
    /// The last day of the month.
    EndOfMonth,
    /// The first day of the month.
    StartOfMonth,
    /// The first occurrence of a weekday in the month.
    WeekA,
    /// The occurrence of a weekday two weeks after `WeekA`.
    WeekB,
    /// The next occurrence of a weekday on or after the candidate.
    DayOfWeek,
}

impl DateType {
    /// The accepted range for `date_value`, or `None` when the value is unused.
    pub fn value_range(self) -> Option<RangeInclusive<i32>> {
        match self {
            DateType::FixedDate => Some(1..=31),
            DateType::WeekA | DateType::WeekB | DateType::DayOfWeek => Some(0..=6),
            DateType::EndOfMonth | DateType::StartOfMonth => None,
        }
    }

    /// Checks a `date_value` against this date type.
    ///
    /// Returns the value when the type needs one. A missing or out-of-range
    /// value is an [`EngineError::InvalidConfiguration`]; no default is ever
    /// substituted.
    pub fn check_value(self, value: Option<i32>) -> EngineResult<Option<i32>> {
        let Some(range) = self.value_range() else {
            return Ok(None);
        };

        let value = value.ok_or_else(|| {
            EngineError::invalid_config("date_value", format!("is required for {} date type", self))
        })?;

        if !range.contains(&value) {
            return Err(EngineError::invalid_config(
                "date_value",
                format!(
                    "must be between {} and {} for {} date type, got {}",
                    range.start(),
                    range.end(),
                    self,
                    value
                ),
            ));
        }

        Ok(Some(value))
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateType::FixedDate => write!(f, "fixed_date"),
            DateType::EndOfMonth => write!(f, "end_of_month"),
            DateType::StartOfMonth => write!(f, "start_of_month"),
            DateType::WeekA => write!(f, "week_a"),
            DateType::WeekB => write!(f, "week_b"),
            DateType::DayOfWeek => write!(f, "day_of_week"),
        }
    }
}

/// How a date that lands on a weekend or holiday is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    /// Move back to the closest earlier business day.
    Previous,
    /// Move forward to the closest later business day.
    Next,
    /// Move to whichever business day is closer; ties go to the earlier one.
    Nearest,
}

impl fmt::Display for AdjustmentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustmentRule::Previous => write!(f, "previous"),
            AdjustmentRule::Next => write!(f, "next"),
            AdjustmentRule::Nearest => write!(f, "nearest"),
        }
    }
}

/// Everything needed to compute one payroll's pay-run dates.
///
/// Built once per payroll record and passed to the calculator by reference;
/// it owns its holiday list so concurrent schedules share nothing.
///
/// # Example
///
/// ```
/// use pay_schedule_engine::models::{AdjustmentRule, CycleType, DateType, ScheduleConfig};
///
/// let config = ScheduleConfig {
///     cycle_type: CycleType::Monthly,
///     date_type: DateType::FixedDate,
///     date_value: Some(15),
///     processing_days_before_eft: 2,
///     adjustment_rule: AdjustmentRule::Previous,
///     holidays: vec![],
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// The payroll cadence.
    pub cycle_type: CycleType,
    /// The anchor semantics applied after each cycle advance.
    pub date_type: DateType,
    /// Day of month or weekday number, depending on `date_type`.
    #[serde(default)]
    pub date_value: Option<i32>,
    /// Calendar days between the processing date and the EFT date.
    #[serde(default)]
    pub processing_days_before_eft: u32,
    /// Weekend/holiday adjustment rule for both EFT and processing dates.
    pub adjustment_rule: AdjustmentRule,
    /// Holidays that apply to this payroll.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl ScheduleConfig {
    /// Validates the configuration up front.
    ///
    /// The calculator performs the same checks lazily; calling this first lets
    /// a caller reject a payroll before generating anything.
    pub fn validate(&self) -> EngineResult<()> {
        self.date_type.check_value(self.date_value)?;
        Ok(())
    }
}
