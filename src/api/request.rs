//! Request types for the Payroll Schedule Engine API.
//!
//! This module defines the JSON request structures for the `/schedule` and
//! `/schedules/batch` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AdjustmentRule, CycleType, DateType, Holiday, ScheduleConfig};

/// Number of periods generated when a request does not say.
pub const DEFAULT_PERIODS: u32 = 12;

/// Request body for the `/schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The payroll the schedule is for.
    pub payroll_id: String,
    /// The date the first period is anchored on. Defaults to today.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// How many periods to generate.
    #[serde(default = "default_periods")]
    pub periods: u32,
    /// Region used to select holidays from the loaded calendar.
    #[serde(default)]
    pub region: Option<String>,
    /// The payroll's cycle configuration.
    pub schedule: ScheduleConfigRequest,
    /// Extra holidays supplied by the caller.
    ///
    /// Kept as raw JSON so a malformed entry is skipped with a warning
    /// rather than rejecting the request.
    #[serde(default)]
    pub holidays: Vec<serde_json::Value>,
}

fn default_periods() -> u32 {
    DEFAULT_PERIODS
}

/// Cycle configuration in a schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfigRequest {
    /// The payroll cadence.
    pub cycle_type: CycleType,
    /// The anchor semantics.
    pub date_type: DateType,
    /// Day of month or weekday number, depending on `date_type`.
    #[serde(default)]
    pub date_value: Option<i32>,
    /// Calendar days between processing and EFT.
    #[serde(default)]
    pub processing_days_before_eft: u32,
    /// Weekend/holiday adjustment rule.
    pub adjustment_rule: AdjustmentRule,
}

impl ScheduleConfigRequest {
    /// Builds the engine configuration with the resolved holiday list.
    pub fn into_config(self, holidays: Vec<Holiday>) -> ScheduleConfig {
        ScheduleConfig {
            cycle_type: self.cycle_type,
            date_type: self.date_type,
            date_value: self.date_value,
            processing_days_before_eft: self.processing_days_before_eft,
            adjustment_rule: self.adjustment_rule,
            holidays,
        }
    }
}

/// Request body for the `/schedules/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchScheduleRequest {
    /// One entry per payroll.
    pub payrolls: Vec<ScheduleRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_schedule_request() {
        let json = r#"{
            "payroll_id": "payroll_001",
            "start_date": "2025-01-06",
            "periods": 4,
            "region": "VIC",
            "schedule": {
                "cycle_type": "weekly",
                "date_type": "day_of_week",
                "date_value": 5,
                "processing_days_before_eft": 2,
                "adjustment_rule": "previous"
            },
            "holidays": [
                { "date": "2025-01-27", "name": "Australia Day (observed)" }
            ]
        }"#;

        let request: ScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payroll_id, "payroll_001");
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2025, 1, 6));
        assert_eq!(request.periods, 4);
        assert_eq!(request.region.as_deref(), Some("VIC"));
        assert_eq!(request.schedule.cycle_type, CycleType::Weekly);
        assert_eq!(request.holidays.len(), 1);
    }

    #[test]
    fn test_defaults_applied() {
        let json = r#"{
            "payroll_id": "payroll_002",
            "schedule": {
                "cycle_type": "monthly",
                "date_type": "end_of_month",
                "adjustment_rule": "nearest"
            }
        }"#;

        let request: ScheduleRequest = serde_json::from_str(json).unwrap();
        assert!(request.start_date.is_none());
        assert_eq!(request.periods, DEFAULT_PERIODS);
        assert!(request.region.is_none());
        assert!(request.holidays.is_empty());
        assert_eq!(request.schedule.processing_days_before_eft, 0);
        assert!(request.schedule.date_value.is_none());
    }

    #[test]
    fn test_unknown_cycle_type_rejected() {
        let json = r#"{
            "payroll_id": "payroll_003",
            "schedule": {
                "cycle_type": "daily",
                "date_type": "end_of_month",
                "adjustment_rule": "next"
            }
        }"#;
        assert!(serde_json::from_str::<ScheduleRequest>(json).is_err());
    }

    #[test]
    fn test_into_config_carries_holidays() {
        let request = ScheduleConfigRequest {
            cycle_type: CycleType::Fortnightly,
            date_type: DateType::DayOfWeek,
            date_value: Some(4),
            processing_days_before_eft: 1,
            adjustment_rule: AdjustmentRule::Next,
        };
        let holidays = vec![Holiday {
            date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
            name: "Christmas Day".to_string(),
            recurring: true,
            region: "national".to_string(),
        }];

        let config = request.into_config(holidays);
        assert_eq!(config.cycle_type, CycleType::Fortnightly);
        assert_eq!(config.holidays.len(), 1);
    }
}
