//! Configuration loading functionality.
//!
//! This module provides the [`CalendarLoader`] type for loading holiday
//! calendars from YAML files.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::calculation::{holidays_for_region, parse_holiday};
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, RawHoliday};

use super::types::{CalendarConfig, CalendarMetadata, HolidayFile};

/// Loads and provides access to a holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/au/
/// ├── calendar.yaml        # Calendar metadata
/// └── holidays/
///     ├── recurring.yaml   # Fixed-date holidays that recur yearly
///     └── 2025.yaml        # Movable holidays for a given year
/// ```
///
/// Each holiday file has a top-level `holidays` list whose entries carry
/// `date`, `name`, and optionally `recurring` and `region`. An entry that
/// cannot be parsed is skipped with a warning; the rest of the file still
/// loads.
///
/// # Example
///
/// ```no_run
/// use pay_schedule_engine::config::CalendarLoader;
///
/// let loader = CalendarLoader::load("./config/au").unwrap();
/// let vic = loader.holidays_for_region("VIC");
/// println!("{} holidays apply in VIC", vic.len());
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    config: CalendarConfig,
}

impl CalendarLoader {
    /// Loads a holiday calendar from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `calendar.yaml` or the `holidays` directory is missing
    /// - any file is not valid YAML
    /// - the `holidays` directory has no `.yaml` files
    ///
    /// Individual malformed holiday entries are not errors; see
    /// [`CalendarLoader::skipped_holidays`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CalendarMetadata>(&path.join("calendar.yaml"))?;
        let (holidays, skipped) = Self::load_holidays(&path.join("holidays"))?;

        Ok(Self {
            config: CalendarConfig::new(metadata, holidays, skipped),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<(Vec<Holiday>, Vec<EngineError>)> {
        let dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", dir_str),
            });
        }

        // Directory order is unspecified; keep loading deterministic.
        files.sort();

        let mut holidays = Vec::new();
        let mut skipped = Vec::new();

        for file in &files {
            let holiday_file = Self::load_yaml::<HolidayFile>(file)?;
            for value in holiday_file.holidays {
                match Self::parse_entry(value) {
                    Ok(holiday) => holidays.push(holiday),
                    Err(err) => {
                        warn!(file = %file.display(), error = %err, "Skipping malformed holiday");
                        skipped.push(err);
                    }
                }
            }
        }

        Ok((holidays, skipped))
    }

    fn parse_entry(value: serde_yaml::Value) -> EngineResult<Holiday> {
        let raw: RawHoliday =
            serde_yaml::from_value(value.clone()).map_err(|e| EngineError::MalformedHoliday {
                entry: serde_yaml::to_string(&value)
                    .map(|s| s.trim().replace('\n', ", "))
                    .unwrap_or_default(),
                message: e.to_string(),
            })?;
        parse_holiday(&raw)
    }

    /// Returns the underlying calendar configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        self.config.metadata()
    }

    /// Returns every accepted holiday regardless of region.
    pub fn holidays(&self) -> &[Holiday] {
        self.config.holidays()
    }

    /// Returns the holidays that apply to `region`, national ones included.
    pub fn holidays_for_region(&self, region: &str) -> Vec<Holiday> {
        holidays_for_region(self.config.holidays(), region)
    }

    /// Returns the holiday entries that were skipped as malformed.
    pub fn skipped_holidays(&self) -> &[EngineError] {
        self.config.skipped()
    }
}
