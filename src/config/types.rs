//! Configuration types for holiday calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::error::EngineError;
use crate::models::Holiday;

/// Metadata about a holiday calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// The human-readable name of the calendar.
    pub name: String,
    /// The version or effective date of the calendar data.
    pub version: String,
    /// The region used when a request does not name one.
    #[serde(default = "default_region")]
    pub default_region: String,
}

fn default_region() -> String {
    crate::models::NATIONAL_REGION.to_string()
}

/// A holiday file as stored on disk.
///
/// Entries are kept as raw YAML values so each one can be validated on its
/// own and skipped if malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The holiday entries in this file.
    #[serde(default)]
    pub holidays: Vec<serde_yaml::Value>,
}

/// The complete holiday calendar loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Calendar metadata.
    metadata: CalendarMetadata,
    /// Accepted holidays, sorted by date.
    holidays: Vec<Holiday>,
    /// Entries that failed to parse and were skipped.
    skipped: Vec<EngineError>,
}

impl CalendarConfig {
    /// Creates a new CalendarConfig from its component parts.
    pub fn new(metadata: CalendarMetadata, holidays: Vec<Holiday>, skipped: Vec<EngineError>) -> Self {
        let mut sorted = holidays;
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            metadata,
            holidays: sorted,
            skipped,
        }
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns all accepted holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the entries that were skipped as malformed.
    pub fn skipped(&self) -> &[EngineError] {
        &self.skipped
    }
}
