//! Configuration loading and management for the Payroll Schedule Engine.
//!
//! This module provides functionality to load holiday calendars from YAML
//! files, including calendar metadata and per-region holiday lists.
//!
//! # Example
//!
//! ```no_run
//! use pay_schedule_engine::config::CalendarLoader;
//!
//! let calendar = CalendarLoader::load("./config/au").unwrap();
//! println!("Loaded calendar: {}", calendar.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::CalendarLoader;
pub use types::{CalendarConfig, CalendarMetadata, HolidayFile};
