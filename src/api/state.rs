//! Application state for the Payroll Schedule Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CalendarLoader;

/// Shared application state.
///
/// Holds the loaded holiday calendar. Handlers only read it, so cloning the
/// state per request is a reference-count bump.
#[derive(Clone)]
pub struct AppState {
    /// The loaded holiday calendar.
    calendar: Arc<CalendarLoader>,
}

impl AppState {
    /// Creates a new application state with the given holiday calendar.
    pub fn new(calendar: CalendarLoader) -> Self {
        Self {
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the holiday calendar.
    pub fn calendar(&self) -> &CalendarLoader {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
