//! CalendarSource port - where a semester's class calendar comes from
//!
//! Adapters fetch the institution's event feed (over HTTP or from a file)
//! and reduce it to a `CalendarWindow`. Retries belong to the adapter.

use thiserror::Error;

use crate::domain::entities::CalendarWindow;
use crate::domain::value_objects::Semester;

/// Result type for calendar lookups
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Calendar lookup errors
#[derive(Debug, Error)]
pub enum CalendarError {
    /// The feed could not be retrieved
    #[error("failed to fetch calendar from {location}: {message}")]
    CalendarFetchFailed { location: String, message: String },

    /// The feed was retrieved but does not describe a usable term
    #[error("malformed calendar feed from {location}: {message}")]
    MalformedFeed { location: String, message: String },
}

/// Abstract source of academic calendars
pub trait CalendarSource {
    /// Class window and holidays for `semester`
    fn fetch(&self, semester: &Semester) -> CalendarResult<CalendarWindow>;

    /// Human-readable origin, for logs and error messages
    fn describe(&self, semester: &Semester) -> String;
}
