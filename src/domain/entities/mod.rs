//! Domain Entities
//!
//! - `CalendarWindow` - a term's class range and holidays
//! - `Group` - a sub-group's metadata for one semester
//! - `MeetingDraft` / `Meeting` - syllabus records before and after reconciliation

mod calendar_window;
mod group;
mod meeting;

pub use calendar_window::{CalendarWindow, HolidayRange};
pub use group::{Group, InvalidGroup, MeetingTime, Roster, ScheduleSpec};
#[cfg(test)]
pub(crate) use meeting::fixtures;
pub(crate) use meeting::Placement;
pub use meeting::{KaggleMeta, Meeting, MeetingDraft, ValueSource, PLACEHOLDER_ABSTRACT};
