//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod meeting_day;
mod meeting_id;
mod person;
mod semester;

pub use meeting_day::{MeetingDay, UnknownMeetingDay};
pub use meeting_id::{
    is_placeholder_name, placeholder_name, MeetingId, MeetingIdError, PLACEHOLDER_PREFIX,
};
pub use person::PersonId;
pub use semester::{Season, Semester, SemesterError};
