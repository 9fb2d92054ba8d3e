//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod calendar_source;
pub mod group_repository;
pub mod meeting_directories;
pub mod syllabus_repository;

pub use calendar_source::{CalendarError, CalendarResult, CalendarSource};
pub use group_repository::{GroupError, GroupRepository, GroupResult};
pub use meeting_directories::{FsError, FsResult, MeetingDirectories};
pub use syllabus_repository::{SyllabusError, SyllabusRepository, SyllabusResult};
