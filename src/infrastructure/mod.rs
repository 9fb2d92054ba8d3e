//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `calendar/` - Calendar sources (HTTP feed, local file)
//! - `fs/` - Meeting directories, atomic writes, the group lock
//! - `repositories/` - YAML repositories (overhead.yml, syllabus.yml)

pub mod calendar;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use calendar::{FileCalendarSource, HttpCalendarSource};
pub use fs::{GroupLock, LocalMeetingDirectories};
pub use repositories::{YamlGroupRepository, YamlSyllabusRepository};
