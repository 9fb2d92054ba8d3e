//! Autobot - syllabus scheduling and meeting directory management
//!
//! Autobot keeps a student group's semester in order: it generates meeting
//! dates from the university calendar, reconciles a hand-edited
//! `syllabus.yml` against them, and keeps one directory per meeting named
//! after its date and filename.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{CalendarWindow, Group, Meeting, MeetingDraft};
pub use domain::services::{MeetingDirectoryManager, ScheduleGenerator, SyllabusReconciler};
pub use domain::value_objects::{MeetingDay, MeetingId, Semester};
pub use error::{AutobotError, AutobotResult};
