//! Error types for autobot
//!
//! Library errors are `thiserror` enums; each layer keeps its own and this
//! one wraps them for the application use cases.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::InvalidGroup;
use crate::domain::ports::{CalendarError, FsError, GroupError, SyllabusError};
use crate::domain::services::{ReconcileError, ScheduleError};
use crate::domain::value_objects::SemesterError;

/// Result type alias for autobot operations
pub type AutobotResult<T> = Result<T, AutobotError>;

/// Main error type for autobot operations
#[derive(Error, Debug)]
pub enum AutobotError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Syllabus(#[from] SyllabusError),

    #[error(transparent)]
    Group(#[from] GroupError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("invalid semester: {0}")]
    InvalidSemester(#[from] SemesterError),

    #[error("invalid group: {0}")]
    InvalidGroup(#[from] InvalidGroup),

    /// `seed` found an existing semester folder
    #[error("{path} already exists (pass --overwrite to replace it)")]
    GroupExists { path: PathBuf },

    #[error("no '{group}' group found at {path} (run `autobot {group} seed` first)")]
    GroupNotFound { group: String, path: PathBuf },

    /// Entries failed reconciliation, so a whole-syllabus operation cannot run
    #[error("{count} syllabus entries failed reconciliation; fix them first")]
    UnresolvedEntries { count: usize },

    #[error("no meeting matches {selector}")]
    NoMatchingMeeting { selector: String },

    #[error("{selector} matches {count} meetings; pick exactly one")]
    AmbiguousSelection { selector: String, count: usize },

    /// A semester keeps at least one meeting; re-seed to start over
    #[error("{slug} is the only meeting left; re-seed with --overwrite instead of removing it")]
    LastMeeting { slug: String },

    #[error("{path} is locked by another autobot run")]
    Locked { path: PathBuf },

    #[error("invalid config {file}: {message}")]
    Config { file: PathBuf, message: String },

    #[error("aborted by user")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
