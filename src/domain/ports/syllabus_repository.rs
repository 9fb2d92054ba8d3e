//! SyllabusRepository port - persistence of `syllabus.yml`
//!
//! The syllabus is the human-edited source of truth. Implementations must
//! write records back in the order they are given.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::MeetingDraft;

/// Result type for syllabus operations
pub type SyllabusResult<T> = Result<T, SyllabusError>;

/// Syllabus persistence errors
#[derive(Debug, Error)]
pub enum SyllabusError {
    #[error("syllabus not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid syllabus {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("invalid syllabus {path}: entry #{entry}: {message}")]
    InvalidEntry {
        path: PathBuf,
        entry: usize,
        message: String,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract repository for syllabus persistence
pub trait SyllabusRepository {
    /// Load the ordered records
    fn load(&self, path: &Path) -> SyllabusResult<Vec<MeetingDraft>>;

    /// Replace the file with `drafts`, in order
    fn save(&self, path: &Path, drafts: &[MeetingDraft]) -> SyllabusResult<()>;

    /// The exact text `save` would write
    fn render(&self, drafts: &[MeetingDraft]) -> SyllabusResult<String>;
}
