//! MeetingDirectories port - the filesystem side of directory actions
//!
//! Implementations operate on the direct children of one semester folder.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::services::DirectoryEntry;
use crate::domain::value_objects::MeetingId;

/// Result type for directory operations
pub type FsResult<T> = Result<T, FsError>;

/// Directory operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("unreadable marker in {path}: {message}")]
    BadMarker { path: PathBuf, message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Abstract meeting directory store
pub trait MeetingDirectories {
    /// Directories under `parent`, with their markers
    fn scan(&self, parent: &Path) -> FsResult<Vec<DirectoryEntry>>;

    /// Create `parent/name` and write its marker
    fn create(&self, parent: &Path, name: &str, id: &MeetingId) -> FsResult<()>;

    /// Rename `parent/from` to `parent/to`; fails if `to` exists
    fn rename(&self, parent: &Path, from: &str, to: &str) -> FsResult<()>;

    /// Rename files in `dir` whose stem is `old_prefix` (`intro`, `intro.ipynb`); returns how many
    fn rename_children(&self, dir: &Path, old_prefix: &str, new_prefix: &str) -> FsResult<usize>;

    /// Delete `parent/name` and everything in it
    fn remove(&self, parent: &Path, name: &str) -> FsResult<()>;
}
