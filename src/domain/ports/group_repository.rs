//! GroupRepository port - persistence of `overhead.yml`

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{Group, InvalidGroup};

/// Result type for group operations
pub type GroupResult<T> = Result<T, GroupError>;

/// Group persistence errors
#[derive(Debug, Error)]
pub enum GroupError {
    #[error("group metadata not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid group metadata {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("invalid group metadata {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidGroup,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract repository for group metadata
pub trait GroupRepository {
    fn load(&self, path: &Path) -> GroupResult<Group>;

    fn save(&self, path: &Path, group: &Group) -> GroupResult<()>;
}
