//! Advisory lock held for the duration of a mutating run

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{AutobotError, AutobotResult};

/// Lock file name inside a group's semester folder
pub const LOCK_FILE: &str = ".autobot.lock";

/// Exclusive lock on one group/semester folder; released on drop
#[derive(Debug)]
pub struct GroupLock {
    file: File,
    path: PathBuf,
}

impl GroupLock {
    /// Take the lock without waiting; fails with `Locked` if another run holds it
    pub fn acquire(dir: &Path) -> AutobotResult<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|_| AutobotError::Locked { path: path.clone() })?;
        tracing::debug!(path = %path.display(), "acquired group lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for GroupLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
