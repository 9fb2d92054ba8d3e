//! Local meeting directories
//!
//! Implements the MeetingDirectories port on the local disk. A meeting
//! directory is recognized by the marker file holding its id.

use std::fs;
use std::path::Path;

use crate::domain::ports::{FsError, FsResult, MeetingDirectories};
use crate::domain::services::DirectoryEntry;
use crate::domain::value_objects::MeetingId;

/// Prefix of the temporary names used while applying rename sets
pub const RENAME_TEMP_PREFIX: &str = ".autobot-rename-";

/// Meeting directories on the local file system
#[derive(Debug, Clone)]
pub struct LocalMeetingDirectories {
    marker: String,
}

impl LocalMeetingDirectories {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    fn read_marker(&self, dir: &Path) -> FsResult<Option<MeetingId>> {
        let path = dir.join(&self.marker);
        match fs::read_to_string(&path) {
            Ok(content) => MeetingId::parse(&content)
                .map(Some)
                .map_err(|e| FsError::BadMarker {
                    path,
                    message: e.to_string(),
                }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FsError::io(path, e)),
        }
    }
}

impl MeetingDirectories for LocalMeetingDirectories {
    fn scan(&self, parent: &Path) -> FsResult<Vec<DirectoryEntry>> {
        let read = match fs::read_dir(parent) {
            Ok(read) => read,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FsError::io(parent, e)),
        };

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| FsError::io(parent, e))?;
            let file_type = entry.file_type().map_err(|e| FsError::io(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 directory name");
                continue;
            };
            if name.starts_with('.') && !name.starts_with(RENAME_TEMP_PREFIX) {
                continue;
            }
            let marker = self.read_marker(&entry.path())?;
            entries.push(DirectoryEntry { name, marker });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create(&self, parent: &Path, name: &str, id: &MeetingId) -> FsResult<()> {
        let dir = parent.join(name);
        if dir.exists() {
            return Err(FsError::AlreadyExists { path: dir });
        }
        fs::create_dir_all(&dir).map_err(|e| FsError::io(&dir, e))?;
        let marker = dir.join(&self.marker);
        super::write_atomic(&marker, id.as_str()).map_err(|e| FsError::io(marker, e))?;
        tracing::debug!(dir = %dir.display(), id = id.short(), "created meeting directory");
        Ok(())
    }

    fn rename(&self, parent: &Path, from: &str, to: &str) -> FsResult<()> {
        let (src, dst) = (parent.join(from), parent.join(to));
        if dst.exists() {
            return Err(FsError::AlreadyExists { path: dst });
        }
        fs::rename(&src, &dst).map_err(|e| FsError::io(&src, e))?;
        tracing::debug!(from, to, "renamed meeting directory");
        Ok(())
    }

    fn rename_children(&self, dir: &Path, old_prefix: &str, new_prefix: &str) -> FsResult<usize> {
        if old_prefix == new_prefix || old_prefix.is_empty() {
            return Ok(0);
        }

        let mut renamed = 0;
        let read = fs::read_dir(dir).map_err(|e| FsError::io(dir, e))?;
        for entry in read {
            let entry = entry.map_err(|e| FsError::io(dir, e))?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name == self.marker {
                continue;
            }
            // same stem only: `intro.ipynb` follows, `introduction.md` does not
            let Some(rest) = name
                .strip_prefix(old_prefix)
                .filter(|rest| rest.is_empty() || rest.starts_with('.'))
            else {
                continue;
            };
            let target = dir.join(format!("{new_prefix}{rest}"));
            if target.exists() {
                tracing::warn!(file = %name, "not renaming, target already exists");
                continue;
            }
            fs::rename(entry.path(), &target).map_err(|e| FsError::io(entry.path(), e))?;
            renamed += 1;
        }
        Ok(renamed)
    }

    fn remove(&self, parent: &Path, name: &str) -> FsResult<()> {
        let dir = parent.join(name);
        fs::remove_dir_all(&dir).map_err(|e| FsError::io(&dir, e))?;
        tracing::debug!(dir = %dir.display(), "removed meeting directory");
        Ok(())
    }
}
