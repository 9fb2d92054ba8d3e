//! Group workspace paths
//!
//! A group's semester folder is `<root>/<group>/<shortcode>/`. It holds
//! `overhead.yml`, `syllabus.yml`, the lock file, and one directory per
//! meeting.

use std::path::{Path, PathBuf};

use crate::domain::entities::Meeting;
use crate::domain::value_objects::Semester;
use crate::error::{AutobotError, AutobotResult};
use crate::infrastructure::fs::GroupLock;

/// Group metadata file name
pub const OVERHEAD_FILE: &str = "overhead.yml";

/// Syllabus file name
pub const SYLLABUS_FILE: &str = "syllabus.yml";

/// Location of one group's semester on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupWorkspace {
    root: PathBuf,
    group: String,
    semester: Semester,
}

impl GroupWorkspace {
    pub fn new(root: impl Into<PathBuf>, group: impl Into<String>, semester: Semester) -> Self {
        Self {
            root: root.into(),
            group: group.into(),
            semester,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    /// The semester folder
    pub fn dir(&self) -> PathBuf {
        self.root.join(&self.group).join(self.semester.shortcode())
    }

    pub fn exists(&self) -> bool {
        self.dir().is_dir()
    }

    /// Fails with `GroupNotFound` unless the semester folder exists
    pub fn ensure_exists(&self) -> AutobotResult<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(AutobotError::GroupNotFound {
                group: self.group.clone(),
                path: self.dir(),
            })
        }
    }

    /// Lock an existing semester folder for a mutating run
    pub fn lock(&self) -> AutobotResult<GroupLock> {
        self.ensure_exists()?;
        GroupLock::acquire(&self.dir())
    }

    pub fn overhead_path(&self) -> PathBuf {
        self.dir().join(OVERHEAD_FILE)
    }

    pub fn syllabus_path(&self) -> PathBuf {
        self.dir().join(SYLLABUS_FILE)
    }

    pub fn meeting_dir(&self, meeting: &Meeting) -> PathBuf {
        self.dir().join(meeting.slug())
    }
}
