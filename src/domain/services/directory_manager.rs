//! Meeting directory planning service
//!
//! Decides what should happen to each meeting's on-disk directory given
//! what is currently there. Identity is the marker id only; names are
//! never used to match a directory to a meeting. No I/O, and nothing is
//! ever planned for deletion.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::entities::Meeting;
use crate::domain::value_objects::MeetingId;

/// A directory found under the semester folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    /// Id read from the marker file, if there is one
    pub marker: Option<MeetingId>,
}

impl DirectoryEntry {
    pub fn marked(name: impl Into<String>, id: MeetingId) -> Self {
        Self {
            name: name.into(),
            marker: Some(id),
        }
    }

    pub fn unmarked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: None,
        }
    }
}

/// What to do with a meeting's directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryAction {
    /// No directory carries the meeting's marker yet
    Create { name: String },
    /// The marked directory has a stale name
    Rename { from: String, to: String },
    /// Already in place
    NoOp { name: String },
}

impl DirectoryAction {
    /// Directory name after the action
    pub fn target(&self) -> &str {
        match self {
            DirectoryAction::Create { name } | DirectoryAction::NoOp { name } => name,
            DirectoryAction::Rename { to, .. } => to,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, DirectoryAction::NoOp { .. })
    }
}

/// A situation that needs a human decision
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryConflict {
    #[error("'{name}' already exists and is not this meeting's directory")]
    Occupied { name: String },

    #[error("marker {id} is carried by both '{first}' and '{second}'")]
    DuplicateMarker {
        id: String,
        first: String,
        second: String,
    },
}

/// Planned outcome for one meeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDirectory {
    pub ordinal: usize,
    pub id: MeetingId,
    pub slug: String,
    pub outcome: Result<DirectoryAction, DirectoryConflict>,
}

impl PlannedDirectory {
    pub fn is_conflict(&self) -> bool {
        self.outcome.is_err()
    }

    pub fn action(&self) -> Option<&DirectoryAction> {
        self.outcome.as_ref().ok()
    }
}

/// Result of planning a batch of meetings
#[derive(Debug, Clone, Default)]
pub struct DirectoryPlan {
    pub entries: Vec<PlannedDirectory>,
}

impl DirectoryPlan {
    pub fn has_conflicts(&self) -> bool {
        self.entries.iter().any(|e| e.is_conflict())
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &PlannedDirectory> {
        self.entries.iter().filter(|e| e.is_conflict())
    }

    pub fn conflict_count(&self) -> usize {
        self.conflicts().count()
    }

    pub fn actions(&self) -> impl Iterator<Item = &DirectoryAction> {
        self.entries.iter().filter_map(|e| e.action())
    }

    pub fn create_count(&self) -> usize {
        self.actions()
            .filter(|a| matches!(a, DirectoryAction::Create { .. }))
            .count()
    }

    pub fn rename_count(&self) -> usize {
        self.actions()
            .filter(|a| matches!(a, DirectoryAction::Rename { .. }))
            .count()
    }

    pub fn noop_count(&self) -> usize {
        self.actions().filter(|a| a.is_noop()).count()
    }

    /// Whether applying the plan would touch the filesystem
    pub fn has_changes(&self) -> bool {
        self.actions().any(|a| !a.is_noop())
    }
}

/// Pure directory planner
pub struct MeetingDirectoryManager;

impl MeetingDirectoryManager {
    /// Decide the action for a single meeting
    pub fn reconcile(
        meeting: &Meeting,
        existing: &[DirectoryEntry],
    ) -> Result<DirectoryAction, DirectoryConflict> {
        Self::reconcile_with(meeting, existing, &HashSet::new())
    }

    /// Like [`reconcile`](Self::reconcile), treating directories named in
    /// `vacating` as free because they are being renamed away
    pub fn reconcile_with(
        meeting: &Meeting,
        existing: &[DirectoryEntry],
        vacating: &HashSet<String>,
    ) -> Result<DirectoryAction, DirectoryConflict> {
        let target = meeting.slug();
        let mut marked = existing
            .iter()
            .filter(|e| e.marker.as_ref() == Some(meeting.id()));

        let current = marked.next();
        if let (Some(first), Some(second)) = (current, marked.next()) {
            return Err(DirectoryConflict::DuplicateMarker {
                id: meeting.id().short().to_string(),
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }

        let occupied = existing
            .iter()
            .any(|e| e.name == target && e.marker.as_ref() != Some(meeting.id()))
            && !vacating.contains(&target);

        match current {
            Some(entry) if entry.name == target => Ok(DirectoryAction::NoOp { name: target }),
            _ if occupied => Err(DirectoryConflict::Occupied { name: target }),
            Some(entry) => Ok(DirectoryAction::Rename {
                from: entry.name.clone(),
                to: target,
            }),
            None => Ok(DirectoryAction::Create { name: target }),
        }
    }

    /// Plan a batch of meetings together
    ///
    /// A name held by a directory that the same batch renames away is not a
    /// conflict; the apply step moves it out of the way first.
    pub fn plan(meetings: &[Meeting], existing: &[DirectoryEntry]) -> DirectoryPlan {
        // Start by assuming every stale marked directory moves, then drop the
        // ones whose own rename turns out to be blocked until nothing changes.
        let mut vacating: HashSet<String> = meetings
            .iter()
            .filter_map(|meeting| {
                existing
                    .iter()
                    .find(|e| e.marker.as_ref() == Some(meeting.id()))
                    .filter(|e| e.name != meeting.slug())
                    .map(|e| e.name.clone())
            })
            .collect();

        loop {
            let entries: Vec<PlannedDirectory> = meetings
                .iter()
                .map(|meeting| PlannedDirectory {
                    ordinal: meeting.ordinal(),
                    id: meeting.id().clone(),
                    slug: meeting.slug(),
                    outcome: Self::reconcile_with(meeting, existing, &vacating),
                })
                .collect();

            let renamed_away: HashSet<String> = entries
                .iter()
                .filter_map(|e| match e.action() {
                    Some(DirectoryAction::Rename { from, .. }) => Some(from.clone()),
                    _ => None,
                })
                .collect();

            if renamed_away == vacating {
                return DirectoryPlan { entries };
            }
            vacating = renamed_away;
        }
    }

    /// Marked directories whose id matches none of `known`
    pub fn orphans<'e, 'k>(
        known: impl IntoIterator<Item = &'k MeetingId>,
        existing: &'e [DirectoryEntry],
    ) -> Vec<&'e DirectoryEntry> {
        let known: HashSet<&MeetingId> = known.into_iter().collect();
        existing
            .iter()
            .filter(|e| e.marker.as_ref().is_some_and(|id| !known.contains(id)))
            .collect()
    }
}

/// Filename part of a `YYYY-MM-DD-filename` directory name
pub fn filename_of_slug(name: &str) -> Option<&str> {
    let (date, rest) = (name.get(..10)?, name.get(10..)?);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    rest.strip_prefix('-').filter(|f| !f.is_empty())
}
