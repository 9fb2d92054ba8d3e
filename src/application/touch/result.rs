//! Touch results

use crate::domain::services::{DirectoryAction, DirectoryConflict, EntryFailure, ReconcileWarning};
use crate::domain::value_objects::MeetingId;

/// What happened to one meeting's directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchStatus {
    /// The action was carried out
    Applied,
    /// Dry run: the action would be carried out
    Planned,
    /// Directory already in place
    Unchanged,
    /// Needs a manual decision; nothing was done
    Conflict(DirectoryConflict),
    /// The filesystem refused the action
    Failed(String),
}

impl TouchStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, TouchStatus::Conflict(_) | TouchStatus::Failed(_))
    }
}

/// Per-meeting outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchOutcome {
    pub ordinal: usize,
    pub id: MeetingId,
    pub slug: String,
    pub action: Option<DirectoryAction>,
    pub status: TouchStatus,
    /// Files inside the directory renamed along with it
    pub renamed_files: usize,
}

impl TouchOutcome {
    pub(super) fn new(
        ordinal: usize,
        id: MeetingId,
        slug: String,
        action: Option<DirectoryAction>,
        status: TouchStatus,
    ) -> Self {
        Self {
            ordinal,
            id,
            slug,
            action,
            status,
            renamed_files: 0,
        }
    }
}

/// Result of the touch operation
#[derive(Debug, Clone, Default)]
pub struct TouchResult {
    pub outcomes: Vec<TouchOutcome>,
    /// Syllabus entries that failed reconciliation (no directory work)
    pub failures: Vec<EntryFailure>,
    pub warnings: Vec<ReconcileWarning>,
    /// Marked directories no syllabus entry claims
    pub orphans: Vec<String>,
    /// Ids minted for entries that had none
    pub minted: usize,
    pub dry_run: bool,
}

impl TouchResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && !self.outcomes.iter().any(|o| o.status.is_failure())
    }

    fn count(&self, pred: impl Fn(&TouchOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }

    pub fn created(&self) -> usize {
        self.count(|o| {
            !o.status.is_failure() && matches!(o.action, Some(DirectoryAction::Create { .. }))
        })
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| {
            !o.status.is_failure() && matches!(o.action, Some(DirectoryAction::Rename { .. }))
        })
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| o.status == TouchStatus::Unchanged)
    }

    pub fn conflicts(&self) -> usize {
        self.count(|o| matches!(o.status, TouchStatus::Conflict(_)))
    }

    pub fn errors(&self) -> usize {
        self.count(|o| matches!(o.status, TouchStatus::Failed(_)))
    }
}
