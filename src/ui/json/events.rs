//! Shared JSON event types for consistent CLI output.
//!
//! All commands use these event types for `--json` output so field naming
//! stays consistent across the CLI.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use autobot::application::{GroupWorkspace, TouchOutcome, TouchStatus};
use autobot::domain::entities::{Meeting, ValueSource};
use autobot::domain::services::{DirectoryAction, EntryFailure, ReconcileWarning, ScheduleSlot};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub group: &'a str,
    pub semester: String,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, workspace: &'a GroupWorkspace) -> Self {
        Self {
            event: "start",
            command,
            group: workspace.group(),
            semester: workspace.semester().shortcode(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
        }
    }

    pub fn new(command: &'a str, success: bool) -> Self {
        if success {
            Self::success(command)
        } else {
            Self::failure(command)
        }
    }
}

/// Event emitted when a command fails as a whole.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// A reconciled meeting.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingEvent<'a> {
    pub event: &'static str,
    pub ordinal: usize,
    pub slug: String,
    pub title: &'a str,
    pub date: NaiveDate,
    pub date_source: ValueSource,
    pub room: &'a str,
}

impl<'a> MeetingEvent<'a> {
    pub fn new(meeting: &'a Meeting) -> Self {
        Self {
            event: "meeting",
            ordinal: meeting.ordinal(),
            slug: meeting.slug(),
            title: meeting.title(),
            date: meeting.date(),
            date_source: meeting.date_source(),
            room: meeting.room(),
        }
    }
}

/// A syllabus entry that failed reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct EntryFailedEvent {
    pub event: &'static str,
    /// 1-based syllabus position
    pub entry: usize,
    pub errors: Vec<String>,
}

impl EntryFailedEvent {
    pub fn new(failure: &EntryFailure) -> Self {
        Self {
            event: "entry_failed",
            entry: failure.index + 1,
            errors: failure.errors.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
        }
    }

    pub fn reconcile(warning: &ReconcileWarning) -> Self {
        Self::new(warning.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotEvent<'a> {
    pub event: &'static str,
    #[serde(flatten)]
    pub slot: &'a ScheduleSlot,
}

impl<'a> SlotEvent<'a> {
    pub fn new(slot: &'a ScheduleSlot) -> Self {
        Self { event: "slot", slot }
    }
}

/// What touch did (or would do) for one meeting.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryEvent<'a> {
    pub event: &'static str,
    pub ordinal: usize,
    pub slug: &'a str,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<&'a str>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub renamed_files: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl<'a> DirectoryEvent<'a> {
    pub fn new(outcome: &'a TouchOutcome) -> Self {
        let (action, from) = match &outcome.action {
            Some(DirectoryAction::Create { .. }) => ("create", None),
            Some(DirectoryAction::Rename { from, .. }) => ("rename", Some(from.as_str())),
            Some(DirectoryAction::NoOp { .. }) => ("none", None),
            None => ("none", None),
        };
        let (status, message) = match &outcome.status {
            TouchStatus::Applied => ("applied", None),
            TouchStatus::Planned => ("planned", None),
            TouchStatus::Unchanged => ("unchanged", None),
            TouchStatus::Conflict(conflict) => ("conflict", Some(conflict.to_string())),
            TouchStatus::Failed(message) => ("failed", Some(message.clone())),
        };
        Self {
            event: "directory",
            ordinal: outcome.ordinal,
            slug: &outcome.slug,
            action,
            from,
            status,
            message,
            renamed_files: outcome.renamed_files,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrphanEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
}

impl<'a> OrphanEvent<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            event: "orphan",
            name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeededEvent<'a> {
    pub event: &'static str,
    pub dir: &'a Path,
    pub meetings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<NaiveDate>,
    pub overwrote: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortedEvent {
    pub event: &'static str,
    pub moved: usize,
    pub changed: bool,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovedEvent<'a> {
    pub event: &'static str,
    pub slug: String,
    pub directories: &'a [String],
    pub remaining: usize,
}
