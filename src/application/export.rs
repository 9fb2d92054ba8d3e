//! Export use case
//!
//! Produces the reconciled meetings of a selection as a manifest for
//! downstream publishers. Read-only.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::Meeting;
use crate::domain::ports::{CalendarSource, GroupRepository, SyllabusRepository};
use crate::domain::services::{EntryFailure, ReconcileWarning};
use crate::domain::value_objects::Semester;
use crate::error::{AutobotError, AutobotResult};

use super::pipeline::GroupPipeline;
use super::selection::MeetingSelector;
use super::workspace::GroupWorkspace;

/// One meeting with its on-disk location
#[derive(Debug, Clone, Serialize)]
pub struct ExportedMeeting {
    pub slug: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub meeting: Meeting,
}

/// The JSON document `export` prints
#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub group: String,
    pub semester: Semester,
    pub semester_name: String,
    pub room: String,
    pub meetings: Vec<ExportedMeeting>,
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub manifest: ExportManifest,
    /// Entries left out because they failed reconciliation
    pub failures: Vec<EntryFailure>,
    pub warnings: Vec<ReconcileWarning>,
}

impl ExportResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Export use case
pub struct ExportUseCase<SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    syllabus: SR,
    groups: GR,
    calendar: Box<dyn CalendarSource>,
}

impl<SR, GR> ExportUseCase<SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    pub fn new(syllabus: SR, groups: GR, calendar: Box<dyn CalendarSource>) -> Self {
        Self {
            syllabus,
            groups,
            calendar,
        }
    }

    pub fn execute(
        &self,
        workspace: &GroupWorkspace,
        selector: &MeetingSelector,
    ) -> AutobotResult<ExportResult> {
        let loaded = GroupPipeline::new(&self.syllabus, &self.groups, self.calendar.as_ref())
            .load(workspace)?;
        let reconciliation = loaded.reconcile()?;

        let selected = selector.select(&reconciliation.meetings);
        if selected.is_empty() && !selector.is_all() {
            return Err(AutobotError::NoMatchingMeeting {
                selector: selector.to_string(),
            });
        }

        let meetings = selected
            .into_iter()
            .map(|meeting| ExportedMeeting {
                slug: meeting.slug(),
                path: workspace.meeting_dir(&meeting),
                meeting,
            })
            .collect::<Vec<_>>();
        tracing::debug!(meetings = meetings.len(), %selector, "exporting");

        let semester = workspace.semester();
        Ok(ExportResult {
            manifest: ExportManifest {
                group: loaded.group.name.clone(),
                semester,
                semester_name: semester.to_string(),
                room: loaded.group.room.clone(),
                meetings,
            },
            failures: reconciliation.failures,
            warnings: reconciliation.warnings,
        })
    }
}
