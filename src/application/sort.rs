//! Sort Use Case
//!
//! Reorders `syllabus.yml` by each meeting's current date and lays the
//! result back onto the schedule. Aborts before writing if any entry fails
//! reconciliation or two meetings share a date.

use std::collections::HashMap;

use similar::TextDiff;

use crate::domain::entities::{Meeting, MeetingDraft};
use crate::domain::ports::{CalendarSource, GroupRepository, SyllabusRepository};
use crate::domain::services::SyllabusReconciler;
use crate::domain::value_objects::MeetingId;
use crate::error::{AutobotError, AutobotResult};

use super::pipeline::GroupPipeline;
use super::workspace::{GroupWorkspace, SYLLABUS_FILE};

/// Options for the sort operation
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// Compute the new order without writing it
    pub dry_run: bool,
}

/// Result of the sort operation
#[derive(Debug, Clone)]
pub struct SortResult {
    /// Meetings in their new order, with schedule dates
    pub meetings: Vec<Meeting>,
    /// How many meetings changed position
    pub moved: usize,
    /// `syllabus.yml` before and after, as rendered
    pub before: String,
    pub after: String,
    /// Whether the new syllabus was written
    pub written: bool,
}

impl SortResult {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    /// Unified diff of the syllabus
    pub fn diff(&self) -> String {
        TextDiff::from_lines(&self.before, &self.after)
            .unified_diff()
            .header(&format!("a/{SYLLABUS_FILE}"), &format!("b/{SYLLABUS_FILE}"))
            .to_string()
    }
}

/// Sort use case
pub struct SortUseCase<SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    syllabus: SR,
    groups: GR,
    calendar: Box<dyn CalendarSource>,
}

impl<SR, GR> SortUseCase<SR, GR>
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
        options: &SortOptions,
    ) -> AutobotResult<SortResult> {
        let pipeline = GroupPipeline::new(&self.syllabus, &self.groups, self.calendar.as_ref());
        let _lock = if options.dry_run {
            None
        } else {
            Some(workspace.lock()?)
        };

        let loaded = pipeline.load(workspace)?;
        let (drafts, _) = loaded.minted_drafts();
        let reconciliation = loaded.reconcile_drafts(&drafts)?;
        if !reconciliation.failures.is_empty() {
            return Err(AutobotError::UnresolvedEntries {
                count: reconciliation.failures.len(),
            });
        }

        let sorted = SyllabusReconciler::resort(&reconciliation.meetings, &loaded.schedule)?;

        let previous: HashMap<&MeetingId, usize> = reconciliation
            .meetings
            .iter()
            .map(|m| (m.id(), m.ordinal()))
            .collect();
        let moved = sorted
            .iter()
            .filter(|m| previous.get(m.id()) != Some(&m.ordinal()))
            .count();

        let by_id: HashMap<&MeetingId, &MeetingDraft> = drafts
            .iter()
            .filter_map(|d| d.id.as_ref().map(|id| (id, d)))
            .collect();
        let reordered: Vec<MeetingDraft> = sorted
            .iter()
            .filter_map(|m| by_id.get(m.id()))
            .map(|draft| MeetingDraft {
                date: None,
                ..(*draft).clone()
            })
            .collect();

        let before = self.syllabus.render(&loaded.drafts)?;
        let after = self.syllabus.render(&reordered)?;
        let written = !options.dry_run && before != after;
        if written {
            self.syllabus.save(&workspace.syllabus_path(), &reordered)?;
        }

        tracing::info!(moved, written, dry_run = options.dry_run, "sorted syllabus");

        Ok(SortResult {
            meetings: sorted,
            moved,
            before,
            after,
            written,
        })
    }
}
