//! Check Use Case
//!
//! Read-only: reconciles the syllabus against the schedule and reports
//! every meeting's pass/fail status.

use crate::domain::entities::{CalendarWindow, Group};
use crate::domain::ports::{CalendarSource, GroupRepository, SyllabusRepository};
use crate::domain::services::Reconciliation;
use crate::error::AutobotResult;

use super::pipeline::GroupPipeline;
use super::workspace::GroupWorkspace;

/// Result of the check operation
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub group: Group,
    pub window: CalendarWindow,
    pub reconciliation: Reconciliation,
}

impl CheckReport {
    /// No entry failed
    pub fn is_success(&self) -> bool {
        self.reconciliation.failures.is_empty()
    }

    /// No entry failed and nothing was flagged
    pub fn is_clean(&self) -> bool {
        self.reconciliation.is_clean()
    }
}

/// Check use case
pub struct CheckUseCase<SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    syllabus: SR,
    groups: GR,
    calendar: Box<dyn CalendarSource>,
}

impl<SR, GR> CheckUseCase<SR, GR>
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

    pub fn execute(&self, workspace: &GroupWorkspace) -> AutobotResult<CheckReport> {
        let loaded = GroupPipeline::new(&self.syllabus, &self.groups, self.calendar.as_ref())
            .load(workspace)?;
        let reconciliation = loaded.reconcile()?;

        Ok(CheckReport {
            group: loaded.group,
            window: loaded.window,
            reconciliation,
        })
    }
}
