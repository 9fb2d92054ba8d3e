//! Group loading pipeline
//!
//! Every operation past `seed` starts the same way:
//!
//! 1. Load `overhead.yml`
//! 2. Fetch the semester's calendar (fatal on failure, before any mutation)
//! 3. Generate the schedule
//! 4. Load `syllabus.yml`

use chrono::NaiveDate;

use crate::domain::entities::{CalendarWindow, Group, MeetingDraft};
use crate::domain::ports::{CalendarSource, GroupRepository, SyllabusRepository};
use crate::domain::services::{Reconciliation, ScheduleGenerator, SyllabusReconciler};
use crate::domain::value_objects::Semester;
use crate::error::AutobotResult;

use super::workspace::GroupWorkspace;

/// Everything an operation needs about one group/semester
#[derive(Debug, Clone)]
pub struct LoadedGroup {
    pub group: Group,
    pub window: CalendarWindow,
    pub schedule: Vec<NaiveDate>,
    pub drafts: Vec<MeetingDraft>,
}

impl LoadedGroup {
    pub fn reconciler(&self) -> SyllabusReconciler<'_> {
        SyllabusReconciler::new(&self.group, &self.window)
    }

    /// Assign the loaded drafts onto the schedule
    pub fn reconcile(&self) -> AutobotResult<Reconciliation> {
        self.reconcile_drafts(&self.drafts)
    }

    /// Assign `drafts` (e.g. a copy with minted ids) onto the schedule
    pub fn reconcile_drafts(&self, drafts: &[MeetingDraft]) -> AutobotResult<Reconciliation> {
        Ok(self.reconciler().assign(drafts, &self.schedule)?)
    }

    /// The loaded drafts with every missing id filled in
    pub fn minted_drafts(&self) -> (Vec<MeetingDraft>, usize) {
        let mut drafts = self.drafts.clone();
        let minted = SyllabusReconciler::mint_ids(&mut drafts);
        (drafts, minted)
    }
}

/// Loads a group through the repository and calendar ports
pub struct GroupPipeline<'a, SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    syllabus: &'a SR,
    groups: &'a GR,
    calendar: &'a dyn CalendarSource,
}

impl<'a, SR, GR> GroupPipeline<'a, SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    pub fn new(syllabus: &'a SR, groups: &'a GR, calendar: &'a dyn CalendarSource) -> Self {
        Self {
            syllabus,
            groups,
            calendar,
        }
    }

    /// Load `overhead.yml`; the semester folder must exist
    pub fn load_group(&self, workspace: &GroupWorkspace) -> AutobotResult<Group> {
        workspace.ensure_exists()?;
        let group = self.groups.load(&workspace.overhead_path())?;
        if group.name != workspace.group() || group.semester != workspace.semester() {
            tracing::warn!(
                folder = %workspace.dir().display(),
                metadata = %group.label(),
                "overhead.yml describes a different group or semester than its folder"
            );
        }
        Ok(group)
    }

    pub fn calendar(&self, semester: Semester) -> AutobotResult<CalendarWindow> {
        tracing::info!(source = %self.calendar.describe(&semester), "fetching calendar");
        let window = self.calendar.fetch(&semester)?;
        tracing::debug!(
            class_start = %window.class_start(),
            class_end = %window.class_end(),
            holidays = window.holiday_ranges().len(),
            "calendar loaded"
        );
        Ok(window)
    }

    /// Group, calendar, and schedule, without the syllabus
    pub fn load_schedule(
        &self,
        workspace: &GroupWorkspace,
    ) -> AutobotResult<(Group, CalendarWindow, Vec<NaiveDate>)> {
        let group = self.load_group(workspace)?;
        let window = self.calendar(workspace.semester())?;
        group.validate(&window)?;
        let schedule = ScheduleGenerator::from_spec(&window, &group.schedule)?;
        Ok((group, window, schedule))
    }

    pub fn load(&self, workspace: &GroupWorkspace) -> AutobotResult<LoadedGroup> {
        let (group, window, schedule) = self.load_schedule(workspace)?;
        let drafts = self.syllabus.load(&workspace.syllabus_path())?;
        tracing::debug!(
            group = %group.label(),
            entries = drafts.len(),
            dates = schedule.len(),
            "group loaded"
        );
        Ok(LoadedGroup {
            group,
            window,
            schedule,
            drafts,
        })
    }
}
