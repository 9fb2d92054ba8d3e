//! Seed Use Case
//!
//! Creates a group's semester folder: `overhead.yml` plus a placeholder
//! `syllabus.yml` with one `meetingNN` entry per generated date.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::entities::{Group, MeetingDraft, MeetingTime, Roster, ScheduleSpec};
use crate::domain::ports::{CalendarSource, GroupRepository, SyllabusRepository};
use crate::domain::services::{ScheduleError, ScheduleGenerator};
use crate::domain::value_objects::MeetingDay;
use crate::error::{AutobotError, AutobotResult};
use crate::infrastructure::fs::GroupLock;

use super::workspace::GroupWorkspace;

/// Options for the seed operation
#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Default room for every meeting
    pub room: String,
    pub weekday: MeetingDay,
    /// Whole weeks after classes begin (0 = first week)
    pub start_offset_weeks: u32,
    /// Number of meetings; `None` fills the semester
    pub count: Option<usize>,
    pub time: Option<MeetingTime>,
    pub directors: Vec<String>,
    pub coordinators: Vec<String>,
    /// Replace an existing `overhead.yml`/`syllabus.yml`
    pub overwrite: bool,
}

/// Result of the seed operation
#[derive(Debug, Clone)]
pub struct SeedResult {
    pub group: Group,
    pub dir: PathBuf,
    pub schedule: Vec<NaiveDate>,
    /// Whether an existing folder was overwritten
    pub overwrote: bool,
}

/// Seed use case
pub struct SeedUseCase<SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    syllabus: SR,
    groups: GR,
    calendar: Box<dyn CalendarSource>,
}

impl<SR, GR> SeedUseCase<SR, GR>
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
        options: &SeedOptions,
    ) -> AutobotResult<SeedResult> {
        let dir = workspace.dir();
        let existed = workspace.exists();
        if existed && !options.overwrite {
            return Err(AutobotError::GroupExists { path: dir });
        }

        let mut spec = ScheduleSpec::new(options.weekday, options.start_offset_weeks, options.count);
        if options.count == Some(0) {
            return Err(ScheduleError::InvalidScheduleSpec(
                "meeting count must be at least 1".to_string(),
            )
            .into());
        }
        if let Some(time) = options.time {
            spec = spec.with_time(time);
        }

        let roster = Roster::from_handles(&options.directors, &options.coordinators, &[]);
        let mut group = Group::new(
            workspace.group(),
            workspace.semester(),
            options.room.trim(),
            spec,
        )?
        .with_roster(roster);

        tracing::info!(source = %self.calendar.describe(&group.semester), "fetching calendar");
        let window = self.calendar.fetch(&group.semester)?;
        let schedule = ScheduleGenerator::from_spec(&window, &group.schedule)?;
        let Some(&first) = schedule.first() else {
            return Err(ScheduleError::InsufficientScheduleWindow {
                requested: options.count.unwrap_or(1),
                available: 0,
            }
            .into());
        };
        group = group.with_startdate(first);
        group.validate(&window)?;

        let _lock = GroupLock::acquire(&dir)?;

        let instructors: Vec<String> = group
            .roster
            .directors
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();
        let drafts: Vec<MeetingDraft> = (0..schedule.len())
            .map(|i| MeetingDraft::placeholder(i, instructors.clone()))
            .collect();

        self.groups.save(&workspace.overhead_path(), &group)?;
        self.syllabus.save(&workspace.syllabus_path(), &drafts)?;

        tracing::info!(
            group = %group.label(),
            meetings = drafts.len(),
            overwrote = existed,
            "seeded semester"
        );

        Ok(SeedResult {
            group,
            dir,
            schedule,
            overwrote: existed,
        })
    }
}
