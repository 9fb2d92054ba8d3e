//! Schedule Use Case
//!
//! Shows the dates a group's schedule spec produces for its semester.

use crate::domain::entities::{CalendarWindow, Group};
use crate::domain::ports::{CalendarSource, GroupRepository, SyllabusRepository};
use crate::domain::services::{ScheduleGenerator, ScheduleSlot};
use crate::error::AutobotResult;

use super::pipeline::GroupPipeline;
use super::workspace::GroupWorkspace;

/// Result of the schedule operation
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub group: Group,
    pub window: CalendarWindow,
    pub slots: Vec<ScheduleSlot>,
}

/// Schedule use case
pub struct ScheduleUseCase<SR, GR>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
{
    syllabus: SR,
    groups: GR,
    calendar: Box<dyn CalendarSource>,
}

impl<SR, GR> ScheduleUseCase<SR, GR>
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

    pub fn execute(&self, workspace: &GroupWorkspace) -> AutobotResult<ScheduleReport> {
        let (group, window, _) =
            GroupPipeline::new(&self.syllabus, &self.groups, self.calendar.as_ref())
                .load_schedule(workspace)?;
        let slots = ScheduleGenerator::slots(&window, &group.schedule)?;

        Ok(ScheduleReport {
            group,
            window,
            slots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{calendar, d, seeded};
    use crate::infrastructure::repositories::{YamlGroupRepository, YamlSyllabusRepository};
    use tempfile::tempdir;

    #[test]
    fn schedule_lists_generated_dates() {
        let dir = tempdir().unwrap();
        let ws = seeded(dir.path());

        let report = ScheduleUseCase::new(
            YamlSyllabusRepository::new(),
            YamlGroupRepository::new(),
            calendar(),
        )
        .execute(&ws)
        .unwrap();

        let dates: Vec<_> = report.slots.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            [d(2019, 9, 11), d(2019, 9, 18), d(2019, 9, 25), d(2019, 10, 2)]
        );
        assert_eq!(report.slots[3].index, Some(3));
    }
}
