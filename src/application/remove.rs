//! Remove use case
//!
//! Deletes exactly one meeting: its `syllabus.yml` entry and its marked
//! directory. The group's meeting count shrinks with it so the syllabus and
//! the schedule stay the same length; the last meeting is never removed.
//! Callers confirm between `preview` and `execute`.

use crate::domain::entities::Meeting;
use crate::domain::ports::{CalendarSource, GroupRepository, MeetingDirectories, SyllabusRepository};
use crate::error::{AutobotError, AutobotResult};

use super::pipeline::GroupPipeline;
use super::selection::MeetingSelector;
use super::workspace::GroupWorkspace;

/// The meeting a removal will delete
#[derive(Debug, Clone)]
pub struct RemovalTarget {
    pub meeting: Meeting,
    /// Name of the directory carrying the meeting's marker, if any
    pub directory: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoveResult {
    pub meeting: Meeting,
    pub removed_directories: Vec<String>,
    /// Syllabus entries left afterwards
    pub remaining: usize,
}

/// Remove use case
pub struct RemoveUseCase<SR, GR, MD>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
    MD: MeetingDirectories,
{
    syllabus: SR,
    groups: GR,
    dirs: MD,
    calendar: Box<dyn CalendarSource>,
}

impl<SR, GR, MD> RemoveUseCase<SR, GR, MD>
where
    SR: SyllabusRepository,
    GR: GroupRepository,
    MD: MeetingDirectories,
{
    pub fn new(syllabus: SR, groups: GR, dirs: MD, calendar: Box<dyn CalendarSource>) -> Self {
        Self {
            syllabus,
            groups,
            dirs,
            calendar,
        }
    }

    fn pipeline(&self) -> GroupPipeline<'_, SR, GR> {
        GroupPipeline::new(&self.syllabus, &self.groups, self.calendar.as_ref())
    }

    /// Resolve `selector` to exactly one meeting
    pub fn preview(
        &self,
        workspace: &GroupWorkspace,
        selector: &MeetingSelector,
    ) -> AutobotResult<RemovalTarget> {
        let loaded = self.pipeline().load(workspace)?;
        let (drafts, _) = loaded.minted_drafts();
        let reconciliation = loaded.reconcile_drafts(&drafts)?;

        let mut selected = selector.select(&reconciliation.meetings);
        let meeting = match selected.len() {
            0 => {
                return Err(AutobotError::NoMatchingMeeting {
                    selector: selector.to_string(),
                })
            }
            1 => selected.remove(0),
            count => {
                return Err(AutobotError::AmbiguousSelection {
                    selector: selector.to_string(),
                    count,
                })
            }
        };

        if reconciliation.meetings.len() == 1 {
            return Err(AutobotError::LastMeeting {
                slug: meeting.slug(),
            });
        }

        let directory = self
            .dirs
            .scan(&workspace.dir())?
            .into_iter()
            .find(|e| e.marker.as_ref() == Some(meeting.id()))
            .map(|e| e.name);

        Ok(RemovalTarget { meeting, directory })
    }

    pub fn execute(
        &self,
        workspace: &GroupWorkspace,
        target: &RemovalTarget,
    ) -> AutobotResult<RemoveResult> {
        let _lock = workspace.lock()?;

        let loaded = self.pipeline().load(workspace)?;
        let (mut drafts, _) = loaded.minted_drafts();
        let before = drafts.len();
        drafts.retain(|d| d.id.as_ref() != Some(target.meeting.id()));
        if drafts.len() == before {
            // syllabus changed since the preview
            return Err(AutobotError::NoMatchingMeeting {
                selector: target.meeting.slug(),
            });
        }
        if drafts.is_empty() {
            return Err(AutobotError::LastMeeting {
                slug: target.meeting.slug(),
            });
        }
        self.syllabus.save(&workspace.syllabus_path(), &drafts)?;

        let mut group = loaded.group;
        group.schedule.count = Some(drafts.len());
        self.groups.save(&workspace.overhead_path(), &group)?;

        let parent = workspace.dir();
        let mut removed_directories = Vec::new();
        for entry in self.dirs.scan(&parent)? {
            if entry.marker.as_ref() != Some(target.meeting.id()) {
                continue;
            }
            self.dirs.remove(&parent, &entry.name)?;
            removed_directories.push(entry.name);
        }

        tracing::info!(
            meeting = %target.meeting.slug(),
            directories = removed_directories.len(),
            remaining = drafts.len(),
            "removed meeting"
        );

        Ok(RemoveResult {
            meeting: target.meeting.clone(),
            removed_directories,
            remaining: drafts.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::check::CheckUseCase;
    use crate::application::test_support::{calendar, dirs, seeded};
    use crate::application::touch::{TouchOptions, TouchUseCase};
    use crate::infrastructure::fs::LocalMeetingDirectories;
    use crate::infrastructure::repositories::{YamlGroupRepository, YamlSyllabusRepository};
    use tempfile::tempdir;

    fn use_case() -> RemoveUseCase<YamlSyllabusRepository, YamlGroupRepository, LocalMeetingDirectories>
    {
        RemoveUseCase::new(
            YamlSyllabusRepository::new(),
            YamlGroupRepository::new(),
            dirs(),
            calendar(),
        )
    }

    fn touch(ws: &GroupWorkspace) {
        TouchUseCase::new(
            YamlSyllabusRepository::new(),
            YamlGroupRepository::new(),
            dirs(),
            calendar(),
        )
        .execute(ws, &TouchOptions::new())
        .unwrap();
    }

    #[test]
    fn removes_entry_and_directory() {
        let tmp = tempdir().unwrap();
        let ws = seeded(tmp.path());
        touch(&ws);

        let target = use_case()
            .preview(&ws, &MeetingSelector::Name("meeting01".to_string()))
            .unwrap();
        assert_eq!(target.directory.as_deref(), Some("2019-09-18-meeting01"));

        let result = use_case().execute(&ws, &target).unwrap();

        assert_eq!(result.removed_directories, ["2019-09-18-meeting01"]);
        assert_eq!(result.remaining, 3);
        assert!(!ws.dir().join("2019-09-18-meeting01").exists());

        let drafts = YamlSyllabusRepository::new().load(&ws.syllabus_path()).unwrap();
        let names: Vec<_> = drafts.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, ["meeting00", "meeting02", "meeting03"]);
    }

    #[test]
    fn group_stays_consistent_after_removal() {
        let tmp = tempdir().unwrap();
        let ws = seeded(tmp.path());
        let target = use_case()
            .preview(&ws, &MeetingSelector::Date("2019-10-02".to_string()))
            .unwrap();
        assert!(target.directory.is_none());

        use_case().execute(&ws, &target).unwrap();

        let group = YamlGroupRepository::new().load(&ws.overhead_path()).unwrap();
        assert_eq!(group.schedule.count, Some(3));
        let report = CheckUseCase::new(
            YamlSyllabusRepository::new(),
            YamlGroupRepository::new(),
            calendar(),
        )
        .execute(&ws)
        .unwrap();
        assert!(report.is_success());
    }

    #[test]
    fn last_meeting_cannot_be_removed() {
        let tmp = tempdir().unwrap();
        let ws = seeded(tmp.path());
        touch(&ws);
        // resolved while four meetings remain
        let stale = use_case()
            .preview(&ws, &MeetingSelector::Name("meeting03".to_string()))
            .unwrap();

        for name in ["meeting00", "meeting01", "meeting02"] {
            let target = use_case()
                .preview(&ws, &MeetingSelector::Name(name.to_string()))
                .unwrap();
            use_case().execute(&ws, &target).unwrap();
        }

        let err = use_case()
            .preview(&ws, &MeetingSelector::Name("meeting03".to_string()))
            .unwrap_err();
        assert!(matches!(err, AutobotError::LastMeeting { .. }));
        let err = use_case().execute(&ws, &stale).unwrap_err();
        assert!(matches!(err, AutobotError::LastMeeting { .. }));

        let drafts = YamlSyllabusRepository::new().load(&ws.syllabus_path()).unwrap();
        assert_eq!(drafts.len(), 1);
        assert!(ws.dir().join("2019-10-02-meeting03").is_dir());

        let report = CheckUseCase::new(
            YamlSyllabusRepository::new(),
            YamlGroupRepository::new(),
            calendar(),
        )
        .execute(&ws)
        .unwrap();
        assert!(report.is_success());
        assert_eq!(report.reconciliation.meetings.len(), 1);
    }

    #[test]
    fn ambiguous_selection_is_refused() {
        let tmp = tempdir().unwrap();
        let ws = seeded(tmp.path());

        let err = use_case()
            .preview(&ws, &MeetingSelector::Date("2019-09".to_string()))
            .unwrap_err();

        assert!(matches!(err, AutobotError::AmbiguousSelection { count: 3, .. }));
    }

    #[test]
    fn all_is_ambiguous_for_several_meetings() {
        let tmp = tempdir().unwrap();
        let ws = seeded(tmp.path());

        let err = use_case().preview(&ws, &MeetingSelector::All).unwrap_err();
        assert!(matches!(err, AutobotError::AmbiguousSelection { count: 4, .. }));
    }

    #[test]
    fn unmatched_selection_is_refused() {
        let tmp = tempdir().unwrap();
        let ws = seeded(tmp.path());

        let err = use_case()
            .preview(&ws, &MeetingSelector::Name("gans".to_string()))
            .unwrap_err();
        assert!(matches!(err, AutobotError::NoMatchingMeeting { .. }));
    }

    #[test]
    fn other_directories_are_untouched() {
        let tmp = tempdir().unwrap();
        let ws = seeded(tmp.path());
        touch(&ws);

        let target = use_case()
            .preview(&ws, &MeetingSelector::Name("meeting00".to_string()))
            .unwrap();
        use_case().execute(&ws, &target).unwrap();

        let left: Vec<_> = dirs()
            .scan(&ws.dir())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            left,
            ["2019-09-18-meeting01", "2019-09-25-meeting02", "2019-10-02-meeting03"]
        );
    }
}
