//! Touch use case

use crate::domain::ports::{CalendarSource, GroupRepository, MeetingDirectories, SyllabusRepository};
use crate::domain::services::MeetingDirectoryManager;
use crate::error::{AutobotError, AutobotResult};

use crate::application::pipeline::GroupPipeline;
use crate::application::workspace::GroupWorkspace;

use super::apply::{apply, preview};
use super::options::TouchOptions;
use super::result::TouchResult;

/// Touch use case - creates and renames meeting directories
pub struct TouchUseCase<SR, GR, MD>
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

impl<SR, GR, MD> TouchUseCase<SR, GR, MD>
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

    pub fn execute(
        &self,
        workspace: &GroupWorkspace,
        options: &TouchOptions,
    ) -> AutobotResult<TouchResult> {
        let _lock = if options.dry_run {
            None
        } else {
            Some(workspace.lock()?)
        };

        let loaded = GroupPipeline::new(&self.syllabus, &self.groups, self.calendar.as_ref())
            .load(workspace)?;
        let (drafts, minted) = loaded.minted_drafts();
        let reconciliation = loaded.reconcile_drafts(&drafts)?;

        let selected = options.selector.select(&reconciliation.meetings);
        if selected.is_empty() && !options.selector.is_all() {
            return Err(AutobotError::NoMatchingMeeting {
                selector: options.selector.to_string(),
            });
        }

        let parent = workspace.dir();
        let existing = self.dirs.scan(&parent)?;
        let plan = MeetingDirectoryManager::plan(&selected, &existing);
        let orphans = MeetingDirectoryManager::orphans(
            drafts.iter().filter_map(|d| d.id.as_ref()),
            &existing,
        )
        .into_iter()
        .map(|e| e.name.clone())
        .collect::<Vec<_>>();

        for name in &orphans {
            tracing::warn!(dir = %name, "directory marker matches no syllabus entry");
        }

        let outcomes = if options.dry_run {
            preview(&plan)
        } else {
            if minted > 0 {
                self.syllabus.save(&workspace.syllabus_path(), &drafts)?;
                tracing::info!(minted, "saved minted meeting ids");
            }
            apply(&self.dirs, &parent, &plan)
        };

        let result = TouchResult {
            outcomes,
            failures: reconciliation.failures,
            warnings: reconciliation.warnings,
            orphans,
            minted,
            dry_run: options.dry_run,
        };

        tracing::info!(
            created = result.created(),
            renamed = result.renamed(),
            unchanged = result.unchanged(),
            conflicts = result.conflicts(),
            dry_run = options.dry_run,
            "touched meeting directories"
        );

        Ok(result)
    }
}
