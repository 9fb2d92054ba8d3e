//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    CheckUseCase, ExportUseCase, RemoveUseCase, ScheduleUseCase, SeedUseCase, SortUseCase,
    TouchUseCase,
};
use crate::config::Config;
use crate::domain::ports::CalendarSource;
use crate::infrastructure::calendar;
use crate::infrastructure::{LocalMeetingDirectories, YamlGroupRepository, YamlSyllabusRepository};

/// Type alias for the concrete SeedUseCase with all dependencies
pub type ConcreteSeedUseCase = SeedUseCase<YamlSyllabusRepository, YamlGroupRepository>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<YamlSyllabusRepository, YamlGroupRepository>;

pub type ConcreteScheduleUseCase = ScheduleUseCase<YamlSyllabusRepository, YamlGroupRepository>;

pub type ConcreteSortUseCase = SortUseCase<YamlSyllabusRepository, YamlGroupRepository>;

/// Type alias for the concrete TouchUseCase with all dependencies
pub type ConcreteTouchUseCase =
    TouchUseCase<YamlSyllabusRepository, YamlGroupRepository, LocalMeetingDirectories>;

pub type ConcreteExportUseCase = ExportUseCase<YamlSyllabusRepository, YamlGroupRepository>;

pub type ConcreteRemoveUseCase =
    RemoveUseCase<YamlSyllabusRepository, YamlGroupRepository, LocalMeetingDirectories>;

fn calendar_source(config: &Config) -> Box<dyn CalendarSource> {
    calendar::from_config(&config.calendar)
}

fn meeting_dirs(config: &Config) -> LocalMeetingDirectories {
    LocalMeetingDirectories::new(config.marker.clone())
}

pub fn create_seed_use_case(config: &Config) -> ConcreteSeedUseCase {
    SeedUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        calendar_source(config),
    )
}

pub fn create_check_use_case(config: &Config) -> ConcreteCheckUseCase {
    CheckUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        calendar_source(config),
    )
}

pub fn create_schedule_use_case(config: &Config) -> ConcreteScheduleUseCase {
    ScheduleUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        calendar_source(config),
    )
}

pub fn create_sort_use_case(config: &Config) -> ConcreteSortUseCase {
    SortUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        calendar_source(config),
    )
}

/// Create a touch use case
///
/// Meeting directories are recognized by the configured marker file.
pub fn create_touch_use_case(config: &Config) -> ConcreteTouchUseCase {
    TouchUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        meeting_dirs(config),
        calendar_source(config),
    )
}

pub fn create_export_use_case(config: &Config) -> ConcreteExportUseCase {
    ExportUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        calendar_source(config),
    )
}

pub fn create_remove_use_case(config: &Config) -> ConcreteRemoveUseCase {
    RemoveUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        meeting_dirs(config),
        calendar_source(config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::workspace;
    use crate::error::AutobotError;
    use tempfile::tempdir;

    #[test]
    fn factory_use_cases_share_the_configured_root() {
        let tmp = tempdir().unwrap();
        let config = Config {
            root: tmp.path().to_path_buf(),
            ..Config::default()
        };

        // no group yet; the missing folder is reported before any calendar fetch
        let err = create_check_use_case(&config)
            .execute(&workspace(&config.root))
            .unwrap_err();
        assert!(matches!(err, AutobotError::GroupNotFound { .. }));
    }
}
