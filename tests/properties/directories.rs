//! Property tests for meeting directory planning.

use proptest::prelude::*;

use autobot::domain::services::{
    DirectoryAction, DirectoryEntry, MeetingDirectoryManager, ScheduleGenerator, SyllabusReconciler,
};

use crate::strategies::{drafts, group, weekday, window};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Applying a plan and planning again yields no changes.
    #[test]
    fn planning_is_idempotent(window in window(), wday in weekday()) {
        let schedule = ScheduleGenerator::generate(&window, wday, 0, None).unwrap();
        let group = group(wday);
        let meetings = SyllabusReconciler::new(&group, &window)
            .assign(&drafts(schedule.len()), &schedule)
            .unwrap()
            .meetings;

        let fresh = MeetingDirectoryManager::plan(&meetings, &[]);
        prop_assert_eq!(fresh.create_count(), meetings.len());
        prop_assert!(!fresh.has_conflicts());

        let existing: Vec<DirectoryEntry> = meetings
            .iter()
            .map(|m| DirectoryEntry::marked(m.slug(), m.id().clone()))
            .collect();
        let again = MeetingDirectoryManager::plan(&meetings, &existing);
        prop_assert!(!again.has_changes());
        prop_assert_eq!(again.noop_count(), meetings.len());
    }

    /// PROPERTY: A marked directory under a stale name is renamed, never recreated.
    #[test]
    fn stale_names_are_renamed(window in window(), wday in weekday(), pick in any::<prop::sample::Index>()) {
        let schedule = ScheduleGenerator::generate(&window, wday, 0, None).unwrap();
        prop_assume!(!schedule.is_empty());
        let group = group(wday);
        let meetings = SyllabusReconciler::new(&group, &window)
            .assign(&drafts(schedule.len()), &schedule)
            .unwrap()
            .meetings;

        let stale = &meetings[pick.index(meetings.len())];
        let existing = vec![DirectoryEntry::marked("1999-01-01-old", stale.id().clone())];
        let plan = MeetingDirectoryManager::plan(&meetings, &existing);

        let renames: Vec<&DirectoryAction> = plan
            .actions()
            .filter(|a| matches!(a, DirectoryAction::Rename { .. }))
            .collect();
        prop_assert_eq!(renames.len(), 1);
        prop_assert_eq!(renames[0].target(), stale.slug());
        prop_assert_eq!(plan.create_count(), meetings.len() - 1);
    }
}
