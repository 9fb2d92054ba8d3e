//! Property tests for syllabus reconciliation.

use std::collections::HashSet;

use proptest::prelude::*;

use autobot::domain::entities::ValueSource;
use autobot::domain::services::{ScheduleGenerator, SyllabusReconciler};
use autobot::domain::value_objects::{placeholder_name, MeetingId};

use crate::strategies::{drafts, group, weekday, window};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Entry i lands on schedule date i.
    #[test]
    fn entries_pair_with_dates_by_position(window in window(), wday in weekday()) {
        let schedule = ScheduleGenerator::generate(&window, wday, 0, None).unwrap();
        let group = group(wday);
        let drafts = drafts(schedule.len());

        let result = SyllabusReconciler::new(&group, &window)
            .assign(&drafts, &schedule)
            .unwrap();

        prop_assert!(result.failures.is_empty());
        prop_assert_eq!(result.meetings.len(), schedule.len());
        for (i, meeting) in result.meetings.iter().enumerate() {
            prop_assert_eq!(meeting.ordinal(), i + 1);
            prop_assert_eq!(meeting.date(), schedule[i]);
            prop_assert_eq!(meeting.date_source(), ValueSource::Scheduled);
            prop_assert_eq!(meeting.room(), "HEC 119");
        }
    }

    /// PROPERTY: A syllabus whose length differs from the schedule is rejected.
    #[test]
    fn length_mismatch_is_rejected(window in window(), wday in weekday(), extra in 1usize..3) {
        let schedule = ScheduleGenerator::generate(&window, wday, 0, None).unwrap();
        let group = group(wday);
        let drafts = drafts(schedule.len() + extra);

        prop_assert!(SyllabusReconciler::new(&group, &window)
            .assign(&drafts, &schedule)
            .is_err());
    }

    /// PROPERTY: Minting fills every missing id and never duplicates one.
    #[test]
    fn minted_ids_are_unique(held in proptest::collection::vec(proptest::option::of(0usize..12), 1..12)) {
        let mut drafts = drafts(held.len());
        for (draft, slot) in drafts.iter_mut().zip(&held) {
            draft.id = slot.map(|n| MeetingId::from_placeholder(&placeholder_name(n)));
        }
        let preset: HashSet<MeetingId> = drafts.iter().filter_map(|d| d.id.clone()).collect();
        let missing = drafts.iter().filter(|d| d.id.is_none()).count();

        let minted = SyllabusReconciler::mint_ids(&mut drafts);

        prop_assert_eq!(minted, missing);
        let ids: Vec<MeetingId> = drafts.iter().map(|d| d.id.clone().unwrap()).collect();
        let minted_ids: HashSet<&MeetingId> = ids.iter().filter(|id| !preset.contains(id)).collect();
        prop_assert_eq!(minted_ids.len(), missing);
    }
}
