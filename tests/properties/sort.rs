//! Property tests for sorting a saved syllabus.

use std::collections::BTreeMap;

use proptest::prelude::*;

use autobot::application::{GroupWorkspace, SortOptions, SortUseCase};
use autobot::domain::entities::{CalendarWindow, KaggleMeta, MeetingDraft};
use autobot::domain::ports::{CalendarResult, CalendarSource, GroupRepository, SyllabusRepository};
use autobot::domain::services::{ScheduleGenerator, SyllabusReconciler};
use autobot::domain::value_objects::Semester;
use autobot::infrastructure::{YamlGroupRepository, YamlSyllabusRepository};

use crate::strategies::{group, weekday, window};

struct FixedCalendar(CalendarWindow);

impl CalendarSource for FixedCalendar {
    fn fetch(&self, _semester: &Semester) -> CalendarResult<CalendarWindow> {
        Ok(self.0.clone())
    }

    fn describe(&self, semester: &Semester) -> String {
        format!("fixed calendar for {semester}")
    }
}

/// An entry with every field filled in
fn full_draft(i: usize) -> MeetingDraft {
    MeetingDraft {
        id: None,
        title: format!("Topic {i}: Part {i}"),
        filename: format!("topic{i}"),
        instructors: vec!["janedoe".to_string(), format!("guest{i}")],
        abstract_text: format!("Everything about topic {i}."),
        cover: Some(format!("https://example.com/covers/{i}.png")),
        tags: vec![format!("tag{i}"), "shared".to_string()],
        date: None,
        room: (i % 2 == 0).then(|| format!("Room {i}")),
        urls: BTreeMap::from([("slides".to_string(), format!("https://example.com/{i}"))]),
        papers: BTreeMap::from([(format!("Paper {i}"), format!("https://arxiv.org/abs/{i}"))]),
        kaggle: Some(KaggleMeta {
            datasets: vec![format!("ucfai/topic{i}")],
            competitions: Vec::new(),
            kernels: Vec::new(),
            enable_gpu: i % 3 == 0,
        }),
    }
}

/// Drafts compared by filename, ignoring date
fn by_filename(drafts: &[MeetingDraft]) -> Vec<MeetingDraft> {
    let mut out: Vec<MeetingDraft> = drafts
        .iter()
        .map(|d| MeetingDraft {
            date: None,
            ..d.clone()
        })
        .collect();
    out.sort_by(|a, b| a.filename.cmp(&b.filename));
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sorting and reloading keeps every record; only date and order change.
    #[test]
    fn sort_keeps_every_record(window in window(), wday in weekday(), rotate in 0usize..64) {
        let schedule = ScheduleGenerator::generate(&window, wday, 0, None).unwrap();
        prop_assume!(!schedule.is_empty());
        let n = schedule.len();

        // pin each entry to a distinct scheduled date, out of order
        let mut drafts: Vec<MeetingDraft> = (0..n)
            .map(|i| MeetingDraft {
                date: Some(schedule[(i + rotate) % n]),
                ..full_draft(i)
            })
            .collect();
        SyllabusReconciler::mint_ids(&mut drafts);

        let tmp = tempfile::tempdir().unwrap();
        let group = group(wday);
        let ws = GroupWorkspace::new(tmp.path(), "ai", group.semester);
        std::fs::create_dir_all(ws.dir()).unwrap();
        YamlGroupRepository::new().save(&ws.overhead_path(), &group).unwrap();
        let repo = YamlSyllabusRepository::new();
        repo.save(&ws.syllabus_path(), &drafts).unwrap();

        let result = SortUseCase::new(
            YamlSyllabusRepository::new(),
            YamlGroupRepository::new(),
            Box::new(FixedCalendar(window.clone())),
        )
        .execute(&ws, &SortOptions::default())
        .unwrap();

        let saved = repo.load(&ws.syllabus_path()).unwrap();
        prop_assert_eq!(saved.len(), n);
        prop_assert_eq!(by_filename(&saved), by_filename(&drafts));

        // saved order follows the pinned dates
        let order: Vec<&str> = saved.iter().map(|d| d.filename.as_str()).collect();
        let expected: Vec<&str> = result.meetings.iter().map(|m| m.filename()).collect();
        prop_assert_eq!(order, expected);
        for (meeting, date) in result.meetings.iter().zip(&schedule) {
            prop_assert_eq!(meeting.date(), *date);
        }
    }
}
