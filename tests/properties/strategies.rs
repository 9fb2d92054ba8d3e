//! Shared generators

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use autobot::domain::entities::{CalendarWindow, Group, HolidayRange, MeetingDraft, Roster, ScheduleSpec};
use autobot::domain::value_objects::{MeetingDay, Season, Semester};

pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 7)
        .and_then(|d| d.checked_add_days(Days::new(offset)))
        .unwrap()
}

/// A term of 4 to 20 weeks with up to four holiday ranges inside it
pub fn window() -> impl Strategy<Value = CalendarWindow> {
    (0u64..300, 28u64..140)
        .prop_flat_map(|(start, len)| {
            let holidays = proptest::collection::vec((0..=len, 0u64..5), 0..=4);
            (Just(start), Just(len), holidays)
        })
        .prop_map(|(start, len, holidays)| {
            let ranges = holidays
                .into_iter()
                .enumerate()
                .map(|(i, (offset, span))| {
                    HolidayRange::new(
                        day(start + offset),
                        day(start + offset + span),
                        format!("Holiday {i}"),
                    )
                    .unwrap()
                })
                .collect();
            CalendarWindow::new(day(start), day(start + len), ranges).unwrap()
        })
}

pub fn weekday() -> impl Strategy<Value = MeetingDay> {
    proptest::sample::select(MeetingDay::ALL.to_vec())
}

pub fn group(weekday: MeetingDay) -> Group {
    Group::new(
        "ai",
        Semester::new(Season::Fall, 2019).unwrap(),
        "HEC 119",
        ScheduleSpec::new(weekday, 0, None),
    )
    .unwrap()
    .with_roster(Roster::from_handles(&["janedoe"], &[] as &[&str], &[] as &[&str]))
}

/// A complete entry with no id, date, or room
pub fn draft(filename: &str) -> MeetingDraft {
    MeetingDraft {
        title: filename.to_string(),
        filename: filename.to_string(),
        instructors: vec!["janedoe".to_string()],
        abstract_text: "Something to learn.".to_string(),
        ..MeetingDraft::default()
    }
}

pub fn drafts(n: usize) -> Vec<MeetingDraft> {
    (0..n).map(|i| draft(&format!("topic{i}"))).collect()
}
