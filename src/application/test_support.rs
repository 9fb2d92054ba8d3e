//! Shared fixtures for use case tests

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::entities::{CalendarWindow, HolidayRange};
use crate::domain::ports::{CalendarResult, CalendarSource};
use crate::domain::value_objects::{MeetingDay, Season, Semester};
use crate::infrastructure::fs::LocalMeetingDirectories;
use crate::infrastructure::repositories::{YamlGroupRepository, YamlSyllabusRepository};

use super::seed::{SeedOptions, SeedUseCase};
use super::workspace::GroupWorkspace;

pub(crate) fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Calendar source returning a fixed window
pub(crate) struct FixedCalendar(pub CalendarWindow);

impl CalendarSource for FixedCalendar {
    fn fetch(&self, _semester: &Semester) -> CalendarResult<CalendarWindow> {
        Ok(self.0.clone())
    }

    fn describe(&self, semester: &Semester) -> String {
        format!("fixture calendar for {semester}")
    }
}

/// Fall 2019: Aug 26 - Dec 6, Thanksgiving Nov 27-29
pub(crate) fn fall_2019() -> CalendarWindow {
    CalendarWindow::new(
        d(2019, 8, 26),
        d(2019, 12, 6),
        vec![HolidayRange::new(d(2019, 11, 27), d(2019, 11, 29), "Thanksgiving").unwrap()],
    )
    .unwrap()
}

pub(crate) fn calendar() -> Box<dyn CalendarSource> {
    Box::new(FixedCalendar(fall_2019()))
}

pub(crate) fn workspace(root: &Path) -> GroupWorkspace {
    GroupWorkspace::new(root, "ai", Semester::new(Season::Fall, 2019).unwrap())
}

pub(crate) fn dirs() -> LocalMeetingDirectories {
    LocalMeetingDirectories::new(".metadata")
}

/// Four Wednesday meetings from the third week, directed by janedoe
pub(crate) fn seed_options() -> SeedOptions {
    SeedOptions {
        room: "HEC 119".to_string(),
        weekday: MeetingDay::Wed,
        start_offset_weeks: 2,
        count: Some(4),
        time: None,
        directors: vec!["JaneDoe".to_string()],
        coordinators: Vec::new(),
        overwrite: false,
    }
}

/// Seed `ai/fa19` under `root` with [`seed_options`]
pub(crate) fn seeded(root: &Path) -> GroupWorkspace {
    let ws = workspace(root);
    SeedUseCase::new(
        YamlSyllabusRepository::new(),
        YamlGroupRepository::new(),
        calendar(),
    )
    .execute(&ws, &seed_options())
    .unwrap();
    ws
}
