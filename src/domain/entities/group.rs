//! Group entity - an organization sub-group for one semester
//!
//! A `Group` is a plain value: it is loaded once per invocation from
//! `overhead.yml` and threaded explicitly through every operation.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::domain::entities::CalendarWindow;
use crate::domain::services::ScheduleError;
use crate::domain::value_objects::{MeetingDay, PersonId, Semester};

/// Group-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGroup {
    #[error("group name is empty")]
    EmptyName,

    #[error("group name '{0}' must be lowercase letters, digits, '-' or '_'")]
    BadName(String),

    #[error("startdate {startdate} is outside the class range {class_start}..={class_end}")]
    StartdateOutsideWindow {
        startdate: NaiveDate,
        class_start: NaiveDate,
        class_end: NaiveDate,
    },
}

/// People associated with a group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub directors: Vec<PersonId>,
    pub coordinators: Vec<PersonId>,
    pub guests: Vec<PersonId>,
}

impl Roster {
    /// Build a roster from raw handles, dropping blanks and duplicates per role
    pub fn from_handles<S: AsRef<str>>(directors: &[S], coordinators: &[S], guests: &[S]) -> Self {
        fn normalize<S: AsRef<str>>(raw: &[S]) -> Vec<PersonId> {
            let mut out: Vec<PersonId> = Vec::new();
            for id in raw.iter().filter_map(|r| PersonId::new(r.as_ref())) {
                if !out.contains(&id) {
                    out.push(id);
                }
            }
            out
        }

        Self {
            directors: normalize(directors),
            coordinators: normalize(coordinators),
            guests: normalize(guests),
        }
    }

    pub fn is_member(&self, person: &PersonId) -> bool {
        self.members().any(|m| m == person)
    }

    /// Everyone on the roster, directors first
    pub fn members(&self) -> impl Iterator<Item = &PersonId> {
        self.directors
            .iter()
            .chain(self.coordinators.iter())
            .chain(self.guests.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.members().next().is_none()
    }
}

/// Wall-clock time slot a group meets in, e.g. `1730-1845`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingTime {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl FromStr for MeetingTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ScheduleError::InvalidScheduleSpec(format!("invalid meeting time '{s}'"));
        let (start, end) = s.trim().split_once('-').ok_or_else(bad)?;
        let start = NaiveTime::parse_from_str(start.trim(), "%H%M").map_err(|_| bad())?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H%M").map_err(|_| bad())?;
        if end <= start {
            return Err(bad());
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H%M"), self.end.format("%H%M"))
    }
}

/// How a group's meetings are laid out on the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSpec {
    pub weekday: MeetingDay,
    /// Whole weeks after classes begin before the first meeting (0 = first week)
    pub start_offset_weeks: u32,
    /// Number of meetings; `None` takes every eligible week
    pub count: Option<usize>,
    pub time: Option<MeetingTime>,
}

impl ScheduleSpec {
    pub fn new(weekday: MeetingDay, start_offset_weeks: u32, count: Option<usize>) -> Self {
        Self {
            weekday,
            start_offset_weeks,
            count,
            time: None,
        }
    }

    /// Parse a spec from its textual parts
    pub fn parse(
        weekday: &str,
        start_offset_weeks: u32,
        count: Option<usize>,
    ) -> Result<Self, ScheduleError> {
        let weekday = weekday
            .parse::<MeetingDay>()
            .map_err(|e| ScheduleError::InvalidScheduleSpec(e.to_string()))?;
        if count == Some(0) {
            return Err(ScheduleError::InvalidScheduleSpec(
                "meeting count must be at least 1".to_string(),
            ));
        }
        Ok(Self::new(weekday, start_offset_weeks, count))
    }

    pub fn with_time(mut self, time: MeetingTime) -> Self {
        self.time = Some(time);
        self
    }
}

/// A group's metadata for one semester (`overhead.yml`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub semester: Semester,
    pub room: String,
    pub startdate: Option<NaiveDate>,
    pub schedule: ScheduleSpec,
    pub roster: Roster,
}

impl Group {
    pub fn new(
        name: impl Into<String>,
        semester: Semester,
        room: impl Into<String>,
        schedule: ScheduleSpec,
    ) -> Result<Self, InvalidGroup> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            semester,
            room: room.into(),
            startdate: None,
            schedule,
            roster: Roster::default(),
        })
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_startdate(mut self, startdate: NaiveDate) -> Self {
        self.startdate = Some(startdate);
        self
    }

    /// Check the group against the semester's calendar
    pub fn validate(&self, window: &CalendarWindow) -> Result<(), InvalidGroup> {
        validate_name(&self.name)?;
        if let Some(startdate) = self.startdate {
            if !window.contains(startdate) {
                return Err(InvalidGroup::StartdateOutsideWindow {
                    startdate,
                    class_start: window.class_start(),
                    class_end: window.class_end(),
                });
            }
        }
        Ok(())
    }

    /// Display label, e.g. `ai (Fall 2019)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.semester)
    }
}

fn validate_name(name: &str) -> Result<(), InvalidGroup> {
    if name.is_empty() {
        return Err(InvalidGroup::EmptyName);
    }
    let ok = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !ok {
        return Err(InvalidGroup::BadName(name.to_string()));
    }
    Ok(())
}
