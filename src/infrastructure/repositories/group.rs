//! YAML Group Repository
//!
//! Implements the GroupRepository port on top of `overhead.yml`.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Group, MeetingTime, Roster, ScheduleSpec};
use crate::domain::ports::{GroupError, GroupRepository, GroupResult};
use crate::domain::value_objects::{PersonId, Semester};
use crate::infrastructure::fs::write_atomic;

#[derive(Debug, Serialize, Deserialize)]
struct YamlGroup {
    name: String,
    semester: Semester,
    room: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    startdate: Option<NaiveDate>,
    meetings: YamlMeetings,
    #[serde(default)]
    roster: YamlRoster,
}

#[derive(Debug, Serialize, Deserialize)]
struct YamlMeetings {
    wday: String,
    #[serde(default)]
    start_offset: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct YamlRoster {
    directors: Vec<String>,
    coordinators: Vec<String>,
    guests: Vec<String>,
}

/// `overhead.yml` persistence
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlGroupRepository;

impl YamlGroupRepository {
    pub fn new() -> Self {
        Self
    }
}

fn into_group(path: &Path, raw: YamlGroup) -> GroupResult<Group> {
    let format = |message: String| GroupError::InvalidFormat {
        path: path.to_path_buf(),
        message,
    };

    let meetings = &raw.meetings;
    let mut schedule =
        ScheduleSpec::parse(&meetings.wday, meetings.start_offset, meetings.count)
            .map_err(|e| format(e.to_string()))?;
    if let Some(time) = meetings.time.as_deref().filter(|t| !t.trim().is_empty()) {
        let time = time
            .parse::<MeetingTime>()
            .map_err(|e| format(e.to_string()))?;
        schedule = schedule.with_time(time);
    }

    let mut group = Group::new(raw.name, raw.semester, raw.room.trim(), schedule)
        .map_err(|source| GroupError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(startdate) = raw.startdate {
        group = group.with_startdate(startdate);
    }
    Ok(group.with_roster(Roster::from_handles(
        &raw.roster.directors,
        &raw.roster.coordinators,
        &raw.roster.guests,
    )))
}

fn from_group(group: &Group) -> YamlGroup {
    let handles = |ids: &[PersonId]| -> Vec<String> {
        ids.iter().map(|p| p.as_str().to_string()).collect()
    };
    YamlGroup {
        name: group.name.clone(),
        semester: group.semester,
        room: group.room.clone(),
        startdate: group.startdate,
        meetings: YamlMeetings {
            wday: group.schedule.weekday.short_name().to_string(),
            start_offset: group.schedule.start_offset_weeks,
            count: group.schedule.count,
            time: group.schedule.time.map(|t| t.to_string()),
        },
        roster: YamlRoster {
            directors: handles(&group.roster.directors),
            coordinators: handles(&group.roster.coordinators),
            guests: handles(&group.roster.guests),
        },
    }
}

impl GroupRepository for YamlGroupRepository {
    fn load(&self, path: &Path) -> GroupResult<Group> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GroupError::NotFound(path.to_path_buf())
            } else {
                GroupError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let raw: YamlGroup =
            serde_yaml_ng::from_str(&content).map_err(|e| GroupError::InvalidFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        into_group(path, raw)
    }

    fn save(&self, path: &Path, group: &Group) -> GroupResult<()> {
        let content =
            serde_yaml_ng::to_string(&from_group(group)).map_err(|e| GroupError::InvalidFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        write_atomic(path, &content).map_err(|e| GroupError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
