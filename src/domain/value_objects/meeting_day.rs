//! Weekday a group meets on (weekdays only)

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A weekday eligible for meetings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl MeetingDay {
    pub const ALL: [MeetingDay; 5] = [
        MeetingDay::Mon,
        MeetingDay::Tue,
        MeetingDay::Wed,
        MeetingDay::Thu,
        MeetingDay::Fri,
    ];

    pub fn weekday(&self) -> Weekday {
        match self {
            MeetingDay::Mon => Weekday::Mon,
            MeetingDay::Tue => Weekday::Tue,
            MeetingDay::Wed => Weekday::Wed,
            MeetingDay::Thu => Weekday::Thu,
            MeetingDay::Fri => Weekday::Fri,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            MeetingDay::Mon => "mon",
            MeetingDay::Tue => "tue",
            MeetingDay::Wed => "wed",
            MeetingDay::Thu => "thu",
            MeetingDay::Fri => "fri",
        }
    }

    fn long_name(&self) -> &'static str {
        match self {
            MeetingDay::Mon => "monday",
            MeetingDay::Tue => "tuesday",
            MeetingDay::Wed => "wednesday",
            MeetingDay::Thu => "thursday",
            MeetingDay::Fri => "friday",
        }
    }
}

impl fmt::Display for MeetingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// The input was not a weekday name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a meeting day (expected one of mon, tue, wed, thu, fri)")]
pub struct UnknownMeetingDay(pub String);

impl FromStr for MeetingDay {
    type Err = UnknownMeetingDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.short_name() == lower || day.long_name() == lower)
            .ok_or_else(|| UnknownMeetingDay(s.to_string()))
    }
}

impl Serialize for MeetingDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_name())
    }
}

impl<'de> Deserialize<'de> for MeetingDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
