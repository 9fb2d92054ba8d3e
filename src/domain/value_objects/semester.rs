//! Semester value object
//!
//! A semester is a season plus a year. Its shortcode (`fa19`, `sp20`, ...) is
//! used for directory names and on the command line, so the conversion between
//! the two forms must round-trip exactly.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Academic season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Season; 3] = [Season::Spring, Season::Summer, Season::Fall];

    /// Two-letter code used in shortcodes
    pub fn code(&self) -> &'static str {
        match self {
            Season::Spring => "sp",
            Season::Summer => "su",
            Season::Fall => "fa",
        }
    }

    /// Lowercase name, as used by the calendar feed
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }

    /// Resolve a two-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Season a month (1-12) belongs to
    pub fn for_month(month: u32) -> Self {
        match month {
            1..=4 => Season::Spring,
            5..=7 => Season::Summer,
            _ => Season::Fall,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

impl FromStr for Season {
    type Err = SemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|season| season.name() == lower || season.code() == lower)
            .ok_or_else(|| SemesterError::UnknownSeason(s.to_string()))
    }
}

/// Errors from building or parsing a semester
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemesterError {
    #[error("unknown season '{0}' (expected spring, summer or fall)")]
    UnknownSeason(String),

    #[error("year {0} cannot be encoded as a two-digit shortcode (expected 2000-2099)")]
    YearOutOfRange(i32),

    #[error("invalid semester shortcode '{0}' (expected e.g. fa19, sp20, su21)")]
    InvalidShortcode(String),
}

/// A season of a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Semester {
    year: i32,
    season: Season,
}

impl Semester {
    pub const MIN_YEAR: i32 = 2000;
    pub const MAX_YEAR: i32 = 2099;

    pub fn new(season: Season, year: i32) -> Result<Self, SemesterError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(SemesterError::YearOutOfRange(year));
        }
        Ok(Self { year, season })
    }

    /// The semester a given date falls in
    pub fn containing(date: NaiveDate) -> Result<Self, SemesterError> {
        Self::new(Season::for_month(date.month()), date.year())
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Two-letter season + two-digit year, e.g. `fa19`
    pub fn shortcode(&self) -> String {
        format!("{}{:02}", self.season.code(), self.year % 100)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

impl FromStr for Semester {
    type Err = SemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        let invalid = || SemesterError::InvalidShortcode(s.to_string());

        if code.len() != 4 || !code.is_ascii() {
            return Err(invalid());
        }
        let (season, year) = code.split_at(2);
        let season = Season::from_code(season).ok_or_else(invalid)?;
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Self::new(season, Self::MIN_YEAR + year)
    }
}

impl Serialize for Semester {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.shortcode())
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
