//! Meeting selection for per-meeting operations

use std::fmt;

use crate::domain::entities::Meeting;

/// Which meetings an operation applies to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MeetingSelector {
    #[default]
    All,
    /// Substring of the slug, e.g. `2019-09` or `2019-09-11`
    Date(String),
    /// Exact filename, or any substring of the slug
    Name(String),
}

impl MeetingSelector {
    pub fn is_all(&self) -> bool {
        matches!(self, MeetingSelector::All)
    }

    pub fn matches(&self, meeting: &Meeting) -> bool {
        match self {
            MeetingSelector::All => true,
            MeetingSelector::Date(date) => meeting.slug().contains(date.trim()),
            MeetingSelector::Name(name) => {
                let name = name.trim();
                meeting.filename() == name || meeting.slug().contains(name)
            }
        }
    }

    /// Selected meetings, in syllabus order
    pub fn select(&self, meetings: &[Meeting]) -> Vec<Meeting> {
        meetings
            .iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect()
    }
}

impl fmt::Display for MeetingSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetingSelector::All => write!(f, "all meetings"),
            MeetingSelector::Date(date) => write!(f, "--date {date}"),
            MeetingSelector::Name(name) => write!(f, "--name {name}"),
        }
    }
}
