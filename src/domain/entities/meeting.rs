//! Meeting entities
//!
//! - `MeetingDraft` - one `syllabus.yml` record as a human wrote it
//! - `Meeting` - a draft after reconciliation: identified, dated, placed

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{is_placeholder_name, placeholder_name, MeetingId, PersonId};

/// Kaggle kernel settings carried through for downstream publishers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaggleMeta {
    pub datasets: Vec<String>,
    pub competitions: Vec<String>,
    pub kernels: Vec<String>,
    pub enable_gpu: bool,
}

impl KaggleMeta {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
            && self.competitions.is_empty()
            && self.kernels.is_empty()
            && !self.enable_gpu
    }
}

/// A partial meeting, as read from the syllabus
///
/// Empty strings mean "not provided"; the store normalizes blanks away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub id: Option<MeetingId>,
    pub title: String,
    pub filename: String,
    pub instructors: Vec<String>,
    pub abstract_text: String,
    pub cover: Option<String>,
    pub tags: Vec<String>,
    pub date: Option<NaiveDate>,
    pub room: Option<String>,
    pub urls: BTreeMap<String, String>,
    pub papers: BTreeMap<String, String>,
    pub kaggle: Option<KaggleMeta>,
}

/// Abstract written into freshly seeded entries
pub const PLACEHOLDER_ABSTRACT: &str = "To be announced.";

impl MeetingDraft {
    /// A seeded entry for position `index`, named `meetingNN` until a human renames it
    pub fn placeholder(index: usize, instructors: Vec<String>) -> Self {
        let name = placeholder_name(index);
        Self {
            id: Some(MeetingId::from_placeholder(&name)),
            title: name.clone(),
            filename: name,
            instructors,
            abstract_text: PLACEHOLDER_ABSTRACT.to_string(),
            ..Self::default()
        }
    }
}

/// Where a reconciled value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// Written in the syllabus by a human
    Explicit,
    /// Taken from the generated schedule
    Scheduled,
    /// Taken from the group's default room
    GroupDefault,
}

/// A fully reconciled meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    id: MeetingId,
    ordinal: usize,
    title: String,
    filename: String,
    instructors: Vec<PersonId>,
    #[serde(rename = "abstract")]
    abstract_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover: Option<String>,
    tags: Vec<String>,
    date: NaiveDate,
    date_source: ValueSource,
    room: String,
    room_source: ValueSource,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    urls: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    papers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kaggle: Option<KaggleMeta>,
}

/// Resolved placement of a meeting, handed over by the reconciler
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Placement {
    pub id: MeetingId,
    pub ordinal: usize,
    pub instructors: Vec<PersonId>,
    pub date: NaiveDate,
    pub date_source: ValueSource,
    pub room: String,
    pub room_source: ValueSource,
}

impl Meeting {
    pub(crate) fn from_draft(draft: &MeetingDraft, placement: Placement) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(draft.tags.len());
        for tag in draft.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }

        Self {
            id: placement.id,
            ordinal: placement.ordinal,
            title: draft.title.trim().to_string(),
            filename: draft.filename.trim().to_string(),
            instructors: placement.instructors,
            abstract_text: draft.abstract_text.trim().to_string(),
            cover: draft.cover.clone(),
            tags,
            date: placement.date,
            date_source: placement.date_source,
            room: placement.room,
            room_source: placement.room_source,
            urls: draft.urls.clone(),
            papers: draft.papers.clone(),
            kaggle: draft.kaggle.clone().filter(|k| !k.is_empty()),
        }
    }

    pub fn id(&self) -> &MeetingId {
        &self.id
    }

    /// 1-based position in the syllabus
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn instructors(&self) -> &[PersonId] {
        &self.instructors
    }

    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_source(&self) -> ValueSource {
        self.date_source
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn room_source(&self) -> ValueSource {
        self.room_source
    }

    pub fn urls(&self) -> &BTreeMap<String, String> {
        &self.urls
    }

    pub fn papers(&self) -> &BTreeMap<String, String> {
        &self.papers
    }

    pub fn kaggle(&self) -> Option<&KaggleMeta> {
        self.kaggle.as_ref()
    }

    /// Directory name of the meeting, `YYYY-MM-DD-filename`
    pub fn slug(&self) -> String {
        format!("{}-{}", self.date.format("%Y-%m-%d"), self.filename)
    }

    /// Whether the filename is still a seeded `meetingNN` name
    pub fn is_placeholder(&self) -> bool {
        is_placeholder_name(&self.filename)
    }

    /// Same meeting moved to another position and schedule date
    pub(crate) fn rescheduled(&self, ordinal: usize, date: NaiveDate) -> Self {
        Self {
            ordinal,
            date,
            date_source: ValueSource::Scheduled,
            ..self.clone()
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A reconciled meeting with scheduled date and default room
    pub(crate) fn meeting(ordinal: usize, filename: &str, date: NaiveDate) -> Meeting {
        let draft = MeetingDraft {
            title: filename.to_string(),
            filename: filename.to_string(),
            instructors: vec!["janedoe".to_string()],
            abstract_text: "abstract".to_string(),
            ..MeetingDraft::default()
        };
        Meeting::from_draft(
            &draft,
            Placement {
                id: MeetingId::from_placeholder(&placeholder_name(ordinal - 1)),
                ordinal,
                instructors: vec![PersonId::new("janedoe").unwrap()],
                date,
                date_source: ValueSource::Scheduled,
                room: "HEC 119".to_string(),
                room_source: ValueSource::GroupDefault,
            },
        )
    }
}
