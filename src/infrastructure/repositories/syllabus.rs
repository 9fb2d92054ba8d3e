//! YAML Syllabus Repository
//!
//! Implements the SyllabusRepository port on top of `syllabus.yml`: a list
//! of records, each split into a `required` and an `optional` block.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{KaggleMeta, MeetingDraft};
use crate::domain::ports::{SyllabusError, SyllabusRepository, SyllabusResult};
use crate::domain::value_objects::MeetingId;
use crate::infrastructure::fs::write_atomic;

const HEADER: &str = "\
# Syllabus: one record per meeting, in meeting order.
#
# required: id, title, filename, instructors, abstract (cover and tags may be empty)
# optional: date (YYYY-MM-DD), room, urls, papers, kaggle
#
# Leave `date` and `room` out to take them from the schedule and the group.
# Do not edit `id`; it ties the record to its meeting directory.
";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct YamlRecord {
    required: YamlRequired,
    #[serde(skip_serializing_if = "YamlOptional::is_empty")]
    optional: YamlOptional,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct YamlRequired {
    id: Option<String>,
    title: Option<String>,
    filename: Option<String>,
    #[serde(alias = "authors")]
    instructors: Vec<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    cover: Option<String>,
    tags: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct YamlOptional {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    urls: BTreeMap<String, Option<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    papers: BTreeMap<String, Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kaggle: Option<KaggleMeta>,
}

impl YamlOptional {
    fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.room.is_none()
            && self.urls.is_empty()
            && self.papers.is_empty()
            && self.kaggle.is_none()
    }
}

/// `syllabus.yml` persistence
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSyllabusRepository;

impl YamlSyllabusRepository {
    pub fn new() -> Self {
        Self
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn present_map(map: BTreeMap<String, Option<String>>) -> BTreeMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| present(v).map(|v| (k, v)))
        .collect()
}

fn from_yaml(path: &Path, index: usize, record: YamlRecord) -> SyllabusResult<MeetingDraft> {
    let invalid = |message: String| SyllabusError::InvalidEntry {
        path: path.to_path_buf(),
        entry: index + 1,
        message,
    };
    let YamlRecord { required, optional } = record;

    let id = present(required.id)
        .map(|raw| MeetingId::parse(&raw))
        .transpose()
        .map_err(|e| invalid(e.to_string()))?;

    let date = present(optional.date)
        .map(|raw| {
            raw.get(..10)
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
                .ok_or_else(|| invalid(format!("invalid date '{raw}' (expected YYYY-MM-DD)")))
        })
        .transpose()?;

    Ok(MeetingDraft {
        id,
        title: present(required.title).unwrap_or_default(),
        filename: present(required.filename).unwrap_or_default(),
        instructors: required
            .instructors
            .into_iter()
            .filter_map(|i| present(Some(i)))
            .collect(),
        abstract_text: present(required.abstract_text).unwrap_or_default(),
        cover: present(required.cover),
        tags: required
            .tags
            .into_iter()
            .filter_map(|t| present(Some(t)))
            .collect(),
        date,
        room: present(optional.room),
        urls: present_map(optional.urls),
        papers: present_map(optional.papers),
        kaggle: optional.kaggle.filter(|k| !k.is_empty()),
    })
}

fn to_yaml(draft: &MeetingDraft) -> YamlRecord {
    let wrap = |map: &BTreeMap<String, String>| -> BTreeMap<String, Option<String>> {
        map.iter().map(|(k, v)| (k.clone(), Some(v.clone()))).collect()
    };

    YamlRecord {
        required: YamlRequired {
            id: draft.id.as_ref().map(|id| id.as_str().to_string()),
            title: Some(draft.title.clone()),
            filename: Some(draft.filename.clone()),
            instructors: draft.instructors.clone(),
            abstract_text: Some(draft.abstract_text.clone()),
            cover: Some(draft.cover.clone().unwrap_or_default()),
            tags: draft.tags.clone(),
        },
        optional: YamlOptional {
            date: draft.date.map(|d| d.format("%Y-%m-%d").to_string()),
            room: draft.room.clone(),
            urls: wrap(&draft.urls),
            papers: wrap(&draft.papers),
            kaggle: draft.kaggle.clone(),
        },
    }
}

impl SyllabusRepository for YamlSyllabusRepository {
    fn load(&self, path: &Path) -> SyllabusResult<Vec<MeetingDraft>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SyllabusError::NotFound(path.to_path_buf())
            } else {
                SyllabusError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Ok(Vec::new());
        }

        let records: Option<Vec<YamlRecord>> =
            serde_yaml_ng::from_str(&content).map_err(|e| SyllabusError::InvalidFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        records
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, record)| from_yaml(path, i, record))
            .collect()
    }

    fn save(&self, path: &Path, drafts: &[MeetingDraft]) -> SyllabusResult<()> {
        let content = self.render(drafts)?;
        write_atomic(path, &content).map_err(|e| SyllabusError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), records = drafts.len(), "saved syllabus");
        Ok(())
    }

    fn render(&self, drafts: &[MeetingDraft]) -> SyllabusResult<String> {
        let mut out = String::from(HEADER);
        for draft in drafts {
            let block = serde_yaml_ng::to_string(&[to_yaml(draft)]).map_err(|e| {
                SyllabusError::InvalidFormat {
                    path: Path::new("syllabus.yml").to_path_buf(),
                    message: e.to_string(),
                }
            })?;
            out.push('\n');
            out.push_str(&block);
        }
        Ok(out)
    }
}
