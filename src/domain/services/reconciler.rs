//! Syllabus reconciliation service
//!
//! Pairs syllabus drafts with generated schedule dates and produces
//! reconciled meetings. Per-entry problems are collected rather than
//! aborting the whole syllabus.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::entities::{
    CalendarWindow, Group, Meeting, MeetingDraft, Placement, ValueSource,
};
use crate::domain::value_objects::{is_placeholder_name, placeholder_name, MeetingId, PersonId};

/// Errors that stop reconciliation as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("syllabus has {syllabus} meetings but the schedule has {schedule} dates")]
    ScheduleLengthMismatch { syllabus: usize, schedule: usize },

    #[error("meetings #{first} and #{second} are both on {date}; meetings must have unique dates")]
    DateCollision {
        date: NaiveDate,
        first: usize,
        second: usize,
    },
}

/// Problem with a single syllabus entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("missing required field '{0}'")]
    MissingRequiredField(&'static str),

    #[error("invalid meeting date {date}: {reason}")]
    InvalidMeetingDate { date: NaiveDate, reason: String },

    #[error("slug '{slug}' is already used by meeting #{other}")]
    DuplicateSlug { slug: String, other: usize },

    #[error("id {id} is already used by meeting #{other}")]
    DuplicateId { id: String, other: usize },

    #[error("filename '{0}' must not contain path separators or start with '.'")]
    InvalidFilename(String),
}

/// A failed entry with its 0-based syllabus position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFailure {
    pub index: usize,
    pub errors: Vec<EntryError>,
}

/// Non-fatal observations about an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileWarning {
    /// Instructor is not on the group roster
    UnknownInstructor { index: usize, person: PersonId },
    /// Entry still carries its seeded `meetingNN` filename
    Placeholder { index: usize, filename: String },
}

impl std::fmt::Display for ReconcileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconcileWarning::UnknownInstructor { index, person } => write!(
                f,
                "meeting #{}: instructor '{}' is not on the group roster",
                index + 1,
                person
            ),
            ReconcileWarning::Placeholder { index, filename } => write!(
                f,
                "meeting #{}: filename '{}' is still a placeholder",
                index + 1,
                filename
            ),
        }
    }
}

/// Outcome of `assign`: successes and failures side by side
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    pub meetings: Vec<Meeting>,
    pub failures: Vec<EntryFailure>,
    pub warnings: Vec<ReconcileWarning>,
}

impl Reconciliation {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total entries looked at
    pub fn total(&self) -> usize {
        self.meetings.len() + self.failures.len()
    }
}

/// Reconciles a group's syllabus against its calendar
pub struct SyllabusReconciler<'a> {
    group: &'a Group,
    window: &'a CalendarWindow,
}

impl<'a> SyllabusReconciler<'a> {
    pub fn new(group: &'a Group, window: &'a CalendarWindow) -> Self {
        Self { group, window }
    }

    /// Fill in missing ids in place; returns how many were minted
    ///
    /// Entry `i` gets the id of `meeting{i:02}` unless another entry already
    /// holds it, in which case the suffix is bumped until a free one is found.
    pub fn mint_ids(drafts: &mut [MeetingDraft]) -> usize {
        let mut used: HashSet<MeetingId> = drafts.iter().filter_map(|d| d.id.clone()).collect();
        let mut minted = 0;

        for (index, draft) in drafts.iter_mut().enumerate() {
            if draft.id.is_some() {
                continue;
            }
            let mut suffix = index;
            let id = loop {
                let candidate = MeetingId::from_placeholder(&placeholder_name(suffix));
                if !used.contains(&candidate) {
                    break candidate;
                }
                suffix += 1;
            };
            used.insert(id.clone());
            draft.id = Some(id);
            minted += 1;
        }

        if minted > 0 {
            tracing::debug!(minted, "minted meeting ids");
        }
        minted
    }

    /// Pair each draft with the schedule date at the same position
    pub fn assign(
        &self,
        drafts: &[MeetingDraft],
        schedule: &[NaiveDate],
    ) -> Result<Reconciliation, ReconcileError> {
        if drafts.len() != schedule.len() {
            return Err(ReconcileError::ScheduleLengthMismatch {
                syllabus: drafts.len(),
                schedule: schedule.len(),
            });
        }

        let mut ids = drafts.to_vec();
        Self::mint_ids(&mut ids);

        let mut result = Reconciliation::default();
        let mut seen_ids: HashMap<MeetingId, usize> = HashMap::new();
        let mut seen_slugs: HashMap<String, usize> = HashMap::new();

        for (index, (draft, scheduled)) in drafts.iter().zip(schedule).enumerate() {
            let id = match ids[index].id.clone() {
                Some(id) => id,
                None => continue,
            };
            let mut errors = self.check_fields(draft);

            let (date, date_source) = match draft.date {
                Some(explicit) => {
                    if let Some(err) = self.check_date(explicit) {
                        errors.push(err);
                    }
                    (explicit, ValueSource::Explicit)
                }
                None => (*scheduled, ValueSource::Scheduled),
            };

            if let Some(&other) = seen_ids.get(&id) {
                errors.push(EntryError::DuplicateId {
                    id: id.short().to_string(),
                    other: other + 1,
                });
            } else {
                seen_ids.insert(id.clone(), index);
            }

            let slug = format!("{}-{}", date.format("%Y-%m-%d"), draft.filename.trim());
            if !draft.filename.trim().is_empty() {
                if let Some(&other) = seen_slugs.get(&slug) {
                    errors.push(EntryError::DuplicateSlug {
                        slug: slug.clone(),
                        other: other + 1,
                    });
                } else {
                    seen_slugs.insert(slug, index);
                }
            }

            if !errors.is_empty() {
                tracing::debug!(index, errors = errors.len(), "syllabus entry failed");
                result.failures.push(EntryFailure { index, errors });
                continue;
            }

            let instructors = self.instructors(index, draft, &mut result.warnings);
            if is_placeholder_name(draft.filename.trim()) {
                result.warnings.push(ReconcileWarning::Placeholder {
                    index,
                    filename: draft.filename.trim().to_string(),
                });
            }

            let (room, room_source) = match draft.room.as_deref().map(str::trim) {
                Some(room) if !room.is_empty() => (room.to_string(), ValueSource::Explicit),
                _ => (self.group.room.clone(), ValueSource::GroupDefault),
            };

            result.meetings.push(Meeting::from_draft(
                draft,
                Placement {
                    id,
                    ordinal: index + 1,
                    instructors,
                    date,
                    date_source,
                    room,
                    room_source,
                },
            ));
        }

        tracing::debug!(
            reconciled = result.meetings.len(),
            failed = result.failures.len(),
            "syllabus reconciled"
        );
        Ok(result)
    }

    /// Reorder meetings by date and lay them onto `schedule`
    ///
    /// Rejects the whole batch if two meetings share a date.
    pub fn resort(
        meetings: &[Meeting],
        schedule: &[NaiveDate],
    ) -> Result<Vec<Meeting>, ReconcileError> {
        if meetings.len() != schedule.len() {
            return Err(ReconcileError::ScheduleLengthMismatch {
                syllabus: meetings.len(),
                schedule: schedule.len(),
            });
        }

        let mut by_date: HashMap<NaiveDate, usize> = HashMap::new();
        for meeting in meetings {
            if let Some(&first) = by_date.get(&meeting.date()) {
                return Err(ReconcileError::DateCollision {
                    date: meeting.date(),
                    first,
                    second: meeting.ordinal(),
                });
            }
            by_date.insert(meeting.date(), meeting.ordinal());
        }

        let mut order: Vec<&Meeting> = meetings.iter().collect();
        order.sort_by_key(|m| m.date());

        Ok(order
            .into_iter()
            .zip(schedule)
            .enumerate()
            .map(|(i, (meeting, date))| meeting.rescheduled(i + 1, *date))
            .collect())
    }

    fn check_fields(&self, draft: &MeetingDraft) -> Vec<EntryError> {
        let mut errors = Vec::new();
        if draft.title.trim().is_empty() {
            errors.push(EntryError::MissingRequiredField("title"));
        }
        let filename = draft.filename.trim();
        if filename.is_empty() {
            errors.push(EntryError::MissingRequiredField("filename"));
        } else if filename.contains(['/', '\\']) || filename.starts_with('.') {
            errors.push(EntryError::InvalidFilename(filename.to_string()));
        }
        if draft.instructors.iter().all(|i| PersonId::new(i).is_none()) {
            errors.push(EntryError::MissingRequiredField("instructors"));
        }
        if draft.abstract_text.trim().is_empty() {
            errors.push(EntryError::MissingRequiredField("abstract"));
        }
        errors
    }

    fn check_date(&self, date: NaiveDate) -> Option<EntryError> {
        if !self.window.contains(date) {
            return Some(EntryError::InvalidMeetingDate {
                date,
                reason: format!(
                    "outside the class range {} to {}",
                    self.window.class_start(),
                    self.window.class_end()
                ),
            });
        }
        self.window
            .holiday_on(date)
            .map(|holiday| EntryError::InvalidMeetingDate {
                date,
                reason: format!("falls on {}", holiday.label()),
            })
    }

    fn instructors(
        &self,
        index: usize,
        draft: &MeetingDraft,
        warnings: &mut Vec<ReconcileWarning>,
    ) -> Vec<PersonId> {
        let mut people: Vec<PersonId> = Vec::with_capacity(draft.instructors.len());
        for person in draft.instructors.iter().filter_map(|raw| PersonId::new(raw)) {
            if people.contains(&person) {
                continue;
            }
            if !self.group.roster.is_member(&person) {
                warnings.push(ReconcileWarning::UnknownInstructor {
                    index,
                    person: person.clone(),
                });
            }
            people.push(person);
        }
        people
    }
}
