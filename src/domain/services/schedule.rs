//! Schedule generation service
//!
//! Pure date arithmetic: turns a calendar window and a weekly meeting spec
//! into the ordered list of meeting dates. No I/O.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{CalendarWindow, ScheduleSpec};
use crate::domain::value_objects::MeetingDay;

/// Schedule generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid schedule: {0}")]
    InvalidScheduleSpec(String),

    #[error("requested {requested} meetings but the calendar only has room for {available}")]
    InsufficientScheduleWindow { requested: usize, available: usize },
}

/// One week of the generated schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    /// 0-based meeting position; `None` for a week skipped for a holiday
    pub index: Option<usize>,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
}

/// Pure schedule generator
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Generate weekly meeting dates
    ///
    /// The first candidate is the first `weekday` on or after
    /// `class_start + 7 * start_offset_weeks`. Candidates advance a week at a
    /// time up to `class_end`; holiday dates are dropped.
    pub fn generate(
        window: &CalendarWindow,
        weekday: MeetingDay,
        start_offset_weeks: u32,
        count: Option<usize>,
    ) -> Result<Vec<NaiveDate>, ScheduleError> {
        let anchor = window
            .class_start()
            .checked_add_days(Days::new(7 * u64::from(start_offset_weeks)))
            .ok_or_else(|| {
                ScheduleError::InvalidScheduleSpec(format!(
                    "start offset of {start_offset_weeks} weeks overflows the calendar"
                ))
            })?;

        let shift = (7 + weekday.weekday().num_days_from_monday()
            - anchor.weekday().num_days_from_monday())
            % 7;
        let mut candidate = anchor.checked_add_days(Days::new(u64::from(shift)));

        let mut dates = Vec::new();
        while let Some(date) = candidate {
            if date > window.class_end() || count.is_some_and(|n| dates.len() >= n) {
                break;
            }
            if !window.is_holiday(date) {
                dates.push(date);
            }
            candidate = date.checked_add_days(Days::new(7));
        }

        match count {
            Some(requested) if dates.len() < requested => {
                Err(ScheduleError::InsufficientScheduleWindow {
                    requested,
                    available: dates.len(),
                })
            }
            _ => Ok(dates),
        }
    }

    /// Generate from a group's schedule spec
    pub fn from_spec(
        window: &CalendarWindow,
        spec: &ScheduleSpec,
    ) -> Result<Vec<NaiveDate>, ScheduleError> {
        Self::generate(window, spec.weekday, spec.start_offset_weeks, spec.count)
    }

    /// Generated dates as display slots, with the holiday weeks between them
    pub fn slots(
        window: &CalendarWindow,
        spec: &ScheduleSpec,
    ) -> Result<Vec<ScheduleSlot>, ScheduleError> {
        let dates = Self::from_spec(window, spec)?;
        let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
            return Ok(Vec::new());
        };

        let mut slots = Vec::with_capacity(dates.len());
        let mut meetings = dates.iter().enumerate().peekable();
        let mut week = Some(first);
        while let Some(date) = week.filter(|d| *d <= last) {
            match meetings.peek() {
                Some(&(index, &next)) if next == date => {
                    meetings.next();
                    slots.push(ScheduleSlot {
                        index: Some(index),
                        date,
                        holiday: None,
                    });
                }
                _ => slots.push(ScheduleSlot {
                    index: None,
                    date,
                    holiday: window.holiday_on(date).map(|h| h.label().to_string()),
                }),
            }
            week = date.checked_add_days(Days::new(7));
        }
        Ok(slots)
    }
}
