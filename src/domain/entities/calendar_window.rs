//! Calendar window entity - a term's class range and its holidays
//!
//! Produced by a `CalendarSource`, read-only afterwards.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::services::ScheduleError;

/// An inclusive range of days without classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRange {
    start: NaiveDate,
    end: NaiveDate,
    label: String,
}

impl HolidayRange {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        label: impl Into<String>,
    ) -> Result<Self, ScheduleError> {
        let label = label.into();
        if end < start {
            return Err(ScheduleError::InvalidScheduleSpec(format!(
                "holiday '{label}' ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end, label })
    }

    /// A one-day holiday
    pub fn single(day: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            start: day,
            end: day,
            label: label.into(),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Inclusive on both endpoints
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Class date range of a term plus its holiday exclusions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarWindow {
    class_start: NaiveDate,
    class_end: NaiveDate,
    holiday_ranges: Vec<HolidayRange>,
}

impl CalendarWindow {
    pub fn new(
        class_start: NaiveDate,
        class_end: NaiveDate,
        mut holiday_ranges: Vec<HolidayRange>,
    ) -> Result<Self, ScheduleError> {
        if class_end < class_start {
            return Err(ScheduleError::InvalidScheduleSpec(format!(
                "classes end ({class_end}) before they begin ({class_start})"
            )));
        }
        holiday_ranges.sort_by_key(|h| (h.start, h.end));
        Ok(Self {
            class_start,
            class_end,
            holiday_ranges,
        })
    }

    pub fn class_start(&self) -> NaiveDate {
        self.class_start
    }

    pub fn class_end(&self) -> NaiveDate {
        self.class_end
    }

    /// Holiday ranges ordered by start date
    pub fn holiday_ranges(&self) -> &[HolidayRange] {
        &self.holiday_ranges
    }

    /// Whether `date` lies within the class range (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.class_start <= date && date <= self.class_end
    }

    /// The holiday `date` falls in, if any
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&HolidayRange> {
        self.holiday_ranges.iter().find(|h| h.contains(date))
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Whether a meeting may take place on `date`
    pub fn is_eligible(&self, date: NaiveDate) -> bool {
        self.contains(date) && !self.is_holiday(date)
    }
}
