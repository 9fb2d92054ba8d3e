//! Offline calendar source reading a saved feed document

use std::path::PathBuf;

use crate::domain::entities::CalendarWindow;
use crate::domain::ports::{CalendarError, CalendarResult, CalendarSource};
use crate::domain::value_objects::Semester;

use super::feed::parse_feed;
use crate::config::HolidayConfig;

/// Calendar source backed by a JSON file on disk
///
/// The path may contain `{year}` and `{season}` placeholders so one setting
/// can serve several semesters.
pub struct FileCalendarSource {
    path: PathBuf,
    holidays: HolidayConfig,
}

impl FileCalendarSource {
    pub fn new(path: impl Into<PathBuf>, holidays: HolidayConfig) -> Self {
        Self {
            path: path.into(),
            holidays,
        }
    }

    pub fn path_for(&self, semester: &Semester) -> PathBuf {
        let raw = self.path.to_string_lossy();
        if !raw.contains('{') {
            return self.path.clone();
        }
        PathBuf::from(
            raw.replace("{year}", &semester.year().to_string())
                .replace("{season}", semester.season().name()),
        )
    }
}

impl CalendarSource for FileCalendarSource {
    fn fetch(&self, semester: &Semester) -> CalendarResult<CalendarWindow> {
        let path = self.path_for(semester);
        let location = path.display().to_string();
        tracing::debug!(path = %location, "reading calendar file");

        let json = std::fs::read_to_string(&path).map_err(|e| CalendarError::CalendarFetchFailed {
            location: location.clone(),
            message: e.to_string(),
        })?;
        parse_feed(&json, self.holidays.for_season(semester.season()), &location)
    }

    fn describe(&self, semester: &Semester) -> String {
        self.path_for(semester).display().to_string()
    }
}
