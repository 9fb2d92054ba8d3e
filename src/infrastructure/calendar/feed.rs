//! Academic calendar event feed
//!
//! The feed is `{"terms": [{"events": [{"summary", "dtstart", "dtend"}]}]}`.
//! Only the first term is read. `Classes Begin` / `Classes End` bound the
//! window; configured holiday names are matched as substrings of `summary`.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::entities::{CalendarWindow, HolidayRange};
use crate::domain::ports::{CalendarError, CalendarResult};

const CLASSES_BEGIN: &str = "Classes Begin";
const CLASSES_END: &str = "Classes End";

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    terms: Vec<Term>,
}

#[derive(Debug, Deserialize)]
struct Term {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct Event {
    summary: String,
    dtstart: String,
    #[serde(default)]
    dtend: Option<String>,
}

/// Parse a feed document into a calendar window
pub fn parse_feed(json: &str, holidays: &[String], location: &str) -> CalendarResult<CalendarWindow> {
    let malformed = |message: String| CalendarError::MalformedFeed {
        location: location.to_string(),
        message,
    };

    let feed: Feed = serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;
    let events = feed
        .terms
        .into_iter()
        .next()
        .map(|term| term.events)
        .ok_or_else(|| malformed("feed contains no terms".to_string()))?;

    let find_start = |needle: &str| -> CalendarResult<NaiveDate> {
        let event = events
            .iter()
            .find(|e| e.summary.contains(needle))
            .ok_or_else(|| malformed(format!("no '{needle}' event")))?;
        parse_day(&event.dtstart).ok_or_else(|| malformed(format!("bad date '{}'", event.dtstart)))
    };
    let class_start = find_start(CLASSES_BEGIN)?;
    let class_end = find_start(CLASSES_END)?;

    let mut ranges = Vec::new();
    for name in holidays {
        let matching: Vec<&Event> = events.iter().filter(|e| e.summary.contains(name.as_str())).collect();
        if matching.is_empty() {
            tracing::warn!(holiday = %name, %location, "holiday not found in calendar feed");
            continue;
        }
        for event in matching {
            let start = parse_day(&event.dtstart)
                .ok_or_else(|| malformed(format!("bad date '{}'", event.dtstart)))?;
            let end = match event.dtend.as_deref().filter(|s| !s.trim().is_empty()) {
                Some(raw) => parse_day(raw).ok_or_else(|| malformed(format!("bad date '{raw}'")))?,
                None => start,
            };
            let range = HolidayRange::new(start, end, event.summary.trim())
                .map_err(|e| malformed(e.to_string()))?;
            ranges.push(range);
        }
    }

    CalendarWindow::new(class_start, class_end, ranges).map_err(|e| malformed(e.to_string()))
}

/// Date part of an ISO timestamp like `2019-08-26T00:00:00Z`
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}
