//! HTTP calendar source
//!
//! Fetches `{base_url}/json/{year}/{season}` with a blocking client,
//! retrying transient failures with exponential backoff.

use std::time::Duration;

use crate::domain::entities::CalendarWindow;
use crate::domain::ports::{CalendarError, CalendarResult, CalendarSource};
use crate::domain::value_objects::Semester;

use super::feed::parse_feed;
use crate::config::HolidayConfig;

const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Calendar source backed by the institution's JSON feed
pub struct HttpCalendarSource {
    base_url: String,
    timeout: Duration,
    retries: u32,
    holidays: HolidayConfig,
}

impl HttpCalendarSource {
    pub fn new(base_url: impl Into<String>, holidays: HolidayConfig) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            retries: 3,
            holidays,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Feed URL for a semester
    pub fn url_for(&self, semester: &Semester) -> String {
        format!(
            "{}/json/{}/{}",
            self.base_url.trim_end_matches('/'),
            semester.year(),
            semester.season().name()
        )
    }

    fn fetch_once(&self, client: &reqwest::blocking::Client, url: &str) -> Result<String, Attempt> {
        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() || e.is_connect() || e.is_request() {
                Attempt::Transient(e.to_string())
            } else {
                Attempt::Permanent(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(Attempt::Transient(format!("server returned {status}")));
        }
        if !status.is_success() {
            return Err(Attempt::Permanent(format!("server returned {status}")));
        }

        response
            .text()
            .map_err(|e| Attempt::Transient(e.to_string()))
    }
}

enum Attempt {
    Transient(String),
    Permanent(String),
}

impl CalendarSource for HttpCalendarSource {
    fn fetch(&self, semester: &Semester) -> CalendarResult<CalendarWindow> {
        let url = self.url_for(semester);
        let failed = |message: String| CalendarError::CalendarFetchFailed {
            location: url.clone(),
            message,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("autobot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| failed(format!("failed to create HTTP client: {e}")))?;

        let mut backoff = INITIAL_BACKOFF;
        let mut attempt = 0;
        let body = loop {
            attempt += 1;
            tracing::debug!(%url, attempt, "fetching calendar");
            match self.fetch_once(&client, &url) {
                Ok(body) => break body,
                Err(Attempt::Transient(message)) if attempt <= self.retries => {
                    tracing::warn!(%url, attempt, error = %message, "calendar fetch failed, retrying");
                    std::thread::sleep(backoff);
                    backoff *= 2;
                }
                Err(Attempt::Transient(message)) | Err(Attempt::Permanent(message)) => {
                    return Err(failed(message));
                }
            }
        };

        parse_feed(&body, self.holidays.for_season(semester.season()), &url)
    }

    fn describe(&self, semester: &Semester) -> String {
        self.url_for(semester)
    }
}
