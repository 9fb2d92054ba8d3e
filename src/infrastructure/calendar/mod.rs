//! Calendar source adapters

mod feed;
mod file;
mod http;

pub use feed::parse_feed;
pub use file::FileCalendarSource;
pub use http::HttpCalendarSource;

use std::time::Duration;

use crate::config::CalendarConfig;
use crate::domain::ports::CalendarSource;

/// Build the calendar source described by the configuration
///
/// A configured file wins over the URL.
pub fn from_config(config: &CalendarConfig) -> Box<dyn CalendarSource> {
    match &config.file {
        Some(path) => Box::new(FileCalendarSource::new(path.clone(), config.holidays.clone())),
        None => Box::new(
            HttpCalendarSource::new(config.url.clone(), config.holidays.clone())
                .with_timeout(Duration::from_secs(config.timeout_secs))
                .with_retries(config.retries),
        ),
    }
}
