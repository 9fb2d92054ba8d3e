//! Touch options

use crate::application::selection::MeetingSelector;

/// Options for the touch operation
#[derive(Debug, Clone, Default)]
pub struct TouchOptions {
    pub selector: MeetingSelector,
    /// Plan only; nothing is created, renamed, or saved
    pub dry_run: bool,
}

impl TouchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: MeetingSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
