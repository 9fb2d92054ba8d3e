//! Configuration module for autobot
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AUTOBOT_*)
//! 3. Project config (./autobot.toml)
//! 4. User config (~/.config/autobot/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG};
pub use types::{
    CalendarConfig, ColorMode, Config, HolidayConfig, OutputConfig, DEFAULT_CALENDAR_URL,
    DEFAULT_MARKER,
};
