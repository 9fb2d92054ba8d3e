//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Season;
use crate::error::AutobotResult;

use super::loader::{self, ConfigWarning};

/// Institution calendar feed used when nothing else is configured
pub const DEFAULT_CALENDAR_URL: &str = "https://calendar.ucf.edu";

/// Marker file written into every meeting directory
pub const DEFAULT_MARKER: &str = ".metadata";

/// Calendar source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Base URL; the feed lives at `{url}/json/{year}/{season}`
    #[serde(default = "default_calendar_url")]
    pub url: String,

    /// Offline feed file; takes precedence over `url` when set
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default)]
    pub holidays: HolidayConfig,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            url: default_calendar_url(),
            file: None,
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
            holidays: HolidayConfig::default(),
        }
    }
}

fn default_calendar_url() -> String {
    DEFAULT_CALENDAR_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retries() -> u32 {
    3
}

/// Event names (matched by substring) that cancel meetings, per season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayConfig {
    #[serde(default)]
    pub spring: Vec<String>,

    #[serde(default)]
    pub summer: Vec<String>,

    #[serde(default)]
    pub fall: Vec<String>,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            spring: vec![
                "Spring Break".to_string(),
                "Martin Luther King Jr. Day".to_string(),
            ],
            summer: Vec::new(),
            fall: vec![
                "Veterans Day".to_string(),
                "Labor Day".to_string(),
                "Thanksgiving".to_string(),
            ],
        }
    }
}

impl HolidayConfig {
    pub fn for_season(&self, season: Season) -> &[String] {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Fall => &self.fall,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one folder per group
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Marker file name inside meeting directories
    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            marker: default_marker(),
            calendar: CalendarConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AutobotResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AutobotResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn discover(project_dir: &Path) -> AutobotResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_dir)
    }

    /// Apply environment variable overrides (AUTOBOT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
