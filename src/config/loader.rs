//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AutobotError, AutobotResult};

use super::types::Config;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG: &str = "autobot.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AutobotResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AutobotError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file to use: project first, then user, else defaults
///
/// Environment overrides are applied on top of whichever was found.
pub fn discover(project_dir: &Path) -> AutobotResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(project_dir.join(PROJECT_CONFIG)),
        user_config_path(),
    ];

    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (AUTOBOT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Some(root) = non_empty_env("AUTOBOT_ROOT") {
        config.root = PathBuf::from(root);
    }

    if let Some(url) = non_empty_env("AUTOBOT_CALENDAR_URL") {
        config.calendar.url = url;
    }

    if let Some(file) = non_empty_env("AUTOBOT_CALENDAR_FILE") {
        config.calendar.file = Some(PathBuf::from(file));
    }

    if let Some(marker) = non_empty_env("AUTOBOT_MARKER") {
        config.marker = marker;
    }

    config
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// `~/.config/autobot/config.toml` (honors `XDG_CONFIG_HOME`)
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("autobot").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "root",
        "marker",
        "calendar",
        "url",
        "file",
        "timeout_secs",
        "retries",
        "holidays",
        "spring",
        "summer",
        "fall",
        "output",
        "color",
        "unicode",
    ];

    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut curr = vec![i + 1; b.len() + 1];
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != *bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev = curr;
    }

    prev[b.len()]
}
