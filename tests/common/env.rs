//! Test environment builder for isolated autobot testing.
//!
//! Provides `TestEnv` - a temp groups root, a temp config home so the
//! developer's own config never leaks in, and a fixture calendar file.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::FALL_2019_FEED;

/// Result of running an autobot CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not a JSON line: {line:?} ({e})"))
            })
            .collect()
    }
}

/// Isolated test environment; every run targets group `ai` in fall 2019
pub struct TestEnv {
    /// Groups root (`AUTOBOT_ROOT`) and working directory
    pub root: TempDir,
    /// Holds the calendar fixture and stands in for the config home
    pub home: TempDir,
    calendar: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create groups root");
        let home = tempfile::tempdir().expect("Failed to create home dir");
        let calendar = home.path().join("fall-2019.json");
        std::fs::write(&calendar, FALL_2019_FEED).expect("Failed to write calendar fixture");

        Self {
            root,
            home,
            calendar,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_autobot")),
        }
    }

    /// `ai/fa19` under the groups root
    pub fn group_dir(&self) -> PathBuf {
        self.root.path().join("ai").join("fa19")
    }

    pub fn group_path(&self, relative: &str) -> PathBuf {
        self.group_dir().join(relative)
    }

    /// Run `autobot --semester fa19 ai <args>`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_raw(&[&["--semester", "fa19", "ai"], args].concat())
    }

    /// Run autobot with exactly `args`
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .args(args)
            .env("AUTOBOT_ROOT", self.root.path())
            .env("AUTOBOT_CALENDAR_FILE", &self.calendar)
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute autobot");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Seed four Wednesday meetings from Sep 11
    pub fn seed(&self) {
        let result = self.run(&[
            "seed",
            "--room",
            "HEC 119",
            "--wday",
            "wed",
            "--start-offset",
            "2",
            "--count",
            "4",
            "--director",
            "JaneDoe",
        ]);
        assert!(result.is_success(), "seed failed:\n{}", result.combined_output());
    }

    /// Seed, then replace the placeholder syllabus with `content`
    pub fn seed_with_syllabus(&self, content: &str) {
        self.seed();
        self.write_syllabus(content);
    }

    pub fn write_syllabus(&self, content: &str) {
        std::fs::write(self.group_path("syllabus.yml"), content).expect("Failed to write syllabus");
    }

    pub fn read_syllabus(&self) -> String {
        std::fs::read_to_string(self.group_path("syllabus.yml")).expect("Failed to read syllabus")
    }

    /// Directory names under the semester folder, sorted, dotfiles skipped
    pub fn meeting_dirs(&self) -> Vec<String> {
        list_dirs(&self.group_dir())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn list_dirs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|read| {
            read.flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| !name.starts_with('.'))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
