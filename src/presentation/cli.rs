//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --root, --semester) are inherited by all subcommands
//! - The group comes before the subcommand: `autobot ai touch --date 2019-09-11`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::{MeetingSelector, Operation};
use crate::domain::entities::MeetingTime;
use crate::domain::value_objects::{MeetingDay, Semester};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Autobot - syllabus scheduling and meeting directory management
#[derive(Parser, Debug)]
#[command(name = "autobot")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'autobot <GROUP> seed' to start a new semester.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding one folder per group
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Semester shortcode, e.g. fa19 (defaults to the current semester)
    #[arg(long, global = true)]
    pub semester: Option<Semester>,

    /// Group name, e.g. ai or data-science
    pub group: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a semester folder with a placeholder syllabus
    Seed {
        /// Default room for every meeting
        #[arg(long)]
        room: String,

        /// Weekday the group meets on (mon..fri)
        #[arg(long)]
        wday: MeetingDay,

        /// Whole weeks after classes begin before the first meeting (0 = first week)
        #[arg(long, default_value_t = 0)]
        start_offset: u32,

        /// Number of meetings (defaults to every available week)
        #[arg(long)]
        count: Option<usize>,

        /// Meeting time slot, e.g. 1730-1845
        #[arg(long)]
        time: Option<MeetingTime>,

        /// Director handle (repeatable)
        #[arg(long = "director", required = true, value_name = "HANDLE")]
        directors: Vec<String>,

        /// Coordinator handle (repeatable)
        #[arg(long = "coordinator", value_name = "HANDLE")]
        coordinators: Vec<String>,

        /// Replace an existing overhead.yml and syllabus.yml
        #[arg(long)]
        overwrite: bool,
    },

    /// Reconcile the syllabus and report every meeting
    Check,

    /// Show the generated meeting dates
    Schedule,

    /// Reorder the syllabus by date
    Sort {
        /// Show the diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Create and rename meeting directories
    Touch {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the selected meetings as JSON
    Export {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Delete one meeting and its directory
    Remove {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    pub fn operation(&self) -> Operation {
        match self {
            Commands::Seed { .. } => Operation::Seed,
            Commands::Check => Operation::Check,
            Commands::Schedule => Operation::Schedule,
            Commands::Sort { .. } => Operation::Sort,
            Commands::Touch { .. } => Operation::Touch,
            Commands::Export { .. } => Operation::Export,
            Commands::Remove { .. } => Operation::Remove,
        }
    }
}

/// Which meetings a command applies to
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Every meeting (default)
    #[arg(long, conflicts_with_all = ["date", "name"])]
    pub all: bool,

    /// Meetings whose directory name contains this date, e.g. 2019-09-11
    #[arg(long, conflicts_with = "name")]
    pub date: Option<String>,

    /// Meeting with this filename, or whose directory name contains it
    #[arg(long)]
    pub name: Option<String>,
}

impl SelectionArgs {
    pub fn selector(&self) -> MeetingSelector {
        match (&self.date, &self.name) {
            (Some(date), _) => MeetingSelector::Date(date.clone()),
            (None, Some(name)) => MeetingSelector::Name(name.clone()),
            (None, None) => MeetingSelector::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_group_and_command() {
        assert!(Cli::try_parse_from(["autobot"]).is_err());
        assert!(Cli::try_parse_from(["autobot", "ai"]).is_err());
    }

    #[test]
    fn test_cli_parse_seed() {
        let cli = Cli::try_parse_from([
            "autobot",
            "ai",
            "seed",
            "--room",
            "HEC 119",
            "--wday",
            "wed",
            "--start-offset",
            "2",
            "--director",
            "JaneDoe",
            "--director",
            "jsmith",
        ])
        .unwrap();

        assert_eq!(cli.group, "ai");
        if let Commands::Seed {
            room,
            wday,
            start_offset,
            count,
            time,
            directors,
            overwrite,
            ..
        } = cli.command
        {
            assert_eq!(room, "HEC 119");
            assert_eq!(wday, MeetingDay::Wed);
            assert_eq!(start_offset, 2);
            assert_eq!(count, None);
            assert!(time.is_none());
            assert_eq!(directors, ["JaneDoe", "jsmith"]);
            assert!(!overwrite);
        } else {
            panic!("Expected Seed command");
        }
    }

    #[test]
    fn test_cli_seed_requires_a_director() {
        let result = Cli::try_parse_from(["autobot", "ai", "seed", "--room", "X", "--wday", "wed"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_seed_rejects_weekend() {
        let result = Cli::try_parse_from([
            "autobot", "ai", "seed", "--room", "X", "--wday", "sat", "--director", "a",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["autobot", "ai", "check", "--semester", "fa19", "--json", "-vv"])
                .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.semester.unwrap().shortcode(), "fa19");
        assert_eq!(cli.command.operation(), Operation::Check);
    }

    #[test]
    fn test_cli_bad_semester() {
        assert!(Cli::try_parse_from(["autobot", "ai", "check", "--semester", "xx19"]).is_err());
    }

    #[test]
    fn test_cli_touch_selection() {
        let cli =
            Cli::try_parse_from(["autobot", "ai", "touch", "--date", "2019-09-11", "--dry-run"])
                .unwrap();
        if let Commands::Touch { selection, dry_run } = cli.command {
            assert!(dry_run);
            assert_eq!(
                selection.selector(),
                MeetingSelector::Date("2019-09-11".to_string())
            );
        } else {
            panic!("Expected Touch command");
        }
    }

    #[test]
    fn test_cli_selection_defaults_to_all() {
        let cli = Cli::try_parse_from(["autobot", "ai", "export"]).unwrap();
        if let Commands::Export { selection } = cli.command {
            assert_eq!(selection.selector(), MeetingSelector::All);
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cli_selection_flags_conflict() {
        let result =
            Cli::try_parse_from(["autobot", "ai", "remove", "--date", "2019-09", "--name", "gans"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["autobot", "ai", "touch", "--all", "--name", "gans"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_remove_yes() {
        let cli = Cli::try_parse_from(["autobot", "ai", "remove", "--name", "gans", "-y"]).unwrap();
        if let Commands::Remove { selection, yes } = cli.command {
            assert!(yes);
            assert_eq!(selection.selector(), MeetingSelector::Name("gans".to_string()));
        } else {
            panic!("Expected Remove command");
        }
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["autobot", "--color", "never", "ai", "schedule"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
