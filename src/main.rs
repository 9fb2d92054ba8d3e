//! Autobot CLI - syllabus scheduling and meeting directory management
//!
//! Usage: autobot <GROUP> <COMMAND>
//!
//! Commands:
//!   seed      Create a semester folder with a placeholder syllabus
//!   check     Reconcile the syllabus and report every meeting
//!   schedule  Show the generated meeting dates
//!   sort      Reorder the syllabus by date
//!   touch     Create and rename meeting directories
//!   export    Print the selected meetings as JSON
//!   remove    Delete one meeting and its directory

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use autobot::application::{GroupWorkspace, SeedOptions};
use autobot::presentation::cli::{Cli, Commands};
use autobot::{Config, Semester};

use commands::Invocation;
use ui::context::UiContext;
use ui::json::emit_event;
use ui::json::events::ErrorEvent;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            if cli.json {
                let _ = emit_event(&ErrorEvent::new(
                    cli.command.operation().name(),
                    format!("{err:#}"),
                ));
            } else {
                eprintln!("Error: {err:#}");
            }
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from `warn`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("autobot={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<bool> {
    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::discover(&cwd)?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }

    let semester = match cli.semester {
        Some(semester) => semester,
        None => Semester::containing(chrono::Local::now().date_naive())?,
    };
    tracing::debug!(root = %config.root.display(), %semester, group = %cli.group, "resolved workspace");

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    let workspace = GroupWorkspace::new(config.root.clone(), cli.group.clone(), semester);
    let inv = Invocation {
        config,
        workspace,
        ui,
    };

    match &cli.command {
        Commands::Seed {
            room,
            wday,
            start_offset,
            count,
            time,
            directors,
            coordinators,
            overwrite,
        } => {
            let options = SeedOptions {
                room: room.clone(),
                weekday: *wday,
                start_offset_weeks: *start_offset,
                count: *count,
                time: *time,
                directors: directors.clone(),
                coordinators: coordinators.clone(),
                overwrite: *overwrite,
            };
            commands::cmd_seed(&inv, &options)
        }
        Commands::Check => commands::cmd_check(&inv),
        Commands::Schedule => commands::cmd_schedule(&inv),
        Commands::Sort { dry_run } => commands::cmd_sort(&inv, *dry_run),
        Commands::Touch { selection, dry_run } => {
            commands::cmd_touch(&inv, selection.selector(), *dry_run)
        }
        Commands::Export { selection } => commands::cmd_export(&inv, &selection.selector()),
        Commands::Remove { selection, yes } => {
            commands::cmd_remove(&inv, &selection.selector(), *yes)
        }
    }
}
