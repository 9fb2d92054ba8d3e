//! Applying a directory plan
//!
//! Renames run in two phases: every source first moves to a temporary name,
//! then every temporary name moves to its target. A set of renames that
//! swaps names therefore never overwrites a directory.

use std::path::Path;

use crate::domain::ports::MeetingDirectories;
use crate::domain::services::{filename_of_slug, DirectoryAction, DirectoryPlan};
use crate::infrastructure::fs::RENAME_TEMP_PREFIX;

use super::result::{TouchOutcome, TouchStatus};

/// Outcomes for `plan` without touching the disk
pub(super) fn preview(plan: &DirectoryPlan) -> Vec<TouchOutcome> {
    plan.entries
        .iter()
        .map(|entry| {
            let status = match &entry.outcome {
                Err(conflict) => TouchStatus::Conflict(conflict.clone()),
                Ok(action) if action.is_noop() => TouchStatus::Unchanged,
                Ok(_) => TouchStatus::Planned,
            };
            TouchOutcome::new(
                entry.ordinal,
                entry.id.clone(),
                entry.slug.clone(),
                entry.action().cloned(),
                status,
            )
        })
        .collect()
}

/// Carry out `plan` under `parent`
pub(super) fn apply<MD: MeetingDirectories>(
    dirs: &MD,
    parent: &Path,
    plan: &DirectoryPlan,
) -> Vec<TouchOutcome> {
    let mut outcomes = preview(plan);

    // Phase 1: move rename sources out of the way
    let mut staged: Vec<(usize, String)> = Vec::new();
    for (i, entry) in plan.entries.iter().enumerate() {
        let Some(DirectoryAction::Rename { from, .. }) = entry.action() else {
            continue;
        };
        if from.starts_with(RENAME_TEMP_PREFIX) {
            // left over from an interrupted run
            staged.push((i, from.clone()));
            continue;
        }
        let temp = format!("{RENAME_TEMP_PREFIX}{}", entry.id.short());
        match dirs.rename(parent, from, &temp) {
            Ok(()) => staged.push((i, temp)),
            Err(e) => outcomes[i].status = TouchStatus::Failed(e.to_string()),
        }
    }

    // Phase 2: temporary names to targets, then same-stem files inside
    for (i, temp) in staged {
        let Some(DirectoryAction::Rename { from, to }) = plan.entries[i].action() else {
            continue;
        };
        if let Err(e) = dirs.rename(parent, &temp, to) {
            outcomes[i].status = TouchStatus::Failed(e.to_string());
            continue;
        }
        outcomes[i].status = TouchStatus::Applied;

        let (Some(old), Some(new)) = (filename_of_slug(from), filename_of_slug(to)) else {
            continue;
        };
        if old == new {
            continue;
        }
        match dirs.rename_children(&parent.join(to), old, new) {
            Ok(n) => outcomes[i].renamed_files = n,
            Err(e) => {
                tracing::warn!(dir = %to, error = %e, "renamed directory but not its files");
                outcomes[i].status = TouchStatus::Failed(e.to_string());
            }
        }
    }

    // Phase 3: creates
    for (i, entry) in plan.entries.iter().enumerate() {
        let Some(DirectoryAction::Create { name }) = entry.action() else {
            continue;
        };
        outcomes[i].status = match dirs.create(parent, name, &entry.id) {
            Ok(()) => TouchStatus::Applied,
            Err(e) => TouchStatus::Failed(e.to_string()),
        };
    }

    outcomes
}
