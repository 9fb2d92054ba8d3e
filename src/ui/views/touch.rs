use autobot::application::{TouchOutcome, TouchResult, TouchStatus};
use autobot::domain::services::DirectoryAction;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_outcome(outcome: &TouchOutcome, supports_color: bool, supports_unicode: bool) -> String {
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    let line = match (&outcome.status, &outcome.action) {
        (TouchStatus::Conflict(conflict), _) => {
            format!(
                "{} {} - {}",
                icon(Icon::Error),
                outcome.slug,
                ColoredText::error(conflict.to_string()).render(supports_color)
            )
        }
        (TouchStatus::Failed(message), _) => {
            format!(
                "{} {} - {}",
                icon(Icon::Error),
                outcome.slug,
                ColoredText::error(message.as_str()).render(supports_color)
            )
        }
        (_, Some(DirectoryAction::Create { name })) => {
            format!("{} {}", icon(Icon::Create), name)
        }
        (_, Some(DirectoryAction::Rename { from, to })) => {
            let mut line = format!(
                "{} {} {} {}",
                icon(Icon::Rename),
                ColoredText::dim(from.as_str()).render(supports_color),
                Icon::Rename.render(supports_unicode),
                to
            );
            if outcome.renamed_files > 0 {
                line.push_str(&format!(" ({} files renamed)", outcome.renamed_files));
            }
            line
        }
        (_, Some(DirectoryAction::NoOp { name })) => {
            ColoredText::dim(format!("{} {}", Icon::Success.render(supports_unicode), name))
                .render(supports_color)
        }
        (_, None) => outcome.slug.clone(),
    };
    format!("  {line}\n")
}

pub fn render_touch(
    result: &TouchResult,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for outcome in &result.outcomes {
        if outcome.status == TouchStatus::Unchanged && verbose == 0 {
            continue;
        }
        out.push_str(&render_outcome(outcome, supports_color, supports_unicode));
    }

    for failure in &result.failures {
        out.push_str(&format!(
            "  {} entry #{} skipped: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            failure.index + 1,
            failure
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        ));
    }
    if !out.is_empty() {
        out.push('\n');
    }

    let title = match (result.is_success(), result.dry_run) {
        (true, true) => "Dry run - nothing changed",
        (true, false) => "Meeting directories up to date",
        (false, _) => "Some meetings need attention",
    };
    let mut summary = if result.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };
    let (created, renamed) = if result.dry_run {
        ("to create", "to rename")
    } else {
        ("created", "renamed")
    };
    summary.add_stat(created, result.created());
    summary.add_stat(renamed, result.renamed());
    summary.add_stat("unchanged", result.unchanged());
    summary.add_stat("conflicts", result.conflicts());
    summary.add_stat("errors", result.errors());
    if result.minted > 0 && !result.dry_run {
        summary.add_stat("new ids saved to syllabus.yml", result.minted);
    }
    for orphan in &result.orphans {
        summary.add_warning(format!("'{orphan}' matches no syllabus entry (left in place)"));
    }
    if result.conflicts() > 0 {
        summary.with_next_step("move or mark the conflicting directories, then touch again");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
