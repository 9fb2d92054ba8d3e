use autobot::application::{RemovalTarget, RemoveResult};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// What is about to be deleted, shown before the confirmation prompt
pub fn render_removal_preview(
    target: &RemovalTarget,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let meeting = &target.meeting;
    let mut out = format!(
        "{} {}\n",
        Icon::Trash.colored(supports_color, supports_unicode),
        ColoredText::warning(format!("#{} {}", meeting.ordinal(), meeting.title()))
            .bold()
            .render(supports_color)
    );
    out.push_str(&format!("  syllabus entry {}\n", meeting.slug()));
    match &target.directory {
        Some(dir) => out.push_str(&format!("  directory {dir}/ and everything in it\n")),
        None => out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("no directory on disk").render(supports_color)
        )),
    }
    out
}

pub fn render_removed(result: &RemoveResult, supports_color: bool, supports_unicode: bool) -> String {
    let mut summary = ResultSummary::success(format!("Removed {}", result.meeting.slug()));
    summary.add_stat("directories deleted", result.removed_directories.len());
    summary.add_stat("meetings left", result.remaining);
    if result.remaining > 0 {
        summary.with_next_step("run touch to rename the remaining meeting directories");
    }
    summary.render(supports_color, supports_unicode)
}
