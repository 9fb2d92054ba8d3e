use autobot::application::{SortResult, SYLLABUS_FILE};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::components::diff::render_unified_diff_with_line_numbers;

pub fn render_sort(
    result: &SortResult,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !result.changed() {
        let summary = ResultSummary::success("Syllabus already in date order");
        out.push_str(&summary.render(supports_color, supports_unicode));
        return out;
    }

    if dry_run {
        out.push_str(&render_unified_diff_with_line_numbers(
            SYLLABUS_FILE,
            &result.before,
            &result.after,
            supports_color,
        ));
        out.push('\n');
    }

    let mut summary = if dry_run {
        ResultSummary::success("Dry run - syllabus.yml not written")
    } else {
        ResultSummary::success("Syllabus sorted")
    };
    summary.add_stat("meetings moved", result.moved);
    summary.add_stat("meetings", result.meetings.len());
    if !dry_run {
        summary.with_next_step("run touch to rename the meeting directories");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
