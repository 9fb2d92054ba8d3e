use autobot::application::{SeedResult, SYLLABUS_FILE};

use crate::ui::blocks::summary::ResultSummary;

pub fn render_seed(result: &SeedResult, supports_color: bool, supports_unicode: bool) -> String {
    let title = if result.overwrote {
        format!("Reseeded {}", result.group.label())
    } else {
        format!("Seeded {}", result.group.label())
    };
    let mut summary = ResultSummary::success(title);
    summary.add_stat("placeholder meetings", result.schedule.len());
    if let (Some(first), Some(last)) = (result.schedule.first(), result.schedule.last()) {
        summary.add_info(format!("meetings run from {first} to {last}"));
    }
    summary.with_next_step(format!(
        "name the meetings in {}, then run touch",
        result.dir.join(SYLLABUS_FILE).display()
    ));
    summary.render(supports_color, supports_unicode)
}
