use autobot::application::ScheduleReport;
use autobot::domain::services::ScheduleSlot;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn render_slot(slot: &ScheduleSlot, supports_color: bool, supports_unicode: bool) -> String {
    let date = slot.date.format("%a %Y-%m-%d");
    match slot.index {
        Some(index) => format!("  {:>3}  {}\n", index + 1, date),
        None => ColoredText::dim(format!(
            "  {:>3}  {}  {} {}\n",
            Icon::Pending.render(supports_unicode),
            date,
            "no meeting:",
            slot.holiday.as_deref().unwrap_or("holiday")
        ))
        .render(supports_color),
    }
}

pub fn render_schedule(
    report: &ScheduleReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let window = &report.window;
    let mut out = format!(
        "Classes {} to {}, meetings on {}\n\n",
        window.class_start(),
        window.class_end(),
        report.group.schedule.weekday
    );

    for slot in &report.slots {
        out.push_str(&render_slot(slot, supports_color, supports_unicode));
    }

    let meetings = report.slots.iter().filter(|s| s.index.is_some()).count();
    out.push_str(&format!("\n{meetings} meetings\n"));
    out
}
