use anyhow::Result;

use autobot::presentation::create_schedule_use_case;

use super::Invocation;
use crate::ui::json::emit_event;
use crate::ui::json::events::SlotEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::schedule::render_schedule;

pub fn cmd_schedule(inv: &Invocation) -> Result<bool> {
    inv.start("schedule", Icon::Calendar, "Autobot Schedule")?;

    let report = create_schedule_use_case(&inv.config).execute(&inv.workspace)?;

    if inv.ui.json {
        for slot in &report.slots {
            emit_event(&SlotEvent::new(slot))?;
        }
    } else {
        print!("{}", render_schedule(&report, inv.ui.color, inv.ui.unicode));
    }

    inv.complete("schedule", true)
}
