use anyhow::Result;

use autobot::application::{MeetingSelector, TouchOptions};
use autobot::presentation::create_touch_use_case;

use super::Invocation;
use crate::ui::json::emit_event;
use crate::ui::json::events::{DirectoryEvent, EntryFailedEvent, OrphanEvent, WarningEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::touch::render_touch;

pub fn cmd_touch(inv: &Invocation, selector: MeetingSelector, dry_run: bool) -> Result<bool> {
    let title = if dry_run {
        "Autobot Touch (dry run)"
    } else {
        "Autobot Touch"
    };
    inv.start("touch", Icon::Create, title)?;

    let options = TouchOptions::new()
        .with_selector(selector)
        .with_dry_run(dry_run);
    let result = create_touch_use_case(&inv.config).execute(&inv.workspace, &options)?;

    if inv.ui.json {
        for outcome in &result.outcomes {
            emit_event(&DirectoryEvent::new(outcome))?;
        }
        for failure in &result.failures {
            emit_event(&EntryFailedEvent::new(failure))?;
        }
        for warning in &result.warnings {
            emit_event(&WarningEvent::reconcile(warning))?;
        }
        for orphan in &result.orphans {
            emit_event(&OrphanEvent::new(orphan))?;
        }
    } else {
        let ui = &inv.ui;
        for warning in &result.warnings {
            println!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }
        print!("{}", render_touch(&result, ui.verbose, ui.color, ui.unicode));
    }

    inv.complete("touch", result.is_success())
}
