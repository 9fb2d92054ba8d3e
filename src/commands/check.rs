use anyhow::Result;

use autobot::presentation::create_check_use_case;

use super::Invocation;
use crate::ui::json::emit_event;
use crate::ui::json::events::{EntryFailedEvent, MeetingEvent, WarningEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::check::{render_check_report, render_check_summary};

pub fn cmd_check(inv: &Invocation) -> Result<bool> {
    inv.start("check", Icon::Check, "Autobot Check")?;

    let report = create_check_use_case(&inv.config).execute(&inv.workspace)?;
    let rec = &report.reconciliation;

    if inv.ui.json {
        for meeting in &rec.meetings {
            emit_event(&MeetingEvent::new(meeting))?;
        }
        for failure in &rec.failures {
            emit_event(&EntryFailedEvent::new(failure))?;
        }
        for warning in &rec.warnings {
            emit_event(&WarningEvent::reconcile(warning))?;
        }
    } else {
        let ui = &inv.ui;
        print!("{}", render_check_report(&report, ui.verbose, ui.color, ui.unicode));
        print!("\n{}", render_check_summary(&report, ui.color, ui.unicode));
    }

    inv.complete("check", report.is_success())
}
