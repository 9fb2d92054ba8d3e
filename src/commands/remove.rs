use anyhow::{bail, Result};
use dialoguer::Confirm;

use autobot::application::MeetingSelector;
use autobot::presentation::create_remove_use_case;
use autobot::AutobotError;

use super::Invocation;
use crate::ui::json::emit_event;
use crate::ui::json::events::RemovedEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::prompt_theme;
use crate::ui::views::remove::{render_removal_preview, render_removed};

pub fn cmd_remove(inv: &Invocation, selector: &MeetingSelector, yes: bool) -> Result<bool> {
    inv.start("remove", Icon::Trash, "Autobot Remove")?;

    let use_case = create_remove_use_case(&inv.config);
    let target = use_case.preview(&inv.workspace, selector)?;
    let ui = &inv.ui;

    if !ui.json {
        print!("{}", render_removal_preview(&target, ui.color, ui.unicode));
    }

    if !yes {
        if !ui.interactive {
            bail!("refusing to remove {} without --yes", target.meeting.slug());
        }
        let theme = prompt_theme(ui.color);
        let confirmed = Confirm::with_theme(theme.as_ref())
            .with_prompt(format!("Remove {}?", target.meeting.slug()))
            .default(false)
            .interact()?;
        if !confirmed {
            return Err(AutobotError::Aborted.into());
        }
    }

    let result = use_case.execute(&inv.workspace, &target)?;

    if ui.json {
        emit_event(&RemovedEvent {
            event: "removed",
            slug: result.meeting.slug(),
            directories: &result.removed_directories,
            remaining: result.remaining,
        })?;
    } else {
        print!("\n{}", render_removed(&result, ui.color, ui.unicode));
    }

    inv.complete("remove", true)
}
