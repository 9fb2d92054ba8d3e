use anyhow::Result;

use autobot::application::SortOptions;
use autobot::presentation::create_sort_use_case;

use super::Invocation;
use crate::ui::json::emit_event;
use crate::ui::json::events::SortedEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::sort::render_sort;

pub fn cmd_sort(inv: &Invocation, dry_run: bool) -> Result<bool> {
    let title = if dry_run {
        "Autobot Sort (dry run)"
    } else {
        "Autobot Sort"
    };
    inv.start("sort", Icon::Diff, title)?;

    let options = SortOptions { dry_run };
    let result = create_sort_use_case(&inv.config).execute(&inv.workspace, &options)?;

    if inv.ui.json {
        emit_event(&SortedEvent {
            event: "sorted",
            moved: result.moved,
            changed: result.changed(),
            written: result.written,
            diff: (dry_run && result.changed()).then(|| result.diff()),
        })?;
    } else {
        print!(
            "{}",
            render_sort(&result, dry_run, inv.ui.color, inv.ui.unicode)
        );
    }

    inv.complete("sort", true)
}
