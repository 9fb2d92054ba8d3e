use anyhow::Result;

use autobot::application::SeedOptions;
use autobot::presentation::create_seed_use_case;

use super::Invocation;
use crate::ui::json::emit_event;
use crate::ui::json::events::SeededEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::seed::render_seed;

pub fn cmd_seed(inv: &Invocation, options: &SeedOptions) -> Result<bool> {
    inv.start("seed", Icon::Create, "Autobot Seed")?;

    let result = create_seed_use_case(&inv.config).execute(&inv.workspace, options)?;

    if inv.ui.json {
        emit_event(&SeededEvent {
            event: "seeded",
            dir: &result.dir,
            meetings: result.schedule.len(),
            first: result.schedule.first().copied(),
            last: result.schedule.last().copied(),
            overwrote: result.overwrote,
        })?;
    } else {
        print!("{}", render_seed(&result, inv.ui.color, inv.ui.unicode));
    }

    inv.complete("seed", true)
}
