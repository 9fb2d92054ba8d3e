//! Command handlers
//!
//! Each handler runs one use case and renders its result, either as
//! terminal text or as NDJSON events with `--json`. Handlers return
//! `Ok(false)` when the command ran but found problems, so `main` can
//! exit non-zero without printing an error.

mod check;
mod export;
mod remove;
mod schedule;
mod seed;
mod sort;
mod touch;

pub use check::cmd_check;
pub use export::cmd_export;
pub use remove::cmd_remove;
pub use schedule::cmd_schedule;
pub use seed::cmd_seed;
pub use sort::cmd_sort;
pub use touch::cmd_touch;

use anyhow::Result;

use autobot::application::GroupWorkspace;
use autobot::config::Config;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::primitives::icon::Icon;

/// Everything a handler needs besides its own arguments
pub struct Invocation {
    pub config: Config,
    pub workspace: GroupWorkspace,
    pub ui: UiContext,
}

impl Invocation {
    /// Start event in JSON mode, header otherwise
    pub fn start(&self, command: &str, icon: Icon, title: &str) -> Result<()> {
        if self.ui.json {
            emit_event(&StartEvent::new(command, &self.workspace))?;
        } else {
            let header = CommandHeader::for_workspace(icon, title, &self.workspace);
            println!("{}", header.render(self.ui.color, self.ui.unicode));
        }
        Ok(())
    }

    pub fn complete(&self, command: &str, success: bool) -> Result<bool> {
        if self.ui.json {
            emit_event(&CompleteEvent::new(command, success))?;
        }
        Ok(success)
    }
}
