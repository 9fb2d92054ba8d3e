use anyhow::Result;
use serde::Serialize;

use autobot::application::{ExportManifest, MeetingSelector};
use autobot::presentation::create_export_use_case;

use super::Invocation;
use crate::ui::json::emit_event;
use crate::ui::json::events::{EntryFailedEvent, StartEvent, WarningEvent};
use crate::ui::primitives::icon::Icon;

#[derive(Serialize)]
struct ManifestEvent<'a> {
    event: &'static str,
    #[serde(flatten)]
    manifest: &'a ExportManifest,
}

/// Export always writes JSON; `--json` switches from one pretty document
/// to the event stream.
pub fn cmd_export(inv: &Invocation, selector: &MeetingSelector) -> Result<bool> {
    if inv.ui.json {
        emit_event(&StartEvent::new("export", &inv.workspace))?;
    }

    let result = create_export_use_case(&inv.config).execute(&inv.workspace, selector)?;

    if inv.ui.json {
        emit_event(&ManifestEvent {
            event: "manifest",
            manifest: &result.manifest,
        })?;
        for failure in &result.failures {
            emit_event(&EntryFailedEvent::new(failure))?;
        }
        for warning in &result.warnings {
            emit_event(&WarningEvent::reconcile(warning))?;
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&result.manifest)?);
        let ui = &inv.ui;
        for failure in &result.failures {
            let errors: Vec<String> = failure.errors.iter().map(ToString::to_string).collect();
            eprintln!(
                "{} entry #{} left out: {}",
                Icon::Error.colored(ui.color, ui.unicode),
                failure.index + 1,
                errors.join("; ")
            );
        }
        for warning in &result.warnings {
            eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }
    }

    inv.complete("export", result.is_success())
}
