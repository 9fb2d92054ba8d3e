use autobot::application::CheckReport;
use autobot::domain::entities::{Meeting, ValueSource};
use autobot::domain::services::ReconcileWarning;

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::summary::ResultSummary;

fn source_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Explicit => "from syllabus",
        ValueSource::Scheduled => "from schedule",
        ValueSource::GroupDefault => "group default",
    }
}

fn warning_index(warning: &ReconcileWarning) -> usize {
    match warning {
        ReconcileWarning::UnknownInstructor { index, .. }
        | ReconcileWarning::Placeholder { index, .. } => *index,
    }
}

fn meeting_item(meeting: &Meeting, warned: bool) -> CheckItem {
    let status = if warned {
        CheckStatus::Warning
    } else {
        CheckStatus::Pass
    };
    CheckItem::new(meeting.slug(), status, meeting.title())
        .with_detail(format!(
            "date {} ({})",
            meeting.date(),
            source_label(meeting.date_source())
        ))
        .with_detail(format!(
            "room {} ({})",
            meeting.room(),
            source_label(meeting.room_source())
        ))
        .with_detail(format!("id {}", meeting.id().short()))
}

/// One line per syllabus entry, in syllabus order
pub fn render_check_report(
    report: &CheckReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let rec = &report.reconciliation;
    let mut items: Vec<(usize, CheckItem)> = rec
        .meetings
        .iter()
        .map(|m| {
            let index = m.ordinal() - 1;
            let warned = rec.warnings.iter().any(|w| warning_index(w) == index);
            (index, meeting_item(m, warned))
        })
        .collect();
    for failure in &rec.failures {
        let item = failure.errors.iter().fold(
            CheckItem::new(format!("entry #{}", failure.index + 1), CheckStatus::Error, ""),
            |item, err| item.with_detail(err.to_string()),
        );
        items.push((failure.index, item));
    }
    items.sort_by_key(|(index, _)| *index);

    let mut out = String::new();
    for (_, item) in &items {
        out.push_str(&item.render(verbose > 0, supports_color, supports_unicode));
    }
    out
}

pub fn render_check_summary(
    report: &CheckReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let rec = &report.reconciliation;
    let mut summary = if report.is_success() {
        ResultSummary::success("Syllabus OK")
    } else {
        ResultSummary::partial("Syllabus has errors")
    };
    summary.add_stat("passed", rec.meetings.len());
    summary.add_stat("failed", rec.failures.len());
    for warning in &rec.warnings {
        summary.add_warning(warning.to_string());
    }
    if !report.is_success() {
        summary.with_next_step("fix the entries above in syllabus.yml and run check again");
    }
    summary.render(supports_color, supports_unicode)
}
