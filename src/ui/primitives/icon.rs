use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Create,
    Rename,
    Calendar,
    Check,
    Diff,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Create) => theme::icons::CREATE,
            (true, Icon::Rename) => theme::icons::RENAME,
            (true, Icon::Calendar) => theme::icons::CALENDAR,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::Trash) => theme::icons::TRASH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Create) => theme::icons_ascii::CREATE,
            (false, Icon::Rename) => theme::icons_ascii::RENAME,
            (false, Icon::Calendar) => theme::icons_ascii::CALENDAR,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Create => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Trash => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Rename | Icon::Calendar | Icon::Check | Icon::Diff => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
