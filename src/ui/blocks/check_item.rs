use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// One line of a per-meeting report, with optional detail lines
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub details: Vec<String>,
}

impl CheckItem {
    pub fn new(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Details of failing items are always shown; others only when verbose
    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Warning => Icon::Warning,
            CheckStatus::Error => Icon::Error,
        }
        .colored(supports_color, supports_unicode);

        let mut out = if self.message.is_empty() {
            format!("  {} {}\n", icon, self.name)
        } else {
            format!("  {} {} - {}\n", icon, self.name, self.message)
        };

        if verbose || self.status != CheckStatus::Pass {
            for detail in &self.details {
                out.push_str(&format!(
                    "    {} {}\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    detail
                ));
            }
        }

        out
    }
}
