use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Deploy,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::icons::SUCCESS,
                Icon::Error => theme::icons::ERROR,
                Icon::Warning => theme::icons::WARNING,
                Icon::Progress => theme::icons::PROGRESS,
                Icon::Pending => theme::icons::PENDING,
                Icon::Deploy => theme::icons::DEPLOY,
            }
        } else {
            match self {
                Icon::Success => theme::icons_ascii::SUCCESS,
                Icon::Error => theme::icons_ascii::ERROR,
                Icon::Warning => theme::icons_ascii::WARNING,
                Icon::Progress => theme::icons_ascii::PROGRESS,
                Icon::Pending => theme::icons_ascii::PENDING,
                Icon::Deploy => theme::icons_ascii::DEPLOY,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Pending => theme::colors::DIM,
            Icon::Deploy => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Deploy.render(false), "[DEPLOY]");
    }

    #[test]
    fn icon_without_color_is_plain() {
        assert_eq!(Icon::Error.colored(false, true), "✗");
    }
}
