use std::io;

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
}

impl TerminalCapabilities {
    /// Plain output: no color, ASCII glyphs.
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            supports_color: false,
            supports_unicode: false,
            is_ci: false,
            width: 80,
        }
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        io::stdout().is_terminal(),
        crossterm::terminal::size().ok().map(|(w, _)| w),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    width: Option<u16>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    let is_ci = ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_HOME"]
        .iter()
        .any(|key| get_env(key).is_some());

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && !no_color,
        supports_unicode: !dumb && !ascii_locale(&get_env),
        is_ci,
        width: width.unwrap_or(80),
    }
}

/// A locale explicitly set to something other than UTF-8.
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| get_env(key).filter(|v| !v.is_empty()))
        .map(|locale| {
            let locale = locale.to_lowercase();
            !(locale.contains("utf-8") || locale.contains("utf8"))
        })
        .unwrap_or(false)
}
