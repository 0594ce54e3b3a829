use crossterm::style::Color;

/// Design tokens for the Modelship CLI.
///
/// Every color, icon and bar glyph used by the UI comes from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const DEPLOY: &str = "🚀";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const PENDING: &str = "[ ]";
    pub const DEPLOY: &str = "[DEPLOY]";
}

/// Progress bar glyphs: (filled, empty)
pub mod bar {
    pub const UNICODE: (&str, &str) = ("━", "─");
    pub const ASCII: (&str, &str) = ("=", "-");
}
