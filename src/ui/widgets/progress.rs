use crate::ui::theme;

/// Fixed-width percentage bar for a deployment run
#[derive(Debug, Clone)]
pub struct ProgressBar {
    percent: u8,
    width: u16,
}

impl ProgressBar {
    pub fn new(width: u16) -> Self {
        Self {
            percent: 0,
            width: width.max(1),
        }
    }

    pub fn set(&mut self, percent: u8) {
        self.percent = percent.min(100);
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// `━━━━━─────  50%`, or `=====-----  50%` without unicode.
    pub fn render(&self, supports_unicode: bool) -> String {
        let (filled_glyph, empty_glyph) = if supports_unicode {
            theme::bar::UNICODE
        } else {
            theme::bar::ASCII
        };
        let (filled, empty) = self.segments();
        format!(
            "{}{} {:>3}%",
            filled_glyph.repeat(filled),
            empty_glyph.repeat(empty),
            self.percent
        )
    }

    fn segments(&self) -> (usize, usize) {
        let width = self.width as usize;
        let filled = (width * self.percent as usize + 50) / 100;
        let filled = filled.min(width);
        (filled, width - filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_percentage() {
        let mut bar = ProgressBar::new(10);
        bar.set(70);
        assert_eq!(bar.render(false), "=======---  70%");
    }

    #[test]
    fn complete_bar_is_full() {
        let mut bar = ProgressBar::new(4);
        bar.set(100);
        assert_eq!(bar.render(true), "━━━━ 100%");
    }

    #[test]
    fn percent_is_clamped() {
        let mut bar = ProgressBar::new(4);
        bar.set(250);
        assert_eq!(bar.percent(), 100);
    }
}
