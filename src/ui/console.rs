//! Console progress sink
//!
//! Prints one line per progress event: icon, bar, percentage, message.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;
use modelship::{ProgressEvent, ProgressReporter, ReporterError, Stage};

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme;
use crate::ui::widgets::progress::ProgressBar;

const BAR_WIDTH: u16 = 20;

pub struct ConsoleProgressSink {
    writer: Mutex<Box<dyn Write + Send>>,
    caps: TerminalCapabilities,
}

impl ConsoleProgressSink {
    pub fn stdout(caps: TerminalCapabilities) -> Self {
        Self::with_writer(io::stdout(), caps)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, caps: TerminalCapabilities) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            caps,
        }
    }

    fn render(&self, event: &ProgressEvent) -> String {
        let icon = if event.is_complete() {
            Icon::Success
        } else {
            Icon::Progress
        };

        let mut bar = ProgressBar::new(BAR_WIDTH);
        bar.set(event.progress);

        let stage = format!("{:<14}", event.stage.as_str());
        let stage = if self.caps.supports_color {
            format!("{}", stage.with(stage_color(event.stage)))
        } else {
            stage
        };

        format!(
            "{} {} {} {}",
            icon.colored(self.caps.supports_color, self.caps.supports_unicode),
            bar.render(self.caps.supports_unicode),
            stage,
            event.message
        )
    }
}

fn stage_color(stage: Stage) -> crossterm::style::Color {
    match stage {
        Stage::Complete => theme::colors::SUCCESS,
        Stage::Deployment => theme::colors::INFO,
        _ => theme::colors::DIM,
    }
}

impl ProgressReporter for ConsoleProgressSink {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        let line = self.render(event);
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ReporterError::Rejected("console writer poisoned".to_string()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
