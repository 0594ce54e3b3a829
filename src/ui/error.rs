use crossterm::style::Stylize;
use modelship::infrastructure::JsonProgressSink;
use modelship::{ConfigError, ConfigurationError, DeployError};

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme;

/// Process exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return match deploy {
            DeployError::Configuration(_) => 2,
            DeployError::Cancelled { .. } => 130,
            _ => 1,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    1
}

pub fn format_error(err: &anyhow::Error, caps: TerminalCapabilities) -> String {
    let icon = Icon::Error.colored(caps.supports_color, caps.supports_unicode);
    let headline = if caps.supports_color {
        format!("{}", err.to_string().with(theme::colors::ERROR))
    } else {
        err.to_string()
    };

    let mut out = format!("{} {}\n", icon, headline);
    if let Some(hint) = hint_for(err) {
        out.push_str(&format!("  {}\n", hint));
    }
    out
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return match deploy {
            DeployError::Configuration(ConfigurationError::UnknownTarget(_)) => {
                Some("Run `modelship targets` to list deployment targets".to_string())
            }
            DeployError::Backend { .. } | DeployError::Stage { .. } => {
                Some("Stages completed before the failure were not rolled back".to_string())
            }
            DeployError::Cancelled { .. } => {
                Some("Deployment stopped at a stage boundary".to_string())
            }
            _ => None,
        };
    }
    if let Some(ConfigError::Parse { path, .. }) = err.downcast_ref::<ConfigError>() {
        return Some(format!("Fix {} or pass --config <PATH>", path.display()));
    }
    None
}

/// Report a failure on the channel the user is reading.
///
/// In JSON mode the error object terminates the NDJSON stream on stdout.
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let sink = JsonProgressSink::stdout();
        let written = match err.downcast_ref::<DeployError>() {
            Some(deploy) => sink.write_error(deploy),
            None if err.downcast_ref::<ConfigError>().is_some() => {
                sink.write_failure("config_error", &err.to_string())
            }
            None => sink.write_failure("error", &err.to_string()),
        };
        if written.is_ok() {
            return;
        }
    }

    eprint!("{}", format_error(err, detect_capabilities()));
}
