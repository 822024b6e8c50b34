//! Status output for the terminal host (stderr).

use crate::tui::settings;
use crossterm::style::Stylize;

/// Writes warnings, errors and the banner to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Startup banner.
    pub fn banner(&self, metadata: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::LABEL_APP.with(settings::COLOR_PROMPT).bold(),
                metadata.with(settings::COLOR_BANNER)
            );
            eprintln!("{}", settings::BANNER_HINT.with(settings::COLOR_BANNER));
        } else {
            eprintln!("{} {metadata}", settings::LABEL_APP);
            eprintln!("{}", settings::BANNER_HINT);
        }
    }

    /// Print a warning line.
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an error line.
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_ERROR);
        }
    }
}
