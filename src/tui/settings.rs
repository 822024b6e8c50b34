//! Centralized, hardcoded UI settings for the terminal host.

use crossterm::style::Color;

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_APP: &str = "emline";

pub const BANNER_HINT: &str = "Esc or `exit` to quit; history is saved on exit.";

/// Submitted lines that end the session.
pub const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

pub const NEWLINE_INTERACTIVE: &str = "\r\n";

pub const COLOR_PROMPT: Color = Color::Cyan;
pub const COLOR_BANNER: Color = Color::DarkGrey;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
