//! CLI argument parsing via clap.

use clap::Parser;
use emline::config::{ClipboardKind, Config, ConfigDiagnostics};
use emline::editor::EditMode;
use std::path::PathBuf;

/// Emacs-style line editor with persistent history.
#[derive(Debug, Parser)]
#[command(name = "emline", version, long_version = emline::build_info::LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./emline.toml or ~/.config/emline/emline.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// History file to load at startup and save on exit.
    #[arg(long = "history-file", value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Number of most recent entries kept when history is saved.
    #[arg(long = "max-history", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_history: Option<u64>,

    /// Key binding mode. Only `emacs` is currently supported.
    #[arg(long = "edit-mode", value_name = "MODE")]
    pub edit_mode: Option<String>,

    /// Use a process-local clipboard instead of the system clipboard.
    #[arg(long = "memory-clipboard")]
    pub memory_clipboard: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Apply flag overrides on top of file/env configuration.
    ///
    /// Warnings for flag values land in the same diagnostics as file values.
    pub fn apply_overrides(&self, config: &mut Config, diagnostics: &mut ConfigDiagnostics) {
        if let Some(path) = &self.history_file {
            config.editor.history_file = path.clone();
        }
        if let Some(max) = self.max_history {
            config.editor.max_history = usize::try_from(max).unwrap_or(usize::MAX);
        }
        if let Some(mode) = &self.edit_mode {
            config.editor.edit_mode = EditMode::parse(mode);
            diagnostics.note_edit_mode(&config.editor.edit_mode);
        }
        if self.memory_clipboard {
            config.editor.clipboard = ClipboardKind::Memory;
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}
