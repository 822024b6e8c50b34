//! Configuration data model.
//!
//! `File*` structs mirror the TOML on disk, with every field optional.
//! Resolution into the runtime [`Config`] happens in `config::mod`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::editor::{default_history_path, EditMode, EditorOptions, DEFAULT_MAX_HISTORY};

use super::defaults::DEFAULT_PROMPT;

/// Which clipboard the editor talks to.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardKind {
    /// The OS clipboard, shared with other applications.
    #[default]
    System,
    /// A process-local clipboard.
    Memory,
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub editor: EditorConfig,
    pub display: DisplayConfig,
}

/// Editor engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub history_file: PathBuf,
    pub max_history: usize,
    pub edit_mode: EditMode,
    pub clipboard: ClipboardKind,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_path(),
            max_history: DEFAULT_MAX_HISTORY,
            edit_mode: EditMode::Emacs,
            clipboard: ClipboardKind::System,
        }
    }
}

impl EditorConfig {
    /// Construction-time options for [`crate::editor::LineEditor`].
    pub fn options(&self) -> EditorOptions {
        EditorOptions {
            history_file: self.history_file.clone(),
            max_history: self.max_history,
            edit_mode: self.edit_mode.clone(),
        }
    }
}

/// Terminal host display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub color: bool,
    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Warnings collected while resolving configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

impl ConfigDiagnostics {
    /// Warn when `mode` has no bindings of its own.
    pub fn note_edit_mode(&mut self, mode: &EditMode) {
        if let EditMode::Other(_) = mode {
            self.warnings.push(format!(
                "edit_mode `{mode}` is not supported; emacs bindings are used"
            ));
        }
    }
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
    /// File the config was read from, if any.
    pub source_path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub(super) editor: FileEditorConfig,
    #[serde(default)]
    pub(super) display: FileDisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileEditorConfig {
    pub(super) history_file: Option<String>,
    pub(super) max_history: Option<usize>,
    pub(super) edit_mode: Option<String>,
    pub(super) clipboard: Option<ClipboardKind>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileDisplayConfig {
    pub(super) color: Option<bool>,
    pub(super) prompt: Option<String>,
}
