//! Default configuration constants.

/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "emline.toml";
/// Directory under `$XDG_CONFIG_HOME` (or `~/.config`) holding the config.
pub(super) const CONFIG_DIR_NAME: &str = "emline";
/// Prompt drawn before the editable line.
pub(super) const DEFAULT_PROMPT: &str = "> ";
/// Edit mode used when none is configured.
pub(super) const DEFAULT_EDIT_MODE: &str = "emacs";

pub(super) const ENV_HISTORY_FILE: &str = "EMLINE_HISTORY_FILE";
pub(super) const ENV_MAX_HISTORY: &str = "EMLINE_MAX_HISTORY";
