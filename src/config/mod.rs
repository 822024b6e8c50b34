//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. CLI flags (applied by the binary after loading)
//! 2. Environment variables (`EMLINE_HISTORY_FILE`, `EMLINE_MAX_HISTORY`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./emline.toml in the current directory
//! 5. $XDG_CONFIG_HOME/emline/emline.toml (or ~/.config/emline/emline.toml)
//! 6. Built-in defaults

use crate::editor::EditMode;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod sources;
mod types;

use defaults::DEFAULT_EDIT_MODE;
use env::apply_env_overrides;
use sources::read_config_text_with_sources;
use types::FileConfig;
pub use types::{
    ClipboardKind, Config, ConfigDiagnostics, DisplayConfig, EditorConfig, LoadedConfig,
};

/// Load configuration from disk and environment, with diagnostics.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config_with_diagnostics(
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_with_diagnostics_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
        dirs::home_dir,
    )
}

fn load_config_with_diagnostics_from_sources<FRead, FEnv, FRoot, FHome>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
    home: FHome,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
    FHome: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut diagnostics = ConfigDiagnostics::default();
    let mut config = resolve_file_config(parsed, &home, &mut diagnostics)?;
    apply_env_overrides(&mut config, &env_lookup, &home)?;

    tracing::debug!(source = ?source, history_file = %config.editor.history_file.display(), "configuration resolved");
    Ok(LoadedConfig {
        config,
        diagnostics,
        source_path: source.path(),
    })
}

/// Fill built-in defaults under whatever the file specified.
fn resolve_file_config<FHome>(
    file: FileConfig,
    home: &FHome,
    diagnostics: &mut ConfigDiagnostics,
) -> Result<Config, ConfigError>
where
    FHome: Fn() -> Option<PathBuf>,
{
    let mut config = Config::default();

    if let Some(path) = file.editor.history_file.filter(|p| !p.trim().is_empty()) {
        config.editor.history_file = expand_home(&path, home);
    }
    match file.editor.max_history {
        Some(0) => {
            return Err(ConfigError::Invalid(
                "editor.max_history must be at least 1".into(),
            ))
        }
        Some(max) => config.editor.max_history = max,
        None => {}
    }
    let mode = EditMode::parse(file.editor.edit_mode.as_deref().unwrap_or(DEFAULT_EDIT_MODE));
    diagnostics.note_edit_mode(&mode);
    config.editor.edit_mode = mode;
    if let Some(kind) = file.editor.clipboard {
        config.editor.clipboard = kind;
    }

    if let Some(color) = file.display.color {
        config.display.color = color;
    }
    if let Some(prompt) = file.display.prompt {
        config.display.prompt = prompt;
    }
    Ok(config)
}

/// Expand a leading `~` to the home directory.
pub(crate) fn expand_home<FHome>(raw: &str, home: &FHome) -> PathBuf
where
    FHome: Fn() -> Option<PathBuf>,
{
    let trimmed = raw.trim();
    let rest = if trimmed == "~" {
        Some("")
    } else {
        trimmed.strip_prefix("~/")
    };
    match (rest, home()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(trimmed),
    }
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
