//! Environment variable overrides.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::defaults::{ENV_HISTORY_FILE, ENV_MAX_HISTORY};
use super::{expand_home, Config};

pub(super) fn apply_env_overrides<FEnv, FHome>(
    config: &mut Config,
    env_lookup: &FEnv,
    home: &FHome,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    if let Some(path) = non_empty(env_lookup(ENV_HISTORY_FILE)) {
        config.editor.history_file = expand_home(&path, home);
    }
    if let Some(raw) = non_empty(env_lookup(ENV_MAX_HISTORY)) {
        config.editor.max_history = parse_max_history(&raw).map_err(|reason| {
            ConfigError::Invalid(format!("invalid {ENV_MAX_HISTORY} value `{raw}`: {reason}"))
        })?;
    }
    Ok(())
}

/// Parse a history cap; zero is rejected.
fn parse_max_history(raw: &str) -> Result<usize, &'static str> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1"),
        Ok(value) => Ok(value),
        Err(_) => Err("expected a positive integer"),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
