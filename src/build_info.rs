//! Version strings for `--version` and the interactive banner.

/// Crate version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `git describe` output captured by the build script, or `untracked`.
pub const REVISION: &str = env!("EMLINE_REVISION");

/// Text clap prints for `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EMLINE_REVISION"),
    ")"
);

/// Banner suffix, e.g. `v0.1.0 (a1b2c3d-dirty)`.
pub fn startup_metadata_line() -> String {
    format!("v{VERSION} ({REVISION})")
}
