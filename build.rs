//! Stamps the crate with the source revision it was built from.
//!
//! Packagers building outside a checkout set `EMLINE_REVISION` instead.

use std::env;
use std::process::Command;

const REVISION_VAR: &str = "EMLINE_REVISION";

fn main() {
    println!("cargo:rerun-if-env-changed={REVISION_VAR}");
    let revision = env::var(REVISION_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(describe_checkout)
        .unwrap_or_else(|| "untracked".to_string());
    println!("cargo:rustc-env={REVISION_VAR}={revision}");
}

/// `git describe` of the working tree, marked `-dirty` when it has edits.
fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--tags"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!revision.is_empty()).then_some(revision)
}
