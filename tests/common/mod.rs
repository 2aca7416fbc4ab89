//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Address nothing listens on; connections are refused immediately
pub const DEAD_API: &str = "http://127.0.0.1:1";

/// Helper to get a tat command with isolated config/cache dirs and the API
/// pointed at a dead address, so no test ever talks to a real backend
pub fn tat(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("tat"));
    cmd.env("XDG_CONFIG_HOME", tmp.path().join("config"));
    cmd.env("XDG_CACHE_HOME", tmp.path().join("cache"));
    cmd.env("TENPO_API_URL", DEAD_API);
    cmd
}
