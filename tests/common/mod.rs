//! Common test utilities shared by the integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Tolerance used when comparing computed areas
pub const EPSILON: f64 = 1e-3;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// The carpetline binary with a profile path that never exists
pub fn carpetline() -> Command {
    let mut cmd = Command::cargo_bin("carpetline").unwrap();
    cmd.env("CARPETLINE_PROFILE_PATH", "/nonexistent/carpetline/profile")
        .env_remove("CARPETLINE_LOG_LEVEL");
    cmd
}

/// The carpetline binary reading profiles from `profile`
pub fn carpetline_with_profile(profile: &NamedTempFile) -> Command {
    let mut cmd = carpetline();
    cmd.env("CARPETLINE_PROFILE_PATH", profile.path());
    cmd
}

pub fn write_profile(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
