//! Configuration constants and utilities for carpetline
//!
//! Paths and environment variable names shared by the binary and the profile store.

/// Default profile file path for carpetline
pub const DEFAULT_PROFILE_PATH: &str = "~/.carpetline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "CARPETLINE_PROFILE_PATH";

/// Environment variable holding the log filter (e.g. "debug", "carpetline=trace")
pub const LOG_LEVEL_ENV_VAR: &str = "CARPETLINE_LOG_LEVEL";

/// Log filter used when the environment does not provide one
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Name of the profile section used when none is given
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Decimal places used for text output when the profile does not set one
pub const DEFAULT_PRECISION: usize = 2;

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Get the log filter, checking environment variable first, then falling back to default
pub fn get_log_level() -> String {
    std::env::var(LOG_LEVEL_ENV_VAR)
        .ok()
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
