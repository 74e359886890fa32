//! connector integration related const declarations

/// Message reported when a connector answered without one.
pub const NO_ERROR_MESSAGE: &str = "No error message";

/// Prefix of the environment variables overriding configuration values.
pub const CONFIG_ENV_PREFIX: &str = "GATEWAY";
