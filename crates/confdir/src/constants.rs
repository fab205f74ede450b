//! Centralized constants for the confdir workspace.

/// Name of the environment variable holding the configuration search path.
///
/// The value is a list of directories joined by the platform path-list
/// separator (`:` on POSIX, `;` on Windows).
pub const ENV_VAR: &str = "CONFIG_PATH";

/// Fallback search path used when [`ENV_VAR`] is not set.
///
/// Empty by default: without an override the loader scans nothing and
/// serves an empty store.
pub const DEFAULT_PATH: &str = "";
