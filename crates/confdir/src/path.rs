//! Search path resolution.
//!
//! Responsibilities:
//! - Read the search path from the environment with a compiled-in fallback.
//! - Split the search path on the platform path-list separator.
//!
//! Does NOT handle:
//! - Path-syntax validation: a malformed entry surfaces as a directory read
//!   error during the scan, not here.
//!
//! Invariants:
//! - A variable that is set but empty is honored as an empty search path;
//!   only an unset variable falls back to [`DEFAULT_PATH`].
//! - An empty search path string splits into no directories at all.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::constants::{DEFAULT_PATH, ENV_VAR};

/// Returns the configured search path: the value of [`ENV_VAR`] if the
/// variable is present, otherwise [`DEFAULT_PATH`].
pub fn search_path() -> OsString {
    env::var_os(ENV_VAR).unwrap_or_else(|| OsString::from(DEFAULT_PATH))
}

/// Splits a search path string into directory entries using the platform
/// list separator (`:` on POSIX, `;` on Windows).
///
/// Empty entries between separators are kept; listing them fails later as
/// unreadable directories.
pub(crate) fn split_search_path(path: &OsStr) -> Vec<PathBuf> {
    if path.is_empty() {
        return Vec::new();
    }
    env::split_paths(path).collect()
}
