//! Error types for configuration loading and access.
//!
//! Responsibilities:
//! - Define error variants for scan failures, replayed load failures, and
//!   per-call accessor failures.
//! - Carry context for debugging (offending directory, value name, target
//!   type) on every variant.
//!
//! Does NOT handle:
//! - Skipped-file reporting: a file that cannot be read during the scan is
//!   skipped silently and never becomes an error (see store.rs).
//!
//! Invariants:
//! - `ReadDir` and `DuplicateName` abort the scan; no partial store survives.
//! - `Load` and `ValueUnavailable` share the recorded scan error via `Arc`,
//!   so every caller observes the same root cause for the process lifetime.
//! - Decode failures (`Json`, `Yaml`, `Uri`) are local to one accessor call.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while loading or reading configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A search path directory could not be listed. Fatal: aborts the scan.
    #[error("failed to read config directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two files across the search path share a base name. Fatal: aborts
    /// the scan.
    #[error("multiple config entries named {name:?}")]
    DuplicateName { name: String },

    /// The one-time load failed; replayed to every `load()` caller.
    #[error("configuration failed to load")]
    Load {
        #[source]
        source: Arc<ConfigError>,
    },

    /// The one-time load failed; replayed to an accessor, naming the value
    /// it asked for.
    #[error("cannot read config value {name:?}: configuration failed to load")]
    ValueUnavailable {
        name: String,
        #[source]
        source: Arc<ConfigError>,
    },

    /// The requested name is absent from a successfully built store.
    #[error("config value {name:?} not found")]
    NotFound { name: String },

    #[error("failed to decode config value {name:?} as JSON into {target}")]
    Json {
        name: String,
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode config value {name:?} as YAML into {target}")]
    Yaml {
        name: String,
        target: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config value {name:?} is not a valid URI")]
    Uri {
        name: String,
        #[source]
        source: http::Error,
    },
}
