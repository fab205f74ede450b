//! Process-wide configuration loading keyed by file name.
//!
//! `confdir` reads a search path from the `CONFIG_PATH` environment
//! variable, scans each directory on it exactly once, and caches every
//! regular file's contents under its base name. Thin typed accessors
//! interpret a cached value as raw bytes, text, a URI, a credential pair,
//! or an arbitrary JSON/YAML structure.
//!
//! Directories on the search path are not entered recursively; a
//! subdirectory is skipped, not traversed.
//!
//! Two surfaces are available: the free functions ([`load`], [`bytes`],
//! [`string`], [`url`], [`userinfo`], [`json`], [`yaml`]) backed by a
//! process-wide store loaded on first use, and the explicit [`Store`]
//! handle for callers that manage their own search path and lifetime.

mod constants;
mod error;
mod global;
mod path;
mod store;
mod types;

pub use constants::{DEFAULT_PATH, ENV_VAR};
pub use error::ConfigError;
pub use global::{bytes, json, load, string, url, userinfo, yaml};
pub use path::search_path;
pub use store::Store;
pub use types::Userinfo;
