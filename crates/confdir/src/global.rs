//! Process-wide load-once configuration access.
//!
//! Responsibilities:
//! - Run the search path scan exactly once per process, on the first call
//!   to [`load`] or any accessor.
//! - Replay the recorded outcome (store or terminal error) to every caller
//!   for the rest of the process lifetime.
//!
//! Does NOT handle:
//! - Scanning itself (see store.rs) or search path resolution (see
//!   path.rs).
//!
//! Invariants:
//! - Concurrent first callers block until the single scan finishes and then
//!   observe the same outcome (`OnceLock` initialization).
//! - A failed load is terminal: it is never retried, and every accessor
//!   reports it, wrapped with the requested key, until the process exits.
//! - The published store is read-only; [`bytes`] hands out borrowed slices
//!   that live for the rest of the process.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use http::Uri;
use serde::de::DeserializeOwned;

use crate::constants::ENV_VAR;
use crate::error::ConfigError;
use crate::path::search_path;
use crate::store::Store;
use crate::types::Userinfo;

static STORE: OnceLock<Result<Store, Arc<ConfigError>>> = OnceLock::new();

/// Runs the one-time scan if it has not happened yet and returns the shared
/// outcome.
fn shared() -> Result<&'static Store, Arc<ConfigError>> {
    let outcome = STORE.get_or_init(|| {
        let path = search_path();
        tracing::debug!(var = ENV_VAR, path = %Path::new(&path).display(), "loading configuration");
        Store::from_search_path(&path).map_err(Arc::new)
    });
    match outcome {
        Ok(store) => Ok(store),
        Err(error) => Err(Arc::clone(error)),
    }
}

/// Looks up the shared store on behalf of the value named `name`.
fn shared_for(name: &str) -> Result<&'static Store, ConfigError> {
    shared().map_err(|source| ConfigError::ValueUnavailable {
        name: name.to_string(),
        source,
    })
}

/// Loads the configuration into memory.
///
/// The scan runs at most once per process; later calls, and concurrent
/// first calls, observe the outcome of that single scan. A failed load is
/// terminal and is reported to every caller from then on.
pub fn load() -> Result<(), ConfigError> {
    match shared() {
        Ok(_) => Ok(()),
        Err(source) => Err(ConfigError::Load { source }),
    }
}

/// Returns the raw contents of the config value named `name`, loading the
/// configuration first if no call has done so yet.
pub fn bytes(name: &str) -> Result<&'static [u8], ConfigError> {
    shared_for(name)?.bytes(name)
}

/// Returns the config value named `name` as text.
pub fn string(name: &str) -> Result<String, ConfigError> {
    shared_for(name)?.string(name)
}

/// Parses the config value named `name` as a JSON credential object.
pub fn userinfo(name: &str) -> Result<Userinfo, ConfigError> {
    shared_for(name)?.userinfo(name)
}

/// Parses the config value named `name` as a URI.
pub fn url(name: &str) -> Result<Uri, ConfigError> {
    shared_for(name)?.url(name)
}

/// Decodes the config value named `name` as JSON into `T`.
pub fn json<T: DeserializeOwned>(name: &str) -> Result<T, ConfigError> {
    shared_for(name)?.json(name)
}

/// Decodes the config value named `name` as YAML into `T`.
pub fn yaml<T: DeserializeOwned>(name: &str) -> Result<T, ConfigError> {
    shared_for(name)?.yaml(name)
}
