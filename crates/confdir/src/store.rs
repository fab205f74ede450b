//! Directory scanning and the immutable config store.
//!
//! Responsibilities:
//! - Scan each search path directory once, non-recursively, and build the
//!   base name to contents map.
//! - Provide the typed accessors (bytes, string, URI, credential, JSON,
//!   YAML) over the built map.
//!
//! Does NOT handle:
//! - Search path resolution from the environment (see path.rs).
//! - Process-wide once-only loading (see global.rs).
//!
//! Invariants:
//! - A base name appears at most once across the whole search path; a
//!   collision aborts the scan and no partial store survives.
//! - Subdirectories are skipped, never traversed.
//! - A file that cannot be read is skipped silently; its name stays free
//!   for a later entry to claim.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use http::Uri;
use http::uri::{Parts, PathAndQuery};
use serde::de::DeserializeOwned;

use crate::error::ConfigError;
use crate::path::split_search_path;
use crate::types::Userinfo;

/// Immutable mapping from file base name to raw file contents, built by a
/// single scan of the search path.
#[derive(Debug, Clone, Default)]
pub struct Store {
    values: BTreeMap<String, Vec<u8>>,
}

impl Store {
    /// Scans the directories named by a search path string.
    ///
    /// The string is split on the platform path-list separator. An empty
    /// string scans nothing and yields an empty store.
    pub fn from_search_path(path: impl AsRef<OsStr>) -> Result<Self, ConfigError> {
        Self::scan(split_search_path(path.as_ref()))
    }

    /// Scans each directory in order and builds the store.
    ///
    /// Directory entries are read non-recursively, in lexicographic order.
    /// Subdirectories are skipped. A file that cannot be read is skipped
    /// silently. A directory that cannot be listed, or a base name already
    /// present in the store, aborts the whole scan.
    pub fn scan<I, P>(dirs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut values: BTreeMap<String, Vec<u8>> = BTreeMap::new();
        let mut loaded: Vec<PathBuf> = Vec::new();

        for dir in dirs {
            let dir = dir.into();
            tracing::debug!(path = %dir.display(), "scanning config directory");

            let mut entries = fs::read_dir(&dir)
                .and_then(|iter| iter.collect::<Result<Vec<_>, _>>())
                .map_err(|source| ConfigError::ReadDir {
                    path: dir.clone(),
                    source,
                })?;
            // read_dir does not order entries; sort so collisions and logs
            // are attributed deterministically.
            entries.sort_by_key(|entry| entry.file_name());

            for entry in entries {
                // Symlinks are not followed here: a link to a directory is
                // treated as a plain entry whose read fails, and skipped.
                if entry.file_type().is_ok_and(|t| t.is_dir()) {
                    continue;
                }

                let name = entry.file_name().to_string_lossy().into_owned();
                if values.contains_key(&name) {
                    return Err(ConfigError::DuplicateName { name });
                }

                let path = entry.path();
                match fs::read(&path) {
                    Ok(contents) => {
                        values.insert(name, contents);
                        loaded.push(path);
                    }
                    Err(error) => {
                        tracing::debug!(
                            path = %path.display(),
                            error = %error,
                            "skipping unreadable config file"
                        );
                    }
                }
            }
        }

        tracing::debug!(count = loaded.len(), files = ?loaded, "config files loaded");

        Ok(Self { values })
    }

    /// Returns the raw contents of the value named `name`.
    pub fn bytes(&self, name: &str) -> Result<&[u8], ConfigError> {
        self.values
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns the value named `name` as text.
    ///
    /// The conversion is lossy: invalid UTF-8 sequences become replacement
    /// characters rather than failing.
    pub fn string(&self, name: &str) -> Result<String, ConfigError> {
        Ok(String::from_utf8_lossy(self.bytes(name)?).into_owned())
    }

    /// Parses the value named `name` as a JSON credential object with a
    /// required `username` and an optional `password` field.
    pub fn userinfo(&self, name: &str) -> Result<Userinfo, ConfigError> {
        self.json(name)
    }

    /// Parses the value named `name` as a URI.
    ///
    /// Parsing is lenient: a bare value with no scheme is accepted and
    /// becomes a path-only URI.
    pub fn url(&self, name: &str) -> Result<Uri, ConfigError> {
        let text = self.string(name)?;
        parse_lenient(&text).map_err(|source| ConfigError::Uri {
            name: name.to_string(),
            source,
        })
    }

    /// Decodes the value named `name` as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self, name: &str) -> Result<T, ConfigError> {
        serde_json::from_slice(self.bytes(name)?).map_err(|source| ConfigError::Json {
            name: name.to_string(),
            target: std::any::type_name::<T>(),
            source,
        })
    }

    /// Decodes the value named `name` as YAML into `T`.
    pub fn yaml<T: DeserializeOwned>(&self, name: &str) -> Result<T, ConfigError> {
        serde_yaml::from_slice(self.bytes(name)?).map_err(|source| ConfigError::Yaml {
            name: name.to_string(),
            target: std::any::type_name::<T>(),
            source,
        })
    }

    /// Iterates over the loaded value names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of values in the store.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parses URI text, accepting a scheme-less value as a path-only reference
/// rather than an authority.
fn parse_lenient(text: &str) -> Result<Uri, http::Error> {
    match text.parse::<Uri>() {
        Ok(uri) if uri.scheme().is_some() => Ok(uri),
        _ => {
            let path = text.parse::<PathAndQuery>()?;
            let mut parts = Parts::default();
            parts.path_and_query = Some(path);
            Ok(Uri::from_parts(parts)?)
        }
    }
}
