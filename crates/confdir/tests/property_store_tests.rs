//! Property-based tests for the directory scan.
//!
//! These tests generate arbitrary directory contents to cover corners the
//! unit tests do not: arbitrary byte contents (including empty files and
//! invalid UTF-8) and arbitrary numbers of entries.
//!
//! Test coverage:
//! - Every regular file written to a scanned directory is retrievable by
//!   its base name, byte for byte.
//! - A base name shared by two directories on the search path always fails
//!   the scan, regardless of contents.

use proptest::prelude::*;
use tempfile::TempDir;

use confdir::{ConfigError, Store};

/// Strategy for file base names that are safe on any filesystem: short,
/// lowercase, never starting with a dot. Lowercase-only keeps the
/// generated names distinct on case-insensitive filesystems.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9_-]{0,11}"
}

/// Strategy for file contents: arbitrary bytes, including empty.
fn contents_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

proptest! {
    #[test]
    fn every_written_file_is_retrievable(
        files in prop::collection::btree_map(name_strategy(), contents_strategy(), 1..16)
    ) {
        let dir = TempDir::new().unwrap();
        for (name, contents) in &files {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }

        let store = Store::scan([dir.path()]).unwrap();
        prop_assert_eq!(store.len(), files.len());
        for (name, contents) in &files {
            prop_assert_eq!(store.bytes(name).unwrap(), contents.as_slice());
        }
    }

    #[test]
    fn shared_name_across_directories_always_fails(
        files in prop::collection::btree_map(name_strategy(), contents_strategy(), 1..8),
        dup_contents in contents_strategy()
    ) {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        for (name, contents) in &files {
            std::fs::write(first.path().join(name), contents).unwrap();
        }
        let dup = files.keys().next().unwrap();
        std::fs::write(second.path().join(dup), &dup_contents).unwrap();

        let result = Store::scan([first.path(), second.path()]);
        prop_assert!(
            matches!(&result, Err(ConfigError::DuplicateName { name }) if name == dup),
            "expected DuplicateName error for name {:?}",
            dup
        );
    }
}
