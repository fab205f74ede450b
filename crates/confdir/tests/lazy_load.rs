//! An accessor called before any explicit `load()` triggers the one-time
//! scan itself.
//!
//! Lives in its own test binary so no other test can have loaded the
//! process store first.

use tempfile::TempDir;

#[test]
fn first_accessor_call_loads_the_store() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("motd"), b"welcome").unwrap();

    temp_env::with_var(confdir::ENV_VAR, Some(dir.path().as_os_str()), || {
        assert_eq!(confdir::string("motd").unwrap(), "welcome");
        // The load the accessor triggered is the process-wide one.
        confdir::load().unwrap();
    });
}
