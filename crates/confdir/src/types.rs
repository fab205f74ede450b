//! Credential types for configuration values.
//!
//! Responsibilities:
//! - Define the [`Userinfo`] credential pair produced by the `userinfo`
//!   accessor.
//! - Deserialize the JSON wire shape, collapsing empty passwords into
//!   username-only credentials.
//!
//! Does NOT handle:
//! - Locating or reading the underlying config value (see store.rs).
//!
//! Invariants:
//! - The password half uses `secrecy::SecretString`, so `Debug` output
//!   never reveals it.
//! - An empty password string is indistinguishable from no password at all.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// A username with an optional password, decoded from a JSON object:
///
/// ```json
/// {
///     "username": "string",
///     "password": "string"
/// }
/// ```
///
/// `username` is required. `password` may be absent or empty, in which case
/// the credential carries a username only.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "UserinfoWire")]
pub struct Userinfo {
    username: String,
    password: Option<SecretString>,
}

impl Userinfo {
    /// Creates a username-only credential.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }

    /// Creates a username and password credential.
    ///
    /// An empty password collapses to a username-only credential.
    pub fn with_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            password: if password.is_empty() {
                None
            } else {
                Some(SecretString::new(password.into()))
            },
        }
    }

    /// The username half of the credential.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password, if one was provided.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret())
    }

    /// Whether the credential carries a password.
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }
}

impl PartialEq for Userinfo {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username && self.password() == other.password()
    }
}

impl Eq for Userinfo {}

/// Wire shape for [`Userinfo`] deserialization.
#[derive(Deserialize)]
struct UserinfoWire {
    username: String,
    #[serde(default)]
    password: Option<String>,
}

impl From<UserinfoWire> for Userinfo {
    fn from(wire: UserinfoWire) -> Self {
        match wire.password {
            Some(password) if !password.is_empty() => Self {
                username: wire.username,
                password: Some(SecretString::new(password.into())),
            },
            _ => Self {
                username: wire.username,
                password: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_username_only() {
        let ui: Userinfo = serde_json::from_str(r#"{"username": "user"}"#).unwrap();
        assert_eq!(ui, Userinfo::new("user"));
        assert!(!ui.has_password());
    }

    #[test]
    fn deserializes_username_and_password() {
        let ui: Userinfo =
            serde_json::from_str(r#"{"username": "user", "password": "pass"}"#).unwrap();
        assert_eq!(ui, Userinfo::with_password("user", "pass"));
        assert_eq!(ui.password(), Some("pass"));
    }

    #[test]
    fn empty_password_collapses_to_username_only() {
        let ui: Userinfo =
            serde_json::from_str(r#"{"username": "user", "password": ""}"#).unwrap();
        assert_eq!(ui, Userinfo::new("user"));
        assert!(!ui.has_password());
    }

    #[test]
    fn with_password_collapses_empty_password() {
        assert_eq!(Userinfo::with_password("user", ""), Userinfo::new("user"));
    }

    #[test]
    fn missing_username_is_rejected() {
        assert!(serde_json::from_str::<Userinfo>("{}").is_err());
        assert!(serde_json::from_str::<Userinfo>(r#"{"password": "pass"}"#).is_err());
    }

    #[test]
    fn non_object_input_is_rejected() {
        assert!(serde_json::from_str::<Userinfo>("1234567890").is_err());
        assert!(serde_json::from_str::<Userinfo>(r#""user""#).is_err());
    }

    /// Debug output must never contain the password.
    #[test]
    fn debug_output_redacts_password() {
        let ui = Userinfo::with_password("user", "s3cr3t-pw");
        let debug_output = format!("{:?}", ui);
        assert!(!debug_output.contains("s3cr3t-pw"));
        assert!(debug_output.contains("user"));
    }
}
