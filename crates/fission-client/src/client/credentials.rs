//! Authentication credentials for the Fission gateway
//!
//! Authenticated gateway operations use HTTP basic auth with the account's
//! username and password.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Basic-auth credentials for a Fission account.
///
/// The password is redacted from debug output and skipped on serialization.
#[derive(Clone, Serialize, Deserialize)]
pub struct FissionCredentials {
    /// Account username.
    pub username: String,

    /// Account password, sent as the basic-auth secret.
    #[serde(skip_serializing)]
    pub password: String,
}

impl FissionCredentials {
    /// Creates credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for FissionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FissionCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
