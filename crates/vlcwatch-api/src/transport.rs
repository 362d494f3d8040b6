// Shared transport configuration for building reqwest::Client instances.
//
// The player speaks plain HTTP on the local network, so the only knobs are
// the request timeout and the Basic credentials attached to every call.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

const USER_AGENT: &str = concat!("vlcwatch/", env!("CARGO_PKG_VERSION"));

/// Basic-auth credential pair sent with every request.
///
/// VLC's HTTP interface ignores the user name and only checks the password,
/// so an empty `username` is the common case.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Password exposed for header construction only.
    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Transport)
    }
}
