// ── Core error types ──
//
// User-facing errors from vlcwatch-core. Consumers never match on reqwest
// errors directly; the `From<vlcwatch_api::Error>` impl translates
// transport-layer failures into these variants.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to player at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error(
        "Player request timed out{}",
        .timeout.map_or_else(String::new, |d| format!(" after {d:?}"))
    )]
    Timeout { timeout: Option<Duration> },

    #[error("Player request failed: {message}")]
    Transport {
        message: String,
        /// HTTP status code (if the player answered).
        status: Option<u16>,
    },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Unexpected response from player: {message}")]
    Decode { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for failures where the player could not be reached
    /// or did not answer successfully.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. }
                | Self::AuthenticationFailed { .. }
                | Self::Timeout { .. }
                | Self::Transport { .. }
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub(crate) fn decode(err: &serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<vlcwatch_api::Error> for CoreError {
    fn from(err: vlcwatch_api::Error) -> Self {
        match err {
            vlcwatch_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            vlcwatch_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout: None }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e.url().map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Transport {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            vlcwatch_api::Error::HttpStatus { status, url } => CoreError::Transport {
                message: format!("HTTP {status} from {url}"),
                status: Some(status),
            },
            vlcwatch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            vlcwatch_api::Error::Timeout { timeout } => CoreError::Timeout { timeout },
            vlcwatch_api::Error::Decode { message, body: _ } => CoreError::Decode { message },
        }
    }
}
