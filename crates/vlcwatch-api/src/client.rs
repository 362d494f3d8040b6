// VLC HTTP client
//
// Wraps `reqwest::Client` with endpoint URL construction, Basic auth and
// JSON body decoding. Typed convenience calls (status, playlist, browse)
// sit on top of the untyped `send` used by the dispatcher.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{BrowseResponse, PlaylistEntry, StatusResponse};
use crate::request::{Request, Scope};
use crate::transport::{Credentials, TransportConfig};

/// Raw HTTP client for a single VLC instance.
///
/// Every call is exactly one `GET`; nothing is retried or cached here.
pub struct VlcClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    timeout: Option<Duration>,
}

impl VlcClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` is the player root, e.g. `http://127.0.0.1:8080/`.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            credentials,
            timeout: Some(transport.timeout),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            timeout: None,
        }
    }

    /// The player base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build the full URL for a request: `{base}/requests/{scope}.json?{query}`
    pub fn request_url(&self, request: &Request) -> Result<Url, Error> {
        let mut url = self.base_url.join(request.scope.path())?;
        url.set_query(request.query_string().as_deref());
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Perform one round trip and return the parsed JSON body.
    pub async fn send(&self, request: &Request) -> Result<serde_json::Value, Error> {
        self.get(request).await
    }

    /// Perform one round trip and deserialize the body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, request: &Request) -> Result<T, Error> {
        let url = self.request_url(request)?;
        debug!(scope = %request.scope, command = request.command, "GET {}", url.path());

        let resp = self
            .http
            .get(url.clone())
            .basic_auth(&self.credentials.username, Some(self.credentials.password()))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "player rejected the configured password".into(),
            });
        }
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(|e| self.map_send_error(e))?;
        trace!(bytes = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            message: e.to_string(),
            body,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout: self.timeout,
            }
        } else {
            Error::Transport(err)
        }
    }

    // ── Typed endpoints ──────────────────────────────────────────────

    /// Fetch the current player status.
    pub async fn status(&self) -> Result<StatusResponse, Error> {
        self.get(&Request::fetch(Scope::Status)).await
    }

    /// Fetch the playlist tree.
    pub async fn playlist(&self) -> Result<PlaylistEntry, Error> {
        self.get(&Request::fetch(Scope::Playlist)).await
    }

    /// List a directory on the player's host.
    pub async fn browse(&self, dir: &str) -> Result<BrowseResponse, Error> {
        self.get(&Request::browse(dir)).await
    }
}
