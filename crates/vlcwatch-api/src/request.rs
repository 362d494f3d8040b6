// Request shaping
//
// A call to the player is fully described by the endpoint it targets, an
// optional command name, and a flat list of key/value parameters. This
// module turns that triple into the query string VLC expects.

use std::fmt::Display;

use strum::{AsRefStr, Display as StrumDisplay};

/// One of the three fixed endpoints exposed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Scope {
    Browse,
    Status,
    Playlist,
}

impl Scope {
    /// Path of the endpoint, relative to the player root.
    pub fn path(self) -> &'static str {
        match self {
            Self::Browse => "requests/browse.json",
            Self::Status => "requests/status.json",
            Self::Playlist => "requests/playlist.json",
        }
    }
}

/// Ordered key/value parameters for a single request.
///
/// Keys are kept in insertion order. Absent values added through
/// [`with_opt`](Self::with_opt) are dropped on the spot, so they never reach
/// the wire as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn with_opt<V: Display>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Look up the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A fully described call: endpoint scope, optional command, parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub scope: Scope,
    pub command: Option<&'static str>,
    pub params: Params,
}

impl Request {
    /// Plain fetch of a scope, no command and no parameters.
    pub fn fetch(scope: Scope) -> Self {
        Self {
            scope,
            command: None,
            params: Params::new(),
        }
    }

    /// A named command with its parameters.
    pub fn command(scope: Scope, name: &'static str, params: Params) -> Self {
        Self {
            scope,
            command: Some(name),
            params,
        }
    }

    /// Directory listing of `dir` on the player's host.
    pub fn browse(dir: &str) -> Self {
        Self {
            scope: Scope::Browse,
            command: None,
            params: Params::new().with("dir", dir),
        }
    }

    /// Percent-encoded query string, or `None` when there is nothing to send.
    ///
    /// The command (if any) always comes first, followed by the parameters
    /// in insertion order.
    pub fn query_string(&self) -> Option<String> {
        let command = self.command.map(|name| ("command", name));
        let pairs: Vec<String> = command
            .into_iter()
            .chain(self.params.iter())
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("&"))
        }
    }
}
