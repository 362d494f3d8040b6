//! Async client for the VLC media player's HTTP control interface.
//!
//! The interface exposes three JSON endpoints under `/requests/`:
//! `status.json`, `playlist.json` and `browse.json`. Every playback command is
//! a `GET` against one of them with a `command=<name>` query parameter.
//!
//! - [`Request`] / [`Params`] shape a single call (scope + command + params).
//! - [`VlcClient`] performs it over HTTP with Basic authentication.
//! - [`Dispatch`] is the seam higher layers depend on, so they can be driven
//!   by something other than a live player.
//! - [`models`] holds the raw wire types, deserialized as-is.

pub mod client;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod request;
pub mod transport;

pub use client::VlcClient;
pub use dispatch::Dispatch;
pub use error::Error;
pub use request::{Params, Request, Scope};
pub use transport::{Credentials, TransportConfig};
