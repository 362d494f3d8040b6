// ── Central state cache ──
//
// Holds the last observed Status and Playlist. Each refresh replaces the
// corresponding cell wholesale and reports whether the value changed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::cell::{CacheCell, Change};
use crate::model::{Playlist, Status};

/// Last-known player state.
///
/// Both cells start empty and are only written by the refresh path
/// (`Player::update_status` / `update_playlist`). Readers get cheap `Arc`
/// snapshots or a `watch::Receiver` to follow updates.
pub struct StateCache {
    status: CacheCell<Status>,
    playlist: CacheCell<Playlist>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl StateCache {
    pub fn new() -> Self {
        let (last_refresh, _) = watch::channel(None);
        Self {
            status: CacheCell::new(),
            playlist: CacheCell::new(),
            last_refresh,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn status(&self) -> Option<Arc<Status>> {
        self.status.get()
    }

    pub fn playlist(&self) -> Option<Arc<Playlist>> {
        self.playlist.get()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_status(&self) -> watch::Receiver<Option<Arc<Status>>> {
        self.status.subscribe()
    }

    pub fn subscribe_playlist(&self) -> watch::Receiver<Option<Arc<Playlist>>> {
        self.playlist.subscribe()
    }

    // ── Mutation (refresh path only) ─────────────────────────────────

    pub(crate) fn apply_status(&self, status: Status) -> Change<Status> {
        self.touch();
        self.status.replace(Arc::new(status))
    }

    pub(crate) fn apply_playlist(&self, playlist: Playlist) -> Change<Playlist> {
        self.touch();
        self.playlist.replace(Arc::new(playlist))
    }

    fn touch(&self) {
        self.last_refresh.send_replace(Some(Utc::now()));
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// How long ago the last refresh landed, or `None` if never refreshed.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }
}

impl Default for StateCache {
    fn default() -> Self {
        Self::new()
    }
}
