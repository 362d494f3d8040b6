// ── Player facade ──
//
// One value per remote player. Owns the dispatcher, the state cache, the
// event bus and the background scheduler, and is the only writer of the
// cache. Cheap to clone: every clone shares the same `PlayerInner`.

mod actions;

use std::sync::Arc;

use tokio::sync::{Mutex, broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use vlcwatch_api::models::{BrowseResponse, PlaylistEntry, StatusResponse};
use vlcwatch_api::{Credentials, Dispatch, Request, Scope, TransportConfig, VlcClient};

use crate::action::Action;
use crate::config::PlayerConfig;
use crate::convert::browse_entries;
use crate::error::CoreError;
use crate::events::{EventBus, EventStream, PlayerEvent};
use crate::model::{BrowseEntry, Playlist, PlaylistItem, Status};
use crate::scheduler;
use crate::store::StateCache;

/// Stateful client for one VLC instance.
///
/// Construction does no I/O and does not arm the polling loop.
/// [`start`](Self::start) probes the player and, if `auto_update` is set,
/// begins polling in the background. Direct calls
/// (`update_*`, actions, `browse`) work whether or not the scheduler runs.
pub struct Player<D: Dispatch = VlcClient> {
    inner: Arc<PlayerInner<D>>,
}

struct PlayerInner<D> {
    config: PlayerConfig,
    dispatcher: D,
    cache: StateCache,
    events: EventBus,
    cancel: CancellationToken,
    scheduler: Mutex<Option<JoinHandle<()>>>,
}

impl<D: Dispatch> Clone for Player<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Player<VlcClient> {
    /// Create a player talking HTTP to `config.host:config.port`.
    pub fn new(config: PlayerConfig) -> Result<Self, CoreError> {
        let base_url = config.base_url()?;
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = TransportConfig::new(config.timeout);
        let client = VlcClient::new(base_url, credentials, &transport)?;
        Ok(Self::with_dispatcher(config, client))
    }
}

impl<D: Dispatch> Player<D> {
    /// Create a player over any dispatcher.
    pub fn with_dispatcher(config: PlayerConfig, dispatcher: D) -> Self {
        Self {
            inner: Arc::new(PlayerInner {
                config,
                dispatcher,
                cache: StateCache::new(),
                events: EventBus::new(),
                cancel: CancellationToken::new(),
                scheduler: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.inner.config
    }

    pub fn cache(&self) -> &StateCache {
        &self.inner.cache
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Spawn the background task: reachability probe, then the polling
    /// loop. Returns immediately; the outcome arrives as a `Connected` or
    /// `Error` event. Calling it again while the task exists, or after
    /// [`shutdown`](Self::shutdown), does nothing.
    pub async fn start(&self) {
        let mut handle = self.inner.scheduler.lock().await;
        if self.inner.cancel.is_cancelled() {
            debug!("player shut down, not starting");
            return;
        }
        if handle.is_some() {
            debug!("scheduler already started");
            return;
        }
        let player = self.clone();
        let cancel = self.inner.cancel.clone();
        *handle = Some(tokio::spawn(scheduler::run(player, cancel)));
    }

    /// Stop the background task and wait for it to exit. Refreshes already
    /// in flight are left to finish on their own.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        let handle = self.inner.scheduler.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        debug!("player shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    // ── Cached state ─────────────────────────────────────────────────

    /// Last status seen by a refresh, if any.
    pub fn status(&self) -> Option<Arc<Status>> {
        self.inner.cache.status()
    }

    /// Last playlist seen by a refresh, if any.
    pub fn playlist(&self) -> Option<Arc<Playlist>> {
        self.inner.cache.playlist()
    }

    pub fn status_watch(&self) -> watch::Receiver<Option<Arc<Status>>> {
        self.inner.cache.subscribe_status()
    }

    pub fn playlist_watch(&self) -> watch::Receiver<Option<Arc<Playlist>>> {
        self.inner.cache.subscribe_playlist()
    }

    // ── Events ───────────────────────────────────────────────────────

    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.inner.events.subscribe()
    }

    /// Events as a `Stream`. Lagging subscribers skip what they missed.
    pub fn events(&self) -> EventStream {
        self.inner.events.stream()
    }

    pub(crate) fn publish(&self, event: PlayerEvent) {
        self.inner.events.publish(event);
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Fetch the status, store it and publish `StatusChanged` if it differs
    /// from the cached one.
    pub async fn update_status(&self) -> Result<Arc<Status>, CoreError> {
        let raw: StatusResponse = self.fetch(&Request::fetch(Scope::Status)).await?;
        let status = Status::try_from(raw)?;

        let change = self.inner.cache.apply_status(status);
        if change.is_changed() && self.inner.config.change_events {
            self.publish(PlayerEvent::StatusChanged {
                previous: change.previous,
                current: Arc::clone(&change.current),
            });
        }
        Ok(change.current)
    }

    /// Fetch the playlist tree, store it and publish `PlaylistChanged` if it
    /// differs from the cached one.
    pub async fn update_playlist(&self) -> Result<Arc<Playlist>, CoreError> {
        let raw: PlaylistEntry = self.fetch(&Request::fetch(Scope::Playlist)).await?;
        let playlist = PlaylistItem::from(raw);

        let change = self.inner.cache.apply_playlist(playlist);
        if change.is_changed() && self.inner.config.change_events {
            self.publish(PlayerEvent::PlaylistChanged {
                previous: change.previous,
                current: Arc::clone(&change.current),
            });
        }
        Ok(change.current)
    }

    /// Reachability check: one status fetch that leaves the cache and the
    /// change events alone.
    pub(crate) async fn probe_status(&self) -> Result<Status, CoreError> {
        let raw: StatusResponse = self.fetch(&Request::fetch(Scope::Status)).await?;
        Status::try_from(raw)
    }

    /// Refresh status and playlist concurrently. On success publishes one
    /// `Update` with both values; on failure publishes nothing and returns
    /// the first error.
    pub async fn update_all(&self) -> Result<(Arc<Status>, Arc<Playlist>), CoreError> {
        let (status, playlist) = tokio::try_join!(self.update_status(), self.update_playlist())?;

        self.publish(PlayerEvent::Update {
            status: Arc::clone(&status),
            playlist: Arc::clone(&playlist),
        });
        Ok((status, playlist))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Send a playback action and return the status the player answers
    /// with. The cache is not touched and no event is published; the next
    /// refresh picks up the change.
    pub async fn execute(&self, action: Action) -> Result<Status, CoreError> {
        debug!(action = action.name(), "executing action");
        let raw: StatusResponse = self.fetch(&action.request()).await?;
        Status::try_from(raw)
    }

    /// List a directory on the player's host. Never cached.
    pub async fn browse(&self, dir: &str) -> Result<Vec<BrowseEntry>, CoreError> {
        let raw: BrowseResponse = self.fetch(&Request::browse(dir)).await?;
        Ok(browse_entries(raw))
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        request: &Request,
    ) -> Result<T, CoreError> {
        let value = self.inner.dispatcher.dispatch(request).await?;
        serde_json::from_value(value).map_err(|e| CoreError::decode(&e))
    }
}
