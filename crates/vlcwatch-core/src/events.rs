// ── Player events ──
//
// Everything observable about the polling loop is published on one
// broadcast channel. Each subscriber owns its receiver, so a slow or
// dropped subscriber never blocks or fails the publisher.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};
use std::time::Duration;

use futures_core::Stream;
use strum::IntoStaticStr;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::{trace, warn};

use crate::error::CoreError;
use crate::model::{Playlist, Status};

const EVENT_CHANNEL_SIZE: usize = 256;

/// A notification published by a [`Player`](crate::Player).
#[derive(Debug, Clone, IntoStaticStr)]
pub enum PlayerEvent {
    /// The reachability probe succeeded.
    #[strum(serialize = "connect")]
    Connected,

    /// The scheduler fired; `delta` is the time since the previous fire.
    #[strum(serialize = "tick")]
    Tick { delta: Duration },

    /// A combined refresh finished, changed or not.
    #[strum(serialize = "update")]
    Update {
        status: Arc<Status>,
        playlist: Arc<Playlist>,
    },

    /// The status differs from the cached one. `previous` is `None` for the
    /// first status ever observed.
    #[strum(serialize = "statuschange")]
    StatusChanged {
        previous: Option<Arc<Status>>,
        current: Arc<Status>,
    },

    /// The playlist differs from the cached one. `previous` is `None` for
    /// the first playlist ever observed.
    #[strum(serialize = "playlistchange")]
    PlaylistChanged {
        previous: Option<Arc<Playlist>>,
        current: Arc<Playlist>,
    },

    /// A background operation (probe or scheduled refresh) failed.
    #[strum(serialize = "error")]
    Error(Arc<CoreError>),
}

impl PlayerEvent {
    /// Short event name (`"tick"`, `"statuschange"`, ...).
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Fan-out point for [`PlayerEvent`]s.
pub struct EventBus {
    tx: broadcast::Sender<PlayerEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_SIZE);
        Self { tx }
    }

    /// Publish to every current subscriber. Having none is not an error.
    pub fn publish(&self, event: PlayerEvent) {
        let name = event.name();
        match self.tx.send(event) {
            Ok(n) => trace!(event = name, subscribers = n, "event published"),
            Err(_) => trace!(event = name, "event dropped, no subscribers"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.tx.subscribe()
    }

    pub fn stream(&self) -> EventStream {
        EventStream {
            inner: BroadcastStream::new(self.tx.subscribe()),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// `Stream` of events for one subscriber.
///
/// A subscriber that falls more than the channel capacity behind skips the
/// events it missed and keeps going.
pub struct EventStream {
    inner: BroadcastStream<PlayerEvent>,
}

impl Stream for EventStream {
    type Item = PlayerEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match ready!(Pin::new(&mut self.inner).poll_next(cx)) {
                Some(Ok(event)) => return Poll::Ready(Some(event)),
                Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                    warn!(skipped, "event subscriber lagged");
                }
                None => return Poll::Ready(None),
            }
        }
    }
}
