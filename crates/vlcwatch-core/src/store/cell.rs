// ── Single cache cell ──
//
// A `watch` channel holding `Option<Arc<T>>`. Replacement swaps the value in
// one step and hands back the previous one, so compare-then-overwrite never
// interleaves with another refresh of the same kind.

use std::sync::Arc;

use tokio::sync::watch;

/// Outcome of replacing a cached value.
#[derive(Debug, Clone)]
pub struct Change<T> {
    /// The value held before the swap; `None` on the first refresh ever.
    pub previous: Option<Arc<T>>,
    pub current: Arc<T>,
}

impl<T: PartialEq> Change<T> {
    /// `true` when there was no previous value or it differs structurally.
    pub fn is_changed(&self) -> bool {
        self.previous
            .as_deref()
            .is_none_or(|prev| *prev != *self.current)
    }

    pub fn is_initial(&self) -> bool {
        self.previous.is_none()
    }
}

pub(crate) struct CacheCell<T> {
    value: watch::Sender<Option<Arc<T>>>,
}

impl<T> CacheCell<T> {
    pub(crate) fn new() -> Self {
        let (value, _) = watch::channel(None);
        Self { value }
    }

    pub(crate) fn get(&self) -> Option<Arc<T>> {
        self.value.borrow().clone()
    }

    /// Overwrite the cell unconditionally and report what was there.
    pub(crate) fn replace(&self, current: Arc<T>) -> Change<T> {
        let previous = self.value.send_replace(Some(Arc::clone(&current)));
        Change { previous, current }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.value.subscribe()
    }
}
