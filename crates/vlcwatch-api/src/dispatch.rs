// Dispatch seam
//
// Higher layers issue requests through this trait rather than the concrete
// HTTP client, so the cache and scheduler can run against scripted players.

use std::future::Future;
use std::sync::Arc;

use crate::client::VlcClient;
use crate::error::Error;
use crate::request::Request;

/// Something that can carry one [`Request`] to a player and return the
/// parsed JSON body.
///
/// Implementations perform exactly one round trip per call and never retry.
pub trait Dispatch: Send + Sync + 'static {
    fn dispatch(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<serde_json::Value, Error>> + Send;
}

impl Dispatch for VlcClient {
    async fn dispatch(&self, request: &Request) -> Result<serde_json::Value, Error> {
        self.send(request).await
    }
}

impl<D: Dispatch> Dispatch for Arc<D> {
    fn dispatch(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<serde_json::Value, Error>> + Send {
        (**self).dispatch(request)
    }
}
