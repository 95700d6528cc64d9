pub mod cache_update_handler;
pub mod composed_update_handler;
pub mod error_channel_update_handler;
pub mod logging_update_handler;

use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::result_cache::CacheTarget;
use async_trait::async_trait;

#[async_trait]
/// Receives every outcome of a watch session: new values for its cache target, or the error that ended it
pub trait ResourceUpdateHandler<S>: Send + Sync
where
    S: Send + Sync,
{
    async fn handle_update(&self, target: &CacheTarget, result: &Result<S, ClusterError>) -> ();
}
