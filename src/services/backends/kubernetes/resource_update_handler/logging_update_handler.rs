use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::resource_update_handler::ResourceUpdateHandler;
use crate::services::result_cache::CacheTarget;
use async_trait::async_trait;
use log::{debug, warn};
use std::fmt::Debug;

pub struct LoggingUpdateHandler;

#[async_trait]
impl<S> ResourceUpdateHandler<S> for LoggingUpdateHandler
where
    S: Debug + Send + Sync + 'static,
{
    async fn handle_update(&self, target: &CacheTarget, result: &Result<S, ClusterError>) -> () {
        match result {
            Ok(value) => debug!(
                query = target.key.query.as_str(),
                field = target.field.as_str();
                "Received update for {}: {:?}", target, value
            ),
            Err(e) => warn!(
                query = target.key.query.as_str(),
                field = target.field.as_str(),
                namespace = target.key.variables.namespace.as_str();
                "Watch for {} failed: {}", target, e
            ),
        }
    }
}
