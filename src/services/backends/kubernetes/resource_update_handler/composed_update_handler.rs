
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::resource_update_handler::ResourceUpdateHandler;
use crate::services::result_cache::CacheTarget;
use async_trait::async_trait;
use std::sync::Arc;

/// Fans one update out to a chain of handlers. Each handler sees the update after the ones before it finished.
pub struct ComposedUpdateHandler<S> {
    chain: Vec<Arc<dyn ResourceUpdateHandler<S>>>,
}

impl<S> ComposedUpdateHandler<S> {
    pub fn new(chain: Vec<Arc<dyn ResourceUpdateHandler<S>>>) -> Self {
        ComposedUpdateHandler { chain }
    }
}

impl<S> FromIterator<Arc<dyn ResourceUpdateHandler<S>>> for ComposedUpdateHandler<S> {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ResourceUpdateHandler<S>>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl<S> ResourceUpdateHandler<S> for ComposedUpdateHandler<S>
where
    S: Send + Sync + 'static,
{
    async fn handle_update(&self, target: &CacheTarget, result: &Result<S, ClusterError>) -> () {
        for handler in self.chain.iter() {
            handler.handle_update(target, result).await;
        }
    }
}
