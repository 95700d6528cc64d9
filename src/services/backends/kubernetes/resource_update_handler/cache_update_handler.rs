use crate::contracts::condition::ConditionList;
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::resource_update_handler::ResourceUpdateHandler;
use crate::services::base::upsert_repository::UpsertRepository;
use crate::services::result_cache::{CacheTarget, ResultCache};
use async_trait::async_trait;
use log::warn;
use maplit::btreemap;
use std::sync::Arc;

/// Overwrites the cache slot of the target with every new condition list. Errors leave the cache untouched.
pub struct CacheUpdateHandler {
    cache: Arc<ResultCache>,
}

impl CacheUpdateHandler {
    pub fn new(cache: Arc<ResultCache>) -> Self {
        CacheUpdateHandler { cache }
    }
}

#[async_trait]
impl ResourceUpdateHandler<ConditionList> for CacheUpdateHandler {
    async fn handle_update(&self, target: &CacheTarget, result: &Result<ConditionList, ClusterError>) -> () {
        if let Ok(conditions) = result {
            let entry = btreemap! { target.field.clone() => conditions.clone() };
            if let Err(e) = self.cache.upsert(target.key.clone(), entry).await {
                warn!("Failed to write status for {}: {}", target, e);
            }
        }
    }
}
