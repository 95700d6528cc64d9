use crate::contracts::condition::ConditionList;
use crate::services::base::upsert_repository::ReadOnlyRepository;
use crate::services::result_cache::{CacheTarget, ResultCache};
use std::time::Duration;

#[allow(async_fn_in_trait)]
pub trait WaitForStatus {
    /// Waits until the cache slot holds the expected conditions.
    async fn wait_for_status(&self, target: &CacheTarget, expected: &ConditionList, timeout: Duration);

    /// Current conditions of the cache slot, if anything was written to it.
    async fn cached_status(&self, target: &CacheTarget) -> Option<ConditionList>;
}

impl WaitForStatus for ResultCache {
    async fn wait_for_status(&self, target: &CacheTarget, expected: &ConditionList, timeout: Duration) {
        let start_time = std::time::Instant::now();
        loop {
            if self.cached_status(target).await.as_ref() == Some(expected) {
                return;
            }
            if start_time.elapsed() > timeout {
                panic!(
                    "Timed out waiting for status of {}, last seen: {:?}",
                    target,
                    self.cached_status(target).await
                );
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    async fn cached_status(&self, target: &CacheTarget) -> Option<ConditionList> {
        self.get(target.key.clone())
            .await
            .ok()
            .and_then(|entry| entry.get(&target.field).cloned())
    }
}
