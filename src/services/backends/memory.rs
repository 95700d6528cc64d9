
use crate::services::base::upsert_repository::{ReadOnlyRepository, UpsertRepository};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tokio::sync::RwLock;

/// Process-local repository: a hash map behind an async read-write lock.
pub type InMemoryRepository<Key, Entity> = RwLock<HashMap<Key, Entity>>;

#[async_trait]
impl<Key, Entity> ReadOnlyRepository<Key, Entity> for InMemoryRepository<Key, Entity>
where
    Key: Debug + Eq + Hash + Send + Sync,
    Entity: Clone + Send + Sync,
{
    type ReadError = anyhow::Error;

    async fn get(&self, key: Key) -> Result<Entity, Self::ReadError> {
        self.read()
            .await
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow!("No entry stored under {:?}", key))
    }
}

#[async_trait]
impl<Key, Entity> UpsertRepository<Key, Entity> for InMemoryRepository<Key, Entity>
where
    Key: Debug + Eq + Hash + Send + Sync,
    Entity: Clone + Send + Sync,
{
    type Error = anyhow::Error;

    async fn upsert(&self, key: Key, entity: Entity) -> Result<Entity, Self::Error> {
        self.write().await.insert(key, entity.clone());
        Ok(entity)
    }
}
