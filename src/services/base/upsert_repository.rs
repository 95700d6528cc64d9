use async_trait::async_trait;

#[async_trait]
/// A keyed store whose values can be written. Writes replace the stored value as a whole: the last write wins.
pub trait UpsertRepository<Key, Entity>: ReadOnlyRepository<Key, Entity> + Send + Sync {
    type Error;

    /// Stores the value under the key and returns it
    async fn upsert(&self, key: Key, entity: Entity) -> Result<Entity, Self::Error>;
}

#[async_trait]
/// A keyed store that can only be read
pub trait ReadOnlyRepository<Key, Entity>: Send + Sync {
    type ReadError;

    async fn get(&self, key: Key) -> Result<Entity, Self::ReadError>;
}

#[async_trait]
/// Builds the value for a key when the store has none, or a stale one
pub trait ValueFactory<Key, Entity>: Send + Sync {
    type CreateError;

    async fn create(&self, key: &Key) -> Result<Entity, Self::CreateError>;
}
