
use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::contracts::condition::ConditionList;
use crate::contracts::resource_identity::ResourceIdentity;
use crate::services::backends::kubernetes::cluster_client::{ClusterClient, WatchPayload};
use crate::services::backends::kubernetes::resource_update_handler::ResourceUpdateHandler;
use crate::services::backends::kubernetes::resource_url_builder::watch_path;
use crate::services::result_cache::CacheTarget;
use futures::StreamExt;
use log::{debug, info};
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// What a watch session follows: one named resource of a collection, and the cache slot it updates.
#[derive(Debug, Clone)]
pub struct WatchSubscription {
    pub configuration: ClusterConfiguration,
    pub collection: ResourceIdentity,
    pub resource_name: String,
    pub target: CacheTarget,
}

impl WatchSubscription {
    /// Field selector matching the resource name. The name is percent-decoded first.
    pub fn field_selector(&self) -> String {
        format!(
            "metadata.name={}",
            percent_decode_str(&self.resource_name).decode_utf8_lossy()
        )
    }
}

/// Conditions of the first object of a watch payload. An empty payload yields an empty list.
pub fn first_item_conditions(payload: &WatchPayload) -> ConditionList {
    payload.first().map(|object| object.conditions()).unwrap_or_default()
}

/// A background task consuming one watch stream. Stream errors are reported and consumption goes on;
/// the session ends when the stream ends, when it is stopped, or when it is dropped.
pub struct WatchSession {
    id: Uuid,
    handle: JoinHandle<()>,
}

impl WatchSession {
    pub fn start(
        client: Arc<dyn ClusterClient>,
        subscription: WatchSubscription,
        update_handler: Arc<dyn ResourceUpdateHandler<ConditionList>>,
    ) -> Self {
        let id = Uuid::new_v4();
        let handle = tokio::spawn(consume(id, client, subscription, update_handler));
        WatchSession { id, handle }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn stop(&self) {
        self.handle.abort();
        debug!(session:% = self.id; "Watch session stopped");
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn consume(
    id: Uuid,
    client: Arc<dyn ClusterClient>,
    subscription: WatchSubscription,
    update_handler: Arc<dyn ResourceUpdateHandler<ConditionList>>,
) {
    let field_selector = subscription.field_selector();
    let target = &subscription.target;
    let collection_path = watch_path(&subscription.collection);
    info!(
        session:% = id,
        watch_path = collection_path.as_str(),
        field_selector = field_selector.as_str();
        "Starting watch for {}", target
    );

    let mut stream = match client
        .watch(&subscription.configuration, &subscription.collection, &field_selector)
        .await
    {
        Ok(stream) => stream,
        Err(e) => {
            update_handler.handle_update(target, &Err(e)).await;
            return;
        }
    };

    while let Some(event) = stream.next().await {
        match event {
            Ok(payload) => {
                let conditions = first_item_conditions(&payload);
                update_handler.handle_update(target, &Ok(conditions)).await;
            }
            Err(e) => update_handler.handle_update(target, &Err(e)).await,
        }
    }
    info!(session:% = id; "Watch stream for {} closed", target);
}
