
use crate::configuration::models::status_watch_settings::StatusWatchSettings;
use crate::contracts::condition::ConditionList;
use crate::contracts::flux_resource_document::FluxResourceDocument;
use crate::contracts::resource_identity::ResourceIdentity;
use crate::services::backends::kubernetes::cluster_client::ClusterClient;
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::resource_update_handler::ResourceUpdateHandler;
use crate::services::backends::kubernetes::watch_registry::WatchRegistry;
use crate::services::backends::kubernetes::watch_session::{WatchSession, WatchSubscription};
use crate::services::result_cache::CacheTarget;
use log::debug;
use std::sync::Arc;

/// One status lookup: where to fetch the resource, the collection to watch it in, and the cache slot the watch
/// keeps fresh.
#[derive(Debug, Clone)]
pub struct StatusRequest {
    pub url: String,
    pub collection: ResourceIdentity,
    pub target: CacheTarget,
}

/// Fetches the current conditions of a resource and, when watching is enabled, starts a watch session
/// that keeps the cached result of the request up to date.
pub struct StatusFetcher {
    client: Arc<dyn ClusterClient>,
    settings: StatusWatchSettings,
    registry: Arc<WatchRegistry>,
    update_handler: Arc<dyn ResourceUpdateHandler<ConditionList>>,
}

impl StatusFetcher {
    pub fn new(
        client: Arc<dyn ClusterClient>,
        settings: StatusWatchSettings,
        registry: Arc<WatchRegistry>,
        update_handler: Arc<dyn ResourceUpdateHandler<ConditionList>>,
    ) -> Self {
        StatusFetcher {
            client,
            settings,
            registry,
            update_handler,
        }
    }

    /// Returns the conditions of the resource in source order, or an empty list when it reports none.
    /// Failures carry the server-provided message when there is one.
    pub async fn fetch(&self, request: StatusRequest) -> Result<ConditionList, ClusterError> {
        let configuration = &request.target.key.variables.configuration;
        let body = self
            .client
            .get(configuration, &request.url)
            .await
            .map_err(ClusterError::into_status_error)?;
        let document: FluxResourceDocument = serde_json::from_value(body)
            .map_err(|e| ClusterError::from(e).into_status_error())?;

        if self.settings.watch_enabled {
            if let Some(name) = document.name() {
                self.start_watch(&request, name).await;
            }
        }

        Ok(document.conditions())
    }

    async fn start_watch(&self, request: &StatusRequest, resource_name: &str) {
        let subscription = WatchSubscription {
            configuration: request.target.key.variables.configuration.clone(),
            collection: request.collection.clone(),
            resource_name: resource_name.to_string(),
            target: request.target.clone(),
        };
        let session = WatchSession::start(self.client.clone(), subscription, self.update_handler.clone());
        debug!(session:% = session.id(); "Watching {} for {}", resource_name, request.target);
        self.registry.register(request.target.key.clone(), session).await;
    }
}
