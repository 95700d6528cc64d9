
use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::configuration::models::status_watch_settings::StatusWatchSettings;
use crate::contracts::condition::ConditionList;
use crate::contracts::flux_resource_kind::FluxResourceKind;
use crate::contracts::resource_identity::ResourceIdentity;
use crate::contracts::resource_summary::ResourceSummary;
use crate::contracts::status_query_variables::StatusQueryVariables;
use crate::services::backends::kubernetes::cluster_client::ClusterClient;
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::list_fetcher::ListFetcher;
use crate::services::backends::kubernetes::resource_update_handler::ResourceUpdateHandler;
use crate::services::backends::kubernetes::resource_update_handler::cache_update_handler::CacheUpdateHandler;
use crate::services::backends::kubernetes::resource_update_handler::composed_update_handler::ComposedUpdateHandler;
use crate::services::backends::kubernetes::resource_update_handler::error_channel_update_handler::{
    ErrorChannelUpdateHandler, WatchFailure,
};
use crate::services::backends::kubernetes::resource_update_handler::logging_update_handler::LoggingUpdateHandler;
use crate::services::backends::kubernetes::resource_url_builder::{explicit_resource_url, resource_url};
use crate::services::backends::kubernetes::status_fetcher::{StatusFetcher, StatusRequest};
use crate::services::backends::kubernetes::watch_registry::WatchRegistry;
use crate::services::backends::memory::InMemoryRepository;
use crate::services::base::upsert_repository::ReadOnlyRepository;
use crate::services::result_cache::{CacheEntry, CacheKey, CacheTarget, ResultCache};
use log::info;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Receiver;

/// Resolves the status of Flux Kustomizations and HelmReleases and lists them.
///
/// Status lookups return the conditions fetched at request time. With watching enabled, each lookup also
/// leaves a watch session behind that writes later conditions to the result cache under the same query
/// and variables, replacing the session of an earlier lookup with the same key.
pub struct FluxStatusService {
    status_fetcher: StatusFetcher,
    list_fetcher: ListFetcher,
    cache: Arc<ResultCache>,
    registry: Arc<WatchRegistry>,
}

impl FluxStatusService {
    pub fn new(
        client: Arc<dyn ClusterClient>,
        cache: Arc<ResultCache>,
        settings: StatusWatchSettings,
        update_handler: Arc<dyn ResourceUpdateHandler<ConditionList>>,
    ) -> Self {
        let registry = Arc::new(WatchRegistry::new());
        FluxStatusService {
            status_fetcher: StatusFetcher::new(client.clone(), settings, registry.clone(), update_handler),
            list_fetcher: ListFetcher::new(client),
            cache,
            registry,
        }
    }

    /// Builds the service with an in-memory result cache. Watch updates are written to the cache and logged;
    /// watch failures are also published on the returned receiver.
    pub fn start(client: Arc<dyn ClusterClient>, settings: StatusWatchSettings) -> (Self, Receiver<WatchFailure>) {
        let cache: Arc<ResultCache> = Arc::new(InMemoryRepository::<CacheKey, CacheEntry>::default());
        let (sender, receiver) = mpsc::channel(settings.error_channel_capacity.max(1));
        let update_handler = ComposedUpdateHandler::<ConditionList>::new(vec![
            Arc::new(CacheUpdateHandler::new(cache.clone())),
            Arc::new(LoggingUpdateHandler),
            Arc::new(ErrorChannelUpdateHandler::new(sender)),
        ]);
        info!("Starting Flux status service, watch enabled: {}", settings.watch_enabled);
        let service = Self::new(client, cache, settings, Arc::new(update_handler));
        (service, receiver)
    }

    pub async fn flux_kustomization_status(&self, variables: StatusQueryVariables) -> Result<ConditionList, ClusterError> {
        self.resource_status(FluxResourceKind::Kustomization, variables).await
    }

    pub async fn flux_helm_release_status(&self, variables: StatusQueryVariables) -> Result<ConditionList, ClusterError> {
        self.resource_status(FluxResourceKind::HelmRelease, variables).await
    }

    pub async fn flux_kustomizations(
        &self,
        configuration: &ClusterConfiguration,
        namespace: &str,
    ) -> Result<Vec<ResourceSummary>, ClusterError> {
        self.resources(FluxResourceKind::Kustomization, configuration, namespace).await
    }

    pub async fn flux_helm_releases(
        &self,
        configuration: &ClusterConfiguration,
        namespace: &str,
    ) -> Result<Vec<ResourceSummary>, ClusterError> {
        self.resources(FluxResourceKind::HelmRelease, configuration, namespace).await
    }

    /// The cache slot a status lookup of this kind with these variables is kept in.
    pub fn cache_target(kind: FluxResourceKind, variables: StatusQueryVariables) -> CacheTarget {
        CacheTarget::new(CacheKey::new(kind.status_query(), variables), kind.status_field())
    }

    /// Conditions last written to the result cache for a status lookup, if any.
    pub async fn cached_status(&self, kind: FluxResourceKind, variables: StatusQueryVariables) -> Option<ConditionList> {
        let target = Self::cache_target(kind, variables);
        self.cache
            .get(target.key)
            .await
            .ok()
            .and_then(|mut entry| entry.remove(&target.field))
    }

    pub fn cache(&self) -> Arc<ResultCache> {
        self.cache.clone()
    }

    pub async fn active_watches(&self) -> usize {
        self.registry.active_sessions().await
    }

    /// Stops the watch session kept for a status lookup. Returns false if there was none.
    pub async fn stop_watch(&self, kind: FluxResourceKind, variables: StatusQueryVariables) -> bool {
        let target = Self::cache_target(kind, variables);
        self.registry.stop(&target.key).await
    }

    pub async fn shutdown(&self) {
        self.registry.stop_all().await;
        info!("Flux status service stopped");
    }

    async fn resource_status(
        &self,
        kind: FluxResourceKind,
        variables: StatusQueryVariables,
    ) -> Result<ConditionList, ClusterError> {
        let identity = ResourceIdentity::collection(kind, variables.namespace.as_str());
        let base_url = variables.configuration.base_url();
        let url = match variables.explicit_resource_path() {
            Some(path) => explicit_resource_url(base_url, path),
            None => resource_url(base_url, &identity.clone().with_name(variables.environment_name.clone())),
        };
        let request = StatusRequest {
            url,
            collection: identity,
            target: Self::cache_target(kind, variables),
        };
        self.status_fetcher.fetch(request).await
    }

    async fn resources(
        &self,
        kind: FluxResourceKind,
        configuration: &ClusterConfiguration,
        namespace: &str,
    ) -> Result<Vec<ResourceSummary>, ClusterError> {
        let identity = ResourceIdentity::collection(kind, namespace);
        let url = resource_url(configuration.base_url(), &identity);
        self.list_fetcher.fetch(configuration, &url).await
    }
}
