
use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::contracts::flux_resource_document::FluxResourceDocument;
use crate::contracts::resource_identity::ResourceIdentity;
use crate::services::backends::kubernetes::cluster_client::{ClusterClient, WatchPayload, WatchStream};
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::memory::InMemoryRepository;
use crate::services::base::upsert_repository::{ReadOnlyRepository, UpsertRepository, ValueFactory};
use async_trait::async_trait;
use futures::{StreamExt, future};
use kube::api::{ApiResource, DynamicObject, GroupVersionKind};
use kube::runtime::reflector::store::Writer;
use kube::runtime::reflector::{Store, reflector};
use kube::runtime::watcher::Event;
use kube::runtime::{WatchStreamExt, watcher};
use kube::{Api, Client};
use log::{debug, info};
use std::sync::Arc;

pub type ClientFactory = dyn ValueFactory<ClusterConfiguration, Client, CreateError = anyhow::Error>;

/// A client together with the configuration it was built from.
#[derive(Clone)]
struct CachedClient {
    configuration: ClusterConfiguration,
    client: Client,
}

/// Builds clients that send every request to the base path with the configured headers.
pub struct KubeClientFactory;

#[async_trait]
impl ValueFactory<ClusterConfiguration, Client> for KubeClientFactory {
    type CreateError = anyhow::Error;

    async fn create(&self, key: &ClusterConfiguration) -> Result<Client, Self::CreateError> {
        info!("Creating cluster client for {}", key.base_path);
        let config = key.to_kube_config()?;
        Ok(Client::try_from(config)?)
    }
}

/// [`ClusterClient`] backed by `kube`.
///
/// Keeps one client per base path. A request with different headers for the same base path (a rotated token,
/// for instance) builds a new client that replaces the cached one, so the cache never outgrows the set of
/// cluster endpoints in use. Watches keep the client they were started with.
pub struct KubeClusterClient {
    clients: InMemoryRepository<String, CachedClient>,
    factory: Arc<ClientFactory>,
}

impl KubeClusterClient {
    pub fn new() -> Self {
        Self::with_factory(Arc::new(KubeClientFactory))
    }

    pub fn with_factory(factory: Arc<ClientFactory>) -> Self {
        KubeClusterClient {
            clients: InMemoryRepository::default(),
            factory,
        }
    }

    async fn client(&self, configuration: &ClusterConfiguration) -> Result<Client, ClusterError> {
        let key = configuration.base_url().to_string();
        if let Ok(cached) = self.clients.get(key.clone()).await {
            if cached.configuration == *configuration {
                return Ok(cached.client);
            }
            debug!("Configuration for {} changed, replacing its client", key);
        }
        let client = self
            .factory
            .create(configuration)
            .await
            .map_err(|e| ClusterError::Transport(e.to_string()))?;
        let cached = CachedClient {
            configuration: configuration.clone(),
            client: client.clone(),
        };
        self.clients
            .upsert(key, cached)
            .await
            .map_err(|e| ClusterError::Transport(e.to_string()))?;
        Ok(client)
    }
}

impl Default for KubeClusterClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    async fn get(&self, configuration: &ClusterConfiguration, url: &str) -> Result<serde_json::Value, ClusterError> {
        let client = self.client(configuration).await?;
        let path = configuration.relative_path(url);
        debug!("GET {}", path);
        let request = http::Request::get(path)
            .body(Vec::new())
            .map_err(|e| ClusterError::Transport(e.to_string()))?;
        Ok(client.request::<serde_json::Value>(request).await?)
    }

    async fn watch(
        &self,
        configuration: &ClusterConfiguration,
        collection: &ResourceIdentity,
        field_selector: &str,
    ) -> Result<WatchStream, ClusterError> {
        let client = self.client(configuration).await?;
        let (group, version) = collection.group_version();
        let gvk = GroupVersionKind::gvk(group, version, &collection.kind);
        let resource = ApiResource::from_gvk_with_plural(&gvk, &collection.resource_type);
        let api: Api<DynamicObject> = Api::namespaced_with(client, &collection.namespace, &resource);

        let writer = Writer::new(resource);
        let reader = writer.as_reader();
        let watcher_config = watcher::Config::default().fields(field_selector);
        debug!(
            "Watching {} in {} with fieldSelector={}",
            collection.resource_type, collection.namespace, field_selector
        );

        let stream = reflector(writer, watcher(api, watcher_config))
            .default_backoff()
            .filter_map(move |event| {
                let payload = match event {
                    Ok(Event::Apply(_)) | Ok(Event::Delete(_)) | Ok(Event::InitDone) => Some(snapshot(&reader)),
                    Ok(Event::Init) | Ok(Event::InitApply(_)) => None,
                    Err(e) => Some(Err(ClusterError::from(e))),
                };
                future::ready(payload)
            })
            .boxed();
        Ok(stream)
    }
}

/// Objects currently held by the reflector store, ordered by name.
fn snapshot(reader: &Store<DynamicObject>) -> Result<WatchPayload, ClusterError> {
    let mut objects = reader.state();
    objects.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));
    objects
        .iter()
        .map(|object| -> Result<FluxResourceDocument, ClusterError> {
            Ok(serde_json::from_value(serde_json::to_value(&**object)?)?)
        })
        .collect()
}
