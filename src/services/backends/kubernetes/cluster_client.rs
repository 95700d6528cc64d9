pub mod kube_cluster_client;

use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::contracts::flux_resource_document::FluxResourceDocument;
use crate::contracts::resource_identity::ResourceIdentity;
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Every item is the full set of objects the watch currently matches, ordered by name.
pub type WatchPayload = Vec<FluxResourceDocument>;

pub type WatchStream = BoxStream<'static, Result<WatchPayload, ClusterError>>;

#[async_trait]
/// Transport to a cluster API reached through a [`ClusterConfiguration`]
pub trait ClusterClient: Send + Sync {
    /// Issues one GET with the configured headers and returns the decoded JSON body
    async fn get(&self, configuration: &ClusterConfiguration, url: &str) -> Result<serde_json::Value, ClusterError>;

    /// Watches a resource collection restricted by a field selector.
    /// Errors are yielded as items and the watch resumes after them. The stream ends when the transport gives up.
    async fn watch(
        &self,
        configuration: &ClusterConfiguration,
        collection: &ResourceIdentity,
        field_selector: &str,
    ) -> Result<WatchStream, ClusterError>;
}
