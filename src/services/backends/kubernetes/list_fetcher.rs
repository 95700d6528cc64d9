#[cfg(test)]
mod tests;

use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::contracts::resource_summary::{ResourceSummary, ResourceSummaryList};
use crate::services::backends::kubernetes::cluster_client::ClusterClient;
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use std::sync::Arc;

/// Lists a resource collection, keeping only the identity of each item.
pub struct ListFetcher {
    client: Arc<dyn ClusterClient>,
}

impl ListFetcher {
    pub fn new(client: Arc<dyn ClusterClient>) -> Self {
        ListFetcher { client }
    }

    /// Failures carry the server-provided reason when there is one.
    pub async fn fetch(
        &self,
        configuration: &ClusterConfiguration,
        url: &str,
    ) -> Result<Vec<ResourceSummary>, ClusterError> {
        let body = self
            .client
            .get(configuration, url)
            .await
            .map_err(ClusterError::into_list_error)?;
        let list: ResourceSummaryList =
            serde_json::from_value(body).map_err(|e| ClusterError::from(e).into_list_error())?;
        Ok(list.into_summaries())
    }
}
