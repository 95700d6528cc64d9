use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use serde::{Deserialize, Serialize};

/// Arguments of a status query. Together with the query identity they address one slot of the result cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQueryVariables {
    pub configuration: ClusterConfiguration,
    pub namespace: String,
    #[serde(default)]
    pub environment_name: Option<String>,
    #[serde(default)]
    pub flux_resource_path: Option<String>,
}

impl StatusQueryVariables {
    pub fn new(configuration: ClusterConfiguration, namespace: impl Into<String>) -> Self {
        StatusQueryVariables {
            configuration,
            namespace: namespace.into(),
            environment_name: None,
            flux_resource_path: None,
        }
    }

    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    pub fn with_flux_resource_path(mut self, flux_resource_path: impl Into<String>) -> Self {
        self.flux_resource_path = Some(flux_resource_path.into());
        self
    }

    /// The explicit resource path, when one was given and is not empty.
    pub fn explicit_resource_path(&self) -> Option<&str> {
        self.flux_resource_path.as_deref().filter(|path| !path.is_empty())
    }
}
