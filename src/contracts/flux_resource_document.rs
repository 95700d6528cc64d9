
use crate::contracts::condition::ConditionList;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

/// The parts of a Flux resource this crate reads. Everything else in the response body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluxResourceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FluxResourceStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FluxResourceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ConditionList>,
}

impl FluxResourceDocument {
    /// Name of the resource, if the server reported a non-empty one.
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn conditions(&self) -> ConditionList {
        self.status
            .as_ref()
            .and_then(|status| status.conditions.clone())
            .unwrap_or_default()
    }
}
