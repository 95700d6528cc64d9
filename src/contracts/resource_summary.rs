
use serde::{Deserialize, Serialize};

/// Identity fields of one item of a resource collection. Every other field of the item is ignored when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub metadata: SummaryMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// A collection response read as summaries. A missing or null `items` field reads as an empty collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceSummaryList {
    #[serde(default)]
    pub items: Option<Vec<ResourceSummary>>,
}

impl ResourceSummaryList {
    pub fn into_summaries(self) -> Vec<ResourceSummary> {
        self.items.unwrap_or_default()
    }
}
