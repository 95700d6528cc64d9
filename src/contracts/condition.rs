use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A status entry reported by a reconciler. Fields this crate does not know about are kept as they are,
/// so a condition round-trips unchanged to whoever renders it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type", default)]
    pub condition_type: String,

    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Conditions in the order the resource reports them.
pub type ConditionList = Vec<Condition>;
