
use serde::Deserialize;

const DEFAULT_ERROR_CHANNEL_CAPACITY: usize = 64;

/// Settings for the status watch. When `watch_enabled` is false, status is refreshed only by repeated fetches.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusWatchSettings {
    #[serde(default, alias = "k8sWatchApi")]
    pub watch_enabled: bool,

    #[serde(default = "default_error_channel_capacity")]
    pub error_channel_capacity: usize,
}

fn default_error_channel_capacity() -> usize {
    DEFAULT_ERROR_CHANNEL_CAPACITY
}

impl Default for StatusWatchSettings {
    fn default() -> Self {
        StatusWatchSettings {
            watch_enabled: false,
            error_channel_capacity: DEFAULT_ERROR_CHANNEL_CAPACITY,
        }
    }
}

impl StatusWatchSettings {
    pub fn polling_only() -> Self {
        Self::default()
    }

    pub fn with_watch() -> Self {
        StatusWatchSettings {
            watch_enabled: true,
            ..Default::default()
        }
    }

    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        Ok(serde_yml::from_str(source)?)
    }
}
