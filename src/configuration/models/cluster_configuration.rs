
use anyhow::anyhow;
use http::{HeaderName, HeaderValue, Uri};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connection parameters for reaching a cluster API: the base path of the API server (or of a proxy in
/// front of it) and the headers carrying credentials for every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfiguration {
    pub base_path: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ClusterConfiguration {
    pub fn new(base_path: impl Into<String>) -> Self {
        ClusterConfiguration {
            base_path: base_path.into(),
            headers: BTreeMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        Ok(serde_yml::from_str(source)?)
    }

    /// The base path without trailing slashes, ready to have `/apis/...` appended.
    pub fn base_url(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }

    /// Strips the base path from an absolute resource URL, leaving the path the API client expects.
    /// URLs that do not start with the base path are returned unchanged.
    pub fn relative_path<'a>(&self, url: &'a str) -> &'a str {
        url.strip_prefix(self.base_url()).unwrap_or(url)
    }

    /// Builds a client configuration that sends every request to the base path with the configured headers.
    pub fn to_kube_config(&self) -> anyhow::Result<kube::Config> {
        let cluster_url: Uri = self
            .base_path
            .parse()
            .map_err(|e| anyhow!("Invalid cluster base path {:?}: {}", self.base_path, e))?;
        let mut config = kube::Config::new(cluster_url);
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| anyhow!("Invalid header name {:?}: {}", name, e))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| anyhow!("Invalid value for header {:?}: {}", name, e))?;
            config.headers.push((header_name, header_value));
        }
        Ok(config)
    }
}
