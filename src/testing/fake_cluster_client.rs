use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::contracts::flux_resource_document::FluxResourceDocument;
use crate::contracts::resource_identity::ResourceIdentity;
use crate::services::backends::kubernetes::cluster_client::{ClusterClient, WatchPayload, WatchStream};
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::resource_url_builder::watch_path;
use async_trait::async_trait;
use futures::StreamExt;
use futures::channel::mpsc::{UnboundedSender, unbounded};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// A watch opened through the fake client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWatch {
    pub base_path: String,
    pub watch_path: String,
    pub field_selector: String,
}

/// [`ClusterClient`] serving canned responses and letting tests drive watch streams.
#[derive(Default)]
pub struct FakeClusterClient {
    responses: Mutex<HashMap<String, Result<Value, ClusterError>>>,
    requests: Mutex<Vec<(ClusterConfiguration, String)>>,
    watch_error: Mutex<Option<ClusterError>>,
    watches: Mutex<Vec<RecordedWatch>>,
    senders: Mutex<Vec<UnboundedSender<Result<WatchPayload, ClusterError>>>>,
}

impl FakeClusterClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, url: &str, body: Value) {
        self.responses.lock().unwrap().insert(url.to_string(), Ok(body));
    }

    pub fn fail_with(&self, url: &str, error: ClusterError) {
        self.responses.lock().unwrap().insert(url.to_string(), Err(error));
    }

    /// Makes every following watch fail to open.
    pub fn fail_watches_with(&self, error: ClusterError) {
        *self.watch_error.lock().unwrap() = Some(error);
    }

    pub fn requests(&self) -> Vec<(ClusterConfiguration, String)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn watches(&self) -> Vec<RecordedWatch> {
        self.watches.lock().unwrap().clone()
    }

    /// Waits until at least `count` watches were opened.
    pub async fn wait_for_watches(&self, count: usize, timeout: Duration) -> Vec<RecordedWatch> {
        let start_time = std::time::Instant::now();
        loop {
            let watches = self.watches();
            if watches.len() >= count {
                return watches;
            }
            if start_time.elapsed() > timeout {
                panic!("Timed out waiting for {} watches, saw {}", count, watches.len());
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Delivers a payload on the n-th opened watch. Returns false when that watch is no longer consumed.
    pub fn push_payload(&self, watch: usize, payload: Vec<Value>) -> bool {
        let documents = payload
            .into_iter()
            .map(|object| serde_json::from_value::<FluxResourceDocument>(object).expect("Invalid test document"))
            .collect();
        self.push(watch, Ok(documents))
    }

    pub fn push_error(&self, watch: usize, error: ClusterError) -> bool {
        self.push(watch, Err(error))
    }

    /// Ends the n-th opened watch the way a server closing the connection would.
    pub fn close_watch(&self, watch: usize) {
        if let Some(sender) = self.senders.lock().unwrap().get(watch) {
            sender.close_channel();
        }
    }

    fn push(&self, watch: usize, event: Result<WatchPayload, ClusterError>) -> bool {
        let senders = self.senders.lock().unwrap();
        match senders.get(watch) {
            Some(sender) => sender.unbounded_send(event).is_ok(),
            None => false,
        }
    }
}

#[async_trait]
impl ClusterClient for FakeClusterClient {
    async fn get(&self, configuration: &ClusterConfiguration, url: &str) -> Result<Value, ClusterError> {
        self.requests
            .lock()
            .unwrap()
            .push((configuration.clone(), url.to_string()));
        let responses = self.responses.lock().unwrap();
        match responses.get(url) {
            Some(response) => response.clone(),
            None => Err(ClusterError::Transport(format!("no route to {}", url))),
        }
    }

    async fn watch(
        &self,
        configuration: &ClusterConfiguration,
        collection: &ResourceIdentity,
        field_selector: &str,
    ) -> Result<WatchStream, ClusterError> {
        let recorded = RecordedWatch {
            base_path: configuration.base_path.clone(),
            watch_path: watch_path(collection),
            field_selector: field_selector.to_string(),
        };
        if let Some(error) = self.watch_error.lock().unwrap().clone() {
            self.watches.lock().unwrap().push(recorded);
            return Err(error);
        }
        let (sender, receiver) = unbounded();
        // The sender is in place before the watch becomes visible to tests
        self.senders.lock().unwrap().push(sender);
        self.watches.lock().unwrap().push(recorded);
        Ok(receiver.boxed())
    }
}
