use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::resource_update_handler::ResourceUpdateHandler;
use crate::services::result_cache::CacheTarget;
use async_trait::async_trait;
use log::warn;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::TrySendError;

/// A failure of a background watch, reported away from the request that started it.
#[derive(Debug, Clone)]
pub struct WatchFailure {
    pub target: CacheTarget,
    pub error: ClusterError,
}

/// Publishes watch errors on a channel. A full or closed channel drops the failure, the watch never waits on it.
pub struct ErrorChannelUpdateHandler {
    sender: Sender<WatchFailure>,
}

impl ErrorChannelUpdateHandler {
    pub fn new(sender: Sender<WatchFailure>) -> Self {
        ErrorChannelUpdateHandler { sender }
    }
}

#[async_trait]
impl<S> ResourceUpdateHandler<S> for ErrorChannelUpdateHandler
where
    S: Send + Sync + 'static,
{
    async fn handle_update(&self, target: &CacheTarget, result: &Result<S, ClusterError>) -> () {
        let Err(error) = result else {
            return;
        };
        let failure = WatchFailure {
            target: target.clone(),
            error: error.clone(),
        };
        match self.sender.try_send(failure) {
            Ok(()) => {}
            Err(TrySendError::Full(failure)) => {
                warn!("Watch failure channel is full, dropping failure for {}", failure.target)
            }
            Err(TrySendError::Closed(_)) => {}
        }
    }
}
