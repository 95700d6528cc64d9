use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::configuration::models::status_watch_settings::StatusWatchSettings;
use crate::contracts::status_query_variables::StatusQueryVariables;
use crate::services::backends::kubernetes::resource_update_handler::error_channel_update_handler::WatchFailure;
use crate::services::flux_status_service::FluxStatusService;
use crate::testing::fake_cluster_client::FakeClusterClient;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::mpsc::Receiver;

pub const BASE_PATH: &str = "https://kas.example.com/k8s-proxy";
pub const NAMESPACE: &str = "flux-system";

/// A status service with watching enabled, talking to a fake cluster.
pub struct FluxStatusServiceContext {
    pub client: Arc<FakeClusterClient>,
    pub service: FluxStatusService,
    pub failures: Receiver<WatchFailure>,
    pub configuration: ClusterConfiguration,
}

impl FluxStatusServiceContext {
    pub fn variables(&self, environment_name: &str) -> StatusQueryVariables {
        StatusQueryVariables::new(self.configuration.clone(), NAMESPACE).with_environment_name(environment_name)
    }
}

impl AsyncTestContext for FluxStatusServiceContext {
    async fn setup() -> Self {
        let client = Arc::new(FakeClusterClient::new());
        let (service, failures) = FluxStatusService::start(client.clone(), StatusWatchSettings::with_watch());
        let configuration = ClusterConfiguration::new(BASE_PATH).with_header("Authorization", "Bearer agent-token");
        FluxStatusServiceContext {
            client,
            service,
            failures,
            configuration,
        }
    }

    async fn teardown(self) {
        self.service.shutdown().await;
    }
}
