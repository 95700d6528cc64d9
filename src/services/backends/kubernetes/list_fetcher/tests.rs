use super::ListFetcher;
use crate::configuration::models::cluster_configuration::ClusterConfiguration;
use crate::services::backends::kubernetes::cluster_error::ClusterError;
use crate::services::backends::kubernetes::cluster_error::api_error_details::ApiErrorDetails;
use crate::testing::fake_cluster_client::FakeClusterClient;
use crate::testing::flux_resource;
use serde_json::json;
use std::sync::Arc;

const URL: &str = "http://localhost/apis/helm.toolkit.fluxcd.io/v2beta1/namespaces/default/helmreleases/";

fn configuration() -> ClusterConfiguration {
    ClusterConfiguration::new("http://localhost").with_header("Authorization", "Bearer token")
}

#[tokio::test]
async fn test_empty_collection() {
    let client = Arc::new(FakeClusterClient::new());
    client.respond_with(URL, json!({ "items": [] }));
    let fetcher = ListFetcher::new(client);

    let items = fetcher.fetch(&configuration(), URL).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_items_keep_identity_fields_only() {
    let client = Arc::new(FakeClusterClient::new());
    client.respond_with(
        URL,
        json!({ "items": [ flux_resource("app", "True", "ReconciliationSucceeded"), flux_resource("infra", "False", "BuildFailed") ] }),
    );
    let fetcher = ListFetcher::new(client.clone());

    let items = fetcher.fetch(&configuration(), URL).await.unwrap();

    assert_eq!(
        serde_json::to_value(&items).unwrap(),
        json!([
            {
                "apiVersion": "kustomize.toolkit.fluxcd.io/v1beta1",
                "metadata": { "name": "app", "namespace": "flux-system" }
            },
            {
                "apiVersion": "kustomize.toolkit.fluxcd.io/v1beta1",
                "metadata": { "name": "infra", "namespace": "flux-system" }
            }
        ])
    );
    assert_eq!(client.requests()[0].0, configuration());
}

#[tokio::test]
async fn test_failure_carries_server_reason() {
    let client = Arc::new(FakeClusterClient::new());
    client.fail_with(
        URL,
        ClusterError::Api(ApiErrorDetails::new(
            403,
            "helmreleases is forbidden".to_string(),
            "Forbidden".to_string(),
        )),
    );
    let fetcher = ListFetcher::new(client);

    let error = fetcher.fetch(&configuration(), URL).await.unwrap_err();

    assert_eq!(error.to_string(), "Forbidden");
}

#[tokio::test]
async fn test_failure_without_reason_keeps_original_message() {
    let client = Arc::new(FakeClusterClient::new());
    client.fail_with(URL, ClusterError::Transport("connection reset".to_string()));
    let fetcher = ListFetcher::new(client);

    let error = fetcher.fetch(&configuration(), URL).await.unwrap_err();

    assert_eq!(error.to_string(), "connection reset");
}

#[tokio::test]
async fn test_item_with_unexpected_status_is_still_listed() {
    let client = Arc::new(FakeClusterClient::new());
    client.respond_with(
        URL,
        json!({ "items": [
            flux_resource("app", "True", "ReconciliationSucceeded"),
            {
                "apiVersion": "helm.toolkit.fluxcd.io/v2beta1",
                "metadata": { "name": "podinfo", "namespace": "default" },
                "status": { "conditions": [ { "type": "Ready", "status": true, "observedGeneration": "3" } ] }
            }
        ] }),
    );
    let fetcher = ListFetcher::new(client);

    let items = fetcher.fetch(&configuration(), URL).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1].metadata.name.as_deref(), Some("podinfo"));
    assert_eq!(items[1].api_version.as_deref(), Some("helm.toolkit.fluxcd.io/v2beta1"));
}
