pub mod cache_extensions;
pub mod fake_cluster_client;
pub mod flux_status_service_context;

use serde_json::{Value, json};

/// A Flux resource as the cluster API returns it, with the given name and Ready condition.
pub fn flux_resource(name: &str, ready: &str, reason: &str) -> Value {
    json!({
        "apiVersion": "kustomize.toolkit.fluxcd.io/v1beta1",
        "kind": "Kustomization",
        "metadata": {
            "name": name,
            "namespace": "flux-system",
            "resourceVersion": "1"
        },
        "spec": { "interval": "1m", "path": "./clusters/production" },
        "status": {
            "conditions": [
                {
                    "type": "Ready",
                    "status": ready,
                    "reason": reason,
                    "message": format!("Applied revision: main@sha1:{}", name),
                    "lastTransitionTime": "2024-01-01T00:00:00Z"
                }
            ]
        }
    })
}
