
use crate::contracts::resource_identity::ResourceIdentity;

/// URL of a resource, or of a collection when the identity has no name: the name segment is then left empty.
/// Segments are not validated.
pub fn resource_url(base_path: &str, identity: &ResourceIdentity) -> String {
    format!(
        "{}/apis/{}/namespaces/{}/{}/{}",
        base_path,
        identity.api_version,
        identity.namespace,
        identity.resource_type,
        identity.name.as_deref().unwrap_or_default()
    )
}

/// Watch path of a resource collection, relative to the base path. The identity's name is not part of it.
pub fn watch_path(identity: &ResourceIdentity) -> String {
    format!(
        "/apis/{}/namespaces/{}/{}",
        identity.api_version, identity.namespace, identity.resource_type
    )
}

/// URL of a resource addressed by an explicit path below `/apis`.
pub fn explicit_resource_url(base_path: &str, explicit_path: &str) -> String {
    format!("{}/apis/{}", base_path, explicit_path)
}
