use crate::contracts::flux_resource_kind::FluxResourceKind;

/// Identifies one managed resource, or a collection when `name` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdentity {
    pub api_version: String,
    pub kind: String,
    pub resource_type: String,
    pub namespace: String,
    pub name: Option<String>,
}

impl ResourceIdentity {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        resource_type: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        ResourceIdentity {
            api_version: api_version.into(),
            kind: kind.into(),
            resource_type: resource_type.into(),
            namespace: namespace.into(),
            name: None,
        }
    }

    pub fn collection(kind: FluxResourceKind, namespace: impl Into<String>) -> Self {
        Self::new(kind.api_version(), kind.to_string(), kind.resource_type(), namespace)
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// API group and version. The core group has no group segment.
    pub fn group_version(&self) -> (&str, &str) {
        self.api_version
            .split_once('/')
            .unwrap_or(("", self.api_version.as_str()))
    }
}
