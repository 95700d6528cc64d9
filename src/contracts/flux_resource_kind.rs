use std::fmt::{Display, Formatter};

/// The Flux resource kinds whose status can be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluxResourceKind {
    Kustomization,
    HelmRelease,
}

impl FluxResourceKind {
    pub fn api_version(&self) -> &'static str {
        match self {
            FluxResourceKind::Kustomization => "kustomize.toolkit.fluxcd.io/v1beta1",
            FluxResourceKind::HelmRelease => "helm.toolkit.fluxcd.io/v2beta1",
        }
    }

    /// Plural resource name used in REST paths.
    pub fn resource_type(&self) -> &'static str {
        match self {
            FluxResourceKind::Kustomization => "kustomizations",
            FluxResourceKind::HelmRelease => "helmreleases",
        }
    }

    /// Identity of the status query whose cached result a watch keeps up to date.
    pub fn status_query(&self) -> &'static str {
        match self {
            FluxResourceKind::Kustomization => "flux_kustomization_status",
            FluxResourceKind::HelmRelease => "flux_helm_release_status",
        }
    }

    /// Field of the status query result holding the condition list.
    pub fn status_field(&self) -> &'static str {
        match self {
            FluxResourceKind::Kustomization => "fluxKustomizationStatus",
            FluxResourceKind::HelmRelease => "fluxHelmReleaseStatus",
        }
    }
}

impl Display for FluxResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FluxResourceKind::Kustomization => write!(f, "Kustomization"),
            FluxResourceKind::HelmRelease => write!(f, "HelmRelease"),
        }
    }
}
