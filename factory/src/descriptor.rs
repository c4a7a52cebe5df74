use crate::error::{self, Result};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use registry_model::{ApicurioRegistryStatus, CrdExt};
use snafu::ResultExt;
use std::fmt::{Display, Formatter};

/// `Descriptor` lets the apply loop handle every generated object the same way, regardless of its
/// Kubernetes type.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Deployment(Deployment),
    Service(Service),
    Ingress(Ingress),
    PodDisruptionBudget(PodDisruptionBudget),
    Status(ApicurioRegistryStatus),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DescriptorKind {
    Deployment,
    Service,
    Ingress,
    PodDisruptionBudget,
    Status,
}

impl Display for DescriptorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DescriptorKind::Deployment => "Deployment",
            DescriptorKind::Service => "Service",
            DescriptorKind::Ingress => "Ingress",
            DescriptorKind::PodDisruptionBudget => "PodDisruptionBudget",
            DescriptorKind::Status => "ApicurioRegistryStatus",
        };
        f.write_str(s)
    }
}

impl Descriptor {
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Descriptor::Deployment(_) => DescriptorKind::Deployment,
            Descriptor::Service(_) => DescriptorKind::Service,
            Descriptor::Ingress(_) => DescriptorKind::Ingress,
            Descriptor::PodDisruptionBudget(_) => DescriptorKind::PodDisruptionBudget,
            Descriptor::Status(_) => DescriptorKind::Status,
        }
    }

    /// The object name, `None` for a status which is not an object of its own.
    pub fn name(&self) -> Option<&str> {
        match self {
            Descriptor::Deployment(d) => Some(d.object_name()),
            Descriptor::Service(s) => Some(s.object_name()),
            Descriptor::Ingress(i) => Some(i.object_name()),
            Descriptor::PodDisruptionBudget(p) => Some(p.object_name()),
            Descriptor::Status(_) => None,
        }
    }

    /// Serialize the wrapped object as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        let what = || self.kind().to_string();
        match self {
            Descriptor::Deployment(d) => d.to_yaml().context(error::ModelSnafu { what: what() }),
            Descriptor::Service(s) => s.to_yaml().context(error::ModelSnafu { what: what() }),
            Descriptor::Ingress(i) => i.to_yaml().context(error::ModelSnafu { what: what() }),
            Descriptor::PodDisruptionBudget(p) => {
                p.to_yaml().context(error::ModelSnafu { what: what() })
            }
            Descriptor::Status(s) => serde_yaml::to_string(s).context(error::YamlSnafu {
                action: "serialize the registry status",
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    #[test]
    fn kind_and_name() {
        let service = Descriptor::Service(Service {
            metadata: ObjectMeta {
                name: Some("reg1-service".to_string()),
                ..ObjectMeta::default()
            },
            ..Service::default()
        });
        assert_eq!(service.kind(), DescriptorKind::Service);
        assert_eq!(service.name(), Some("reg1-service"));

        let status = Descriptor::Status(ApicurioRegistryStatus::default());
        assert_eq!(status.kind().to_string(), "ApicurioRegistryStatus");
        assert!(status.name().is_none());
    }

    #[test]
    fn status_yaml() {
        let yaml = Descriptor::Status(ApicurioRegistryStatus {
            host: "registry.example.com".to_string(),
            ..ApicurioRegistryStatus::default()
        })
        .to_yaml()
        .unwrap();
        assert!(yaml.contains("host: registry.example.com"));
        assert!(yaml.contains("replicaCount: 0"));
    }
}
