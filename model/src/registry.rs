use crate::CrdExt;
use k8s_openapi::api::core::v1::Volume;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A deployed Apicurio Registry instance. The `CustomResource` derive also produces a struct named
/// `ApicurioRegistry` which represents the registry CRD object in the k8s API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "registry.apicur.io",
    kind = "ApicurioRegistry",
    namespaced,
    plural = "apicurioregistries",
    singular = "apicurioregistry",
    status = "ApicurioRegistryStatus",
    version = "v1",
    printcolumn = r#"{"name":"Image", "type":"string", "jsonPath":".status.image"}"#,
    printcolumn = r#"{"name":"Host", "type":"string", "jsonPath":".status.host"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ApicurioRegistrySpec {
    /// Settings for the registry workload.
    #[serde(deserialize_with = "crate::schema_utils::null_to_default")]
    #[serde(default)]
    pub deployment: DeploymentSpec,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    /// Additional volumes to mount into the registry container.
    #[serde(deserialize_with = "crate::schema_utils::null_to_default")]
    #[serde(default)]
    pub volumes: Vec<DeploymentVolume>,
    /// CPU and memory sizing for the registry container.
    #[serde(deserialize_with = "crate::schema_utils::null_to_default")]
    #[serde(default)]
    pub resources: DeploymentResources,
}

/// A pod volume together with the place it is mounted in the registry container. The volume name
/// is shared by the pod volume and the container mount.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentVolume {
    /// The volume name and its source (`configMap`, `secret`, `emptyDir`, ...).
    #[serde(flatten)]
    pub volume: Volume,
    #[serde(default)]
    pub read_only: Option<bool>,
    pub mount_path: String,
    #[serde(default)]
    pub sub_path: Option<String>,
    /// One of `None`, `HostToContainer` or `Bidirectional`.
    #[serde(default)]
    pub mount_propagation: Option<String>,
    #[serde(default)]
    pub sub_path_expr: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResources {
    #[serde(deserialize_with = "crate::schema_utils::null_to_default")]
    #[serde(default)]
    pub cpu: ResourceBounds,
    #[serde(deserialize_with = "crate::schema_utils::null_to_default")]
    #[serde(default)]
    pub memory: ResourceBounds,
}

/// Quantity strings such as `500m` or `512Mi`. A missing, unparsable or `"0"` value means the
/// operator default is used.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBounds {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub request: Option<String>,
}

/// The status field of the `ApicurioRegistry` CRD. The operator projects what it has recorded
/// about the running registry here. Fields that were never recorded may be missing.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ApicurioRegistryStatus {
    /// The registry container image that is deployed.
    pub image: String,
    pub deployment_name: String,
    pub service_name: String,
    pub ingress_name: String,
    pub replica_count: i32,
    /// The externally reachable host, empty when there is none.
    pub host: String,
}

impl CrdExt for ApicurioRegistry {
    fn object_meta(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl ApicurioRegistry {
    /// The sizing section of the spec.
    pub fn resources(&self) -> &DeploymentResources {
        &self.spec.deployment.resources
    }

    /// The additional volumes requested by the spec, possibly empty.
    pub fn volumes(&self) -> &[DeploymentVolume] {
        &self.spec.deployment.volumes
    }
}
