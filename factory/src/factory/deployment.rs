use super::KubeFactory;
use crate::quantity::{resolve_quantity, Allocation, ComputeResource};
use k8s_openapi::api::apps::v1::{
    Deployment, DeploymentSpec, DeploymentStrategy, RollingUpdateDeployment,
};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, HTTPGetAction, PodSpec, PodTemplateSpec, Probe,
    ResourceRequirements, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use log::debug;
use registry_model::constants::{
    HEALTH_LIVE_PATH, HEALTH_READY_PATH, PROTOCOL_TCP, REGISTRY_PORT, TYPE_TAG_DEPLOYMENT,
};
use registry_model::{DeploymentResources, DeploymentVolume, ResourceBounds};
use std::collections::BTreeMap;

const REPLICAS: i32 = 1;
const TERMINATION_GRACE_PERIOD_SECONDS: i64 = 30;
const TERMINATION_MESSAGE_PATH: &str = "/dev/termination-log";

impl KubeFactory<'_> {
    /// Build the registry deployment. The container image is left empty; it is filled in by
    /// whoever decides which image to run.
    pub fn create_deployment(&self) -> Deployment {
        let spec = self.ctx.resource_cache().spec();
        if spec.is_none() {
            debug!(
                "No spec cached for '{}', using default volumes and resources",
                self.ctx.app_name()
            );
        }
        // A missing spec behaves like a spec with nothing set.
        let default_resources = DeploymentResources::default();
        let resources = spec.map_or(&default_resources, |spec| spec.resources());
        let extra_volumes = spec.map_or(&[][..], |spec| spec.volumes());

        Deployment {
            metadata: self.create_object_meta(TYPE_TAG_DEPLOYMENT),
            spec: Some(DeploymentSpec {
                replicas: Some(REPLICAS),
                selector: LabelSelector {
                    match_labels: Some(self.selector_labels()),
                    ..LabelSelector::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(self.labels()),
                        ..ObjectMeta::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![Container {
                            name: self.app().to_string(),
                            image: None,
                            ports: Some(vec![ContainerPort {
                                container_port: REGISTRY_PORT,
                                protocol: Some(PROTOCOL_TCP.to_string()),
                                ..ContainerPort::default()
                            }]),
                            resources: Some(resource_requirements(resources)),
                            liveness_probe: Some(health_probe(HEALTH_LIVE_PATH)),
                            readiness_probe: Some(health_probe(HEALTH_READY_PATH)),
                            termination_message_path: Some(TERMINATION_MESSAGE_PATH.to_string()),
                            image_pull_policy: Some("Always".to_string()),
                            volume_mounts: mounts(extra_volumes),
                            ..Container::default()
                        }],
                        restart_policy: Some("Always".to_string()),
                        termination_grace_period_seconds: Some(TERMINATION_GRACE_PERIOD_SECONDS),
                        dns_policy: Some("ClusterFirst".to_string()),
                        volumes: volumes(extra_volumes),
                        ..PodSpec::default()
                    }),
                },
                strategy: Some(DeploymentStrategy {
                    type_: Some("RollingUpdate".to_string()),
                    rolling_update: Some(RollingUpdateDeployment {
                        max_unavailable: Some(IntOrString::Int(1)),
                        max_surge: Some(IntOrString::Int(1)),
                    }),
                }),
                ..DeploymentSpec::default()
            }),
            ..Deployment::default()
        }
    }
}

/// Both probes poll the registry's health endpoints with the same timing.
fn health_probe(path: &str) -> Probe {
    Probe {
        http_get: Some(HTTPGetAction {
            path: Some(path.to_string()),
            port: IntOrString::Int(REGISTRY_PORT),
            ..HTTPGetAction::default()
        }),
        initial_delay_seconds: Some(15),
        timeout_seconds: Some(5),
        period_seconds: Some(10),
        success_threshold: Some(1),
        failure_threshold: Some(3),
        ..Probe::default()
    }
}

fn resource_requirements(resources: &DeploymentResources) -> ResourceRequirements {
    ResourceRequirements {
        limits: Some(resource_list(resources, Allocation::Limit)),
        requests: Some(resource_list(resources, Allocation::Request)),
        ..ResourceRequirements::default()
    }
}

/// Resolve the cpu and memory entries for either the limits or the requests.
fn resource_list(
    resources: &DeploymentResources,
    allocation: Allocation,
) -> BTreeMap<String, Quantity> {
    [
        (ComputeResource::Cpu, &resources.cpu),
        (ComputeResource::Memory, &resources.memory),
    ]
    .iter()
    .map(|(resource, bounds)| {
        (
            resource.key().to_string(),
            resolve_quantity(bound(bounds, allocation), *resource, allocation),
        )
    })
    .collect()
}

fn bound(bounds: &ResourceBounds, allocation: Allocation) -> Option<&str> {
    match allocation {
        Allocation::Limit => bounds.limit.as_deref(),
        Allocation::Request => bounds.request.as_deref(),
    }
}

fn mounts(extra_volumes: &[DeploymentVolume]) -> Option<Vec<VolumeMount>> {
    if extra_volumes.is_empty() {
        return None;
    }
    Some(
        extra_volumes
            .iter()
            .map(|v| VolumeMount {
                name: v.volume.name.clone(),
                read_only: v.read_only,
                mount_path: v.mount_path.clone(),
                sub_path: v.sub_path.clone(),
                mount_propagation: v.mount_propagation.clone(),
                sub_path_expr: v.sub_path_expr.clone(),
            })
            .collect(),
    )
}

fn volumes(extra_volumes: &[DeploymentVolume]) -> Option<Vec<Volume>> {
    if extra_volumes.is_empty() {
        return None;
    }
    Some(extra_volumes.iter().map(|v| v.volume.clone()).collect())
}
