mod deployment;
mod ingress;
mod pdb;
mod service;
mod status;

use crate::config::FactoryConfig;
use crate::context::LoopContext;
use crate::descriptor::Descriptor;
use crate::error::Result;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use log::{trace, warn};
use maplit::btreemap;
use registry_model::constants::{
    APP_INSTANCE, APP_MANAGED_BY, APP_NAME, APP_VERSION, LABEL_APP, LABEL_NAME, LABEL_TYPE,
    LABEL_VERSION, MAX_OBJECT_NAME_LEN, REGISTRY_TYPE,
};
use registry_model::CrdExt;
use std::collections::BTreeMap;

/// Builds the Kubernetes objects that should exist for one managed registry. Every method is a
/// pure function of the context and config; building the same object twice gives equal results.
#[derive(Debug, Clone, Copy)]
pub struct KubeFactory<'a> {
    ctx: &'a LoopContext,
    config: &'a FactoryConfig,
}

impl<'a> KubeFactory<'a> {
    pub fn new(ctx: &'a LoopContext, config: &'a FactoryConfig) -> Self {
        Self { ctx, config }
    }

    /// The full set of labels put on every generated object. Some of these change when the
    /// registry or operator is upgraded, so they MUST NOT be used as selector labels.
    pub fn labels(&self) -> BTreeMap<String, String> {
        let app = self.app();
        let version = self.config.registry_version();
        btreemap! {
            LABEL_APP => app,

            LABEL_TYPE => REGISTRY_TYPE,
            LABEL_NAME => app,
            LABEL_VERSION => version,

            APP_NAME => REGISTRY_TYPE,
            APP_INSTANCE => app,
            APP_VERSION => version,

            APP_MANAGED_BY => self.config.operator_name(),
        }
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// Labels used to match pods to the deployment, service and disruption budget. These must stay
    /// the same for the whole life of the registry, so they only depend on the application name.
    pub fn selector_labels(&self) -> BTreeMap<String, String> {
        btreemap! { LABEL_APP.to_string() => self.app().to_string() }
    }

    /// Build the deployment, service, ingress and disruption budget, in that order. The ingress
    /// routes to the service built here.
    pub fn create_all(&self) -> Result<Vec<Descriptor>> {
        let service = self.create_service();
        let ingress = self.create_ingress(service.object_name())?;
        Ok(vec![
            Descriptor::Deployment(self.create_deployment()),
            Descriptor::Service(service),
            Descriptor::Ingress(ingress),
            Descriptor::PodDisruptionBudget(self.create_pod_disruption_budget()),
        ])
    }

    fn app(&self) -> &'a str {
        self.ctx.app_name().as_str()
    }

    fn object_name(&self, type_tag: &str) -> String {
        format!("{}-{}", self.app(), type_tag)
    }

    fn create_object_meta(&self, type_tag: &str) -> ObjectMeta {
        let name = self.object_name(type_tag);
        // Keeping names short enough is up to whoever picks the application name.
        if name.len() > MAX_OBJECT_NAME_LEN {
            warn!(
                "Object name '{}' is longer than {} characters and will be rejected",
                name, MAX_OBJECT_NAME_LEN
            );
        }
        trace!(
            "Building '{}' in namespace '{}'",
            name,
            self.ctx.app_namespace()
        );
        ObjectMeta {
            name: Some(name),
            namespace: Some(self.ctx.app_namespace().as_str().to_string()),
            labels: Some(self.labels()),
            ..ObjectMeta::default()
        }
    }
}
