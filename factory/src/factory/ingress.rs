use super::KubeFactory;
use crate::error::{self, Result};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use maplit::btreemap;
use registry_model::constants::{
    ANNOTATION_FORCE_SSL_REDIRECT, ANNOTATION_REWRITE_TARGET, ANNOTATION_SSL_REDIRECT,
    REGISTRY_PORT, TYPE_TAG_INGRESS,
};
use snafu::ensure;

impl KubeFactory<'_> {
    /// Build an ingress that sends every request to `service_name`. TLS redirects are turned off;
    /// TLS, when wanted, is terminated before the ingress.
    pub fn create_ingress(&self, service_name: &str) -> Result<Ingress> {
        ensure!(!service_name.is_empty(), error::MissingBackendSnafu);
        let mut metadata = self.create_object_meta(TYPE_TAG_INGRESS);
        metadata.annotations = Some(
            btreemap! {
                ANNOTATION_FORCE_SSL_REDIRECT => "false",
                ANNOTATION_REWRITE_TARGET => "/",
                ANNOTATION_SSL_REDIRECT => "false",
            }
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        );

        Ok(Ingress {
            metadata,
            spec: Some(IngressSpec {
                rules: Some(vec![IngressRule {
                    host: None,
                    http: Some(HTTPIngressRuleValue {
                        paths: vec![HTTPIngressPath {
                            path: Some("/".to_string()),
                            path_type: "Prefix".to_string(),
                            backend: IngressBackend {
                                service: Some(IngressServiceBackend {
                                    name: service_name.to_string(),
                                    port: Some(ServiceBackendPort {
                                        number: Some(REGISTRY_PORT),
                                        ..ServiceBackendPort::default()
                                    }),
                                }),
                                ..IngressBackend::default()
                            },
                        }],
                    }),
                }]),
                ..IngressSpec::default()
            }),
            ..Ingress::default()
        })
    }
}
