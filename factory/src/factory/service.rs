use super::KubeFactory;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use registry_model::constants::{PROTOCOL_TCP, REGISTRY_PORT, TYPE_TAG_SERVICE};

impl KubeFactory<'_> {
    /// Build the cluster-internal service in front of the registry pods.
    pub fn create_service(&self) -> Service {
        Service {
            metadata: self.create_object_meta(TYPE_TAG_SERVICE),
            spec: Some(ServiceSpec {
                ports: Some(vec![ServicePort {
                    protocol: Some(PROTOCOL_TCP.to_string()),
                    port: REGISTRY_PORT,
                    target_port: Some(IntOrString::Int(REGISTRY_PORT)),
                    ..ServicePort::default()
                }]),
                selector: Some(self.selector_labels()),
                type_: Some("ClusterIP".to_string()),
                session_affinity: Some("None".to_string()),
                ..ServiceSpec::default()
            }),
            ..Service::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::factory::test::{config, context};

    #[test]
    fn service() {
        let ctx = context("reg1");
        let config = config();
        let factory = KubeFactory::new(&ctx, &config);
        let service = factory.create_service();

        assert_eq!(service.metadata.name.as_deref(), Some("reg1-service"));
        assert_eq!(service.metadata.namespace.as_deref(), Some("ns1"));
        let spec = service.spec.as_ref().unwrap();
        assert_eq!(spec.selector, Some(factory.selector_labels()));
        assert_eq!(spec.type_.as_deref(), Some("ClusterIP"));
        assert_eq!(spec.session_affinity.as_deref(), Some("None"));
        let port = &spec.ports.as_ref().unwrap()[0];
        assert_eq!(port.port, 8080);
        assert_eq!(port.target_port, Some(IntOrString::Int(8080)));
        assert_eq!(port.protocol.as_deref(), Some("TCP"));
        assert_eq!(service, factory.create_service());
    }
}
