use super::KubeFactory;
use crate::context::StatusKey;
use log::trace;
use registry_model::{ApicurioRegistry, ApicurioRegistryStatus, CrdExt};

impl KubeFactory<'_> {
    /// Gather the values recorded in the status store into the status of `registry`. Nothing is
    /// computed here, and a value that was never recorded reads as empty or zero.
    pub fn create_status(&self, registry: &ApicurioRegistry) -> ApicurioRegistryStatus {
        trace!("Projecting status for '{}'", registry.object_name());
        let status = self.ctx.status();
        ApicurioRegistryStatus {
            image: status.get_string(StatusKey::Image),
            deployment_name: status.get_string(StatusKey::DeploymentName),
            service_name: status.get_string(StatusKey::ServiceName),
            ingress_name: status.get_string(StatusKey::IngressName),
            replica_count: status.get_i32(StatusKey::ReplicaCount),
            host: status.get_string(StatusKey::Route),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::factory::test::{config, context};

    #[test]
    fn empty_store() {
        let ctx = context("reg1");
        let config = config();
        let status = KubeFactory::new(&ctx, &config).create_status(&ApicurioRegistry::default());
        assert_eq!(status, ApicurioRegistryStatus::default());
    }

    #[test]
    fn recorded_values() {
        let mut ctx = context("reg1");
        let store = ctx.status_mut();
        store.set_string(StatusKey::Image, "quay.io/apicurio/apicurio-registry-mem:2.0.0");
        store.set_string(StatusKey::DeploymentName, "reg1-deployment");
        store.set_string(StatusKey::ServiceName, "reg1-service");
        store.set_string(StatusKey::IngressName, "reg1-ingress");
        store.set_i32(StatusKey::ReplicaCount, 2);
        store.set_string(StatusKey::Route, "registry.example.com");
        let config = config();

        let status = KubeFactory::new(&ctx, &config).create_status(&ApicurioRegistry::default());
        assert_eq!(
            status,
            ApicurioRegistryStatus {
                image: "quay.io/apicurio/apicurio-registry-mem:2.0.0".to_string(),
                deployment_name: "reg1-deployment".to_string(),
                service_name: "reg1-service".to_string(),
                ingress_name: "reg1-ingress".to_string(),
                replica_count: 2,
                host: "registry.example.com".to_string(),
            }
        );
    }
}
