use super::KubeFactory;
use k8s_openapi::api::policy::v1::{PodDisruptionBudget, PodDisruptionBudgetSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use registry_model::constants::TYPE_TAG_PDB;

impl KubeFactory<'_> {
    /// Allow at most one registry pod to be voluntarily disrupted at a time.
    pub fn create_pod_disruption_budget(&self) -> PodDisruptionBudget {
        PodDisruptionBudget {
            metadata: self.create_object_meta(TYPE_TAG_PDB),
            spec: Some(PodDisruptionBudgetSpec {
                selector: Some(LabelSelector {
                    match_labels: Some(self.selector_labels()),
                    ..LabelSelector::default()
                }),
                max_unavailable: Some(IntOrString::Int(1)),
                ..PodDisruptionBudgetSpec::default()
            }),
            ..PodDisruptionBudget::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::factory::test::{config, context};

    #[test]
    fn pod_disruption_budget() {
        let ctx = context("reg1");
        let config = config();
        let factory = KubeFactory::new(&ctx, &config);
        let pdb = factory.create_pod_disruption_budget();

        assert_eq!(pdb.metadata.name.as_deref(), Some("reg1-pdb"));
        let spec = pdb.spec.as_ref().unwrap();
        assert_eq!(spec.max_unavailable, Some(IntOrString::Int(1)));
        assert!(spec.min_available.is_none());
        assert_eq!(
            spec.selector.as_ref().and_then(|s| s.match_labels.clone()),
            Some(factory.selector_labels())
        );
    }
}
