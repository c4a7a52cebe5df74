use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Container;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use registry_factory::{
    render_yaml, AppName, AppNamespace, CacheEntry, Descriptor, DescriptorKind, FactoryConfig,
    KubeFactory, LoopContext, StatusKey,
};
use registry_model::ApicurioRegistry;

const REGISTRY: &str = r#"
apiVersion: registry.apicur.io/v1
kind: ApicurioRegistry
metadata:
  name: reg1
  namespace: ns1
spec:
  deployment:
    resources:
      cpu:
        limit: "0"
        request: 250m
"#;

fn context() -> LoopContext {
    let registry: ApicurioRegistry = serde_yaml::from_str(REGISTRY).unwrap();
    let mut ctx = LoopContext::new(AppName::new("reg1"), AppNamespace::new("ns1"));
    ctx.resource_cache_mut()
        .set(CacheEntry::Spec(Box::new(registry)));
    ctx
}

fn config() -> FactoryConfig {
    FactoryConfig::new("2.0.0", "op1").unwrap()
}

fn container(deployment: &Deployment) -> &Container {
    &deployment
        .spec
        .as_ref()
        .and_then(|s| s.template.spec.as_ref())
        .unwrap()
        .containers[0]
}

/// A registry asking for the default cpu limit and a smaller cpu request.
#[test]
fn registry_deployment() {
    let ctx = context();
    let config = config();
    let deployment = KubeFactory::new(&ctx, &config).create_deployment();

    assert_eq!(deployment.metadata.name.as_deref(), Some("reg1-deployment"));
    assert_eq!(deployment.metadata.namespace.as_deref(), Some("ns1"));

    let container = container(&deployment);
    let resources = container.resources.as_ref().unwrap();
    let limits = resources.limits.as_ref().unwrap();
    let requests = resources.requests.as_ref().unwrap();
    assert_eq!(limits.get("cpu"), Some(&Quantity("1".to_string())));
    assert_eq!(requests.get("cpu"), Some(&Quantity("250m".to_string())));
    assert_eq!(limits.get("memory"), Some(&Quantity("1280Mi".to_string())));
    assert_eq!(requests.get("memory"), Some(&Quantity("512Mi".to_string())));
    assert!(container
        .volume_mounts
        .as_ref()
        .map_or(true, |mounts| mounts.is_empty()));

    let probes = [&container.liveness_probe, &container.readiness_probe];
    for probe in probes {
        let probe = probe.as_ref().unwrap();
        assert_eq!(
            probe.http_get.as_ref().map(|h| h.port.clone()),
            Some(IntOrString::Int(8080))
        );
        assert_eq!(probe.initial_delay_seconds, Some(15));
        assert_eq!(probe.timeout_seconds, Some(5));
        assert_eq!(probe.period_seconds, Some(10));
        assert_eq!(probe.success_threshold, Some(1));
        assert_eq!(probe.failure_threshold, Some(3));
    }
}

#[test]
fn objects_share_selector() {
    let ctx = context();
    let config = config();
    let factory = KubeFactory::new(&ctx, &config);
    let selector = Some(factory.selector_labels());

    let deployment = factory.create_deployment();
    let service = factory.create_service();
    let pdb = factory.create_pod_disruption_budget();

    assert_eq!(deployment.spec.unwrap().selector.match_labels, selector);
    assert_eq!(service.spec.unwrap().selector, selector);
    assert_eq!(pdb.spec.unwrap().selector.unwrap().match_labels, selector);
}

#[test]
fn desired_state_is_deterministic() {
    let ctx = context();
    let config = config();
    let factory = KubeFactory::new(&ctx, &config);

    let first = factory.create_all().unwrap();
    let second = factory.create_all().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        render_yaml(&first).unwrap(),
        render_yaml(&second).unwrap()
    );

    let kinds: Vec<DescriptorKind> = first.iter().map(Descriptor::kind).collect();
    assert_eq!(
        kinds,
        vec![
            DescriptorKind::Deployment,
            DescriptorKind::Service,
            DescriptorKind::Ingress,
            DescriptorKind::PodDisruptionBudget,
        ]
    );
}

#[test]
fn ingress_targets_service() {
    let ctx = context();
    let config = config();
    let descriptors = KubeFactory::new(&ctx, &config).create_all().unwrap();

    let ingress = match &descriptors[2] {
        Descriptor::Ingress(ingress) => ingress,
        other => panic!("expected an ingress, got {:?}", other.kind()),
    };
    let backend = ingress
        .spec
        .as_ref()
        .and_then(|s| s.rules.as_ref())
        .and_then(|r| r[0].http.as_ref())
        .and_then(|h| h.paths[0].backend.service.as_ref())
        .unwrap();
    assert_eq!(backend.name, "reg1-service");
}

#[test]
fn status_projection() {
    let mut ctx = context();
    ctx.status_mut().set_string(StatusKey::Route, "reg1.example.com");
    ctx.status_mut().set_i32(StatusKey::ReplicaCount, 1);
    let config = config();
    let factory = KubeFactory::new(&ctx, &config);

    let registry = ctx.resource_cache().spec().unwrap();
    let status = factory.create_status(registry);
    assert_eq!(status.host, "reg1.example.com");
    assert_eq!(status.replica_count, 1);
    assert_eq!(status.image, "");
}
