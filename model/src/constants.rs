/// Helper macro to avoid retyping the base domain-like name of the registry operator when creating
/// further string constants from it. When given no parameters, this returns the base domain-like
/// name. When given a string literal parameter it adds `/parameter` to the end.
macro_rules! apicurio {
    () => {
        "apicur.io"
    };
    ($s:literal) => {
        concat!(apicurio!(), "/", $s)
    };
}

// System identifiers
pub const REGISTRY_TYPE: &str = "apicurio-registry";

// Label keys
pub const LABEL_APP: &str = "app";
pub const LABEL_TYPE: &str = apicurio!("type");
pub const LABEL_NAME: &str = apicurio!("name");
pub const LABEL_VERSION: &str = apicurio!("version");

// Standard tags https://kubernetes.io/docs/concepts/overview/working-with-objects/common-labels/
pub const APP_NAME: &str = "app.kubernetes.io/name";
pub const APP_INSTANCE: &str = "app.kubernetes.io/instance";
pub const APP_VERSION: &str = "app.kubernetes.io/version";
pub const APP_MANAGED_BY: &str = "app.kubernetes.io/managed-by";

// Environment variables
pub const ENV_REGISTRY_VERSION: &str = "REGISTRY_VERSION";
pub const ENV_OPERATOR_NAME: &str = "OPERATOR_NAME";

// Object name suffixes, appended to the application name with a `-`
pub const TYPE_TAG_DEPLOYMENT: &str = "deployment";
pub const TYPE_TAG_SERVICE: &str = "service";
pub const TYPE_TAG_INGRESS: &str = "ingress";
pub const TYPE_TAG_PDB: &str = "pdb";

// Networking
pub const REGISTRY_PORT: i32 = 8080;
pub const PROTOCOL_TCP: &str = "TCP";
pub const HEALTH_LIVE_PATH: &str = "/health/live";
pub const HEALTH_READY_PATH: &str = "/health/ready";

// Ingress annotations
pub const ANNOTATION_FORCE_SSL_REDIRECT: &str = "nginx.ingress.kubernetes.io/force-ssl-redirect";
pub const ANNOTATION_REWRITE_TARGET: &str = "nginx.ingress.kubernetes.io/rewrite-target";
pub const ANNOTATION_SSL_REDIRECT: &str = "nginx.ingress.kubernetes.io/ssl-redirect";

// Kubernetes object names are DNS subdomains.
pub const MAX_OBJECT_NAME_LEN: usize = 253;

#[test]
fn apicurio_constants_macro_test() {
    assert_eq!("apicur.io", apicurio!());
    assert_eq!("apicur.io/type", LABEL_TYPE);
    assert_eq!("apicur.io/version", LABEL_VERSION);
}
