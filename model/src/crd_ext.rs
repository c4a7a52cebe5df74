use crate::error::{self, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;
use snafu::ResultExt;

/// Provides some conveniences for querying a `kube-rs` object.
pub trait CrdExt: Serialize {
    /// Returns this objects `ObjectMeta` information (i.e. the `metadata` field). You implement
    /// this be returning `&self.metadata`. This allows the rest of this trait's functions to be
    /// implemented for you.
    fn object_meta(&self) -> &ObjectMeta;

    /// Returns the object.metadata.name field, unwrapping a potential `None` with `""`. In
    /// practice, an object's name cannot be missing since this is how we `GET` an object in the
    /// first place, so we do away with the `Option` for convenience. This is named `object_name`
    /// to avoid confusion with `ResourceExt`.
    fn object_name(&self) -> &str {
        self.object_meta().name.as_deref().unwrap_or("")
    }

    /// Returns the object.metadata.namespace field, or `None` for cluster scoped objects.
    fn object_namespace(&self) -> Option<&str> {
        self.object_meta().namespace.as_deref()
    }

    /// Returns this object's YAML representation as a String.
    fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self).context(error::YamlSerializationSnafu {
            name: self.object_name(),
        })?)
    }
}

macro_rules! impl_crd_ext {
    ($($t:ty),+ $(,)?) => {
        $(
            impl CrdExt for $t {
                fn object_meta(&self) -> &ObjectMeta {
                    &self.metadata
                }
            }
        )+
    };
}

impl_crd_ext!(
    k8s_openapi::api::apps::v1::Deployment,
    k8s_openapi::api::core::v1::Service,
    k8s_openapi::api::networking::v1::Ingress,
    k8s_openapi::api::policy::v1::PodDisruptionBudget,
);
