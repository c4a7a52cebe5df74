/*!

Computes the Kubernetes objects that should exist for an Apicurio Registry custom resource: the
registry deployment, its service, ingress and pod disruption budget, and the registry status.

Building objects never talks to the cluster. Everything is derived from a [`LoopContext`], which
holds the cached `ApicurioRegistry` and the recorded status, and a [`FactoryConfig`] carrying the
registry version and operator name that are stamped onto every object's labels.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use config::FactoryConfig;
pub use context::{
    AppName, AppNamespace, CacheEntry, CacheKey, LoopContext, ResourceCache, StatusKey,
    StatusStore, StatusValue,
};
pub use descriptor::{Descriptor, DescriptorKind};
pub use error::{Error, Result};
pub use factory::KubeFactory;
pub use quantity::{default_quantity, parse_quantity, resolve_quantity, Allocation, ComputeResource};
pub use render::{read_registry, render_yaml};

mod config;
mod context;
mod descriptor;
mod error;
mod factory;
mod quantity;
mod render;
