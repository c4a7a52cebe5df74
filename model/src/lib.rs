/*!

This library provides the Kubernetes custom resource definition of an Apicurio Registry deployment
and the constants shared by the objects generated from it.

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

pub use crd_ext::CrdExt;
pub use error::{Error, Result};
pub use registry::{
    ApicurioRegistry, ApicurioRegistrySpec, ApicurioRegistryStatus, DeploymentResources,
    DeploymentSpec, DeploymentVolume, ResourceBounds,
};

pub mod constants;
mod crd_ext;
mod error;
mod registry;
mod schema_utils;
