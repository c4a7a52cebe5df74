use crate::error::{self, Result};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use log::debug;
use regex::Regex;
use snafu::OptionExt;

/// Kubernetes quantity grammar: a signed decimal number followed by an optional binary SI, decimal
/// SI or decimal exponent suffix. A decimal exponent must also fit in an `i64`.
const QUANTITY_PATTERN_REGEX: &str =
    r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:Ki|Mi|Gi|Ti|Pi|Ei|[numkMGTPE]|[eE](?P<exponent>[+-]?[0-9]+))?$";

/// The value the schema uses to mean "use the operator default".
const UNSET: &str = "0";

lazy_static::lazy_static! {
    static ref QUANTITY_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(QUANTITY_PATTERN_REGEX).unwrap()
    };
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ComputeResource {
    Cpu,
    Memory,
}

impl ComputeResource {
    /// The key used for this resource in a container's `limits` and `requests`.
    pub fn key(&self) -> &'static str {
        match self {
            ComputeResource::Cpu => "cpu",
            ComputeResource::Memory => "memory",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Allocation {
    Limit,
    Request,
}

/// The quantity used when the registry does not provide a usable one.
pub fn default_quantity(resource: ComputeResource, allocation: Allocation) -> Quantity {
    let value = match (resource, allocation) {
        (ComputeResource::Cpu, Allocation::Limit) => "1",
        (ComputeResource::Cpu, Allocation::Request) => "500m",
        (ComputeResource::Memory, Allocation::Limit) => "1280Mi",
        (ComputeResource::Memory, Allocation::Request) => "512Mi",
    };
    Quantity(value.to_string())
}

/// Parse `value` as a Kubernetes quantity. The quantity keeps the exact text it was parsed from.
pub fn parse_quantity(value: &str) -> Result<Quantity> {
    let captures = QUANTITY_REGEX
        .captures(value)
        .context(error::InvalidQuantitySnafu { value })?;
    if let Some(exponent) = captures.name("exponent") {
        exponent
            .as_str()
            .parse::<i64>()
            .ok()
            .context(error::InvalidQuantitySnafu { value })?;
    }
    Ok(Quantity(value.to_string()))
}

/// Resolve one sizing attribute from the registry. A missing value, a value that does not parse,
/// or the literal `"0"` all resolve to the default for `resource` and `allocation`.
pub fn resolve_quantity(
    value: Option<&str>,
    resource: ComputeResource,
    allocation: Allocation,
) -> Quantity {
    match requested_quantity(value) {
        Ok(quantity) => quantity,
        Err(reason) => {
            let default = default_quantity(resource, allocation);
            debug!(
                "{}, using the default {:?} {:?} of '{}'",
                reason, resource, allocation, default.0
            );
            default
        }
    }
}

/// The quantity the registry asks for, or the reason it does not ask for a usable one.
fn requested_quantity(value: Option<&str>) -> std::result::Result<Quantity, String> {
    match value {
        None => Err("No quantity given".to_string()),
        Some(UNSET) => Err(format!("Quantity is '{}'", UNSET)),
        Some(value) => parse_quantity(value).map_err(|e| e.to_string()),
    }
}
