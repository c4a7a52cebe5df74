use crate::error::{self, Result};
use registry_model::constants::{ENV_OPERATOR_NAME, ENV_REGISTRY_VERSION};
use snafu::ensure;

/// Process-wide identity that every generated object carries in its labels. It is validated once
/// when it is created so that label generation itself cannot fail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FactoryConfig {
    registry_version: String,
    operator_name: String,
}

impl FactoryConfig {
    /// Create a config from explicit values. Both values must be non-empty.
    pub fn new<S1, S2>(registry_version: S1, operator_name: S2) -> Result<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let registry_version = registry_version.into();
        let operator_name = operator_name.into();
        ensure!(
            !registry_version.is_empty(),
            error::MissingIdentitySnafu {
                what: "registry version",
                variable: ENV_REGISTRY_VERSION,
            }
        );
        ensure!(
            !operator_name.is_empty(),
            error::MissingIdentitySnafu {
                what: "operator name",
                variable: ENV_OPERATOR_NAME,
            }
        );
        Ok(Self {
            registry_version,
            operator_name,
        })
    }

    /// Read `REGISTRY_VERSION` and `OPERATOR_NAME` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the identity values with `lookup`, treating a missing variable like an empty one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup(ENV_REGISTRY_VERSION).unwrap_or_default(),
            lookup(ENV_OPERATOR_NAME).unwrap_or_default(),
        )
    }

    pub fn registry_version(&self) -> &str {
        &self.registry_version
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn both_values_present() {
        let config = FactoryConfig::from_lookup(lookup(&[
            (ENV_REGISTRY_VERSION, "2.0.0"),
            (ENV_OPERATOR_NAME, "op1"),
        ]))
        .unwrap();
        assert_eq!(config.registry_version(), "2.0.0");
        assert_eq!(config.operator_name(), "op1");
    }

    #[test]
    fn missing_version_is_fatal() {
        let err = FactoryConfig::from_lookup(lookup(&[(ENV_OPERATOR_NAME, "op1")])).unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(
            err,
            Error::MissingIdentity {
                variable: ENV_REGISTRY_VERSION,
                ..
            }
        ));
    }

    #[test]
    fn empty_operator_is_fatal() {
        let err = FactoryConfig::new("2.0.0", "").unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains(ENV_OPERATOR_NAME));
    }
}
