use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use registry_model::ApicurioRegistry;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// The name of the managed registry. Every generated object name starts with it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AppName(String);

/// The namespace that every generated object is placed in.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AppNamespace(String);

macro_rules! string_newtype {
    ($t:ident) => {
        impl $t {
            pub fn new<S: Into<String>>(value: S) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $t {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

string_newtype!(AppName);
string_newtype!(AppNamespace);

/// The well-known slots of the [`ResourceCache`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CacheKey {
    Spec,
    Deployment,
    Service,
    Ingress,
    PodDisruptionBudget,
}

/// A typed value held by the [`ResourceCache`].
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    Spec(Box<ApicurioRegistry>),
    Deployment(Box<Deployment>),
    Service(Box<Service>),
    Ingress(Box<Ingress>),
    PodDisruptionBudget(Box<PodDisruptionBudget>),
}

impl CacheEntry {
    /// The slot this entry belongs in.
    pub fn key(&self) -> CacheKey {
        match self {
            CacheEntry::Spec(_) => CacheKey::Spec,
            CacheEntry::Deployment(_) => CacheKey::Deployment,
            CacheEntry::Service(_) => CacheKey::Service,
            CacheEntry::Ingress(_) => CacheKey::Ingress,
            CacheEntry::PodDisruptionBudget(_) => CacheKey::PodDisruptionBudget,
        }
    }
}

/// Holds at most one entry per [`CacheKey`]. Setting an entry replaces whatever was there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceCache {
    entries: BTreeMap<CacheKey, CacheEntry>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `entry` in its slot, returning the entry it replaced.
    pub fn set(&mut self, entry: CacheEntry) -> Option<CacheEntry> {
        self.entries.insert(entry.key(), entry)
    }

    pub fn get(&self, key: CacheKey) -> Option<&CacheEntry> {
        self.entries.get(&key)
    }

    pub fn remove(&mut self, key: CacheKey) -> Option<CacheEntry> {
        self.entries.remove(&key)
    }

    /// The cached `ApicurioRegistry`, if there is one.
    pub fn spec(&self) -> Option<&ApicurioRegistry> {
        match self.get(CacheKey::Spec) {
            Some(CacheEntry::Spec(spec)) => Some(spec),
            _ => None,
        }
    }
}

/// The well-known entries of the [`StatusStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StatusKey {
    Image,
    DeploymentName,
    ServiceName,
    IngressName,
    ReplicaCount,
    Route,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StatusValue {
    String(String),
    Int32(i32),
}

/// Operational values recorded by the reconciliation loop. Reads never fail; a missing entry, or
/// one holding the other scalar type, reads as the zero value.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct StatusStore {
    values: BTreeMap<StatusKey, StatusValue>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string<S: Into<String>>(&mut self, key: StatusKey, value: S) {
        self.values.insert(key, StatusValue::String(value.into()));
    }

    pub fn set_i32(&mut self, key: StatusKey, value: i32) {
        self.values.insert(key, StatusValue::Int32(value));
    }

    pub fn get_string(&self, key: StatusKey) -> String {
        match self.values.get(&key) {
            Some(StatusValue::String(value)) => value.clone(),
            _ => String::new(),
        }
    }

    pub fn get_i32(&self, key: StatusKey) -> i32 {
        match self.values.get(&key) {
            Some(StatusValue::Int32(value)) => *value,
            _ => 0,
        }
    }
}

/// Everything known about one managed registry during a reconciliation attempt. The owner of the
/// attempt is the only reader and writer, so nothing here is synchronized.
#[derive(Debug, Clone)]
pub struct LoopContext {
    app_name: AppName,
    app_namespace: AppNamespace,
    resource_cache: ResourceCache,
    status: StatusStore,
}

impl LoopContext {
    pub fn new(app_name: AppName, app_namespace: AppNamespace) -> Self {
        Self {
            app_name,
            app_namespace,
            resource_cache: ResourceCache::new(),
            status: StatusStore::new(),
        }
    }

    pub fn app_name(&self) -> &AppName {
        &self.app_name
    }

    pub fn app_namespace(&self) -> &AppNamespace {
        &self.app_namespace
    }

    pub fn resource_cache(&self) -> &ResourceCache {
        &self.resource_cache
    }

    pub fn resource_cache_mut(&mut self) -> &mut ResourceCache {
        &mut self.resource_cache
    }

    pub fn status(&self) -> &StatusStore {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusStore {
        &mut self.status
    }
}
