use std::collections::BTreeMap;

use crate::{NodeRole, ReplicaCount, RoleName};

/// Named, homogeneous group of nodes sharing roles, size and storage
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NodePool {
    pub name: String,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub roles: Vec<RoleName>,

    /// number of nodes in the pool
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub replicas: Option<ReplicaCount>,

    /// storage for the pool; `None` runs the nodes on ephemeral storage
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub persistence: Option<PersistenceConfig>,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub resources: ResourceRequirements,

    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub node_selector: BTreeMap<String, String>,

    /// service configuration passed through to every node of the pool
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub config: BTreeMap<String, String>,
}

impl NodePool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RoleName>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_replicas(mut self, replicas: ReplicaCount) -> Self {
        self.replicas = Some(replicas);
        self
    }

    pub fn with_persistence(mut self, persistence: PersistenceConfig) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn has_role(&self, role: NodeRole) -> bool {
        self.roles.iter().any(|name| name.is(role))
    }

    pub fn is_master(&self) -> bool {
        self.has_role(NodeRole::Master)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PersistenceConfig {
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub enabled: bool,

    /// requested volume size as a quantity string, ex: `10Gi`
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub size: String,

    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub storage_class: Option<String>,
}

impl PersistenceConfig {
    pub fn enabled(size: impl Into<String>) -> Self {
        Self {
            enabled: true,
            size: size.into(),
            storage_class: None,
        }
    }
}

/// compute resources of a node; quantities are not interpreted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ResourceRequirements {
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub limits: BTreeMap<String, String>,

    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub requests: BTreeMap<String, String>,
}
