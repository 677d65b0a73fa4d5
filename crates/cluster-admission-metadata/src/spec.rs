use crate::{ClusterVersion, NodePool};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ClusterSpec {
    /// settings shared by every node of the cluster
    #[cfg_attr(feature = "use_serde", serde(flatten))]
    pub cluster_config: ClusterConfig,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub node_pools: Vec<NodePool>,

    /// number of master nodes required to elect a leader.
    /// when absent the controller derives it from the master count
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub minimum_masters: Option<i32>,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub version: ClusterVersion,

    /// overrides the service image derived from `version`
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image: Option<ImageSpec>,
}

impl ClusterSpec {
    pub fn node_pool(&self, name: &str) -> Option<&NodePool> {
        self.node_pools.iter().find(|pool| pool.name == name)
    }
}

/// Cluster wide configuration shared with the node sidecar
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ClusterConfig {
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub pilot_image: ImageSpec,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub security_context: SecurityContext,

    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub sysctls: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SecurityContext {
    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub run_as_user: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ImageSpec {
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub repository: String,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub tag: String,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub pull_policy: String,
}
