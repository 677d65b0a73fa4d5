use crate::ClusterSpec;

/// Cluster object as submitted to the orchestrator
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Cluster {
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub metadata: ObjectMeta,

    #[cfg_attr(feature = "use_serde", serde(default))]
    pub spec: ClusterSpec,
}

impl Cluster {
    pub fn new(name: impl Into<String>, spec: ClusterSpec) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                namespace: None,
            },
            spec,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ObjectMeta {
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub name: String,

    #[cfg_attr(
        feature = "use_serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub namespace: Option<String>,
}
