use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use thiserror::Error;

/// Role a node can take in the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRole {
    Data,
    Ingest,
    Master,
}

impl NodeRole {
    /// every supported role, in the order they are reported
    pub const ALL: [NodeRole; 3] = [NodeRole::Data, NodeRole::Ingest, NodeRole::Master];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Ingest => "ingest",
            Self::Master => "master",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported node role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for NodeRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(Self::Data),
            "ingest" => Ok(Self::Ingest),
            "master" => Ok(Self::Master),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Role as it was written in the specification.
///
/// Kept as raw text so that values outside [`NodeRole`] survive
/// deserialization and can be reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn role(&self) -> Option<NodeRole> {
        self.0.parse().ok()
    }

    pub fn is(&self, role: NodeRole) -> bool {
        self.role() == Some(role)
    }
}

impl Deref for RoleName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NodeRole> for RoleName {
    fn from(role: NodeRole) -> Self {
        Self(role.as_str().to_owned())
    }
}

impl From<&str> for RoleName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for RoleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
