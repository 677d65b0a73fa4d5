use std::fmt;
use std::ops::Deref;

use semver::Version;

/// Version of the service the cluster runs.
///
/// The default is the unset version `0.0.0`; an empty string on the wire
/// maps to it as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterVersion(Version);

impl ClusterVersion {
    pub fn parse(version: &str) -> Result<Self, semver::Error> {
        Ok(Self(Version::parse(version)?))
    }

    pub const fn unset() -> Self {
        Self(Version::new(0, 0, 0))
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::unset()
    }
}

impl Default for ClusterVersion {
    fn default() -> Self {
        Self::unset()
    }
}

impl Deref for ClusterVersion {
    type Target = Version;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Version> for ClusterVersion {
    fn from(version: Version) -> Self {
        Self(version)
    }
}

impl fmt::Display for ClusterVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "use_serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ClusterVersion;

    impl Serialize for ClusterVersion {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if self.is_unset() {
                serializer.serialize_str("")
            } else {
                serializer.collect_str(&self.0)
            }
        }
    }

    impl<'de> Deserialize<'de> for ClusterVersion {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = String::deserialize(deserializer)?;
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(Self::unset());
            }
            Self::parse(raw).map_err(D::Error::custom)
        }
    }
}
