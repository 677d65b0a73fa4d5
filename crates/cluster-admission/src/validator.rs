use tracing::{debug, instrument};

use cluster_admission_metadata::Cluster;

use crate::external::{DefaultValidators, ExternalValidators};
use crate::{ErrorList, Path};

pub(crate) const METADATA_PATH: &str = "metadata";
pub(crate) const SPEC_PATH: &str = "spec";

/// Validates cluster specifications on create and update.
///
/// Stateless: every call builds its own working state, so one validator can
/// serve concurrent requests.
#[derive(Debug, Default, Clone)]
pub struct ClusterValidator<V = DefaultValidators> {
    external: V,
}

impl ClusterValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: ExternalValidators> ClusterValidator<V> {
    pub fn with_external(external: V) -> Self {
        Self { external }
    }

    pub fn external(&self) -> &V {
        &self.external
    }

    /// Validates a cluster submitted for creation: its metadata, then its spec
    #[instrument(skip_all, fields(cluster = %cluster.name()))]
    pub fn validate_create(&self, cluster: &Cluster) -> ErrorList {
        let mut errors = self
            .external
            .validate_object_meta(&cluster.metadata, &Path::new(METADATA_PATH));
        errors.append(self.validate_spec(&cluster.spec, &Path::new(SPEC_PATH)));
        debug!(errors = errors.len(), "create validated");
        errors
    }
}

/// Validates a new cluster with the stock collaborators
pub fn validate_cluster(cluster: &Cluster) -> ErrorList {
    ClusterValidator::new().validate_create(cluster)
}

/// Validates an update of `old` into `new` with the stock collaborators
pub fn validate_cluster_update(old: &Cluster, new: &Cluster) -> ErrorList {
    ClusterValidator::new().validate_update(old, new)
}
