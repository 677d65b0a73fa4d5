use std::collections::HashSet;

use tracing::debug;

use cluster_admission_metadata::ClusterSpec;

use crate::external::ExternalValidators;
use crate::quorum::{count_masters, quorum};
use crate::validator::ClusterValidator;
use crate::{ErrorList, FieldError, Path};

impl<V: ExternalValidators> ClusterValidator<V> {
    /// Validates a whole cluster spec rooted at `path`, conventionally `spec`
    pub fn validate_spec(&self, spec: &ClusterSpec, path: &Path) -> ErrorList {
        let mut errors = self
            .external()
            .validate_cluster_config(&spec.cluster_config, path);

        if let Some(image) = &spec.image {
            errors.append(self.external().validate_image(image, &path.child("image")));
        }

        let pools_path = path.child("nodePools");
        let mut names = HashSet::new();
        for (i, pool) in spec.node_pools.iter().enumerate() {
            let pool_path = pools_path.index(i);
            if !names.insert(pool.name.as_str()) {
                errors.push(FieldError::duplicate(
                    &pool_path.child("name"),
                    pool.name.as_str(),
                ));
            }
            errors.append(self.validate_node_pool(pool, &pool_path));
        }

        errors.append(validate_minimum_masters(spec, path));

        if spec.version.is_unset() {
            errors.push(FieldError::required(
                &path.child("version"),
                "must be a semver version",
            ));
        }

        errors
    }
}

/// Checks the master count and `minimumMasters` against the split brain quorum
fn validate_minimum_masters(spec: &ClusterSpec, path: &Path) -> ErrorList {
    let masters = count_masters(&spec.node_pools);
    let quorum = quorum(masters);
    debug!(masters, quorum, minimum_masters = ?spec.minimum_masters, "master quorum");

    let minimum_path = path.child("minimumMasters");
    let error = match spec.minimum_masters {
        _ if masters <= 0 => Some(FieldError::invalid(
            &path.child("nodePools"),
            masters,
            "must be at least one master node",
        )),
        // derived by the controller from the master count
        None => None,
        Some(0) => Some(FieldError::invalid(&minimum_path, 0, "cannot be zero")),
        Some(minimum) if i64::from(minimum) < quorum => Some(FieldError::invalid(
            &minimum_path,
            minimum,
            format!("must be a minimum of {quorum} to avoid a split brain scenario"),
        )),
        Some(minimum) if i64::from(minimum) > masters => Some(FieldError::invalid(
            &minimum_path,
            minimum,
            "cannot be greater than the total number of master nodes",
        )),
        Some(_) => None,
    };

    error.into_iter().collect()
}
