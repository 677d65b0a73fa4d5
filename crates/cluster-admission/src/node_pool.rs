use tracing::trace;

use cluster_admission_metadata::NodePool;

use crate::external::ExternalValidators;
use crate::role::validate_role;
use crate::validator::ClusterValidator;
use crate::{ErrorList, FieldError, Path};

impl<V: ExternalValidators> ClusterValidator<V> {
    /// Validates one node pool: name, persistence, roles and replicas.
    ///
    /// Resource requirements are not checked.
    pub fn validate_node_pool(&self, pool: &NodePool, path: &Path) -> ErrorList {
        trace!(pool = %pool.name, %path, "validating node pool");

        let mut errors = self.external().validate_name(&pool.name, &path.child("name"));

        if let Some(persistence) = &pool.persistence {
            errors.append(
                self.external()
                    .validate_persistence(persistence, &path.child("persistence")),
            );
        }

        let roles_path = path.child("roles");
        if pool.roles.is_empty() {
            errors.push(FieldError::required(
                &roles_path,
                "at least one role must be specified",
            ));
        }
        for (i, role) in pool.roles.iter().enumerate() {
            errors.append(validate_role(role, &roles_path.index(i)));
        }

        // zero replicas is allowed
        if let Some(replicas) = pool.replicas.filter(|replicas| *replicas < 0) {
            errors.push(FieldError::invalid(
                &path.child("replicas"),
                replicas,
                "must be greater than zero",
            ));
        }

        errors
    }
}
