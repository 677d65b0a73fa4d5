//!
//! # Update validation
//!
//! An update must produce a valid cluster on its own, and may only change
//! the replica count of an existing node pool or turn its persistence on.
//! Pools are matched by name; pools new to the update are unconstrained.
//!
use tracing::{debug, instrument};

use cluster_admission_metadata::{Cluster, ClusterSpec, NodePool};

use crate::external::ExternalValidators;
use crate::validator::{ClusterValidator, SPEC_PATH};
use crate::{ErrorList, FieldError, Path};

impl<V: ExternalValidators> ClusterValidator<V> {
    /// Validates `new` as a replacement of `old`. Neither cluster is modified.
    #[instrument(skip_all, fields(cluster = %new.name()))]
    pub fn validate_update(&self, old: &Cluster, new: &Cluster) -> ErrorList {
        let mut errors = self.validate_create(new);
        errors.append(validate_node_pool_updates(&old.spec, &new.spec));
        debug!(errors = errors.len(), "update validated");
        errors
    }
}

fn validate_node_pool_updates(old: &ClusterSpec, new: &ClusterSpec) -> ErrorList {
    let spec_path = Path::new(SPEC_PATH);
    let pools_path = spec_path.child("nodePools");
    let mut errors = ErrorList::new();

    for (i, new_pool) in new.node_pools.iter().enumerate() {
        let Some(old_pool) = old.node_pool(&new_pool.name) else {
            continue;
        };

        if old_pool.persistence.is_some() && new_pool.persistence != old_pool.persistence {
            errors.push(FieldError::forbidden(
                &pools_path.index(i).child("persistence"),
                "cannot modify persistence configuration once enabled",
            ));
        }

        if !immutable_fields_match(old_pool, new_pool) {
            errors.push(FieldError::forbidden(
                &spec_path,
                "updates to nodepool for fields other than 'replicas' and 'persistence' are forbidden.",
            ));
        }
    }

    errors
}

/// Compares every field of a node pool except `replicas` and `persistence`.
///
/// Both pools are destructured in full so a new field fails to compile here
/// until its update policy is decided.
fn immutable_fields_match(old: &NodePool, new: &NodePool) -> bool {
    let NodePool {
        name: old_name,
        roles: old_roles,
        replicas: _,
        persistence: _,
        resources: old_resources,
        node_selector: old_node_selector,
        config: old_config,
    } = old;
    let NodePool {
        name: new_name,
        roles: new_roles,
        replicas: _,
        persistence: _,
        resources: new_resources,
        node_selector: new_node_selector,
        config: new_config,
    } = new;

    old_name == new_name
        && old_roles == new_roles
        && old_resources == new_resources
        && old_node_selector == new_node_selector
        && old_config == new_config
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use cluster_admission_metadata::{
        ClusterSpec, ClusterVersion, NodeRole, PersistenceConfig,
    };

    use super::*;
    use crate::{ErrorKind, validate_cluster_update};

    const OTHER_FIELDS_MSG: &str =
        "updates to nodepool for fields other than 'replicas' and 'persistence' are forbidden.";

    fn cluster(pools: Vec<NodePool>) -> Cluster {
        Cluster::new(
            "logs",
            ClusterSpec {
                node_pools: pools,
                version: ClusterVersion::parse("6.8.2").expect("version"),
                ..Default::default()
            },
        )
    }

    fn masters(replicas: i32) -> NodePool {
        NodePool::new("es-master")
            .with_roles([NodeRole::Master])
            .with_replicas(replicas)
    }

    fn data() -> NodePool {
        NodePool::new("es-data")
            .with_roles([NodeRole::Data])
            .with_replicas(3)
    }

    #[test]
    fn test_unchanged_update_accepted() {
        let old = cluster(vec![masters(3), data()]);
        assert!(validate_cluster_update(&old, &old.clone()).is_empty());
    }

    #[test]
    fn test_replicas_change_accepted() {
        let old = cluster(vec![masters(3)]);
        let new = cluster(vec![masters(5)]);
        assert!(validate_cluster_update(&old, &new).is_empty());
    }

    #[test]
    fn test_roles_change_forbidden() {
        let old = cluster(vec![masters(3)]);
        let new = cluster(vec![masters(3).with_roles([NodeRole::Master, NodeRole::Data])]);

        let errors = validate_cluster_update(&old, &new);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Forbidden);
        assert_eq!(errors[0].field, "spec");
        assert_eq!(errors[0].detail, OTHER_FIELDS_MSG);
    }

    #[test]
    fn test_removing_persistence_forbidden() {
        let old = cluster(vec![
            masters(3),
            data().with_persistence(PersistenceConfig::enabled("10Gi")),
        ]);
        let new = cluster(vec![masters(3), data()]);

        let errors = validate_cluster_update(&old, &new);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Forbidden);
        assert_eq!(errors[0].field, "spec.nodePools[1].persistence");
        assert_eq!(
            errors[0].detail,
            "cannot modify persistence configuration once enabled"
        );
    }

    #[test]
    fn test_resizing_persistence_forbidden() {
        let old = cluster(vec![
            masters(3).with_persistence(PersistenceConfig::enabled("10Gi")),
        ]);
        let new = cluster(vec![
            masters(3).with_persistence(PersistenceConfig::enabled("20Gi")),
        ]);

        let errors = validate_cluster_update(&old, &new);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "spec.nodePools[0].persistence");
    }

    #[test]
    fn test_enabling_persistence_accepted() {
        let old = cluster(vec![masters(3), data()]);
        let new = cluster(vec![
            masters(3),
            data()
                .with_persistence(PersistenceConfig::enabled("10Gi"))
                .with_replicas(6),
        ]);
        assert!(validate_cluster_update(&old, &new).is_empty());
    }

    #[test]
    fn test_new_and_removed_pools_unconstrained() {
        let old = cluster(vec![masters(3), data()]);
        let new = cluster(vec![
            masters(3),
            NodePool::new("es-ingest")
                .with_roles([NodeRole::Ingest])
                .with_replicas(2),
        ]);
        assert!(validate_cluster_update(&old, &new).is_empty());
    }

    #[test]
    fn test_pools_matched_by_name_not_position() {
        let old = cluster(vec![masters(3), data()]);
        let new = cluster(vec![data(), masters(5)]);
        assert!(validate_cluster_update(&old, &new).is_empty());
    }

    #[test]
    fn test_one_error_per_changed_pool() {
        let mut changed_data = data();
        changed_data
            .node_selector
            .insert("disk".to_owned(), "ssd".to_owned());
        let mut changed_masters = masters(3);
        changed_masters
            .config
            .insert("cluster.routing".to_owned(), "none".to_owned());

        let old = cluster(vec![masters(3), data()]);
        let new = cluster(vec![changed_masters, changed_data]);

        let errors = validate_cluster_update(&old, &new);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.field == "spec" && e.detail == OTHER_FIELDS_MSG));
    }

    #[test]
    fn test_resources_change_forbidden() {
        let mut changed = data();
        changed
            .resources
            .limits
            .insert("memory".to_owned(), "4Gi".to_owned());

        let old = cluster(vec![masters(3), data()]);
        let new = cluster(vec![masters(3), changed]);

        let errors = validate_cluster_update(&old, &new);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].detail, OTHER_FIELDS_MSG);
    }

    #[test]
    fn test_persistence_and_other_fields_both_reported() {
        let old = cluster(vec![
            masters(3).with_persistence(PersistenceConfig::enabled("10Gi")),
        ]);
        let mut new_masters = masters(3).with_roles([NodeRole::Master, NodeRole::Ingest]);
        new_masters.persistence = None;
        let new = cluster(vec![new_masters]);

        let errors = validate_cluster_update(&old, &new);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["spec.nodePools[0].persistence", "spec"]);
    }

    #[test]
    fn test_new_spec_is_fully_revalidated() {
        let old = cluster(vec![masters(3)]);
        let mut new = cluster(vec![masters(3).with_roles([NodeRole::Master, NodeRole::Data])]);
        new.spec.minimum_masters = Some(1);

        let errors = validate_cluster_update(&old, &new);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "spec.minimumMasters");
        assert_eq!(errors[1].kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_first_old_pool_with_name_wins() {
        let old = cluster(vec![masters(3), masters(3).with_roles([NodeRole::Data])]);
        let new = cluster(vec![masters(3)]);

        let errors = validate_cluster_update(&old, &new);
        assert!(errors.iter().all(|e| e.kind != ErrorKind::Forbidden));
    }

    #[test]
    fn test_inputs_untouched() {
        let old = cluster(vec![
            masters(3).with_persistence(PersistenceConfig::enabled("10Gi")),
        ]);
        let new = cluster(vec![masters(7)]);
        let (old_before, new_before) = (old.clone(), new.clone());

        let errors = validate_cluster_update(&old, &new);
        assert_eq!(errors.len(), 1);
        assert_eq!(old, old_before);
        assert_eq!(new, new_before);
    }

    #[test]
    fn test_comparator_ignores_only_replicas_and_persistence() {
        let base = data();
        let other = data()
            .with_replicas(10)
            .with_persistence(PersistenceConfig::enabled("1Gi"));
        assert!(immutable_fields_match(&base, &other));

        let renamed = NodePool {
            name: "es-data-2".to_owned(),
            ..data()
        };
        assert!(!immutable_fields_match(&base, &renamed));
    }
}
