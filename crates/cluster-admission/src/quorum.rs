//!
//! # Master quorum
//!
//! A cluster elects its leader among the master nodes. Requiring a strict
//! majority of them to agree guarantees that two partitions of the cluster
//! can never both elect a leader (split brain).
//!
use tracing::trace;

use cluster_admission_metadata::NodePool;

/// Strict majority of `masters`: the smallest count greater than half of it.
///
/// Total over every input, `quorum(0)` is 1.
///
/// ```
/// use cluster_admission::quorum::quorum;
///
/// assert_eq!(quorum(3), 2);
/// assert_eq!(quorum(4), 3);
/// ```
pub const fn quorum(masters: i64) -> i64 {
    masters / 2 + 1
}

/// Total replicas across every pool carrying the master role.
///
/// Pools without a replica count add nothing. Negative counts are summed as
/// is, so the total may drop to zero or below.
pub fn count_masters(pools: &[NodePool]) -> i64 {
    pools
        .iter()
        .filter(|pool| pool.is_master())
        .map(|pool| {
            let replicas = i64::from(pool.replicas.unwrap_or(0));
            trace!(pool = %pool.name, replicas, "master pool");
            replicas
        })
        .sum()
}
