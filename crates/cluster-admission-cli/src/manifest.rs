use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cluster_admission_metadata::Cluster;

/// Loads a cluster manifest; JSON is read as YAML
pub fn load_cluster(path: &Path) -> Result<Cluster> {
    let file =
        File::open(path).with_context(|| format!("unable to open {}", path.display()))?;
    let cluster: Cluster = serde_yaml::from_reader(file)
        .with_context(|| format!("unable to parse cluster manifest {}", path.display()))?;
    debug!(
        file = %path.display(),
        cluster = %cluster.name(),
        pools = cluster.spec.node_pools.len(),
        "loaded manifest"
    );
    Ok(cluster)
}
