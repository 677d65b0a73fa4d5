//!
//! # Cluster specification
//!
//! Declarative description of a multi-role node cluster: a set of named
//! node pools, each carrying a role set, a replica count and optional
//! persistence, plus the cluster wide settings shared by every pool.
//!
mod cluster;
mod pool;
mod role;
mod spec;
mod version;

pub use cluster::*;
pub use pool::*;
pub use role::*;
pub use spec::*;
pub use version::*;

/// number of replicas of a node pool
pub type ReplicaCount = i32;
