//!
//! # Cluster admission
//!
//! Admission checks for multi-role node cluster specifications, run before
//! a specification is accepted as desired state.
//!
//! * create: the object metadata and the spec are validated
//! * update: the new cluster is validated as on create, then compared with
//!   the stored one; an existing node pool may only change its replica
//!   count or enable persistence
//!
//! Every check accumulates into an [`ErrorList`]; an empty list accepts the
//! request.
//!
//! ```
//! use cluster_admission::validate_cluster;
//! use cluster_admission_metadata::{Cluster, ClusterSpec, ClusterVersion, NodePool, NodeRole};
//!
//! let cluster = Cluster::new(
//!     "logs",
//!     ClusterSpec {
//!         node_pools: vec![NodePool::new("masters").with_roles([NodeRole::Master]).with_replicas(3)],
//!         minimum_masters: Some(1),
//!         version: ClusterVersion::parse("6.8.2").unwrap(),
//!         ..Default::default()
//!     },
//! );
//!
//! let errors = validate_cluster(&cluster);
//! assert_eq!(
//!     errors.to_string(),
//!     "spec.minimumMasters: Invalid value: 1: must be a minimum of 2 to avoid a split brain scenario"
//! );
//! ```
//!
mod error;
mod field;
mod node_pool;
mod spec;
mod update;
mod validator;

pub mod external;
pub mod name;
pub mod quorum;
pub mod role;

pub use error::AdmissionError;
pub use external::{DefaultValidators, ExternalValidators};
pub use field::{BadValue, ErrorKind, ErrorList, FieldError, Path};
pub use role::validate_role;
pub use validator::{ClusterValidator, validate_cluster, validate_cluster_update};
