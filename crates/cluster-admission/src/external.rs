//!
//! # Collaborator validators
//!
//! Checks the cluster validator delegates to instead of owning: name format,
//! object metadata, persistence, image and cluster wide configuration.
//! Each takes the value and its field path and returns the errors found.
//!
use cluster_admission_metadata::{ClusterConfig, ImageSpec, ObjectMeta, PersistenceConfig};

use crate::name::is_dns1123_subdomain;
use crate::{ErrorList, FieldError, Path};

pub trait ExternalValidators {
    /// name format of node pools and objects
    fn validate_name(&self, name: &str, path: &Path) -> ErrorList {
        is_dns1123_subdomain(name)
            .into_iter()
            .map(|msg| FieldError::invalid(path, name, msg))
            .collect()
    }

    fn validate_object_meta(&self, meta: &ObjectMeta, path: &Path) -> ErrorList {
        let name_path = path.child("name");
        if meta.name.is_empty() {
            return FieldError::required(&name_path, "name is required").into();
        }
        self.validate_name(&meta.name, &name_path)
    }

    fn validate_persistence(&self, _persistence: &PersistenceConfig, _path: &Path) -> ErrorList {
        ErrorList::new()
    }

    fn validate_image(&self, _image: &ImageSpec, _path: &Path) -> ErrorList {
        ErrorList::new()
    }

    fn validate_cluster_config(&self, _config: &ClusterConfig, _path: &Path) -> ErrorList {
        ErrorList::new()
    }
}

/// Stock collaborators: RFC 1123 names, object name required, everything else accepted
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValidators;

impl ExternalValidators for DefaultValidators {}

impl<V: ExternalValidators + ?Sized> ExternalValidators for &V {
    fn validate_name(&self, name: &str, path: &Path) -> ErrorList {
        (**self).validate_name(name, path)
    }

    fn validate_object_meta(&self, meta: &ObjectMeta, path: &Path) -> ErrorList {
        (**self).validate_object_meta(meta, path)
    }

    fn validate_persistence(&self, persistence: &PersistenceConfig, path: &Path) -> ErrorList {
        (**self).validate_persistence(persistence, path)
    }

    fn validate_image(&self, image: &ImageSpec, path: &Path) -> ErrorList {
        (**self).validate_image(image, path)
    }

    fn validate_cluster_config(&self, config: &ClusterConfig, path: &Path) -> ErrorList {
        (**self).validate_cluster_config(config, path)
    }
}
