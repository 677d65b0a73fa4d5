use cluster_admission_metadata::{NodeRole, RoleName};

use crate::{ErrorList, FieldError, Path};

/// supported role names, in reporting order
pub fn supported_roles() -> [&'static str; 3] {
    NodeRole::ALL.map(|role| role.as_str())
}

/// Checks a single role against the supported set
pub fn validate_role(role: &RoleName, path: &Path) -> ErrorList {
    match role.role() {
        Some(NodeRole::Data | NodeRole::Ingest | NodeRole::Master) => ErrorList::new(),
        None => FieldError::not_supported(path, &**role, &supported_roles()).into(),
    }
}
