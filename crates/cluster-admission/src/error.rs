use thiserror::Error;

use crate::ErrorList;

/// Rejection of a create or update request, listing every problem found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cluster specification rejected: {errors}")]
pub struct AdmissionError {
    pub errors: ErrorList,
}

#[cfg(test)]
mod test {
    use crate::{ErrorList, FieldError, Path};

    #[test]
    fn test_rejection_lists_every_error() {
        let spec = Path::new("spec");
        let errors: ErrorList = vec![
            FieldError::required(&spec.child("version"), "must be a semver version"),
            FieldError::invalid(
                &spec.child("nodePools"),
                0u32,
                "must be at least one master node",
            ),
        ]
        .into_iter()
        .collect();

        let err = errors.into_result().expect_err("rejected");
        let message = err.to_string();
        assert!(message.starts_with("cluster specification rejected: ["));
        assert!(message.contains("spec.version: Required value"));
        assert!(message.contains("spec.nodePools: Invalid value: 0: must be at least one master node"));
    }
}
