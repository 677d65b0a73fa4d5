//!
//! # Field errors
//!
//! Field addressed validation errors, rendered the way the orchestrator
//! reports them back to the user, ex:
//! `spec.nodePools[0].replicas: Invalid value: -1: must be greater than zero`
//!
use std::fmt;
use std::ops::Deref;

use crate::AdmissionError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Child(String),
    Index(usize),
}

/// Location of a field inside an object, ex: `spec.nodePools[2].name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![Segment::Child(root.into())])
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        self.with(Segment::Child(name.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with(Segment::Index(index))
    }

    fn with(&self, segment: Segment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Child(name) if i == 0 => f.write_str(name)?,
                Segment::Child(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Category of a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// mandatory field is missing
    Required,
    /// field holds a disallowed value
    Invalid,
    /// enumerated value outside of the supported set
    NotSupported,
    /// value must be unique but is repeated
    Duplicate,
    /// update touches an immutable field
    Forbidden,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "Required value",
            Self::Invalid => "Invalid value",
            Self::NotSupported => "Unsupported value",
            Self::Duplicate => "Duplicate value",
            Self::Forbidden => "Forbidden",
        }
    }

    /// short machine friendly name
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "FieldValueRequired",
            Self::Invalid => "FieldValueInvalid",
            Self::NotSupported => "FieldValueNotSupported",
            Self::Duplicate => "FieldValueDuplicate",
            Self::Forbidden => "FieldValueForbidden",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offending value carried by an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for BadValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<i32> for BadValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for BadValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for BadValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for BadValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for BadValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub field: String,
    pub bad_value: Option<BadValue>,
    pub detail: String,
    /// accepted values, only filled for [`ErrorKind::NotSupported`]
    pub supported: Vec<String>,
}

impl FieldError {
    fn new(kind: ErrorKind, path: &Path, bad_value: Option<BadValue>, detail: String) -> Self {
        Self {
            kind,
            field: path.to_string(),
            bad_value,
            detail,
            supported: vec![],
        }
    }

    pub fn required(path: &Path, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Required, path, None, detail.into())
    }

    pub fn invalid(path: &Path, value: impl Into<BadValue>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Invalid, path, Some(value.into()), detail.into())
    }

    pub fn not_supported<S: AsRef<str>>(
        path: &Path,
        value: impl Into<BadValue>,
        supported: &[S],
    ) -> Self {
        let supported: Vec<String> = supported.iter().map(|s| s.as_ref().to_owned()).collect();
        let quoted: Vec<String> = supported.iter().map(|s| format!("{s:?}")).collect();
        let mut error = Self::new(
            ErrorKind::NotSupported,
            path,
            Some(value.into()),
            format!("supported values: {}", quoted.join(", ")),
        );
        error.supported = supported;
        error
    }

    pub fn duplicate(path: &Path, value: impl Into<BadValue>) -> Self {
        Self::new(ErrorKind::Duplicate, path, Some(value.into()), String::new())
    }

    pub fn forbidden(path: &Path, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, path, None, detail.into())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)?;
        match self.kind {
            ErrorKind::Required | ErrorKind::Forbidden => {}
            ErrorKind::Invalid | ErrorKind::NotSupported | ErrorKind::Duplicate => {
                if let Some(value) = &self.bad_value {
                    write!(f, ": {value}")?;
                }
            }
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

/// Ordered list of every problem found, never cut short at the first one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<FieldError>);

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn append(&mut self, mut other: ErrorList) {
        self.0.append(&mut other.0);
    }

    /// collapse into a single rejection carrying every error
    pub fn into_result(self) -> Result<(), AdmissionError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AdmissionError { errors: self })
        }
    }
}

impl Deref for ErrorList {
    type Target = [FieldError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<FieldError> for ErrorList {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<T: IntoIterator<Item = FieldError>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{single}"),
            errors => {
                f.write_str("[")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{error}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_path_rendering() {
        let spec = Path::new("spec");
        assert_eq!(spec.to_string(), "spec");
        assert_eq!(
            spec.child("nodePools").index(2).child("name").to_string(),
            "spec.nodePools[2].name"
        );
        assert_eq!(
            spec.child("nodePools").index(0).child("roles").index(1).to_string(),
            "spec.nodePools[0].roles[1]"
        );
        // parent is untouched by child paths
        assert_eq!(spec.to_string(), "spec");
    }

    #[test]
    fn test_error_rendering() {
        let path = Path::new("spec").child("minimumMasters");
        assert_eq!(
            FieldError::invalid(&path, 1, "must be a minimum of 2 to avoid a split brain scenario")
                .to_string(),
            "spec.minimumMasters: Invalid value: 1: must be a minimum of 2 to avoid a split brain scenario"
        );

        let path = Path::new("spec").child("version");
        assert_eq!(
            FieldError::required(&path, "must be a semver version").to_string(),
            "spec.version: Required value: must be a semver version"
        );

        let path = Path::new("spec").child("nodePools").index(1).child("name");
        assert_eq!(
            FieldError::duplicate(&path, "data").to_string(),
            "spec.nodePools[1].name: Duplicate value: \"data\""
        );

        let path = Path::new("spec");
        assert_eq!(
            FieldError::forbidden(&path, "cannot change").to_string(),
            "spec: Forbidden: cannot change"
        );
    }

    #[test]
    fn test_not_supported_carries_values() {
        let path = Path::new("role");
        let error = FieldError::not_supported(&path, "client", &["data", "ingest", "master"]);
        assert_eq!(error.kind, ErrorKind::NotSupported);
        assert_eq!(error.supported, vec!["data", "ingest", "master"]);
        assert_eq!(
            error.to_string(),
            "role: Unsupported value: \"client\": supported values: \"data\", \"ingest\", \"master\""
        );
    }

    #[test]
    fn test_error_list_aggregation() {
        let path = Path::new("spec");
        let mut errors = ErrorList::new();
        assert!(errors.clone().into_result().is_ok());

        errors.push(FieldError::required(&path.child("a"), "first"));
        assert_eq!(errors.to_string(), "spec.a: Required value: first");

        errors.append(ErrorList::from(FieldError::required(&path.child("b"), "second")));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "[spec.a: Required value: first, spec.b: Required value: second]"
        );

        let rejection = errors.into_result().expect_err("two errors");
        assert_eq!(rejection.errors.len(), 2);
    }
}
