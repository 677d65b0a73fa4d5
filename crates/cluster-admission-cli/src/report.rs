use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use cluster_admission::{BadValue, ErrorList, FieldError};

use crate::{OutputFormat, Outcome};

/// Admission outcome of one manifest
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    pub accepted: bool,
    pub errors: Vec<ErrorReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub field: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_value: Option<serde_json::Value>,
    pub detail: String,
    pub message: String,
}

impl From<&FieldError> for ErrorReport {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            kind: error.kind.code(),
            bad_value: error.bad_value.as_ref().map(|value| match value {
                BadValue::Int(value) => serde_json::Value::from(*value),
                BadValue::Str(value) => serde_json::Value::from(value.as_str()),
            }),
            detail: error.detail.clone(),
            message: error.to_string(),
        }
    }
}

impl FileReport {
    pub fn new(file: impl Into<String>, errors: &ErrorList) -> Self {
        Self {
            file: file.into(),
            accepted: errors.is_empty(),
            errors: errors.iter().map(ErrorReport::from).collect(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.accepted {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        }
    }

    pub fn write<W: Write>(&self, format: OutputFormat, quiet: bool, out: &mut W) -> Result<()> {
        if quiet && self.accepted {
            return Ok(());
        }
        match format {
            OutputFormat::Text => {
                let verdict = if self.accepted { "accepted" } else { "rejected" };
                writeln!(out, "{}: {verdict}", self.file)?;
                for error in &self.errors {
                    writeln!(out, "  - {}", error.message)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
