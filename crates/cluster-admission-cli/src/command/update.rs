use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cluster_admission::ClusterValidator;

use crate::manifest::load_cluster;
use crate::report::FileReport;
use crate::{GlobalOptions, Outcome};

#[derive(Debug, Parser)]
pub struct UpdateOpt {
    /// Manifest of the cluster as currently stored
    #[arg(long, value_name = "FILE")]
    pub old: PathBuf,

    /// Proposed replacement manifest
    #[arg(long, value_name = "FILE")]
    pub new: PathBuf,
}

impl UpdateOpt {
    pub fn process<W: Write>(&self, opts: &GlobalOptions, out: &mut W) -> Result<Outcome> {
        let old = load_cluster(&self.old)?;
        let new = load_cluster(&self.new)?;

        let errors = ClusterValidator::new().validate_update(&old, &new);
        info!(
            old = %self.old.display(),
            new = %self.new.display(),
            errors = errors.len(),
            "checked update"
        );

        let report = FileReport::new(self.new.display().to_string(), &errors);
        report.write(opts.format, opts.quiet, out)?;
        Ok(report.outcome())
    }
}
