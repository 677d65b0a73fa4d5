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
pub struct ValidateOpt {
    /// Cluster manifests, YAML or JSON
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl ValidateOpt {
    pub fn process<W: Write>(&self, opts: &GlobalOptions, out: &mut W) -> Result<Outcome> {
        let validator = ClusterValidator::new();
        let mut outcome = Outcome::Accepted;

        for file in &self.files {
            let cluster = load_cluster(file)?;
            let errors = validator.validate_create(&cluster);
            info!(file = %file.display(), errors = errors.len(), "checked manifest");

            let report = FileReport::new(file.display().to_string(), &errors);
            report.write(opts.format, opts.quiet, out)?;
            outcome = outcome.and(report.outcome());
        }

        Ok(outcome)
    }
}
