mod command;
mod manifest;
mod report;

use std::process::ExitCode;

use clap::{Args, Parser, ValueEnum};

use self::command::update::UpdateOpt;
use self::command::validate::ValidateOpt;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
    let args = Cli::parse();

    match args.process() {
        Ok(Outcome::Accepted) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Result of checking one or more manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

impl Outcome {
    fn and(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Accepted, Outcome::Accepted) => Outcome::Accepted,
            _ => Outcome::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args, Clone, Default)]
pub struct GlobalOptions {
    /// Output format of the admission report
    #[clap(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "CLUSTER_ADMISSION_FORMAT"
    )]
    format: OutputFormat,

    /// Only report rejected manifests
    #[clap(
        short = 'q',
        long,
        global = true,
        default_value_t = false,
        env = "CLUSTER_ADMISSION_QUIET"
    )]
    quiet: bool,
}

#[derive(Debug, Parser)]
#[command(
    about = "Admission check of cluster manifests",
    name = "cluster-admission",
    max_term_width = 100
)]
pub struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOptions,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Validate manifests as if they were created
    #[command(name = "validate")]
    Validate(ValidateOpt),

    /// Validate a manifest as an update of a stored one
    #[command(name = "validate-update")]
    ValidateUpdate(UpdateOpt),
}

impl Cli {
    fn process(self) -> anyhow::Result<Outcome> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Command::Validate(cmd) => cmd.process(&self.global_opts, &mut out),
            Command::ValidateUpdate(cmd) => cmd.process(&self.global_opts, &mut out),
        }
    }
}
