use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use survey_report::{Report, ReportConfig};
use tracing_subscriber::EnvFilter;

/// Build the documentation survey figures as JSON and SVG
#[derive(Debug, Clone, Parser)]
#[command(name = "docs-survey", author, version, about, long_about = None)]
struct Cli {
    /// JSON config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the survey CSV files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory receiving the figure JSON and SVG files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Bootstrap resamples per interval
    #[arg(long)]
    resamples: Option<usize>,

    /// Seed for reproducible intervals
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn report_config(&self) -> anyhow::Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ReportConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(n) = self.resamples {
            config = config.with_resamples(n);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = cli.report_config()?;
    let report = Report::from_config(&config).context("failed to build figures")?;
    let written = report.write_to(&config.output_dir)?;
    tracing::info!(count = written.len(), "Report complete");
    Ok(())
}
