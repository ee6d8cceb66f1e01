//! EIS Feature Pipeline - Main Entry Point

use clap::Parser;
use pipeline::{init_logging, run, PipelineConfig};
use std::path::PathBuf;
use tracing::info;

/// Derive per-test impedance features from a directory of EIS spectra.
#[derive(Debug, Parser)]
#[command(name = "eis-pipeline", version, about)]
struct Cli {
    /// Directory containing the raw spectrum files
    data_dir: Option<PathBuf>,

    /// Feature table destination (CSV)
    #[arg(long)]
    features_out: Option<PathBuf>,

    /// Also write the intermediate long-format table here (CSV)
    #[arg(long)]
    long_out: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("=== EIS Feature Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let mut config = PipelineConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(path) = cli.features_out {
        config.features_out = path;
    }
    if let Some(path) = cli.long_out {
        config.long_out = Some(path);
    }

    run(&config)
}
