//! EIS Feature Pipeline
//!
//! Wires directory indexing, corpus assembly, and feature table building
//! into one batch run.

mod config;

pub use config::PipelineConfig;

use anyhow::Context;
use corpus::{
    assemble, build_feature_table, index_directory, write_feature_table_csv, write_long_form_csv,
    FeatureTable,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run one end-to-end pipeline pass: index, assemble, export, featurize.
///
/// Fail-fast throughout: the first bad file or row set aborts the run
/// rather than producing a silently incomplete table.
pub fn run(config: &PipelineConfig) -> anyhow::Result<()> {
    let entries = index_directory(&config.data_dir)
        .with_context(|| format!("indexing {}", config.data_dir.display()))?;
    info!(
        "indexed {} spectrum files under {}",
        entries.len(),
        config.data_dir.display()
    );

    let dataset = assemble(&entries).context("assembling long-format corpus")?;
    info!("assembled long-format dataset: {} rows", dataset.len());

    if let Some(path) = &config.long_out {
        write_long_form_csv(&dataset, path).context("exporting long-format table")?;
    }

    let table = build_feature_table(&dataset).context("building feature table")?;
    info!(
        "feature table: {} tests x {} columns",
        table.len(),
        FeatureTable::column_names().len()
    );

    write_feature_table_csv(&table, &config.features_out).context("exporting feature table")?;
    Ok(())
}
