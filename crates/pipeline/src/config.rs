//! Pipeline Configuration

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration for one pipeline run.
///
/// Sources are layered: built-in defaults, then an optional TOML file, then
/// `EIS_*` environment variables; command-line flags override all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory scanned for spectrum files
    pub data_dir: PathBuf,
    /// Feature table destination (CSV)
    pub features_out: PathBuf,
    /// Optional long-format table destination (CSV)
    pub long_out: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            features_out: PathBuf::from("eis_features.csv"),
            long_out: None,
        }
    }
}

impl PipelineConfig {
    /// Load layered configuration (defaults ← file ← environment).
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("data_dir", "data")?
            .set_default("features_out", "eis_features.csv")?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        builder
            .add_source(Environment::with_prefix("EIS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = PipelineConfig::load(None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.features_out, PathBuf::from("eis_features.csv"));
        assert!(config.long_out.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pipeline.toml");
        fs::write(
            &path,
            "data_dir = \"spectra\"\nlong_out = \"eis_long.csv\"\n",
        )
        .unwrap();

        let config = PipelineConfig::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("spectra"));
        assert_eq!(config.features_out, PathBuf::from("eis_features.csv"));
        assert_eq!(config.long_out, Some(PathBuf::from("eis_long.csv")));
    }
}
