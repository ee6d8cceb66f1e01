//! Corpus Error Types

use eis_protocol::{FormatError, GroupKey, TestIdentity};
use feature_engine::FeatureError;
use spectrum_loader::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors assembling the corpus or building the feature table.
///
/// Every variant names the offending input; the pipeline never continues
/// past a failure, so one bad file fails the whole run.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Data directory could not be walked
    #[error("cannot scan data directory {}", dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// No spectrum files under the data directory
    #[error("no spectrum files found under {}", dir.display())]
    NoInputFiles { dir: PathBuf },

    /// A spectrum filename did not decode to a test identity
    #[error("invalid spectrum filename {}", path.display())]
    Filename {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// A spectrum file failed to load
    #[error("failed to load spectrum {} ({identity})", path.display())]
    Load {
        path: PathBuf,
        identity: TestIdentity,
        #[source]
        source: LoadError,
    },

    /// Feature extraction failed for one test group
    #[error("feature extraction failed for {key}")]
    Features {
        key: GroupKey,
        #[source]
        source: FeatureError,
    },

    /// An output table could not be written
    #[error("cannot write table to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
