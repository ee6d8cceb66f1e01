//! Loader Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading one raw spectrum file
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("cannot open spectrum file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Reader-level failure partway through the file
    #[error("malformed spectrum file {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Every row failed numeric coercion
    #[error("no numeric rows survived cleaning in {}", path.display())]
    NoValidRows { path: PathBuf },
}
