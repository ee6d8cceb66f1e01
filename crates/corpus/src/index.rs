//! Directory Indexing

use crate::error::CorpusError;
use eis_protocol::{decode_filename, TestIdentity, SPECTRUM_EXTENSIONS};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One spectrum file scheduled for loading.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    /// Identity decoded from the file name
    pub identity: TestIdentity,
    /// Location of the raw spectrum file
    pub path: PathBuf,
}

/// Enumerate and decode every spectrum file under `dir`.
///
/// Files are visited in sorted path order so corpus assembly is
/// deterministic. Zero matching files, or any filename that does not decode,
/// fails the whole index.
pub fn index_directory(dir: &Path) -> Result<Vec<CorpusEntry>, CorpusError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| CorpusError::Scan {
            dir: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_spectrum_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(CorpusError::NoInputFiles {
            dir: dir.to_path_buf(),
        });
    }

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let identity = decode_filename(&path).map_err(|source| CorpusError::Filename {
            path: path.clone(),
            source,
        })?;
        entries.push(CorpusEntry { identity, path });
    }

    debug!(
        "indexed {} spectrum files under {}",
        entries.len(),
        dir.display()
    );
    Ok(entries)
}

fn is_spectrum_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SPECTRUM_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
