//! Long-Format Corpus Assembly

use crate::error::CorpusError;
use crate::index::CorpusEntry;
use eis_protocol::{GroupKey, Spectrum, SpectrumPoint, TestIdentity};
use serde::{Deserialize, Serialize};
use spectrum_loader::load_spectrum_points;
use tracing::debug;

/// One row of the long-format dataset: the identity fields broadcast over a
/// single frequency sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongRecord {
    pub cell_id: u32,
    pub soh_pct: u32,
    pub temp_c: i32,
    pub soc_pct: u32,
    pub capacity_code: u32,
    pub frequency_hz: f64,
    pub z_real_ohm: f64,
    pub z_imag_ohm: f64,
}

impl LongRecord {
    fn new(identity: TestIdentity, point: SpectrumPoint) -> Self {
        Self {
            cell_id: identity.cell_id,
            soh_pct: identity.soh_pct,
            temp_c: identity.temp_c,
            soc_pct: identity.soc_pct,
            capacity_code: identity.capacity_code,
            frequency_hz: point.frequency_hz,
            z_real_ohm: point.z_real_ohm,
            z_imag_ohm: point.z_imag_ohm,
        }
    }

    /// Grouping key for the feature table (capacity_code excluded).
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            cell_id: self.cell_id,
            soh_pct: self.soh_pct,
            temp_c: self.temp_c,
            soc_pct: self.soc_pct,
        }
    }

    /// The spectrum sample carried by this row.
    pub fn point(&self) -> SpectrumPoint {
        SpectrumPoint {
            frequency_hz: self.frequency_hz,
            z_real_ohm: self.z_real_ohm,
            z_imag_ohm: self.z_imag_ohm,
        }
    }
}

/// The concatenated long-format dataset, one row per frequency sample
/// across all tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongFormDataset {
    pub records: Vec<LongRecord>,
}

impl LongFormDataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load every indexed spectrum and concatenate into one long-format dataset.
///
/// Identity fields are broadcast across each spectrum's rows and input order
/// is preserved. The first load failure aborts the whole assembly with the
/// offending path and identity attached; there is no partial corpus.
pub fn assemble(entries: &[CorpusEntry]) -> Result<LongFormDataset, CorpusError> {
    let mut records = Vec::new();
    for entry in entries {
        let points = load_spectrum_points(&entry.path).map_err(|source| CorpusError::Load {
            path: entry.path.clone(),
            identity: entry.identity,
            source,
        })?;
        let spectrum = Spectrum {
            identity: entry.identity,
            points,
        };
        records.extend(
            spectrum
                .points
                .iter()
                .map(|&point| LongRecord::new(spectrum.identity, point)),
        );
    }

    debug!(
        "assembled {} long-format rows from {} spectra",
        records.len(),
        entries.len()
    );
    Ok(LongFormDataset { records })
}
