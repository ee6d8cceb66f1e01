//! Feature Table Building

use crate::assembler::LongFormDataset;
use crate::error::CorpusError;
use eis_protocol::{GroupKey, SpectrumPoint};
use feature_engine::{extract_features, SpectrumFeatures};
use std::collections::BTreeMap;
use tracing::debug;

/// One feature table row: the grouping key plus the derived features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub key: GroupKey,
    pub features: SpectrumFeatures,
}

/// The per-test feature table, one row per distinct grouping key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    /// Rows in ascending key order
    pub rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// Full column header: the four key fields then the feature labels.
    pub fn column_names() -> Vec<String> {
        let mut names = vec![
            "cell_id".to_string(),
            "soh_pct".to_string(),
            "temp_c".to_string(),
            "soc_pct".to_string(),
        ];
        names.extend(SpectrumFeatures::labels());
        names
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group the long-format dataset by (cell, SoH, T, SOC) and derive one
/// feature row per group.
///
/// capacity_code is not part of the key, so rows differing only in capacity
/// code fold into a single spectrum before extraction. Rows come out in
/// ascending key order. The first extraction failure aborts the build.
pub fn build_feature_table(dataset: &LongFormDataset) -> Result<FeatureTable, CorpusError> {
    let mut groups: BTreeMap<GroupKey, Vec<SpectrumPoint>> = BTreeMap::new();
    for record in &dataset.records {
        groups
            .entry(record.group_key())
            .or_default()
            .push(record.point());
    }

    let mut rows = Vec::with_capacity(groups.len());
    for (key, points) in groups {
        let features =
            extract_features(&points).map_err(|source| CorpusError::Features { key, source })?;
        rows.push(FeatureRow { key, features });
    }

    debug!("built feature table with {} rows", rows.len());
    Ok(FeatureTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::LongRecord;

    fn record(
        cell_id: u32,
        capacity_code: u32,
        frequency_hz: f64,
        z_real_ohm: f64,
    ) -> LongRecord {
        LongRecord {
            cell_id,
            soh_pct: 100,
            temp_c: 25,
            soc_pct: 50,
            capacity_code,
            frequency_hz,
            z_real_ohm,
            z_imag_ohm: -0.01,
        }
    }

    #[test]
    fn test_capacity_codes_merge_into_one_group() {
        let dataset = LongFormDataset {
            records: vec![
                record(1, 1000, 10_000.0, 0.05),
                record(1, 1000, 0.01, 0.11),
                record(1, 1001, 1.0, 0.08),
            ],
        };

        let table = build_feature_table(&dataset).unwrap();
        assert_eq!(table.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.key.cell_id, 1);
        // The merged spectrum spans both capacity codes.
        assert!((row.features.r_hf_ohm - 0.05).abs() < 1e-12);
        assert!((row.features.r_lf_ohm - 0.11).abs() < 1e-12);
    }

    #[test]
    fn test_key_set_matches_distinct_input_keys() {
        let dataset = LongFormDataset {
            records: vec![
                record(2, 1000, 1.0, 0.08),
                record(1, 1000, 1.0, 0.07),
                record(2, 1001, 10.0, 0.06),
            ],
        };

        let table = build_feature_table(&dataset).unwrap();
        let keys: Vec<GroupKey> = table.rows.iter().map(|r| r.key).collect();
        let mut expected: Vec<GroupKey> =
            dataset.records.iter().map(|r| r.group_key()).collect();
        expected.sort();
        expected.dedup();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_build_is_idempotent() {
        let dataset = LongFormDataset {
            records: vec![record(1, 1000, 1.0, 0.08), record(1, 1000, 10.0, 0.06)],
        };
        let first = build_feature_table(&dataset).unwrap();
        let second = build_feature_table(&dataset).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_yields_empty_table() {
        let table = build_feature_table(&LongFormDataset::default()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_column_names_are_27_wide() {
        let names = FeatureTable::column_names();
        assert_eq!(names.len(), 27);
        assert_eq!(names[0], "cell_id");
        assert_eq!(names[4], "R_hf_ohm");
        assert_eq!(names[26], "phase_f10000p0");
    }
}
