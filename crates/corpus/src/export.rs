//! CSV Export

use crate::assembler::LongFormDataset;
use crate::builder::FeatureTable;
use crate::error::CorpusError;
use std::path::Path;
use tracing::info;

/// Write the long-format dataset as CSV.
///
/// Column order follows the record layout: the five identity fields, then
/// frequency and the two impedance components.
pub fn write_long_form_csv(dataset: &LongFormDataset, path: &Path) -> Result<(), CorpusError> {
    let write_err = |source: csv::Error| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    for record in &dataset.records {
        writer.serialize(record).map_err(write_err)?;
    }
    writer.flush().map_err(|source| CorpusError::Write {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    info!(
        "wrote {} long-format rows to {}",
        dataset.len(),
        path.display()
    );
    Ok(())
}

/// Write the feature table as CSV: 4 key columns + 23 feature columns, one
/// row per test.
pub fn write_feature_table_csv(table: &FeatureTable, path: &Path) -> Result<(), CorpusError> {
    let write_err = |source: csv::Error| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer
        .write_record(FeatureTable::column_names())
        .map_err(write_err)?;

    for row in &table.rows {
        let mut record = vec![
            row.key.cell_id.to_string(),
            row.key.soh_pct.to_string(),
            row.key.temp_c.to_string(),
            row.key.soc_pct.to_string(),
        ];
        record.extend(row.features.values().iter().map(|v| v.to_string()));
        writer.write_record(&record).map_err(write_err)?;
    }
    writer.flush().map_err(|source| CorpusError::Write {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    info!(
        "wrote feature table ({} tests) to {}",
        table.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::LongRecord;
    use crate::builder::build_feature_table;
    use std::fs;
    use tempfile::TempDir;

    fn sample_dataset() -> LongFormDataset {
        LongFormDataset {
            records: vec![
                LongRecord {
                    cell_id: 1,
                    soh_pct: 100,
                    temp_c: 25,
                    soc_pct: 50,
                    capacity_code: 1000,
                    frequency_hz: 10_000.0,
                    z_real_ohm: 0.05,
                    z_imag_ohm: -0.002,
                },
                LongRecord {
                    cell_id: 1,
                    soh_pct: 100,
                    temp_c: 25,
                    soc_pct: 50,
                    capacity_code: 1000,
                    frequency_hz: 0.01,
                    z_real_ohm: 0.11,
                    z_imag_ohm: -0.030,
                },
            ],
        }
    }

    #[test]
    fn test_long_form_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.csv");
        write_long_form_csv(&sample_dataset(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "cell_id,soh_pct,temp_c,soc_pct,capacity_code,frequency_hz,z_real_ohm,z_imag_ohm"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_feature_table_header_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("features.csv");
        let table = build_feature_table(&sample_dataset()).unwrap();
        write_feature_table_csv(&table, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header: Vec<&str> = contents.lines().next().unwrap().split(',').collect();
        assert_eq!(header.len(), 27);
        assert_eq!(header[4], "R_hf_ohm");
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("features.csv");
        let err = write_long_form_csv(&sample_dataset(), &path).unwrap_err();
        assert!(matches!(err, CorpusError::Write { .. }));
    }
}
