//! Raw Table Reading and Numeric Coercion

use crate::error::LoadError;
use eis_protocol::SpectrumPoint;
use std::path::Path;
use tracing::debug;

/// Pick a field delimiter from the file extension.
///
/// The reference dataset ships `.xls` files that are tab-separated text, so
/// everything except `.csv` is read tab-delimited.
fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => b',',
        _ => b'\t',
    }
}

/// Load one raw measurement file into spectrum points.
///
/// The first three columns are taken positionally as (frequency_hz,
/// z_real_ohm, z_imag_ohm); header text is never trusted. A row survives
/// only if all three cells parse as finite numbers, so any number of header
/// or junk rows may appear anywhere in the file. At least one row must
/// survive.
pub fn load_spectrum_points(path: &Path) -> Result<Vec<SpectrumPoint>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter_for(path))
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut points = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        match coerce_row(&record) {
            Some(point) => points.push(point),
            None => dropped += 1,
        }
    }

    if points.is_empty() {
        return Err(LoadError::NoValidRows {
            path: path.to_path_buf(),
        });
    }

    debug!(
        "loaded {} rows from {} ({} dropped)",
        points.len(),
        path.display(),
        dropped
    );
    Ok(points)
}

/// Coerce the first three cells of one raw row; `None` drops the row.
fn coerce_row(record: &csv::StringRecord) -> Option<SpectrumPoint> {
    let frequency_hz = numeric_cell(record.get(0))?;
    let z_real_ohm = numeric_cell(record.get(1))?;
    let z_imag_ohm = numeric_cell(record.get(2))?;
    Some(SpectrumPoint {
        frequency_hz,
        z_real_ohm,
        z_imag_ohm,
    })
}

/// Parse one cell as a finite `f64`; `NaN`/`inf` strings count as failures.
fn numeric_cell(cell: Option<&str>) -> Option<f64> {
    let value: f64 = cell?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_clean_tab_separated_xls() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "Cell01_100SOH_25degC_50SOC_1000.xls",
            "10000\t0.05\t-0.002\n1000\t0.06\t-0.004\n0.01\t0.11\t-0.030\n",
        );

        let points = load_spectrum_points(&path).unwrap();
        assert_eq!(points.len(), 3);
        assert!((points[0].frequency_hz - 10000.0).abs() < 1e-12);
        assert!((points[2].z_imag_ohm + 0.030).abs() < 1e-12);
    }

    #[test]
    fn test_header_rows_are_dropped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "spectrum.csv",
            "Frequency,Zre,Zim\n10000,0.05,-0.002\n0.01,0.11,-0.030\n",
        );

        let points = load_spectrum_points(&path).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_header_reinserted_mid_table() {
        // 3 raw rows with a stray header at row 2 must yield a 2-row spectrum.
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "spectrum.csv",
            "10000,0.05,-0.002\nFreq,Zre,Zim\n0.01,0.11,-0.030\n",
        );

        let points = load_spectrum_points(&path).unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[1].frequency_hz - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_short_and_nonfinite_rows_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "spectrum.csv",
            "10000,0.05\nNaN,0.06,-0.004\n1000,inf,-0.004\n100,0.07,-0.008\n",
        );

        let points = load_spectrum_points(&path).unwrap();
        assert_eq!(points.len(), 1);
        assert!((points[0].frequency_hz - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_valid_rows_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "spectrum.csv", "Frequency,Zre,Zim\n,,\n");

        let err = load_spectrum_points(&path).unwrap_err();
        assert!(matches!(err, LoadError::NoValidRows { .. }));
    }

    #[test]
    fn test_missing_file_is_an_open_error() {
        let dir = TempDir::new().unwrap();
        let err = load_spectrum_points(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
