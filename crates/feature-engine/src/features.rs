//! Impedance Feature Extraction

use crate::error::FeatureError;
use crate::statistics::SummaryStats;
use eis_protocol::SpectrumPoint;
use serde::{Deserialize, Serialize};

/// Number of target frequencies sampled per spectrum.
pub const TARGET_COUNT: usize = 7;

/// Target frequencies (Hz) at which |Z| and phase are sampled.
pub const TARGET_FREQUENCIES_HZ: [f64; TARGET_COUNT] =
    [0.01, 0.1, 1.0, 10.0, 100.0, 1_000.0, 10_000.0];

/// Column-name tags for the targets: the decimal rendering with `.`
/// replaced by `p` (`1.0` → `1p0`), kept identical to the reference
/// feature table's column names.
const TARGET_TAGS: [&str; TARGET_COUNT] =
    ["0p01", "0p1", "1p0", "10p0", "100p0", "1000p0", "10000p0"];

/// Number of scalar features per spectrum (9 summary + 2 per target).
pub const FEATURE_COUNT: usize = 9 + 2 * TARGET_COUNT;

/// |Z| and phase sampled at the measured point nearest one target frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencySample {
    /// The nominal target frequency (Hz)
    pub target_hz: f64,
    /// Impedance magnitude at the nearest measured point (Ω)
    pub zmag: f64,
    /// Phase at the nearest measured point (rad)
    pub phase: f64,
}

/// Fixed feature set derived from one spectrum.
///
/// The high/low-frequency real parts approximate the ohmic and total
/// resistance respectively; their difference is the polarization
/// contribution. No sign-correctness check is performed: a source with an
/// inverted frequency axis yields a silently wrong delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumFeatures {
    /// Real impedance at the highest tested frequency (≈ ohmic resistance, Ω)
    pub r_hf_ohm: f64,
    /// Real impedance at the lowest tested frequency (≈ total resistance, Ω)
    pub r_lf_ohm: f64,
    /// Polarization contribution, `r_lf_ohm - r_hf_ohm` (Ω)
    pub delta_r_ohm: f64,
    /// Mean impedance magnitude (Ω)
    pub zmag_mean: f64,
    /// Population std dev of impedance magnitude (Ω)
    pub zmag_std: f64,
    /// Minimum impedance magnitude (Ω)
    pub zmag_min: f64,
    /// Maximum impedance magnitude (Ω)
    pub zmag_max: f64,
    /// Mean phase (rad)
    pub phase_mean: f64,
    /// Population std dev of phase (rad)
    pub phase_std: f64,
    /// One sample per entry of [`TARGET_FREQUENCIES_HZ`], in order
    pub samples: [FrequencySample; TARGET_COUNT],
}

impl SpectrumFeatures {
    /// Feature column labels in stable output order.
    pub fn labels() -> Vec<String> {
        let mut labels: Vec<String> = [
            "R_hf_ohm",
            "R_lf_ohm",
            "delta_R_ohm",
            "Zmag_mean",
            "Zmag_std",
            "Zmag_min",
            "Zmag_max",
            "phase_mean",
            "phase_std",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        for tag in TARGET_TAGS {
            labels.push(format!("Zmag_f{tag}"));
            labels.push(format!("phase_f{tag}"));
        }
        labels
    }

    /// Feature values in the same order as [`labels`](Self::labels).
    pub fn values(&self) -> Vec<f64> {
        let mut values = vec![
            self.r_hf_ohm,
            self.r_lf_ohm,
            self.delta_r_ohm,
            self.zmag_mean,
            self.zmag_std,
            self.zmag_min,
            self.zmag_max,
            self.phase_mean,
            self.phase_std,
        ];
        for sample in &self.samples {
            values.push(sample.zmag);
            values.push(sample.phase);
        }
        values
    }
}

/// Extract the fixed feature set from one spectrum's points.
///
/// Points may arrive in any order; a frequency-sorted copy decides which
/// sample is "highest frequency" vs "lowest frequency". Requires at least
/// one point (two or more for a meaningful spread).
pub fn extract_features(points: &[SpectrumPoint]) -> Result<SpectrumFeatures, FeatureError> {
    if points.is_empty() {
        return Err(FeatureError::EmptySpectrum);
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.frequency_hz.total_cmp(&b.frequency_hz));

    let freq: Vec<f64> = sorted.iter().map(|p| p.frequency_hz).collect();
    let mag: Vec<f64> = sorted.iter().map(|p| p.magnitude()).collect();
    let phase: Vec<f64> = sorted.iter().map(|p| p.phase()).collect();

    // Ascending sort puts the lowest tested frequency first, highest last.
    let r_lf_ohm = sorted[0].z_real_ohm;
    let r_hf_ohm = sorted[sorted.len() - 1].z_real_ohm;

    let mag_stats = SummaryStats::compute(&mag);
    let phase_stats = SummaryStats::compute(&phase);

    let samples = std::array::from_fn(|i| {
        let target_hz = TARGET_FREQUENCIES_HZ[i];
        let idx = nearest_index(&freq, target_hz);
        FrequencySample {
            target_hz,
            zmag: mag[idx],
            phase: phase[idx],
        }
    });

    Ok(SpectrumFeatures {
        r_hf_ohm,
        r_lf_ohm,
        delta_r_ohm: r_lf_ohm - r_hf_ohm,
        zmag_mean: mag_stats.mean,
        zmag_std: mag_stats.std_dev,
        zmag_min: mag_stats.min,
        zmag_max: mag_stats.max,
        phase_mean: phase_stats.mean,
        phase_std: phase_stats.std_dev,
        samples,
    })
}

/// Index of the frequency closest to `target_hz`.
///
/// Equidistant ties keep the earliest point in ascending-frequency order.
fn nearest_index(freqs: &[f64], target_hz: f64) -> usize {
    let mut best = 0;
    let mut best_dist = (freqs[0] - target_hz).abs();
    for (i, &f) in freqs.iter().enumerate().skip(1) {
        let dist = (f - target_hz).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
