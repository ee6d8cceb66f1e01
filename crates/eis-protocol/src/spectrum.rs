//! Spectrum Data Model

use crate::identity::TestIdentity;
use serde::{Deserialize, Serialize};

/// One impedance sample at a single excitation frequency.
///
/// All three fields are finite by construction: the loader drops any source
/// row that fails numeric coercion instead of substituting placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Excitation frequency (Hz)
    pub frequency_hz: f64,
    /// Real impedance component (Ω)
    pub z_real_ohm: f64,
    /// Imaginary impedance component (Ω)
    pub z_imag_ohm: f64,
}

impl SpectrumPoint {
    /// Impedance magnitude `|Z|` (Ω).
    pub fn magnitude(&self) -> f64 {
        self.z_real_ohm.hypot(self.z_imag_ohm)
    }

    /// Impedance phase `atan2(Z'', Z')` in radians.
    pub fn phase(&self) -> f64 {
        self.z_imag_ohm.atan2(self.z_real_ohm)
    }
}

/// One loaded spectrum tagged with its test identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spectrum {
    /// Identity decoded from the source filename
    pub identity: TestIdentity,
    /// Samples in source order; not guaranteed frequency-sorted
    pub points: Vec<SpectrumPoint>,
}

impl Spectrum {
    /// Number of frequency samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the spectrum holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
