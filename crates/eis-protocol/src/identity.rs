//! Test Identity and Grouping Key

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one physical EIS measurement run, decoded from its filename.
///
/// The five fields together name the run; see [`GroupKey`] for the subset
/// the feature table groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestIdentity {
    /// Cell number within the dataset
    pub cell_id: u32,
    /// State of health (% capacity retention)
    pub soh_pct: u32,
    /// Test chamber temperature (°C)
    pub temp_c: i32,
    /// State of charge (%)
    pub soc_pct: u32,
    /// Integer capacity code carried from the filename
    pub capacity_code: u32,
}

impl TestIdentity {
    /// Grouping subset of the identity.
    ///
    /// capacity_code is deliberately left out: the source pipeline treats
    /// multiple capacity readings of the same (cell, SoH, T, SOC) condition
    /// as one spectrum, and that behavior is preserved here.
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            cell_id: self.cell_id,
            soh_pct: self.soh_pct,
            temp_c: self.temp_c,
            soc_pct: self.soc_pct,
        }
    }

    /// Canonical file stem for this identity, the inverse of
    /// [`decode_filename`](crate::decode_filename).
    ///
    /// Cell and SOC tokens keep the dataset's two-digit zero padding.
    pub fn file_stem(&self) -> String {
        format!(
            "Cell{:02}_{}SOH_{}degC_{:02}SOC_{}",
            self.cell_id, self.soh_pct, self.temp_c, self.soc_pct, self.capacity_code
        )
    }
}

impl fmt::Display for TestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

/// The four-field composite key the feature table groups on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GroupKey {
    pub cell_id: u32,
    pub soh_pct: u32,
    pub temp_c: i32,
    pub soc_pct: u32,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {} at {}% SoH, {}degC, {}% SOC",
            self.cell_id, self.soh_pct, self.temp_c, self.soc_pct
        )
    }
}
