//! Impedance Feature Engine
//!
//! Reduces one variable-length EIS spectrum into the fixed feature set used
//! for state-of-health modeling.

mod error;
mod features;
mod statistics;

pub use error::FeatureError;
pub use features::{
    extract_features, FrequencySample, SpectrumFeatures, FEATURE_COUNT, TARGET_FREQUENCIES_HZ,
};
pub use statistics::SummaryStats;
